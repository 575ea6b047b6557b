//! CSS named colors.
//!
//! The lookup map is built once per process on first use and is read-only
//! afterwards, so concurrent lookups need no locking.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::color::Color;

static NAMED_COLORS: OnceLock<HashMap<&'static str, Color>> = OnceLock::new();

/// CSS level 1/2 basic colors plus common extended names.
const TABLE: &[(&str, u8, u8, u8)] = &[
    ("aqua", 0x00, 0xFF, 0xFF),
    ("black", 0x00, 0x00, 0x00),
    ("blue", 0x00, 0x00, 0xFF),
    ("fuchsia", 0xFF, 0x00, 0xFF),
    ("gray", 0x80, 0x80, 0x80),
    ("grey", 0x80, 0x80, 0x80),
    ("green", 0x00, 0x80, 0x00),
    ("lime", 0x00, 0xFF, 0x00),
    ("maroon", 0x80, 0x00, 0x00),
    ("navy", 0x00, 0x00, 0x80),
    ("olive", 0x80, 0x80, 0x00),
    ("orange", 0xFF, 0xA5, 0x00),
    ("purple", 0x80, 0x00, 0x80),
    ("red", 0xFF, 0x00, 0x00),
    ("silver", 0xC0, 0xC0, 0xC0),
    ("teal", 0x00, 0x80, 0x80),
    ("white", 0xFF, 0xFF, 0xFF),
    ("yellow", 0xFF, 0xFF, 0x00),
    ("cyan", 0x00, 0xFF, 0xFF),
    ("magenta", 0xFF, 0x00, 0xFF),
    ("aliceblue", 0xF0, 0xF8, 0xFF),
    ("cornflowerblue", 0x64, 0x95, 0xED),
    ("crimson", 0xDC, 0x14, 0x3C),
    ("darkgray", 0xA9, 0xA9, 0xA9),
    ("darkgrey", 0xA9, 0xA9, 0xA9),
    ("dimgray", 0x69, 0x69, 0x69),
    ("dimgrey", 0x69, 0x69, 0x69),
    ("dodgerblue", 0x1E, 0x90, 0xFF),
    ("gainsboro", 0xDC, 0xDC, 0xDC),
    ("gold", 0xFF, 0xD7, 0x00),
    ("indigo", 0x4B, 0x00, 0x82),
    ("lightgray", 0xD3, 0xD3, 0xD3),
    ("lightgrey", 0xD3, 0xD3, 0xD3),
    ("rebeccapurple", 0x66, 0x33, 0x99),
    ("slategray", 0x70, 0x80, 0x90),
    ("slategrey", 0x70, 0x80, 0x90),
    ("steelblue", 0x46, 0x82, 0xB4),
    ("tomato", 0xFF, 0x63, 0x47),
    ("whitesmoke", 0xF5, 0xF5, 0xF5),
];

fn table() -> &'static HashMap<&'static str, Color> {
    NAMED_COLORS.get_or_init(|| {
        TABLE
            .iter()
            .map(|&(name, r, g, b)| (name, Color::rgb(r, g, b)))
            .chain(std::iter::once(("transparent", Color::TRANSPARENT)))
            .collect()
    })
}

/// Look up a CSS color name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<Color> {
    table().get(name.trim().to_ascii_lowercase().as_str()).copied()
}

/// Iterate over all known names.
pub fn names() -> impl Iterator<Item = &'static str> {
    table().keys().copied()
}
