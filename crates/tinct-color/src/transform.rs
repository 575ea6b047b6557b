//! Deterministic color transformations.
//!
//! A closed catalog of pure `Color -> Color` functions used to derive
//! interaction states and elevation tiers. Every output is a valid color
//! (channels are clamped in HSV space before converting back) and the same
//! input with the same parameters always yields the same output.

use crate::color::Color;
use crate::contrast::{
    contrast_ratio, ensure_minimum_contrast, most_contrasting_extreme, MIN_TEXT_CONTRAST,
    MIN_UI_CONTRAST,
};

/// How far a derived border moves from its surface toward the foreground.
pub const BORDER_BLEND: f64 = 0.4;

/// Move the HSV value channel by a signed fraction of its full range.
///
/// `amount = 0.1` adds 10 percentage points of value; the result is clamped
/// to `[0, 100]`. Hue, saturation and alpha are kept.
pub fn shift_lightness(color: Color, amount: f64) -> Color {
    let mut hsv = color.hsv();
    hsv.v = (hsv.v + amount * 100.0).clamp(0.0, 100.0);
    color.with_hsv(hsv)
}

/// Shift lightness away from the nearest extreme by `amount`.
///
/// Light colors (value of 50 or more) get darker, dark colors get lighter,
/// so the shift stays visible on pure white and pure black surfaces.
pub fn emphasize(color: Color, amount: f64) -> Color {
    let magnitude = amount.abs();
    if color.value() >= 50.0 {
        shift_lightness(color, -magnitude)
    } else {
        shift_lightness(color, magnitude)
    }
}

/// Move the HSV saturation channel toward zero by a fraction of its full
/// range, stopping at zero.
pub fn desaturate(color: Color, amount: f64) -> Color {
    let mut hsv = color.hsv();
    hsv.s = (hsv.s - amount.abs() * 100.0).max(0.0);
    color.with_hsv(hsv)
}

/// Derive a border color that stays visible against `background`.
///
/// The border is drawn around the component surface: `fill` when it is
/// present, opaque and different from `background`, otherwise `background`.
///
/// - High contrast: the foreground itself when it already reads as text on
///   the surface, otherwise black or white, whichever contrasts more.
/// - Otherwise: the surface blended [`BORDER_BLEND`] of the way toward the
///   foreground, then pushed to at least 3:1 against `background`.
pub fn to_border(
    foreground: Color,
    background: Color,
    fill: Option<Color>,
    is_high_contrast: bool,
) -> Color {
    let surface = fill
        .filter(|f| !f.is_transparent() && *f != background)
        .unwrap_or(background);

    if is_high_contrast {
        return if contrast_ratio(foreground, surface) >= MIN_TEXT_CONTRAST {
            foreground
        } else {
            most_contrasting_extreme(surface)
        };
    }

    let blended = surface.mix(foreground, BORDER_BLEND);
    ensure_minimum_contrast(blended, background, MIN_UI_CONTRAST)
}

/// A transformation from the closed catalog, as data.
///
/// State and elevation tables are expressed as lists of these so that the
/// derivation of every variant can be inspected and replayed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ColorTransform {
    /// Leave the color unchanged.
    #[default]
    Identity,
    /// Signed value shift, see [`shift_lightness`].
    ShiftLightness(f64),
    /// Direction-aware value shift, see [`emphasize`].
    Emphasize(f64),
    /// Saturation reduction, see [`desaturate`].
    Desaturate(f64),
    /// Emphasize and then desaturate.
    EmphasizeDesaturate { shift: f64, desaturate: f64 },
    /// Ensure a minimum contrast against another color.
    EnsureContrast { against: Color, min_ratio: f64 },
}

impl ColorTransform {
    /// Apply the transformation.
    pub fn apply(self, color: Color) -> Color {
        match self {
            Self::Identity => color,
            Self::ShiftLightness(amount) => shift_lightness(color, amount),
            Self::Emphasize(amount) => emphasize(color, amount),
            Self::Desaturate(amount) => desaturate(color, amount),
            Self::EmphasizeDesaturate {
                shift,
                desaturate: amount,
            } => desaturate(emphasize(color, shift), amount),
            Self::EnsureContrast { against, min_ratio } => {
                ensure_minimum_contrast(color, against, min_ratio)
            }
        }
    }

    /// Apply to a surface color, leaving the transparent sentinel alone.
    pub fn apply_to_surface(self, color: Color) -> Color {
        if color.is_transparent() {
            color
        } else {
            self.apply(color)
        }
    }
}
