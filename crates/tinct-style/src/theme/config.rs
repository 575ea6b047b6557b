//! Plain-data theme configuration.
//!
//! With the `serde` feature enabled a [`ThemeConfig`] can be loaded from
//! JSON, TOML or any other serde format:
//!
//! ```ignore
//! let config: ThemeConfig = serde_json::from_str(r##"{
//!     "light": { "background": "#FAFAFA", "foreground": "#333333" },
//!     "border": { "width": { "top": { "px": 2.0 } } }
//! }"##)?;
//! let theme = Theme::from_config(&config)?;
//! ```

use tinct_color::Color;

use crate::error::Result;
use crate::palette::Palette;
use crate::style::{Border, Spacing};
use crate::theme::ThemeMode;
use crate::types::Typography;

/// Colors for one palette, as CSS color strings.
///
/// Unset background and foreground come from the mode's preset; an unset
/// fill is transparent and an unset border is derived.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaletteConfig {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub fill: Option<String>,
    pub border: Option<String>,
    pub high_contrast: Option<bool>,
}

impl PaletteConfig {
    /// Parse every color and build the palette for `mode`.
    ///
    /// # Errors
    ///
    /// The first color that fails to parse, or a palette validation error.
    pub fn to_palette(&self, mode: ThemeMode) -> Result<Palette> {
        let mut builder = Palette::builder(mode);
        if let Some(color) = parse_opt(&self.background)? {
            builder = builder.background(color);
        }
        if let Some(color) = parse_opt(&self.foreground)? {
            builder = builder.foreground(color);
        }
        if let Some(color) = parse_opt(&self.fill)? {
            builder = builder.fill(color);
        }
        if let Some(color) = parse_opt(&self.border)? {
            builder = builder.border(color);
        }
        if let Some(enabled) = self.high_contrast {
            builder = builder.high_contrast(enabled);
        }
        builder.build()
    }
}

fn parse_opt(value: &Option<String>) -> Result<Option<Color>> {
    Ok(value.as_deref().map(Color::parse_css).transpose()?)
}

/// Everything needed to build a [`Theme`](crate::theme::Theme).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThemeConfig {
    pub light: PaletteConfig,
    pub dark: PaletteConfig,
    pub high_contrast: PaletteConfig,
    pub typography: Option<Typography>,
    pub border: Option<Border>,
    pub spacing: Option<Spacing>,
}

impl ThemeConfig {
    /// The palette configuration for a mode.
    pub fn palette(&self, mode: ThemeMode) -> &PaletteConfig {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
            ThemeMode::HighContrast => &self.high_contrast,
        }
    }
}
