//! Palettes, interaction states, elevation tiers and themes for Tinct.
//!
//! This crate builds on [`tinct_color`] to provide:
//!
//! - **Palettes**: background/foreground/fill/border bundles that keep text
//!   readable and borders visible, with non-destructive cascade
//! - **State and elevation matrices**: every interaction state of every
//!   elevation tier of every theme mode, derived eagerly
//! - **Themes**: palettes combined with typography, spacing and border
//!   tokens, resolved into render-ready styles
//! - **Rendering**: CSS declarations or custom properties through a
//!   pluggable formatter
//!
//! # Example
//!
//! ```
//! use tinct_style::prelude::*;
//!
//! let theme = Theme::default();
//! let css = theme.render_css(
//!     ThemeMode::Light,
//!     ComponentType::Button,
//!     ComponentElevation::Mid,
//!     ComponentState::Hovered,
//!     Some("app"),
//! );
//! assert!(css.starts_with("--app-background-color:"));
//! ```

pub mod logging;
pub mod palette;
pub mod render;
pub mod style;
pub mod theme;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use tinct_color::prelude::*;

    pub use crate::error::Error;
    pub use crate::palette::{
        ComponentElevation, ComponentState, Palette, PaletteBuilder, PaletteElevation,
        PaletteInputs, PaletteOverrides, PaletteState, PaletteVariant,
    };
    pub use crate::render::{CssFormatter, CssVariables, DeclarationFormatter, Declarations};
    pub use crate::style::{Border, Spacing, Style};
    pub use crate::theme::{
        ComponentType, PaletteConfig, Theme, ThemeBuilder, ThemeConfig, ThemeMode, ThemeOverrides,
    };
    pub use crate::types::{
        BorderStyle, CornerRadii, EdgeValues, FontStyle, FontWeight, LengthValue, TextAlign,
        TextDecoration, TextTransform, Typography,
    };
}
