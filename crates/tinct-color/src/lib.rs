//! Color model for Tinct.
//!
//! This crate provides the color half of the design-token engine:
//!
//! - **Color value**: immutable RGBA with 8-bit channels and unit alpha,
//!   hex and CSS text forms, computed HSV readouts
//! - **HSV conversion**: stateless RGB ↔ HSV routines
//! - **Contrast**: WCAG relative luminance, contrast ratio, and bounded
//!   minimum-contrast enforcement
//! - **Transforms**: the closed catalog of lightness, saturation and border
//!   derivations used for interaction states and elevation tiers
//! - **Parsing**: CSS color syntax via `cssparser`, plus named colors
//!
//! # Example
//!
//! ```
//! use tinct_color::prelude::*;
//!
//! let text = Color::from_hex("#CCCCCC").unwrap();
//! let readable = ensure_minimum_contrast(text, Color::WHITE, MIN_TEXT_CONTRAST);
//! assert!(contrast_ratio(readable, Color::WHITE) >= MIN_TEXT_CONTRAST);
//! ```

pub mod color;
pub mod contrast;
pub mod hsv;
pub mod named;
pub mod transform;

mod error;
mod parse;

pub use color::Color;
pub use error::{ColorError, Result};
pub use hsv::Hsv;
pub use transform::ColorTransform;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::contrast::{
        contrast_ratio, ensure_minimum_contrast, relative_luminance, MIN_TEXT_CONTRAST,
        MIN_UI_CONTRAST,
    };
    pub use crate::error::ColorError;
    pub use crate::hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
    pub use crate::transform::{desaturate, emphasize, shift_lightness, to_border, ColorTransform};
}
