//! Tinct - accessible design tokens.
//!
//! This is the umbrella crate that re-exports the public APIs of
//! [`tinct_color`] and [`tinct_style`].
//!
//! # Example
//!
//! ```
//! use tinct::prelude::*;
//!
//! let theme = Theme::builder()
//!     .light(
//!         Palette::builder(ThemeMode::Light)
//!             .fill(Color::from_hex("#0D6EFD").unwrap())
//!             .foreground(Color::WHITE)
//!             .build()
//!             .unwrap(),
//!     )
//!     .build();
//!
//! let style = theme.resolve_style(
//!     ThemeMode::Light,
//!     ComponentType::Button,
//!     ComponentElevation::Lowest,
//!     ComponentState::Hovered,
//! );
//! assert!(contrast_ratio(style.palette.foreground(), style.palette.surface()) >= 4.5);
//! ```

/// Color model: values, conversions, contrast and transforms.
pub mod color {
    pub use tinct_color::*;
}

/// Palettes, matrices, themes and rendering.
pub mod style {
    pub use tinct_style::*;
}

#[cfg(feature = "system-theme")]
mod system_theme;

#[cfg(feature = "system-theme")]
pub use system_theme::detect_theme_mode;

pub use tinct_color::{Color, ColorError};
pub use tinct_style::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use tinct_style::prelude::*;

    #[cfg(feature = "system-theme")]
    pub use crate::system_theme::detect_theme_mode;
}
