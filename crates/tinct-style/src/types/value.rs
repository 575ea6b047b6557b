//! Length, edge and corner value types.
//!
//! # Example
//!
//! ```
//! use tinct_style::prelude::*;
//!
//! let px = LengthValue::px(16.0);
//! let em = LengthValue::em(1.5);
//!
//! assert_eq!(px.to_string(), "16px");
//! assert_eq!(em.to_px(14.0, 100.0, 16.0), 21.0);
//! ```

use std::fmt;

/// Font size used to resolve relative lengths when no context is given.
pub const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

/// CSS-like length values with various units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthValue {
    /// Absolute pixels.
    Px(f32),
    /// Relative to current font size.
    Em(f32),
    /// Relative to root font size.
    Rem(f32),
    /// Percentage of containing block.
    Percent(f32),
    /// Automatic sizing (context-dependent).
    #[default]
    Auto,
    /// Zero length.
    Zero,
}

impl LengthValue {
    /// Create a pixel value.
    pub fn px(value: f32) -> Self {
        Self::Px(value)
    }

    /// Create an em value.
    pub fn em(value: f32) -> Self {
        Self::Em(value)
    }

    /// Create a rem value.
    pub fn rem(value: f32) -> Self {
        Self::Rem(value)
    }

    /// Create a percentage value.
    pub fn percent(value: f32) -> Self {
        Self::Percent(value)
    }

    /// Resolve to pixels given the context.
    ///
    /// # Arguments
    /// * `font_size` - Current element's font size (for em)
    /// * `parent_size` - Parent's size in the relevant dimension (for %)
    /// * `root_font_size` - Root element's font size (for rem)
    pub fn to_px(&self, font_size: f32, parent_size: f32, root_font_size: f32) -> f32 {
        match self {
            LengthValue::Px(v) => *v,
            LengthValue::Em(v) => v * font_size,
            LengthValue::Rem(v) => v * root_font_size,
            LengthValue::Percent(v) => (v / 100.0) * parent_size,
            LengthValue::Auto | LengthValue::Zero => 0.0,
        }
    }

    /// Check if this is zero or would resolve to zero.
    pub fn is_zero(&self) -> bool {
        match self {
            LengthValue::Zero => true,
            LengthValue::Px(v) | LengthValue::Em(v) | LengthValue::Rem(v) | LengthValue::Percent(v) => {
                *v == 0.0
            }
            LengthValue::Auto => false,
        }
    }
}

impl fmt::Display for LengthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthValue::Px(v) => write!(f, "{v}px"),
            LengthValue::Em(v) => write!(f, "{v}em"),
            LengthValue::Rem(v) => write!(f, "{v}rem"),
            LengthValue::Percent(v) => write!(f, "{v}%"),
            LengthValue::Auto => f.write_str("auto"),
            LengthValue::Zero => f.write_str("0"),
        }
    }
}

/// Per-side values for margin, padding and border width.
///
/// Each side is independently optional; unset sides produce no declaration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EdgeValues {
    /// Top edge value.
    pub top: Option<LengthValue>,
    /// Right edge value.
    pub right: Option<LengthValue>,
    /// Bottom edge value.
    pub bottom: Option<LengthValue>,
    /// Left edge value.
    pub left: Option<LengthValue>,
}

impl EdgeValues {
    /// Create uniform edge values.
    pub fn uniform(value: LengthValue) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create symmetric edge values (vertical, horizontal).
    pub fn symmetric(vertical: LengthValue, horizontal: LengthValue) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Create from 4 values (top, right, bottom, left).
    pub fn new(top: LengthValue, right: LengthValue, bottom: LengthValue, left: LengthValue) -> Self {
        Self {
            top: Some(top),
            right: Some(right),
            bottom: Some(bottom),
            left: Some(left),
        }
    }

    /// Create zero edge values.
    pub fn zero() -> Self {
        Self::uniform(LengthValue::Zero)
    }

    /// Whether no side is set.
    pub fn is_unset(&self) -> bool {
        self.sides().iter().all(|(_, v)| v.is_none())
    }

    /// Sides in CSS order, paired with their property suffix.
    pub fn sides(&self) -> [(&'static str, Option<LengthValue>); 4] {
        [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ]
    }

    /// Largest side resolved to pixels against the default font size.
    /// Unset sides count as zero.
    pub fn max_px(&self) -> f32 {
        self.sides()
            .iter()
            .filter_map(|(_, v)| *v)
            .map(|v| v.to_px(DEFAULT_FONT_SIZE_PX, 0.0, DEFAULT_FONT_SIZE_PX))
            .fold(0.0, f32::max)
    }

    /// Fill unset sides from `fallback`.
    pub fn or(&self, fallback: &EdgeValues) -> Self {
        Self {
            top: self.top.or(fallback.top),
            right: self.right.or(fallback.right),
            bottom: self.bottom.or(fallback.bottom),
            left: self.left.or(fallback.left),
        }
    }
}

/// Corner radii for rounded boxes. Each corner is independently optional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CornerRadii {
    pub top_left: Option<LengthValue>,
    pub top_right: Option<LengthValue>,
    pub bottom_right: Option<LengthValue>,
    pub bottom_left: Option<LengthValue>,
}

impl CornerRadii {
    /// Create corner radii with the same value for all corners.
    pub fn uniform(radius: LengthValue) -> Self {
        Self {
            top_left: Some(radius),
            top_right: Some(radius),
            bottom_right: Some(radius),
            bottom_left: Some(radius),
        }
    }

    /// Fill unset corners from `fallback`.
    pub fn or(&self, fallback: &CornerRadii) -> Self {
        Self {
            top_left: self.top_left.or(fallback.top_left),
            top_right: self.top_right.or(fallback.top_right),
            bottom_right: self.bottom_right.or(fallback.bottom_right),
            bottom_left: self.bottom_left.or(fallback.bottom_left),
        }
    }

    /// Corners paired with their CSS property names.
    pub fn corners(&self) -> [(&'static str, Option<LengthValue>); 4] {
        [
            ("border-top-left-radius", self.top_left),
            ("border-top-right-radius", self.top_right),
            ("border-bottom-right-radius", self.bottom_right),
            ("border-bottom-left-radius", self.bottom_left),
        ]
    }
}

/// Border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BorderStyle {
    /// No border.
    #[default]
    None,
    /// Solid line border.
    Solid,
    /// Dashed line border.
    Dashed,
    /// Dotted line border.
    Dotted,
    /// Double line border.
    Double,
}

impl BorderStyle {
    /// Parse from CSS string.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(Self::None),
            "solid" => Some(Self::Solid),
            "dashed" => Some(Self::Dashed),
            "dotted" => Some(Self::Dotted),
            "double" => Some(Self::Double),
            _ => None,
        }
    }

    /// CSS keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Double => "double",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}
