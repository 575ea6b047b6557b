//! Typography value types.

use std::fmt;

use crate::error::{Error, Result};
use crate::render::Declarations;
use crate::types::value::LengthValue;

/// Numeric font weight in the CSS range `1..=1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
pub struct FontWeight(u16);

impl FontWeight {
    pub const THIN: Self = Self(100);
    pub const LIGHT: Self = Self(300);
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const SEMI_BOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
    pub const BLACK: Self = Self(900);

    /// Create a weight, rejecting values outside `1..=1000`.
    pub fn new(weight: u16) -> Result<Self> {
        if (1..=1000).contains(&weight) {
            Ok(Self(weight))
        } else {
            Err(Error::invalid_value(
                "font-weight",
                format!("{weight} is outside 1..=1000"),
            ))
        }
    }

    /// Parse `normal`, `bold` or a number.
    pub fn from_css(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Self::NORMAL),
            "bold" => Ok(Self::BOLD),
            other => other
                .parse::<u16>()
                .map_err(|_| Error::invalid_value("font-weight", format!("'{s}' is not a weight")))
                .and_then(Self::new),
        }
    }

    /// The numeric weight.
    pub fn get(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(value)
    }
}

impl From<FontWeight> for u16 {
    fn from(weight: FontWeight) -> Self {
        weight.0
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Declares a CSS keyword enum with `from_css`, `as_css` and `Display`.
macro_rules! css_keyword {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $css:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Parse from a CSS keyword (case-insensitive).
            pub fn from_css(s: &str) -> Option<Self> {
                match s.trim().to_lowercase().as_str() {
                    $( $css => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// The CSS keyword.
            pub fn as_css(&self) -> &'static str {
                match self {
                    $( Self::$variant => $css, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_css())
            }
        }
    };
}

css_keyword! {
    /// Font style.
    FontStyle {
        #[default]
        Normal => "normal",
        Italic => "italic",
        Oblique => "oblique",
    }
}

css_keyword! {
    /// Text alignment.
    TextAlign {
        #[default]
        Start => "start",
        End => "end",
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
    }
}

css_keyword! {
    /// Text decoration line.
    TextDecoration {
        #[default]
        None => "none",
        Underline => "underline",
        Overline => "overline",
        LineThrough => "line-through",
    }
}

css_keyword! {
    /// Text case transformation.
    TextTransform {
        #[default]
        None => "none",
        Uppercase => "uppercase",
        Lowercase => "lowercase",
        Capitalize => "capitalize",
    }
}

/// Typographic settings for a component.
///
/// Every field is optional: unset fields render nothing. Because of that a
/// `Typography` doubles as its own override set for [`Typography::cascade`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Typography {
    pub font_family: Option<String>,
    pub font_size: Option<LengthValue>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    /// Unitless line height multiplier.
    pub line_height: Option<f32>,
    pub letter_spacing: Option<LengthValue>,
    pub word_spacing: Option<LengthValue>,
    pub text_align: Option<TextAlign>,
    pub text_decoration: Option<TextDecoration>,
    pub text_transform: Option<TextTransform>,
}

impl Typography {
    /// Body text defaults.
    pub fn base() -> Self {
        Self {
            font_family: Some("system-ui, -apple-system, \"Segoe UI\", Roboto, sans-serif".into()),
            font_size: Some(LengthValue::rem(1.0)),
            font_weight: Some(FontWeight::NORMAL),
            font_style: Some(FontStyle::Normal),
            line_height: Some(1.5),
            ..Default::default()
        }
    }

    /// Set the font family.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        let family = family.into();
        self.font_family = (!family.trim().is_empty()).then_some(family);
        self
    }

    /// Set the font size.
    pub fn font_size(mut self, size: LengthValue) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the font weight.
    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Set the font style.
    pub fn font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    /// Set the line height multiplier.
    pub fn line_height(mut self, height: f32) -> Self {
        self.line_height = Some(height);
        self
    }

    /// Set the letter spacing.
    pub fn letter_spacing(mut self, spacing: LengthValue) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    /// Set the word spacing.
    pub fn word_spacing(mut self, spacing: LengthValue) -> Self {
        self.word_spacing = Some(spacing);
        self
    }

    /// Set the text alignment.
    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Set the text decoration.
    pub fn text_decoration(mut self, decoration: TextDecoration) -> Self {
        self.text_decoration = Some(decoration);
        self
    }

    /// Set the text transform.
    pub fn text_transform(mut self, transform: TextTransform) -> Self {
        self.text_transform = Some(transform);
        self
    }

    /// Return a copy with every field set in `overrides` replacing this
    /// instance's value.
    pub fn cascade(&self, overrides: &Typography) -> Typography {
        let mut merged = self.clone();

        macro_rules! cascade_if_set {
            ($($prop:ident),+ $(,)?) => {
                $(
                    if overrides.$prop.is_some() {
                        merged.$prop = overrides.$prop.clone();
                    }
                )+
            };
        }

        cascade_if_set!(
            font_family,
            font_size,
            font_weight,
            font_style,
            line_height,
            letter_spacing,
            word_spacing,
            text_align,
            text_decoration,
            text_transform,
        );

        merged
    }

    /// CSS declarations for the fields that are set.
    pub fn declarations(&self) -> Declarations {
        let mut decls = Declarations::new();
        decls.push_opt("font-family", self.font_family.as_deref());
        decls.push_opt("font-size", self.font_size);
        decls.push_opt("font-weight", self.font_weight);
        decls.push_opt("font-style", self.font_style);
        decls.push_opt("line-height", self.line_height);
        decls.push_opt("letter-spacing", self.letter_spacing);
        decls.push_opt("word-spacing", self.word_spacing);
        decls.push_opt("text-align", self.text_align);
        decls.push_opt("text-decoration", self.text_decoration);
        decls.push_opt("text-transform", self.text_transform);
        decls
    }
}
