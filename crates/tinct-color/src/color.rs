//! The immutable RGBA color value.

use std::fmt;
use std::str::FromStr;

use crate::contrast;
use crate::error::{ColorError, Result};
use crate::hsv::{self, Hsv};

/// An immutable RGBA color.
///
/// Red, green and blue are 8-bit channels; alpha is a unit float in
/// `0.0..=1.0`. Hue, saturation and value are computed from RGB on every
/// access, so there is no cached state to go stale.
///
/// # Example
///
/// ```
/// use tinct_color::Color;
///
/// let accent = Color::from_hex("#3b82f6").unwrap();
/// assert_eq!(accent.to_hex(), "#3B82F6");
/// assert_eq!(accent.to_css_rgb(), "rgb(59, 130, 246)");
/// assert!(Color::from_hex("#12345").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Fully transparent black. Used as the "no fill" sentinel by palettes.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    /// Create an opaque color from 8-bit channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit channels and a unit alpha.
    ///
    /// Fails when `a` is not within `0.0..=1.0`.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Result<Self> {
        Ok(Self {
            r,
            g,
            b,
            a: validate_alpha(a)?,
        })
    }

    /// Create a color from wide integer channels, rejecting values outside
    /// `0..=255`.
    pub fn try_rgba(r: i32, g: i32, b: i32, a: f64) -> Result<Self> {
        Self::rgba(
            checked_channel("red", r)?,
            checked_channel("green", g)?,
            checked_channel("blue", b)?,
            a,
        )
    }

    /// Create an opaque color from HSV (hue in degrees, saturation and value
    /// in percent). Inputs are normalized: hue wraps, the others clamp.
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let (r, g, b) = hsv::hsv_to_rgb(h, s, v);
        Self::rgb(r, g, b)
    }

    /// Create a color from HSV plus alpha.
    pub fn from_hsva(h: f64, s: f64, v: f64, a: f64) -> Result<Self> {
        Self::from_hsv(h, s, v).with_alpha(a)
    }

    /// Parse a hex color: `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`,
    /// case-insensitive. The leading `#` is required.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorError::invalid_hex(hex))?;

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_hex(hex));
        }

        let nibble = |i: usize| -> u8 {
            // Digits were validated above.
            let b = digits.as_bytes()[i];
            match b {
                b'0'..=b'9' => b - b'0',
                b'a'..=b'f' => b - b'a' + 10,
                _ => b - b'A' + 10,
            }
        };
        let pair = |i: usize| nibble(i) * 16 + nibble(i + 1);

        let (r, g, b, a) = match digits.len() {
            3 => (nibble(0) * 17, nibble(1) * 17, nibble(2) * 17, 255),
            4 => (
                nibble(0) * 17,
                nibble(1) * 17,
                nibble(2) * 17,
                nibble(3) * 17,
            ),
            6 => (pair(0), pair(2), pair(4), 255),
            8 => (pair(0), pair(2), pair(4), pair(6)),
            _ => return Err(ColorError::invalid_hex(hex)),
        };

        Ok(Self {
            r,
            g,
            b,
            a: f64::from(a) / 255.0,
        })
    }

    /// Red channel.
    #[inline]
    pub const fn red(&self) -> u8 {
        self.r
    }

    /// Green channel.
    #[inline]
    pub const fn green(&self) -> u8 {
        self.g
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(&self) -> u8 {
        self.b
    }

    /// Alpha in `0.0..=1.0`.
    #[inline]
    pub const fn alpha(&self) -> f64 {
        self.a
    }

    /// Whether this color is fully transparent.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// Whether this color is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// HSV readout.
    pub fn hsv(&self) -> Hsv {
        hsv::rgb_to_hsv(self.r, self.g, self.b)
    }

    /// Hue in degrees, `[0, 360)`.
    pub fn hue(&self) -> f64 {
        self.hsv().h
    }

    /// Saturation in percent, `[0, 100]`.
    pub fn saturation(&self) -> f64 {
        self.hsv().s
    }

    /// Value (brightness) in percent, `[0, 100]`.
    pub fn value(&self) -> f64 {
        self.hsv().v
    }

    /// Return a copy with a different alpha.
    pub fn with_alpha(self, alpha: f64) -> Result<Self> {
        Ok(Self {
            a: validate_alpha(alpha)?,
            ..self
        })
    }

    /// Return a copy with new HSV components and the same alpha.
    pub fn with_hsv(self, hsv: Hsv) -> Self {
        let (r, g, b) = hsv::hsv_to_rgb(hsv.h, hsv.s, hsv.v);
        Self { r, g, b, a: self.a }
    }

    /// Channel-wise linear interpolation toward `other`.
    ///
    /// `t` is clamped to `0.0..=1.0`; `0.0` returns `self`.
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let lerp = |a: u8, b: u8| -> u8 {
            (f64::from(b) - f64::from(a))
                .mul_add(t, f64::from(a))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: (other.a - self.a).mul_add(t, self.a).clamp(0.0, 1.0),
        }
    }

    /// WCAG relative luminance, `[0.0, 1.0]`.
    pub fn relative_luminance(&self) -> f64 {
        contrast::relative_luminance(*self)
    }

    /// WCAG contrast ratio against another color, `[1.0, 21.0]`.
    pub fn contrast_ratio(&self, other: &Self) -> f64 {
        contrast::contrast_ratio(*self, *other)
    }

    /// Alpha as an 8-bit channel.
    #[inline]
    pub fn alpha_byte(&self) -> u8 {
        (self.a * 255.0).round().clamp(0.0, 255.0) as u8
    }

    /// Opaque upper-case hex, `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Upper-case hex including alpha, `#RRGGBBAA`.
    pub fn to_hex_alpha(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r,
            self.g,
            self.b,
            self.alpha_byte()
        )
    }

    /// CSS `rgb(r, g, b)` form.
    pub fn to_css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// CSS `rgba(r, g, b, a)` form. Alpha is printed with at most three
    /// decimals.
    pub fn to_css_rgba(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            format_alpha(self.a)
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Opaque colors print as `#RRGGBB`, everything else as `#RRGGBBAA`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha_byte() == 255 {
            f.write_str(&self.to_hex())
        } else {
            f.write_str(&self.to_hex_alpha())
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_css(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

static_assertions::assert_impl_all!(Color: Send, Sync, Copy);

fn validate_alpha(a: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&a) {
        Ok(a)
    } else {
        Err(ColorError::InvalidAlpha { value: a })
    }
}

fn checked_channel(channel: &'static str, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| ColorError::channel_out_of_range(channel, f64::from(value)))
}

fn format_alpha(a: f64) -> String {
    let s = format!("{a:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() { "0".to_string() } else { s.to_string() }
}
