//! Error types for color construction and parsing.

/// Result type alias for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors raised when a color cannot be constructed.
///
/// Every variant is an "invalid color": the input never silently falls back
/// to a default color.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// The string is not `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    #[error("Invalid hex color '{input}'")]
    InvalidHex { input: String },

    /// A numeric channel is outside its legal range.
    #[error("Color channel '{channel}' out of range: {value}")]
    ChannelOutOfRange { channel: &'static str, value: f64 },

    /// Alpha is outside `0.0..=1.0` or not a number.
    #[error("Alpha must be within 0.0..=1.0, got {value}")]
    InvalidAlpha { value: f64 },

    /// CSS color syntax error.
    #[error("Invalid CSS color '{input}': {message}")]
    Parse { input: String, message: String },

    /// Identifier is not a known color name.
    #[error("Unknown color name '{name}'")]
    UnknownName { name: String },
}

impl ColorError {
    /// Create a hex error.
    pub fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
        }
    }

    /// Create a channel range error.
    pub fn channel_out_of_range(channel: &'static str, value: f64) -> Self {
        Self::ChannelOutOfRange { channel, value }
    }

    /// Create a CSS parse error.
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create an unknown-name error.
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownName { name: name.into() }
    }
}
