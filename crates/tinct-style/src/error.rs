//! Error types for palettes and themes.

use tinct_color::ColorError;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building palettes and themes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A color input could not be parsed or was out of range.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// A cascade produced a palette that fails validation.
    #[error("Invalid cascade input for '{field}': {message}")]
    InvalidCascadeInput {
        field: &'static str,
        message: String,
    },

    /// Invalid property value.
    #[error("Invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },
}

impl Error {
    /// Create a cascade validation error.
    pub fn invalid_cascade(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidCascadeInput {
            field,
            message: message.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}
