//! Value types used by themes: lengths, edges, corners and typography.

pub mod typography;
pub mod value;

pub use typography::{FontStyle, FontWeight, TextAlign, TextDecoration, TextTransform, Typography};
pub use value::{BorderStyle, CornerRadii, EdgeValues, LengthValue, DEFAULT_FONT_SIZE_PX};
