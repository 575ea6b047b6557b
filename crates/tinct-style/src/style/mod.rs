//! Box-model tokens and resolved styles.

mod box_model;
mod resolved;

pub use box_model::{Border, Spacing};
pub use resolved::Style;
