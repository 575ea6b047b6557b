//! Tracing targets.
//!
//! Tinct never installs a subscriber. Applications that want to see palette
//! derivation decisions can filter on these targets:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("tinct_style::palette=debug")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Palette construction and cascade.
    pub const PALETTE: &str = "tinct_style::palette";
    /// State, elevation and variant materialization.
    pub const MATRIX: &str = "tinct_style::matrix";
    /// Theme composition and lenient key fallback.
    pub const THEME: &str = "tinct_style::theme";
}
