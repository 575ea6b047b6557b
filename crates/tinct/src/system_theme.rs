//! Operating system light/dark preference.

use tinct_style::theme::ThemeMode;

/// Query the system color scheme.
///
/// # Platform Behavior
///
/// - **Windows**: Reads `AppsUseLightTheme` registry value
/// - **macOS**: Reads `AppleInterfaceStyle` user default
/// - **Linux**: Queries XDG Desktop Portal `color-scheme` setting
///
/// When the platform does not report a preference the result is
/// [`ThemeMode::Light`]. High contrast is never detected.
pub fn detect_theme_mode() -> ThemeMode {
    let mode = match dark_light::detect() {
        dark_light::Mode::Dark => ThemeMode::Dark,
        dark_light::Mode::Light => ThemeMode::Light,
        dark_light::Mode::Default => ThemeMode::Light,
    };
    tracing::debug!(target: "tinct::system_theme", %mode, "detected system theme");
    mode
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_never_reports_high_contrast() {
        assert_ne!(detect_theme_mode(), ThemeMode::HighContrast);
    }
}
