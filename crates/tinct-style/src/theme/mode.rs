use std::fmt;

use crate::logging::targets;
use crate::palette::normalize_key;

/// Theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    HighContrast,
}

impl ThemeMode {
    /// All modes.
    pub const ALL: [ThemeMode; 3] = [Self::Light, Self::Dark, Self::HighContrast];

    /// Kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "high-contrast",
        }
    }

    /// Parse a mode name leniently. Unknown names resolve to `Light`.
    pub fn from_name(name: &str) -> Self {
        match normalize_key(name).as_str() {
            "light" | "day" => Self::Light,
            "dark" | "night" => Self::Dark,
            "highcontrast" | "contrast" | "hc" => Self::HighContrast,
            _ => {
                tracing::warn!(target: targets::THEME, input = name, "unknown theme mode, using light");
                Self::Light
            }
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of component a style is resolved for.
///
/// All component types currently share the theme's typography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ComponentType {
    #[default]
    Surface,
    Text,
    Heading,
    Button,
    Input,
    Link,
    Card,
    Navigation,
}

impl ComponentType {
    pub const ALL: [ComponentType; 8] = [
        Self::Surface,
        Self::Text,
        Self::Heading,
        Self::Button,
        Self::Input,
        Self::Link,
        Self::Card,
        Self::Navigation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Surface => "surface",
            Self::Text => "text",
            Self::Heading => "heading",
            Self::Button => "button",
            Self::Input => "input",
            Self::Link => "link",
            Self::Card => "card",
            Self::Navigation => "navigation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names() {
        assert_eq!(ThemeMode::from_name("Dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_name("high-contrast"), ThemeMode::HighContrast);
        assert_eq!(ThemeMode::from_name("High_Contrast"), ThemeMode::HighContrast);
        assert_eq!(ThemeMode::from_name("sepia"), ThemeMode::Light);
        assert_eq!(ThemeMode::HighContrast.to_string(), "high-contrast");
    }

    #[test]
    fn mode_name_round_trip() {
        for mode in ThemeMode::ALL {
            assert_eq!(ThemeMode::from_name(mode.as_str()), mode);
        }
    }
}
