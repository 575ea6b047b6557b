use super::elevation::{ComponentElevation, PaletteElevation};
use super::state::ComponentState;
use super::Palette;
use crate::logging::targets;
use crate::theme::ThemeMode;

/// Light, dark and high-contrast elevation hierarchies.
///
/// Construction derives all 3 × 5 × 6 palettes; resolution is a table
/// lookup and never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteVariant {
    light: PaletteElevation,
    dark: PaletteElevation,
    high_contrast: PaletteElevation,
}

impl PaletteVariant {
    /// Expand three base palettes.
    pub fn new(light: &Palette, dark: &Palette, high_contrast: &Palette) -> Self {
        let variant = Self {
            light: PaletteElevation::new(light),
            dark: PaletteElevation::new(dark),
            high_contrast: PaletteElevation::new(high_contrast),
        };
        tracing::debug!(target: targets::MATRIX, "materialized palette variant");
        variant
    }

    /// The elevation hierarchy for a mode.
    pub fn get(&self, mode: ThemeMode) -> &PaletteElevation {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
            ThemeMode::HighContrast => &self.high_contrast,
        }
    }

    /// The base palette for a mode.
    pub fn base(&self, mode: ThemeMode) -> &Palette {
        self.get(mode).base()
    }

    /// The palette for a mode, tier and state.
    pub fn resolve(
        &self,
        mode: ThemeMode,
        elevation: ComponentElevation,
        state: ComponentState,
    ) -> &Palette {
        self.get(mode).resolve(elevation, state)
    }

    /// Resolve from free-form names. Unknown names fall back to Light, Mid
    /// and Default.
    pub fn resolve_named(&self, mode: &str, elevation: &str, state: &str) -> &Palette {
        self.resolve(
            ThemeMode::from_name(mode),
            ComponentElevation::from_name(elevation),
            ComponentState::from_name(state),
        )
    }
}

impl Default for PaletteVariant {
    fn default() -> Self {
        Self::new(&Palette::light(), &Palette::dark(), &Palette::high_contrast())
    }
}

static_assertions::assert_impl_all!(PaletteVariant: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_deterministic() {
        let a = PaletteVariant::default();
        let b = PaletteVariant::default();
        let key = (ThemeMode::Dark, ComponentElevation::Highest, ComponentState::Pressed);
        assert_eq!(a.resolve(key.0, key.1, key.2), b.resolve(key.0, key.1, key.2));
        assert_eq!(a.resolve(key.0, key.1, key.2), a.resolve(key.0, key.1, key.2));
    }

    #[test]
    fn modes_are_independent() {
        let variant = PaletteVariant::default();
        assert_eq!(variant.base(ThemeMode::Light), &Palette::light());
        assert_eq!(variant.base(ThemeMode::Dark), &Palette::dark());
        assert!(variant.base(ThemeMode::HighContrast).is_high_contrast());
    }

    #[test]
    fn named_resolution_falls_back() {
        let variant = PaletteVariant::default();
        assert_eq!(
            variant.resolve_named("sepia", "orbit", "confused"),
            variant.resolve(ThemeMode::Light, ComponentElevation::Mid, ComponentState::Default)
        );
        assert_eq!(
            variant.resolve_named("dark", "high", "hover"),
            variant.resolve(ThemeMode::Dark, ComponentElevation::High, ComponentState::Hovered)
        );
    }

    #[test]
    fn every_entry_is_valid() {
        let variant = PaletteVariant::default();
        for mode in ThemeMode::ALL {
            for elevation in ComponentElevation::ALL {
                for state in ComponentState::ALL {
                    let p = variant.resolve(mode, elevation, state);
                    assert!(p.validate().is_ok(), "{mode:?}/{elevation:?}/{state:?}");
                }
            }
        }
    }
}
