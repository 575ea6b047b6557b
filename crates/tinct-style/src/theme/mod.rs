//! Theme composition.
//!
//! A [`Theme`] combines a [`PaletteVariant`] with one typography record and
//! the shared border and spacing tokens. Resolving a theme for a mode,
//! component type, elevation and state yields a render-ready [`Style`].
//!
//! # Example
//!
//! ```
//! use tinct_style::prelude::*;
//!
//! let theme = Theme::builder()
//!     .border(Border::default().width_all(LengthValue::px(2.0)))
//!     .build();
//!
//! let css = theme.render_css(
//!     ThemeMode::Dark,
//!     ComponentType::Button,
//!     ComponentElevation::Low,
//!     ComponentState::Focused,
//!     None,
//! );
//! assert!(css.contains("border-top-width:4px;"));
//! ```

mod config;
mod mode;

pub use config::{PaletteConfig, ThemeConfig};
pub use mode::{ComponentType, ThemeMode};

use crate::error::Result;
use crate::logging::targets;
use crate::palette::{
    ComponentElevation, ComponentState, Palette, PaletteOverrides, PaletteVariant,
};
use crate::render::{CssFormatter, CssVariables, DeclarationFormatter};
use crate::style::{Border, Spacing, Style};
use crate::types::Typography;

/// Palettes, typography and box-model tokens for every mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    border: Border,
    spacing: Spacing,
    palettes: PaletteVariant,
    typography: Typography,
}

impl Theme {
    /// Create a theme builder.
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }

    /// Build a theme from configuration, validating every color.
    ///
    /// # Errors
    ///
    /// The first color that fails to parse, or a palette that fails
    /// validation.
    pub fn from_config(config: &ThemeConfig) -> Result<Self> {
        let mut builder = ThemeBuilder::new()
            .light(config.light.to_palette(ThemeMode::Light)?)
            .dark(config.dark.to_palette(ThemeMode::Dark)?)
            .high_contrast(config.high_contrast.to_palette(ThemeMode::HighContrast)?);

        if let Some(typography) = &config.typography {
            builder = builder.typography(typography.clone());
        }
        if let Some(border) = config.border {
            builder = builder.border(border);
        }
        if let Some(spacing) = config.spacing {
            builder = builder.spacing(spacing);
        }
        Ok(builder.build())
    }

    /// The shared border tokens.
    pub fn border(&self) -> &Border {
        &self.border
    }

    /// The shared spacing tokens.
    pub fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    /// The full palette matrix.
    pub fn palettes(&self) -> &PaletteVariant {
        &self.palettes
    }

    /// The theme typography.
    pub fn typography(&self) -> &Typography {
        &self.typography
    }

    /// Typography for a component type. Every type shares the theme
    /// typography for now.
    pub fn typography_for(&self, _component: ComponentType) -> &Typography {
        &self.typography
    }

    /// The palette for a mode, tier and state.
    pub fn palette(
        &self,
        mode: ThemeMode,
        elevation: ComponentElevation,
        state: ComponentState,
    ) -> &Palette {
        self.palettes.resolve(mode, elevation, state)
    }

    /// Package the resolved palette with the shared tokens and typography.
    pub fn resolve_style(
        &self,
        mode: ThemeMode,
        component: ComponentType,
        elevation: ComponentElevation,
        state: ComponentState,
    ) -> Style {
        Style {
            mode,
            component,
            elevation,
            state,
            palette: self.palette(mode, elevation, state).clone(),
            typography: self.typography_for(component).clone(),
            border: self.border,
            spacing: self.spacing,
        }
    }

    /// Render the resolved style as CSS. Focused styles draw the border as
    /// a focus ring.
    pub fn render_css(
        &self,
        mode: ThemeMode,
        component: ComponentType,
        elevation: ComponentElevation,
        state: ComponentState,
        var_prefix: Option<&str>,
    ) -> String {
        self.render_with(&CssFormatter, mode, component, elevation, state, var_prefix)
    }

    /// Render the resolved style with a custom formatter.
    pub fn render_with(
        &self,
        formatter: &dyn DeclarationFormatter,
        mode: ThemeMode,
        component: ComponentType,
        elevation: ComponentElevation,
        state: ComponentState,
        var_prefix: Option<&str>,
    ) -> String {
        self.resolve_style(mode, component, elevation, state)
            .render(formatter, var_prefix)
    }

    /// The resolved style as a custom-property lookup.
    pub fn css_variables(
        &self,
        mode: ThemeMode,
        component: ComponentType,
        elevation: ComponentElevation,
        state: ComponentState,
        prefix: &str,
    ) -> CssVariables {
        self.resolve_style(mode, component, elevation, state)
            .declarations()
            .to_variables(prefix)
    }

    /// Return a new theme with `overrides` applied. Palettes are cascaded
    /// from their base inputs and the whole matrix is derived again.
    ///
    /// # Errors
    ///
    /// A palette override that fails validation.
    pub fn cascade(&self, overrides: &ThemeOverrides) -> Result<Self> {
        let light = self.palettes.base(ThemeMode::Light).cascade(&overrides.light)?;
        let dark = self.palettes.base(ThemeMode::Dark).cascade(&overrides.dark)?;
        let high_contrast = self
            .palettes
            .base(ThemeMode::HighContrast)
            .cascade(&overrides.high_contrast)?;

        Ok(Self {
            border: self.border.cascade(&overrides.border),
            spacing: self.spacing.cascade(&overrides.spacing),
            palettes: PaletteVariant::new(&light, &dark, &high_contrast),
            typography: self.typography.cascade(&overrides.typography),
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        ThemeBuilder::new().build()
    }
}

/// Overrides for [`Theme::cascade`]. Unset fields keep the current value.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeOverrides {
    pub border: Border,
    pub spacing: Spacing,
    pub typography: Typography,
    pub light: PaletteOverrides,
    pub dark: PaletteOverrides,
    pub high_contrast: PaletteOverrides,
}

impl Default for ThemeOverrides {
    fn default() -> Self {
        Self {
            border: Border::unset(),
            spacing: Spacing::default(),
            typography: Typography::default(),
            light: PaletteOverrides::default(),
            dark: PaletteOverrides::default(),
            high_contrast: PaletteOverrides::default(),
        }
    }
}

/// Builder for [`Theme`].
///
/// Unset parts fall back to the built-in palettes, [`Typography::base`],
/// [`Border::default`] and [`Spacing::default`].
#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
    border: Option<Border>,
    spacing: Option<Spacing>,
    light: Option<Palette>,
    dark: Option<Palette>,
    high_contrast: Option<Palette>,
    typography: Option<Typography>,
}

impl ThemeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn light(mut self, palette: Palette) -> Self {
        self.light = Some(palette);
        self
    }

    pub fn dark(mut self, palette: Palette) -> Self {
        self.dark = Some(palette);
        self
    }

    pub fn high_contrast(mut self, palette: Palette) -> Self {
        self.high_contrast = Some(palette);
        self
    }

    /// Set the base palette for `mode`.
    pub fn palette(self, mode: ThemeMode, palette: Palette) -> Self {
        match mode {
            ThemeMode::Light => self.light(palette),
            ThemeMode::Dark => self.dark(palette),
            ThemeMode::HighContrast => self.high_contrast(palette),
        }
    }

    pub fn typography(mut self, typography: Typography) -> Self {
        self.typography = Some(typography);
        self
    }

    /// Materialize every palette and build the theme.
    pub fn build(self) -> Theme {
        let light = self.light.unwrap_or_else(Palette::light);
        let dark = self.dark.unwrap_or_else(Palette::dark);
        let high_contrast = self.high_contrast.unwrap_or_else(Palette::high_contrast);

        let theme = Theme {
            border: self.border.unwrap_or_default(),
            spacing: self.spacing.unwrap_or_default(),
            palettes: PaletteVariant::new(&light, &dark, &high_contrast),
            typography: self.typography.unwrap_or_else(Typography::base),
        };
        tracing::debug!(target: targets::THEME, "built theme");
        theme
    }
}

static_assertions::assert_impl_all!(Theme: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EdgeValues, FontWeight, LengthValue};
    use tinct_color::Color;

    #[test]
    fn default_theme_uses_presets() {
        let theme = Theme::default();
        assert_eq!(theme.palettes().base(ThemeMode::Light), &Palette::light());
        assert_eq!(theme.typography(), &Typography::base());
        assert_eq!(theme.border(), &Border::default());
    }

    #[test]
    fn typography_is_uniform_across_components() {
        let theme = Theme::default();
        for component in ComponentType::ALL {
            assert_eq!(theme.typography_for(component), theme.typography());
        }
    }

    #[test]
    fn spacing_and_border_are_shared_across_states() {
        let theme = Theme::builder()
            .spacing(Spacing::default().padding(EdgeValues::uniform(LengthValue::px(8.0))))
            .build();
        let a = theme.resolve_style(
            ThemeMode::Light,
            ComponentType::Card,
            ComponentElevation::Low,
            ComponentState::Default,
        );
        let b = theme.resolve_style(
            ThemeMode::Dark,
            ComponentType::Card,
            ComponentElevation::Highest,
            ComponentState::Disabled,
        );
        assert_eq!(a.spacing, b.spacing);
        assert_eq!(a.border, b.border);
        assert_ne!(a.palette, b.palette);
    }

    #[test]
    fn focus_ring_only_when_focused() {
        let theme = Theme::default();
        let render = |state| {
            theme.render_css(
                ThemeMode::Light,
                ComponentType::Input,
                ComponentElevation::Lowest,
                state,
                None,
            )
        };
        assert!(render(ComponentState::Default).contains("border-top-width:1px;"));
        assert!(render(ComponentState::Focused).contains("border-top-width:3px;"));
        assert!(render(ComponentState::Hovered).contains("border-top-width:1px;"));
    }

    #[test]
    fn variables_use_prefix() {
        let theme = Theme::default();
        let vars = theme.css_variables(
            ThemeMode::Light,
            ComponentType::Surface,
            ComponentElevation::Lowest,
            ComponentState::Default,
            "tinct",
        );
        assert_eq!(vars.get("--tinct-background-color"), Some("#FFFFFF"));
        assert_eq!(vars.get("tinct-font-weight"), Some("400"));
    }

    #[test]
    fn cascade_identity() {
        let theme = Theme::default();
        assert_eq!(theme.cascade(&ThemeOverrides::default()).unwrap(), theme);
    }

    #[test]
    fn cascade_rebuilds_matrix() {
        let theme = Theme::default();
        let overrides = ThemeOverrides {
            light: PaletteOverrides::new().background(Color::rgb(0xF8, 0xF9, 0xFA)),
            typography: Typography::default().font_weight(FontWeight::MEDIUM),
            ..Default::default()
        };
        let cascaded = theme.cascade(&overrides).unwrap();

        assert_eq!(
            cascaded.palettes().base(ThemeMode::Light).background(),
            Color::rgb(0xF8, 0xF9, 0xFA)
        );
        assert_ne!(
            cascaded.palette(ThemeMode::Light, ComponentElevation::High, ComponentState::Pressed),
            theme.palette(ThemeMode::Light, ComponentElevation::High, ComponentState::Pressed)
        );
        assert_eq!(cascaded.palettes().get(ThemeMode::Dark), theme.palettes().get(ThemeMode::Dark));
        assert_eq!(cascaded.typography().font_weight, Some(FontWeight::MEDIUM));
        assert_eq!(cascaded.typography().font_family, theme.typography().font_family);
    }
}
