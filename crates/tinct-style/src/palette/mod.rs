//! Palettes and their derived variants.
//!
//! A [`Palette`] bundles the background, foreground, fill and border colors
//! of one visual configuration. Two fields are always derived rather than
//! stored as given:
//!
//! - the foreground is pushed to at least 4.5:1 against the effective
//!   surface (the fill, or the background when the fill is transparent)
//! - the border is derived from the other colors unless one was supplied
//!
//! Palettes are immutable. [`Palette::cascade`] merges overrides into the
//! raw inputs and runs the whole derivation again, so derived fields never
//! go stale. [`PaletteState`], [`PaletteElevation`] and [`PaletteVariant`]
//! eagerly materialize every interaction state, elevation tier and theme
//! mode from a base palette.
//!
//! # Example
//!
//! ```
//! use tinct_style::prelude::*;
//!
//! let palette = Palette::builder(ThemeMode::Light)
//!     .background(Color::WHITE)
//!     .foreground(Color::from_hex("#CCCCCC").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // #CCCCCC is too light to read on white and is darkened.
//! assert!(contrast_ratio(palette.foreground(), Color::WHITE) >= 4.5);
//! ```

mod elevation;
mod state;
mod variant;

pub use elevation::{ComponentElevation, PaletteElevation};
pub use state::{ComponentState, PaletteState};
pub use variant::PaletteVariant;

pub(crate) use state::normalize_key;

use tinct_color::contrast::{contrast_ratio, ensure_minimum_contrast, MIN_TEXT_CONTRAST};
use tinct_color::transform::to_border;
use tinct_color::{Color, ColorTransform};

use crate::error::{Error, Result};
use crate::logging::targets;
use crate::render::Declarations;
use crate::theme::ThemeMode;

/// The raw values a palette is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteInputs {
    pub background: Color,
    pub foreground: Color,
    /// [`Color::TRANSPARENT`] when the palette has no fill.
    pub fill: Color,
    /// Explicit border; derived when `None`.
    pub border: Option<Color>,
    pub high_contrast: bool,
}

impl PaletteInputs {
    /// Built-in inputs for a theme mode.
    pub fn preset(mode: ThemeMode) -> Self {
        let (background, foreground) = match mode {
            ThemeMode::Light => (Color::WHITE, Color::rgb(0x21, 0x25, 0x29)),
            ThemeMode::Dark => (Color::rgb(0x1C, 0x1C, 0x1E), Color::rgb(0xF2, 0xF2, 0xF7)),
            ThemeMode::HighContrast => (Color::WHITE, Color::BLACK),
        };
        Self {
            background,
            foreground,
            fill: Color::TRANSPARENT,
            border: None,
            high_contrast: mode == ThemeMode::HighContrast,
        }
    }
}

/// Overrides for [`Palette::cascade`]. Unset fields keep the current input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaletteOverrides {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub fill: Option<Color>,
    pub border: Option<Color>,
    /// Drop an explicit border so that it is derived again.
    pub derive_border: bool,
    pub high_contrast: Option<bool>,
}

impl PaletteOverrides {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn border(mut self, color: Color) -> Self {
        self.border = Some(color);
        self.derive_border = false;
        self
    }

    pub fn derive_border(mut self) -> Self {
        self.border = None;
        self.derive_border = true;
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = Some(enabled);
        self
    }

    fn merge_into(&self, inputs: PaletteInputs) -> PaletteInputs {
        PaletteInputs {
            background: self.background.unwrap_or(inputs.background),
            foreground: self.foreground.unwrap_or(inputs.foreground),
            fill: self.fill.unwrap_or(inputs.fill),
            border: if self.derive_border {
                None
            } else {
                self.border.or(inputs.border)
            },
            high_contrast: self.high_contrast.unwrap_or(inputs.high_contrast),
        }
    }
}

/// Background, foreground, fill and border colors for one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    background: Color,
    foreground: Color,
    fill: Color,
    border: Color,
    high_contrast: bool,
    inputs: PaletteInputs,
}

impl Palette {
    /// Create a builder whose unset colors come from `mode`'s preset.
    pub fn builder(mode: ThemeMode) -> PaletteBuilder {
        PaletteBuilder::new(mode)
    }

    /// Derive a palette from raw inputs.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCascadeInput`] when the inputs cannot produce a
    /// readable palette, e.g. a fully transparent foreground or background.
    pub fn from_inputs(inputs: PaletteInputs) -> Result<Self> {
        check_inputs(&inputs)?;
        let palette = Self::derive(inputs);
        palette.validate()?;
        Ok(palette)
    }

    /// The built-in light palette.
    pub fn light() -> Self {
        Self::preset(ThemeMode::Light)
    }

    /// The built-in dark palette.
    pub fn dark() -> Self {
        Self::preset(ThemeMode::Dark)
    }

    /// The built-in high-contrast palette.
    pub fn high_contrast() -> Self {
        Self::preset(ThemeMode::HighContrast)
    }

    /// The built-in palette for `mode`.
    pub fn preset(mode: ThemeMode) -> Self {
        Self::derive(PaletteInputs::preset(mode))
    }

    /// Run the derivation pipeline. Total for any inputs.
    fn derive(inputs: PaletteInputs) -> Self {
        let fill_present = !inputs.fill.is_transparent();
        let contrast_surface = if fill_present { inputs.fill } else { inputs.background };

        let foreground =
            ensure_minimum_contrast(inputs.foreground, contrast_surface, MIN_TEXT_CONTRAST);
        if foreground != inputs.foreground {
            tracing::debug!(
                target: targets::PALETTE,
                requested = %inputs.foreground,
                adjusted = %foreground,
                surface = %contrast_surface,
                "foreground adjusted for contrast"
            );
        }

        let border_fill = (fill_present && inputs.fill != inputs.background).then_some(inputs.fill);
        let border = inputs.border.unwrap_or_else(|| {
            to_border(foreground, inputs.background, border_fill, inputs.high_contrast)
        });

        Self {
            background: inputs.background,
            foreground,
            fill: inputs.fill,
            border,
            high_contrast: inputs.high_contrast,
            inputs,
        }
    }

    /// Return a new palette with `overrides` merged into the raw inputs and
    /// every derived field recomputed.
    ///
    /// Cascading with no overrides yields a palette equal to `self`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCascadeInput`] when the merged inputs fail validation.
    pub fn cascade(&self, overrides: &PaletteOverrides) -> Result<Self> {
        Self::from_inputs(overrides.merge_into(self.inputs))
    }

    /// Check the palette invariants.
    pub fn validate(&self) -> Result<()> {
        let ratio = contrast_ratio(self.foreground, self.surface());
        if ratio < MIN_TEXT_CONTRAST {
            return Err(Error::invalid_cascade(
                "foreground",
                format!(
                    "contrast {ratio:.2}:1 against {} is below {MIN_TEXT_CONTRAST}:1",
                    self.surface()
                ),
            ));
        }
        Ok(())
    }

    /// Apply a transform to every channel and derive again.
    ///
    /// The transparent fill stays transparent. A derived border is derived
    /// again from the transformed colors; an explicit one is transformed.
    pub fn transformed(&self, transform: ColorTransform) -> Self {
        if transform == ColorTransform::Identity {
            return self.clone();
        }

        let inputs = PaletteInputs {
            background: transform.apply(self.background),
            foreground: transform.apply(self.foreground),
            fill: transform.apply_to_surface(self.fill),
            border: self.inputs.border.map(|_| transform.apply(self.border)),
            high_contrast: self.high_contrast,
        };
        let palette = Self::derive(inputs);
        debug_assert!(
            palette.validate().is_ok(),
            "transform {transform:?} produced an invalid palette"
        );
        palette
    }

    /// The palette for an interaction state.
    pub fn to_state(&self, state: ComponentState) -> Self {
        self.transformed(state.transform())
    }

    /// The palette for an elevation tier.
    pub fn to_elevation(&self, elevation: ComponentElevation) -> Self {
        self.transformed(elevation.transform())
    }

    pub fn to_hovered(&self) -> Self {
        self.to_state(ComponentState::Hovered)
    }

    pub fn to_focused(&self) -> Self {
        self.to_state(ComponentState::Focused)
    }

    pub fn to_pressed(&self) -> Self {
        self.to_state(ComponentState::Pressed)
    }

    pub fn to_disabled(&self) -> Self {
        self.to_state(ComponentState::Disabled)
    }

    pub fn to_dragged(&self) -> Self {
        self.to_state(ComponentState::Dragged)
    }

    pub fn to_elevation1(&self) -> Self {
        self.to_elevation(ComponentElevation::Low)
    }

    pub fn to_elevation2(&self) -> Self {
        self.to_elevation(ComponentElevation::Mid)
    }

    pub fn to_elevation3(&self) -> Self {
        self.to_elevation(ComponentElevation::High)
    }

    pub fn to_elevation4(&self) -> Self {
        self.to_elevation(ComponentElevation::Highest)
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// The fill, [`Color::TRANSPARENT`] when absent.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// The fill, or `None` when absent.
    pub fn fill_opt(&self) -> Option<Color> {
        (!self.fill.is_transparent()).then_some(self.fill)
    }

    pub fn border(&self) -> Color {
        self.border
    }

    pub fn is_high_contrast(&self) -> bool {
        self.high_contrast
    }

    /// Whether the border was supplied rather than derived.
    pub fn has_explicit_border(&self) -> bool {
        self.inputs.border.is_some()
    }

    /// The color the foreground is drawn on: the fill, or the background.
    pub fn surface(&self) -> Color {
        self.fill_opt().unwrap_or(self.background)
    }

    /// The raw inputs this palette was derived from.
    pub fn inputs(&self) -> &PaletteInputs {
        &self.inputs
    }

    /// Color declarations: surface, text and border color.
    pub fn declarations(&self) -> Declarations {
        let mut decls = Declarations::new();
        decls.push("background-color", self.surface().to_string());
        decls.push("color", self.foreground.to_string());
        decls.push("border-color", self.border.to_string());
        decls
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

fn check_inputs(inputs: &PaletteInputs) -> Result<()> {
    if inputs.foreground.is_transparent() {
        return Err(Error::invalid_cascade(
            "foreground",
            "a transparent foreground can never be readable",
        ));
    }
    if inputs.background.is_transparent() {
        return Err(Error::invalid_cascade(
            "background",
            "the background must be visible; use the fill for transparency",
        ));
    }
    Ok(())
}

/// Builder for [`Palette`].
///
/// Unset background and foreground come from the theme-mode preset, unset
/// fill is transparent and an unset border is derived.
#[derive(Debug, Clone)]
pub struct PaletteBuilder {
    inputs: PaletteInputs,
}

impl PaletteBuilder {
    /// Start from `mode`'s preset.
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            inputs: PaletteInputs::preset(mode),
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.inputs.background = color;
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.inputs.foreground = color;
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.inputs.fill = color;
        self
    }

    pub fn border(mut self, color: Color) -> Self {
        self.inputs.border = Some(color);
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.inputs.high_contrast = enabled;
        self
    }

    /// Derive and validate the palette.
    pub fn build(self) -> Result<Palette> {
        Palette::from_inputs(self.inputs)
    }
}

static_assertions::assert_impl_all!(Palette: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    #[test]
    fn low_contrast_foreground_is_replaced() {
        let p = Palette::builder(ThemeMode::Light)
            .background(hex("#FFFFFF"))
            .foreground(hex("#CCCCCC"))
            .build()
            .unwrap();

        assert_ne!(p.foreground(), hex("#CCCCCC"));
        assert!(contrast_ratio(p.foreground(), p.surface()) >= MIN_TEXT_CONTRAST);
        assert_eq!(p.inputs().foreground, hex("#CCCCCC"));
    }

    #[test]
    fn foreground_is_checked_against_fill() {
        let p = Palette::builder(ThemeMode::Light)
            .background(Color::WHITE)
            .foreground(Color::WHITE)
            .fill(hex("#0D6EFD"))
            .build()
            .unwrap();

        assert_eq!(p.surface(), hex("#0D6EFD"));
        assert!(contrast_ratio(p.foreground(), hex("#0D6EFD")) >= MIN_TEXT_CONTRAST);
    }

    #[test]
    fn readable_foreground_is_kept() {
        let p = Palette::light();
        assert_eq!(p.foreground(), hex("#212529"));
        assert_eq!(p.fill_opt(), None);
        assert!(!p.has_explicit_border());
    }

    #[test]
    fn cascade_identity() {
        for p in [Palette::light(), Palette::dark(), Palette::high_contrast()] {
            assert_eq!(p.cascade(&PaletteOverrides::new()).unwrap(), p);
        }
    }

    #[test]
    fn cascade_recomputes_derived_fields() {
        let light = Palette::builder(ThemeMode::Light)
            .foreground(hex("#777777"))
            .build()
            .unwrap();
        let dark_bg = light
            .cascade(&PaletteOverrides::new().background(hex("#111111")))
            .unwrap();

        // The stored foreground was darkened for white; against a dark
        // background the raw input is re-derived instead of carried over.
        assert_ne!(dark_bg.foreground(), light.foreground());
        assert!(contrast_ratio(dark_bg.foreground(), hex("#111111")) >= MIN_TEXT_CONTRAST);
        assert_ne!(dark_bg.border(), light.border());
    }

    #[test]
    fn explicit_border_survives_cascade_until_cleared() {
        let red = hex("#FF0000");
        let p = Palette::builder(ThemeMode::Light).border(red).build().unwrap();
        assert_eq!(p.border(), red);

        let moved = p.cascade(&PaletteOverrides::new().background(hex("#EEEEEE"))).unwrap();
        assert_eq!(moved.border(), red);

        let derived = moved.cascade(&PaletteOverrides::new().derive_border()).unwrap();
        assert_ne!(derived.border(), red);
        assert!(!derived.has_explicit_border());
    }

    #[test]
    fn transparent_inputs_are_rejected() {
        let err = Palette::builder(ThemeMode::Light)
            .foreground(Color::TRANSPARENT)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCascadeInput { field: "foreground", .. }));

        let err = Palette::light()
            .cascade(&PaletteOverrides::new().background(Color::TRANSPARENT))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCascadeInput { field: "background", .. }));
    }

    #[test]
    fn derived_border_is_visible() {
        for p in [Palette::light(), Palette::dark()] {
            assert!(contrast_ratio(p.border(), p.background()) >= 3.0);
        }
        let hc = Palette::high_contrast();
        assert_eq!(hc.border(), Color::BLACK);
    }

    #[test]
    fn states_remain_valid() {
        let base = Palette::builder(ThemeMode::Light)
            .fill(hex("#0D6EFD"))
            .foreground(Color::WHITE)
            .build()
            .unwrap();
        for state in ComponentState::ALL {
            let p = base.to_state(state);
            assert!(p.validate().is_ok(), "{state:?}");
        }
        assert_ne!(base.to_hovered().fill(), base.fill());
        assert_eq!(base.to_state(ComponentState::Default), base);
    }

    #[test]
    fn transparent_fill_stays_transparent() {
        let hovered = Palette::light().to_pressed();
        assert!(hovered.fill().is_transparent());
        assert_ne!(hovered.background(), Color::WHITE);
    }

    #[test]
    fn declarations_use_surface() {
        let css = Palette::light().declarations().to_css(None);
        assert!(css.starts_with("background-color:#FFFFFF;color:#212529;border-color:#"));
    }
}
