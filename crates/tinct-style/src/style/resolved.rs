//! Render-ready style for one component configuration.

use crate::palette::{ComponentElevation, ComponentState, Palette};
use crate::render::{CssFormatter, DeclarationFormatter, Declarations};
use crate::theme::{ComponentType, ThemeMode};
use crate::types::Typography;

use super::{Border, Spacing};

/// A resolved palette together with the shared box-model tokens and the
/// typography of a component type.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub mode: ThemeMode,
    pub component: ComponentType,
    pub elevation: ComponentElevation,
    pub state: ComponentState,
    pub palette: Palette,
    pub typography: Typography,
    pub border: Border,
    pub spacing: Spacing,
}

impl Style {
    /// Whether the border renders as a focus ring.
    pub fn is_focused(&self) -> bool {
        self.state == ComponentState::Focused
    }

    /// All declarations in render order: colors, border, spacing,
    /// typography.
    pub fn declarations(&self) -> Declarations {
        let mut decls = self.palette.declarations();
        decls.extend(self.border.declarations(self.is_focused()));
        decls.extend(self.spacing.declarations());
        decls.extend(self.typography.declarations());
        decls
    }

    /// Render with a custom formatter.
    pub fn render(&self, formatter: &dyn DeclarationFormatter, var_prefix: Option<&str>) -> String {
        self.declarations().render(formatter, var_prefix)
    }

    /// Render as `property:value;` text, or as custom properties when
    /// `var_prefix` is given.
    pub fn to_css(&self, var_prefix: Option<&str>) -> String {
        self.render(&CssFormatter, var_prefix)
    }
}
