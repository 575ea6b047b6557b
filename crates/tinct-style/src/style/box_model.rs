//! Border and spacing tokens.
//!
//! These are shared by every state and elevation of a theme; only colors
//! and typography vary per state.

use crate::render::Declarations;
use crate::types::{BorderStyle, CornerRadii, EdgeValues, LengthValue};

/// Border widths, line style and corner radii.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Border {
    pub width: EdgeValues,
    pub style: Option<BorderStyle>,
    pub radius: CornerRadii,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            width: EdgeValues::uniform(LengthValue::px(1.0)),
            style: Some(BorderStyle::Solid),
            radius: CornerRadii::uniform(LengthValue::px(4.0)),
        }
    }
}

impl Border {
    /// A border with nothing set.
    pub fn unset() -> Self {
        Self {
            width: EdgeValues::default(),
            style: None,
            radius: CornerRadii::default(),
        }
    }

    /// Set all four widths.
    pub fn width(mut self, width: EdgeValues) -> Self {
        self.width = width;
        self
    }

    /// Set the same width on all sides.
    pub fn width_all(self, width: LengthValue) -> Self {
        self.width(EdgeValues::uniform(width))
    }

    /// Set the line style.
    pub fn style(mut self, style: BorderStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set all corner radii.
    pub fn radius(mut self, radius: CornerRadii) -> Self {
        self.radius = radius;
        self
    }

    /// Set the same radius on all corners.
    pub fn radius_all(self, radius: LengthValue) -> Self {
        self.radius(CornerRadii::uniform(radius))
    }

    /// Width of the focus ring: the widest side plus two pixels, and never
    /// less than two pixels.
    pub fn focus_width(&self) -> LengthValue {
        LengthValue::px((self.width.max_px() + 2.0).max(2.0))
    }

    /// Return a copy where every side, corner or style set in `overrides`
    /// replaces this border's value.
    pub fn cascade(&self, overrides: &Border) -> Border {
        Border {
            width: overrides.width.or(&self.width),
            style: overrides.style.or(self.style),
            radius: overrides.radius.or(&self.radius),
        }
    }

    /// Width, style and radius declarations.
    ///
    /// With `focused` set, every side is drawn at [`Border::focus_width`]
    /// with a solid line.
    pub fn declarations(&self, focused: bool) -> Declarations {
        let mut decls = Declarations::new();

        if focused {
            let ring = self.focus_width();
            for (side, _) in self.width.sides() {
                decls.push(format!("border-{side}-width"), ring.to_string());
            }
            decls.push("border-style", BorderStyle::Solid.as_css());
        } else {
            for (side, width) in self.width.sides() {
                decls.push_opt(&format!("border-{side}-width"), width);
            }
            decls.push_opt("border-style", self.style);
        }

        for (property, radius) in self.radius.corners() {
            decls.push_opt(property, radius);
        }
        decls
    }
}

/// Margin and padding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Spacing {
    pub margin: EdgeValues,
    pub padding: EdgeValues,
}

impl Spacing {
    /// Set the margin.
    pub fn margin(mut self, margin: EdgeValues) -> Self {
        self.margin = margin;
        self
    }

    /// Set the padding.
    pub fn padding(mut self, padding: EdgeValues) -> Self {
        self.padding = padding;
        self
    }

    /// Return a copy with every side set in `overrides` replacing this
    /// instance's value.
    pub fn cascade(&self, overrides: &Spacing) -> Spacing {
        Spacing {
            margin: overrides.margin.or(&self.margin),
            padding: overrides.padding.or(&self.padding),
        }
    }

    /// Margin and padding declarations for the sides that are set.
    pub fn declarations(&self) -> Declarations {
        let mut decls = Declarations::new();
        for (side, value) in self.margin.sides() {
            decls.push_opt(&format!("margin-{side}"), value);
        }
        for (side, value) in self.padding.sides() {
            decls.push_opt(&format!("padding-{side}"), value);
        }
        decls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_width_heuristic() {
        assert_eq!(Border::default().focus_width(), LengthValue::px(3.0));
        assert_eq!(Border::unset().focus_width(), LengthValue::px(2.0));

        let uneven = Border::unset().width(EdgeValues {
            bottom: Some(LengthValue::px(4.0)),
            ..Default::default()
        });
        assert_eq!(uneven.focus_width(), LengthValue::px(6.0));
        assert_eq!(
            Border::unset().width_all(LengthValue::em(0.125)).focus_width(),
            LengthValue::px(4.0)
        );
    }

    #[test]
    fn focused_border_uses_ring() {
        let border = Border::unset()
            .width(EdgeValues {
                top: Some(LengthValue::px(1.0)),
                ..Default::default()
            })
            .style(BorderStyle::Dashed);

        let normal = border.declarations(false);
        assert_eq!(normal.to_css(None), "border-top-width:1px;border-style:dashed;");

        let focused = border.declarations(true);
        assert_eq!(focused.get("border-left-width"), Some("3px"));
        assert_eq!(focused.get("border-top-width"), Some("3px"));
        assert_eq!(focused.get("border-style"), Some("solid"));
    }

    #[test]
    fn border_cascade_keeps_unset_sides() {
        let merged = Border::default().cascade(&Border::unset().style(BorderStyle::Double));
        assert_eq!(merged.style, Some(BorderStyle::Double));
        assert_eq!(merged.width, Border::default().width);
        assert_eq!(Border::default().cascade(&Border::unset()), Border::default());
    }

    #[test]
    fn spacing_declarations() {
        let spacing = Spacing::default()
            .padding(EdgeValues::symmetric(LengthValue::px(4.0), LengthValue::px(8.0)));
        assert_eq!(
            spacing.declarations().to_css(None),
            "padding-top:4px;padding-right:8px;padding-bottom:4px;padding-left:8px;"
        );
        assert!(Spacing::default().declarations().is_empty());
    }
}
