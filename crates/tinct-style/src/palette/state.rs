use tinct_color::ColorTransform;

use super::Palette;
use crate::logging::targets;

/// Interaction state of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ComponentState {
    #[default]
    Default,
    Hovered,
    Focused,
    Pressed,
    Disabled,
    Dragged,
}

impl ComponentState {
    /// All states, in table order.
    pub const ALL: [ComponentState; 6] = [
        Self::Default,
        Self::Hovered,
        Self::Focused,
        Self::Pressed,
        Self::Disabled,
        Self::Dragged,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// The transform that derives this state from the default palette.
    ///
    /// Hovered, Focused, Pressed and Dragged shift lightness by strictly
    /// increasing amounts; Disabled drains saturation.
    pub fn transform(self) -> ColorTransform {
        match self {
            Self::Default => ColorTransform::Identity,
            Self::Hovered => ColorTransform::Emphasize(0.06),
            Self::Focused => ColorTransform::Emphasize(0.10),
            Self::Pressed => ColorTransform::Emphasize(0.14),
            Self::Disabled => ColorTransform::Desaturate(0.6),
            Self::Dragged => ColorTransform::Emphasize(0.18),
        }
    }

    /// Lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hovered => "hovered",
            Self::Focused => "focused",
            Self::Pressed => "pressed",
            Self::Disabled => "disabled",
            Self::Dragged => "dragged",
        }
    }

    /// Parse a state name leniently. Unknown names resolve to `Default`.
    pub fn from_name(name: &str) -> Self {
        match normalize_key(name).as_str() {
            "" | "default" | "normal" | "rest" => Self::Default,
            "hover" | "hovered" => Self::Hovered,
            "focus" | "focused" => Self::Focused,
            "press" | "pressed" | "active" => Self::Pressed,
            "disabled" => Self::Disabled,
            "drag" | "dragged" | "dragging" => Self::Dragged,
            _ => {
                tracing::warn!(target: targets::THEME, input = name, "unknown component state, using default");
                Self::Default
            }
        }
    }
}

/// Lower-case a lookup key and drop separators.
pub(crate) fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '_')))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Every interaction state of one base palette, computed up front.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteState {
    states: [Palette; ComponentState::COUNT],
}

impl PaletteState {
    /// Derive all states from `base`. Each state comes from `base` directly.
    pub fn new(base: &Palette) -> Self {
        let states = std::array::from_fn(|i| base.to_state(ComponentState::ALL[i]));
        tracing::trace!(target: targets::MATRIX, count = ComponentState::COUNT, "materialized state set");
        Self { states }
    }

    /// The palette for `state`.
    pub fn get(&self, state: ComponentState) -> &Palette {
        &self.states[state as usize]
    }

    /// The default-state palette.
    pub fn base(&self) -> &Palette {
        self.get(ComponentState::Default)
    }

    /// Iterate `(state, palette)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentState, &Palette)> {
        ComponentState::ALL.into_iter().zip(self.states.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_discriminants() {
        for (i, state) in ComponentState::ALL.into_iter().enumerate() {
            assert_eq!(state as usize, i);
        }
    }

    #[test]
    fn state_shifts_increase() {
        let amounts: Vec<f64> = [
            ComponentState::Hovered,
            ComponentState::Focused,
            ComponentState::Pressed,
            ComponentState::Dragged,
        ]
        .into_iter()
        .map(|s| match s.transform() {
            ColorTransform::Emphasize(a) => a,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
        assert!(amounts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn lenient_names() {
        assert_eq!(ComponentState::from_name("Hover"), ComponentState::Hovered);
        assert_eq!(ComponentState::from_name("active"), ComponentState::Pressed);
        assert_eq!(ComponentState::from_name("DISABLED"), ComponentState::Disabled);
        assert_eq!(ComponentState::from_name("wiggling"), ComponentState::Default);
    }

    #[test]
    fn states_derive_from_base_not_each_other() {
        let base = Palette::light();
        let set = PaletteState::new(&base);
        assert_eq!(set.base(), &base);
        assert_eq!(set.get(ComponentState::Pressed), &base.to_pressed());
        assert_eq!(set.get(ComponentState::Disabled), &base.to_disabled());
        assert_eq!(set.iter().count(), ComponentState::COUNT);
    }
}
