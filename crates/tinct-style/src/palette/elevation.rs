use tinct_color::ColorTransform;

use super::state::{normalize_key, ComponentState, PaletteState};
use super::Palette;
use crate::logging::targets;

/// Elevation tier of a component, from the base surface upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ComponentElevation {
    /// The base palette itself.
    Lowest,
    Low,
    #[default]
    Mid,
    High,
    Highest,
}

impl ComponentElevation {
    /// All tiers, lowest first.
    pub const ALL: [ComponentElevation; 5] = [
        Self::Lowest,
        Self::Low,
        Self::Mid,
        Self::High,
        Self::Highest,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Lightness shift of this tier relative to the base palette.
    pub fn shift(self) -> f64 {
        match self {
            Self::Lowest => 0.0,
            Self::Low => 0.04,
            Self::Mid => 0.08,
            Self::High => 0.12,
            Self::Highest => 0.16,
        }
    }

    /// The transform that derives this tier from the base palette.
    pub fn transform(self) -> ColorTransform {
        match self {
            Self::Lowest => ColorTransform::Identity,
            tier => ColorTransform::Emphasize(tier.shift()),
        }
    }

    /// Numeric level, `0` for `Lowest` through `4` for `Highest`.
    pub fn level(self) -> i32 {
        self as i32
    }

    /// Tier for a numeric level. Levels outside `0..=4` resolve to `Mid`.
    pub fn from_level(level: i32) -> Self {
        usize::try_from(level)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or_else(|| {
                tracing::warn!(target: targets::THEME, requested = level, "unknown elevation level, using mid");
                Self::Mid
            })
    }

    /// Lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lowest => "lowest",
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
            Self::Highest => "highest",
        }
    }

    /// Parse a tier name leniently. Unknown names resolve to `Mid`.
    pub fn from_name(name: &str) -> Self {
        match normalize_key(name).as_str() {
            "lowest" | "base" => Self::Lowest,
            "low" => Self::Low,
            "mid" | "middle" | "medium" => Self::Mid,
            "high" => Self::High,
            "highest" | "top" => Self::Highest,
            _ => {
                tracing::warn!(target: targets::THEME, input = name, "unknown elevation, using mid");
                Self::Mid
            }
        }
    }
}

/// Every elevation tier of one base palette, each with its full state set.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteElevation {
    tiers: [PaletteState; ComponentElevation::COUNT],
}

impl PaletteElevation {
    /// Derive all tiers from `base`. Each tier is shifted from `base`
    /// directly by its own magnitude.
    pub fn new(base: &Palette) -> Self {
        let tiers = std::array::from_fn(|i| {
            PaletteState::new(&base.to_elevation(ComponentElevation::ALL[i]))
        });
        tracing::debug!(
            target: targets::MATRIX,
            tiers = ComponentElevation::COUNT,
            states = ComponentState::COUNT,
            "materialized elevation hierarchy"
        );
        Self { tiers }
    }

    /// The state set for a tier.
    pub fn get(&self, elevation: ComponentElevation) -> &PaletteState {
        &self.tiers[elevation as usize]
    }

    /// The palette for a tier and state.
    pub fn resolve(&self, elevation: ComponentElevation, state: ComponentState) -> &Palette {
        self.get(elevation).get(state)
    }

    /// The base palette.
    pub fn base(&self) -> &Palette {
        self.resolve(ComponentElevation::Lowest, ComponentState::Default)
    }
}
