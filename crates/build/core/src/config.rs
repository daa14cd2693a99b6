/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Upper bounds of the Light, Medium and Heavy weight classes.
    pub weight_classes: WeightClassThresholds,
}

impl EngineConfig {
    // ===== compile-time slot layout =====
    pub const MAX_WEAPONS: usize = 3;
    pub const MAX_MODS: usize = 3;
    pub const MAX_MUTATORS: usize = 3;
    pub const MAX_RINGS: usize = 4;
    pub const MAX_ARCHETYPES: usize = 2;
    pub const MAX_SKILLS: usize = 2;
    pub const MAX_CONCOCTIONS: usize = 7;
    pub const MAX_CONSUMABLES: usize = 4;
    pub const MAX_RELIC_FRAGMENTS: usize = 3;
    pub const MAX_TRAITS: usize = 64;

    // ===== formula constants =====
    pub const BASE_HEALTH: f64 = 100.0;
    pub const BASE_STAMINA: f64 = 100.0;

    pub const DEFAULT_BUILD_NAME: &'static str = "My Build";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weight_classes(weight_classes: WeightClassThresholds) -> Self {
        Self { weight_classes }
    }
}

// Weapon slot i and mod slot i describe the same loadout position.
const _: () = assert!(EngineConfig::MAX_WEAPONS == EngineConfig::MAX_MODS);

/// Inclusive upper bounds for the weight classes below Ultra.
///
/// A net weight equal to `light` is still Light; anything strictly greater
/// is promoted to Medium, and so on.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightClassThresholds {
    pub light: f64,
    pub medium: f64,
    pub heavy: f64,
}

impl WeightClassThresholds {
    pub const DEFAULT_LIGHT: f64 = 25.0;
    pub const DEFAULT_MEDIUM: f64 = 50.0;
    pub const DEFAULT_HEAVY: f64 = 75.0;

    pub const fn new(light: f64, medium: f64, heavy: f64) -> Self {
        Self {
            light,
            medium,
            heavy,
        }
    }

    /// Returns true when the bounds are strictly ascending.
    pub fn is_ascending(&self) -> bool {
        self.light < self.medium && self.medium < self.heavy
    }
}

impl Default for WeightClassThresholds {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_LIGHT,
            Self::DEFAULT_MEDIUM,
            Self::DEFAULT_HEAVY,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_are_ascending() {
        let config = EngineConfig::new();
        assert!(config.weight_classes.is_ascending());
        assert_eq!(config.weight_classes.light, 25.0);
    }

    #[test]
    fn descending_thresholds_are_rejected() {
        assert!(!WeightClassThresholds::new(50.0, 25.0, 75.0).is_ascending());
        assert!(!WeightClassThresholds::new(25.0, 25.0, 75.0).is_ascending());
    }
}
