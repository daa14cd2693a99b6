//! Per-item stat contributions.
//!
//! All percentage fields are fractional (`0.10` is +10%). A field only
//! contributes when it is present and non-zero; see [`contribution`].

/// Elemental and status resistances.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum ResistanceKind {
    Fire,
    Blight,
    Shock,
    Bleed,
    Toxin,
}

/// Addressable stat contribution field shared by every item kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatField {
    Armor,
    ArmorPercent,
    Health,
    HealthPercent,
    HealthCap,
    Stamina,
    StaminaPercent,
    Weight,
    WeightPercent,
    WeightThreshold,
    Resistance(ResistanceKind),
    ResistancePercent(ResistanceKind),
}

/// Sparse stat contributions carried by a catalog item.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatContributions {
    pub armor: Option<f64>,
    pub armor_percent: Option<f64>,
    pub health: Option<f64>,
    pub health_percent: Option<f64>,
    /// Health cap; only the lowest equipped cap applies, as `1 - cap`.
    pub health_cap: Option<f64>,
    pub stamina: Option<f64>,
    pub stamina_percent: Option<f64>,
    pub weight: Option<f64>,
    pub weight_percent: Option<f64>,
    /// Flat reduction applied before weight-class classification.
    pub weight_threshold: Option<f64>,
    pub fire_resistance: Option<f64>,
    pub fire_resistance_percent: Option<f64>,
    pub blight_resistance: Option<f64>,
    pub blight_resistance_percent: Option<f64>,
    pub shock_resistance: Option<f64>,
    pub shock_resistance_percent: Option<f64>,
    pub bleed_resistance: Option<f64>,
    pub bleed_resistance_percent: Option<f64>,
    pub toxin_resistance: Option<f64>,
    pub toxin_resistance_percent: Option<f64>,
}

impl StatContributions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw field value, present or not.
    pub fn get(&self, field: StatField) -> Option<f64> {
        use ResistanceKind::*;
        match field {
            StatField::Armor => self.armor,
            StatField::ArmorPercent => self.armor_percent,
            StatField::Health => self.health,
            StatField::HealthPercent => self.health_percent,
            StatField::HealthCap => self.health_cap,
            StatField::Stamina => self.stamina,
            StatField::StaminaPercent => self.stamina_percent,
            StatField::Weight => self.weight,
            StatField::WeightPercent => self.weight_percent,
            StatField::WeightThreshold => self.weight_threshold,
            StatField::Resistance(kind) => match kind {
                Fire => self.fire_resistance,
                Blight => self.blight_resistance,
                Shock => self.shock_resistance,
                Bleed => self.bleed_resistance,
                Toxin => self.toxin_resistance,
            },
            StatField::ResistancePercent(kind) => match kind {
                Fire => self.fire_resistance_percent,
                Blight => self.blight_resistance_percent,
                Shock => self.shock_resistance_percent,
                Bleed => self.bleed_resistance_percent,
                Toxin => self.toxin_resistance_percent,
            },
        }
    }

    /// Mutable access used by builders and fixtures.
    pub fn slot_mut(&mut self, field: StatField) -> &mut Option<f64> {
        use ResistanceKind::*;
        match field {
            StatField::Armor => &mut self.armor,
            StatField::ArmorPercent => &mut self.armor_percent,
            StatField::Health => &mut self.health,
            StatField::HealthPercent => &mut self.health_percent,
            StatField::HealthCap => &mut self.health_cap,
            StatField::Stamina => &mut self.stamina,
            StatField::StaminaPercent => &mut self.stamina_percent,
            StatField::Weight => &mut self.weight,
            StatField::WeightPercent => &mut self.weight_percent,
            StatField::WeightThreshold => &mut self.weight_threshold,
            StatField::Resistance(kind) => match kind {
                Fire => &mut self.fire_resistance,
                Blight => &mut self.blight_resistance,
                Shock => &mut self.shock_resistance,
                Bleed => &mut self.bleed_resistance,
                Toxin => &mut self.toxin_resistance,
            },
            StatField::ResistancePercent(kind) => match kind {
                Fire => &mut self.fire_resistance_percent,
                Blight => &mut self.blight_resistance_percent,
                Shock => &mut self.shock_resistance_percent,
                Bleed => &mut self.bleed_resistance_percent,
                Toxin => &mut self.toxin_resistance_percent,
            },
        }
    }

    /// Sets a field (builder pattern).
    pub fn with(mut self, field: StatField, value: f64) -> Self {
        *self.slot_mut(field) = Some(value);
        self
    }

    /// Value of `field` if it qualifies as a contribution.
    pub fn contribution(&self, field: StatField) -> Option<f64> {
        contribution(self.get(field))
    }
}

/// Per-point contribution field carried only by traits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepField {
    ArmorStep,
    ArmorStepPercent,
    HealthStep,
    HealthStepPercent,
    StaminaStep,
    StaminaStepPercent,
}

/// Trait-only payload: step contributions and weight thresholds.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraitData {
    pub armor_step: Option<f64>,
    pub armor_step_percent: Option<f64>,
    pub health_step: Option<f64>,
    pub health_step_percent: Option<f64>,
    pub stamina_step: Option<f64>,
    pub stamina_step_percent: Option<f64>,
    /// Weight-capacity increase per point, indexed by point. Only the first
    /// entry feeds weight-class classification.
    pub weight_thresholds: Vec<f64>,
}

impl TraitData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self, field: StepField) -> Option<f64> {
        match field {
            StepField::ArmorStep => self.armor_step,
            StepField::ArmorStepPercent => self.armor_step_percent,
            StepField::HealthStep => self.health_step,
            StepField::HealthStepPercent => self.health_step_percent,
            StepField::StaminaStep => self.stamina_step,
            StepField::StaminaStepPercent => self.stamina_step_percent,
        }
    }

    /// Sets a step field (builder pattern).
    pub fn with_step(mut self, field: StepField, value: f64) -> Self {
        let slot = match field {
            StepField::ArmorStep => &mut self.armor_step,
            StepField::ArmorStepPercent => &mut self.armor_step_percent,
            StepField::HealthStep => &mut self.health_step,
            StepField::HealthStepPercent => &mut self.health_step_percent,
            StepField::StaminaStep => &mut self.stamina_step,
            StepField::StaminaStepPercent => &mut self.stamina_step_percent,
        };
        *slot = Some(value);
        self
    }

    pub fn with_weight_thresholds(mut self, thresholds: Vec<f64>) -> Self {
        self.weight_thresholds = thresholds;
        self
    }

    /// First per-point weight threshold, if any.
    pub fn first_weight_threshold(&self) -> Option<f64> {
        self.weight_thresholds.first().copied()
    }
}

/// Filters a raw field down to a qualifying contribution.
///
/// Absent, zero and NaN values never qualify.
#[inline]
pub fn contribution(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}
