//! Per-statistic formulas.
//!
//! Every statistic scans the build's stat sources independently and combines
//! qualifying fields with one of three stacking rules:
//!
//! ```text
//! Additive:   Σ field
//! Percentage: (1 + Σ percent)            // summed once, never chained
//! Step:       Σ step × amount            // traits only
//! ```
//!
//! These functions return full-precision values. Rounding happens once, in
//! [`super::StatsReport`].

use crate::build::BuildState;
use crate::config::{EngineConfig, WeightClassThresholds};
use crate::item::{Item, ResistanceKind, StatField, StepField};

use super::WeightClass;

/// Σ of a qualifying field across every stat source.
pub fn sum_field(build: &BuildState, field: StatField) -> f64 {
    build
        .items
        .stat_sources()
        .filter_map(|item| item.stats.contribution(field))
        .fold(0.0, |acc, value| acc + value)
}

/// Σ `step × amount` across equipped traits.
pub fn sum_step(build: &BuildState, field: StepField) -> f64 {
    build
        .items
        .traits()
        .values()
        .filter_map(|equipped| equipped.step_total(field))
        .fold(0.0, |acc, value| acc + value)
}

/// `armor = increase × (1 + percent + step_percent) + step`
pub fn total_armor(build: &BuildState) -> f64 {
    let increase = sum_field(build, StatField::Armor);
    let percent = sum_field(build, StatField::ArmorPercent);
    let step = sum_step(build, StepField::ArmorStep);
    let step_percent = sum_step(build, StepField::ArmorStepPercent);

    increase * (1.0 + percent + step_percent) + step
}

/// `health = (100 + increase + step) × (1 + percent + step_percent) × cap_reduction`
pub fn total_health(build: &BuildState) -> f64 {
    let increase = sum_field(build, StatField::Health);
    let percent = sum_field(build, StatField::HealthPercent);
    let step = sum_step(build, StepField::HealthStep);
    let step_percent = sum_step(build, StepField::HealthStepPercent);

    (EngineConfig::BASE_HEALTH + increase + step)
        * (1.0 + percent + step_percent)
        * health_cap_reduction(build)
}

/// `1 − lowest health cap`, or `1` when no equipped item declares a cap.
pub fn health_cap_reduction(build: &BuildState) -> f64 {
    let lowest = lowest_health_cap(build).and_then(|item| item.stats.health_cap);
    1.0 - lowest.unwrap_or(0.0)
}

/// Item with the numerically smallest health cap; the first one wins ties.
pub fn lowest_health_cap(build: &BuildState) -> Option<&Item> {
    build
        .items
        .stat_sources()
        .filter_map(|item| {
            item.stats
                .contribution(StatField::HealthCap)
                .map(|cap| (item, cap))
        })
        .fold(None, |lowest: Option<(&Item, f64)>, (item, cap)| match lowest {
            Some((_, best)) if best <= cap => lowest,
            _ => Some((item, cap)),
        })
        .map(|(item, _)| item)
}

/// `stamina = (100 + increase + step) × (1 + percent + step_percent)`
pub fn total_stamina(build: &BuildState) -> f64 {
    let increase = sum_field(build, StatField::Stamina);
    let percent = sum_field(build, StatField::StaminaPercent);
    let step = sum_step(build, StepField::StaminaStep);
    let step_percent = sum_step(build, StepField::StaminaStepPercent);

    (EngineConfig::BASE_STAMINA + increase + step) * (1.0 + percent + step_percent)
}

/// `weight = increase × (1 + percent)`
pub fn total_weight(build: &BuildState) -> f64 {
    let increase = sum_field(build, StatField::Weight);
    let percent = sum_field(build, StatField::WeightPercent);

    increase * (1.0 + percent)
}

/// `resistance = total + total × percent`, never rounded.
pub fn total_resistance(build: &BuildState, kind: ResistanceKind) -> f64 {
    let total = sum_field(build, StatField::Resistance(kind));
    let percent = sum_field(build, StatField::ResistancePercent(kind));

    total + total * percent
}

/// Weight left after item and trait thresholds are subtracted.
///
/// Starts from the two-decimal total weight, the same figure the report
/// shows.
pub fn net_weight(build: &BuildState) -> f64 {
    let weight = super::round2(total_weight(build));
    let item_thresholds = sum_field(build, StatField::WeightThreshold);
    let trait_thresholds = build
        .items
        .traits()
        .values()
        .filter_map(|equipped| equipped.weight_threshold_total())
        .filter(|value| !value.is_nan())
        .fold(0.0, |acc, value| acc + value);

    weight - (item_thresholds + trait_thresholds)
}

pub fn weight_class(build: &BuildState, thresholds: &WeightClassThresholds) -> WeightClass {
    WeightClass::classify(net_weight(build), thresholds)
}
