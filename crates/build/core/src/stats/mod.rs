//! Derived-stat aggregation.
//!
//! [`aggregate`] turns a resolved [`BuildState`] into a [`StatsReport`].
//! Each statistic is computed independently by [`totals`]; the report is
//! the only place values are rounded.
//!
//! ## Rounding
//!
//! Armor, health, stamina and weight are rounded to two decimals at the
//! output boundary. Resistances are reported unrounded.

pub mod totals;

pub use totals::{
    health_cap_reduction, lowest_health_cap, net_weight, sum_field, sum_step, total_armor,
    total_health, total_resistance, total_stamina, total_weight, weight_class,
};

use crate::build::BuildState;
use crate::config::WeightClassThresholds;
use crate::item::ResistanceKind;

/// Mobility tier derived from net equipped weight.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[strum(serialize_all = "UPPERCASE")]
pub enum WeightClass {
    Light,
    Medium,
    Heavy,
    Ultra,
}

impl WeightClass {
    /// Ascending first-match classification. A weight equal to a bound
    /// stays in the lower class.
    pub fn classify(weight: f64, thresholds: &WeightClassThresholds) -> Self {
        let mut class = WeightClass::Light;
        if weight > thresholds.light {
            class = WeightClass::Medium;
        }
        if weight > thresholds.medium {
            class = WeightClass::Heavy;
        }
        if weight > thresholds.heavy {
            class = WeightClass::Ultra;
        }
        class
    }
}

/// Per-resistance totals.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resistances {
    pub fire: f64,
    pub blight: f64,
    pub shock: f64,
    pub bleed: f64,
    pub toxin: f64,
}

impl Resistances {
    pub fn get(&self, kind: ResistanceKind) -> f64 {
        match kind {
            ResistanceKind::Fire => self.fire,
            ResistanceKind::Blight => self.blight,
            ResistanceKind::Shock => self.shock,
            ResistanceKind::Bleed => self.bleed,
            ResistanceKind::Toxin => self.toxin,
        }
    }
}

/// Output-only derived statistics for one build.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsReport {
    pub armor: f64,
    pub health: f64,
    pub stamina: f64,
    pub weight: f64,
    pub resistances: Resistances,
    pub weight_class: WeightClass,
}

/// Computes every derived statistic from a resolved build.
pub fn aggregate(build: &BuildState, thresholds: &WeightClassThresholds) -> StatsReport {
    let resistance = |kind| total_resistance(build, kind);
    StatsReport {
        armor: round2(total_armor(build)),
        health: round2(total_health(build)),
        stamina: round2(total_stamina(build)),
        weight: round2(total_weight(build)),
        resistances: Resistances {
            fire: resistance(ResistanceKind::Fire),
            blight: resistance(ResistanceKind::Blight),
            shock: resistance(ResistanceKind::Shock),
            bleed: resistance(ResistanceKind::Bleed),
            toxin: resistance(ResistanceKind::Toxin),
        },
        weight_class: weight_class(build, thresholds),
    }
}

/// Rounds to two decimals using the exact decimal value of `value`.
///
/// `12.075` is stored as `12.07499…` and rounds down. Exact ties, which
/// only occur for multiples of `1/8`, round half away from zero.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scaled = value * 100.0;
    if (value * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        return scaled.round() / 100.0;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}
