//! Equipped traits and their point allocation.

use crate::item::{Item, StepField, TraitData, contribution};

/// Points allocated to a trait, always within `MIN..=MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TraitAmount(u8);

impl TraitAmount {
    pub const MIN: Self = Self(1);
    /// Also the amount an archetype forces on its linked trait.
    pub const MAX: Self = Self(10);
    /// Amount for a decoded or stored trait that names none.
    pub const DECODE_DEFAULT: Self = Self::MIN;

    /// Returns `None` outside `1..=10`.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Clamps any integer into range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

/// A freshly equipped trait starts fully allocated.
impl Default for TraitAmount {
    fn default() -> Self {
        Self::MAX
    }
}

/// A trait item together with its allocated points.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EquippedTrait {
    pub item: Item,
    pub amount: TraitAmount,
}

impl EquippedTrait {
    pub fn new(item: Item, amount: TraitAmount) -> Self {
        Self { item, amount }
    }

    pub fn data(&self) -> Option<&TraitData> {
        self.item.trait_data()
    }

    /// `step × amount` for a qualifying step field.
    pub fn step_total(&self, field: StepField) -> Option<f64> {
        let step = contribution(self.data()?.step(field))?;
        Some(step * self.amount.as_f64())
    }

    /// `first weight threshold × amount`, when the trait declares thresholds.
    pub fn weight_threshold_total(&self) -> Option<f64> {
        let first = self.data()?.first_weight_threshold()?;
        Some(first * self.amount.as_f64())
    }
}
