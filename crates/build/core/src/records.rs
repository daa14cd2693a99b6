//! Flat row form of a build, as kept by the storage layer.
//!
//! Storage keeps one row per equipped item. Sequence rows remember their slot
//! index and trait rows their amount, so a build survives the round trip
//! with positions intact.

use crate::build::{BuildState, CategorySlots, EquippedTrait, TraitAmount};
use crate::env::CatalogOracle;
use crate::item::ItemCategory;

use strum::IntoEnumIterator;

/// One persisted equipped item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildItemRecord {
    pub item_id: String,
    pub category: ItemCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub index: Option<usize>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub amount: Option<u8>,
}

impl BuildItemRecord {
    pub fn new(item_id: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            item_id: item_id.into(),
            category,
            index: None,
            amount: None,
        }
    }

    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_amount(mut self, amount: u8) -> Self {
        self.amount = Some(amount);
        self
    }
}

/// Flattens a build into rows, in canonical category order.
pub fn to_records(build: &BuildState) -> Vec<BuildItemRecord> {
    let mut records = Vec::new();
    for category in ItemCategory::iter() {
        match build.items.slots(category) {
            CategorySlots::Singleton(item) => {
                records.extend(item.map(|item| BuildItemRecord::new(&item.id, category)));
            }
            CategorySlots::Sequence(arena) => {
                records.extend(
                    arena
                        .occupied()
                        .map(|(index, item)| BuildItemRecord::new(&item.id, category).at(index)),
                );
            }
            CategorySlots::Traits(arena) => {
                records.extend(arena.occupied().map(|(index, equipped)| {
                    BuildItemRecord::new(&equipped.item.id, category)
                        .at(index)
                        .with_amount(equipped.amount.get())
                }));
            }
        }
    }
    records
}

/// Rebuilds a build from rows.
///
/// Rows with an unknown id, or whose catalog category differs from the
/// row's, are skipped. Indexed rows land at their index, the rest are
/// appended.
pub fn from_records<C, I>(catalog: &C, name: impl Into<String>, records: I) -> BuildState
where
    C: CatalogOracle + ?Sized,
    I: IntoIterator<Item = BuildItemRecord>,
{
    let mut build = BuildState::named(name);

    for record in records {
        let Some(item) = catalog.item_in(record.category, &record.item_id) else {
            tracing::debug!(
                "record {} '{}' skipped: not in catalog",
                record.category,
                record.item_id
            );
            continue;
        };

        let placed = if record.category == ItemCategory::Trait {
            let amount = record
                .amount
                .map(|amount| TraitAmount::clamped(i64::from(amount)))
                .unwrap_or(TraitAmount::DECODE_DEFAULT);
            let traits = build.items.traits_mut();
            let equipped = EquippedTrait::new(item, amount);
            match record.index {
                Some(index) => traits.set(index, Some(equipped)).map(|_| ()),
                None => traits.push(equipped).map(|_| ()),
            }
        } else if let Some(slot) = build.items.singleton_mut(record.category) {
            *slot = Some(item);
            Ok(())
        } else if let Some(arena) = build.items.sequence_mut(record.category) {
            match record.index {
                Some(index) => arena.set(index, Some(item)).map(|_| ()),
                None => arena.push(item).map(|_| ()),
            }
        } else {
            Ok(())
        };

        if let Err(err) = placed {
            tracing::debug!("record '{}' not placed: {}", record.item_id, err);
        }
    }
    build
}
