//! Item categories and their slot layout in a build.

use crate::config::EngineConfig;

/// Closed set of item categories.
///
/// The lowercase string form is also the query-string key for the category,
/// so parsing is case-sensitive: `Helm` is not a recognised key.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum ItemCategory {
    Helm,
    Torso,
    Legs,
    Gloves,
    Relic,
    Amulet,
    Weapon,
    Ring,
    Archetype,
    Skill,
    Concoction,
    Consumable,
    Mod,
    Mutator,
    RelicFragment,
    Trait,
}

/// How a category is laid out inside [`crate::BuildItems`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotLayout {
    /// At most one item.
    Singleton,
    /// Fixed-length positional sequence.
    Sequence { len: usize },
}

impl ItemCategory {
    pub fn layout(self) -> SlotLayout {
        use ItemCategory::*;
        match self {
            Helm | Torso | Legs | Gloves | Relic | Amulet => SlotLayout::Singleton,
            Weapon => SlotLayout::Sequence {
                len: EngineConfig::MAX_WEAPONS,
            },
            Ring => SlotLayout::Sequence {
                len: EngineConfig::MAX_RINGS,
            },
            Archetype => SlotLayout::Sequence {
                len: EngineConfig::MAX_ARCHETYPES,
            },
            Skill => SlotLayout::Sequence {
                len: EngineConfig::MAX_SKILLS,
            },
            Concoction => SlotLayout::Sequence {
                len: EngineConfig::MAX_CONCOCTIONS,
            },
            Consumable => SlotLayout::Sequence {
                len: EngineConfig::MAX_CONSUMABLES,
            },
            Mod => SlotLayout::Sequence {
                len: EngineConfig::MAX_MODS,
            },
            Mutator => SlotLayout::Sequence {
                len: EngineConfig::MAX_MUTATORS,
            },
            RelicFragment => SlotLayout::Sequence {
                len: EngineConfig::MAX_RELIC_FRAGMENTS,
            },
            Trait => SlotLayout::Sequence {
                len: EngineConfig::MAX_TRAITS,
            },
        }
    }

    pub fn is_singleton(self) -> bool {
        matches!(self.layout(), SlotLayout::Singleton)
    }

    /// Number of positional slots; singletons have one.
    pub fn slot_count(self) -> usize {
        match self.layout() {
            SlotLayout::Singleton => 1,
            SlotLayout::Sequence { len } => len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn keys_round_trip_through_strings() {
        for category in ItemCategory::iter() {
            let key = category.to_string();
            assert_eq!(ItemCategory::from_str(&key), Ok(category));
        }
        assert_eq!(ItemCategory::RelicFragment.as_ref(), "relicfragment");
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert!(ItemCategory::from_str("Helm").is_err());
        assert!(ItemCategory::from_str("archtype").is_err());
    }

    #[test]
    fn weapon_and_mod_sequences_align() {
        assert_eq!(
            ItemCategory::Weapon.slot_count(),
            ItemCategory::Mod.slot_count()
        );
        assert!(ItemCategory::Amulet.is_singleton());
        assert!(!ItemCategory::Trait.is_singleton());
    }
}
