//! Link resolution: derives implicit equips from explicit ones.
//!
//! Two independent passes run in a fixed order:
//!
//! 1. [`link_weapons_to_mods`]: weapon slot *i* writes its bound mod into
//!    mod slot *i*, then mod slot *i* writes its bound weapon into weapon
//!    slot *i*. Either direction may overwrite the other at the same index;
//!    there is no precedence rule beyond pass order.
//! 2. [`link_archetypes_to_traits`]: each archetype's bound trait is raised
//!    to the maximum amount, or appended at the maximum amount when absent.
//!
//! The resolver only adds or boosts. Unequipping a parent never removes the
//! item it pulled in. Unresolvable links (unknown name, wrong category) are
//! skipped and leave the slot untouched.

use crate::build::{BuildState, EquippedTrait, TraitAmount};
use crate::env::CatalogOracle;
use crate::item::{Item, ItemCategory, LinkedItem};

/// Runs both passes and returns the resolved build.
pub fn resolve<C>(catalog: &C, build: BuildState) -> BuildState
where
    C: CatalogOracle + ?Sized,
{
    let build = link_weapons_to_mods(catalog, build);
    link_archetypes_to_traits(catalog, build)
}

/// Weapon↔mod pass. Writes only to the same slot index it read from.
pub fn link_weapons_to_mods<C>(catalog: &C, mut build: BuildState) -> BuildState
where
    C: CatalogOracle + ?Sized,
{
    let linked_mods = linked_at_each_index(catalog, &build, ItemCategory::Weapon, ItemCategory::Mod);
    if let Some(mods) = build.items.sequence_mut(ItemCategory::Mod) {
        for (index, item) in linked_mods {
            if let Err(err) = mods.set(index, Some(item)) {
                tracing::debug!("weapon link at slot {} not applied: {}", index, err);
            }
        }
    }

    let linked_weapons =
        linked_at_each_index(catalog, &build, ItemCategory::Mod, ItemCategory::Weapon);
    if let Some(weapons) = build.items.sequence_mut(ItemCategory::Weapon) {
        for (index, item) in linked_weapons {
            if let Err(err) = weapons.set(index, Some(item)) {
                tracing::debug!("mod link at slot {} not applied: {}", index, err);
            }
        }
    }

    build
}

/// Archetype→trait pass, iterated in archetype slot order.
pub fn link_archetypes_to_traits<C>(catalog: &C, mut build: BuildState) -> BuildState
where
    C: CatalogOracle + ?Sized,
{
    let linked_traits: Vec<Item> = build
        .items
        .archetypes()
        .values()
        .filter_map(|archetype| archetype.linked_to(ItemCategory::Trait))
        .filter_map(|link| lookup_link(catalog, link))
        .collect();

    let traits = build.items.traits_mut();
    for trait_item in linked_traits {
        let existing = traits
            .occupied_mut()
            .find(|(_, equipped)| equipped.item.name == trait_item.name);

        match existing {
            Some((_, equipped)) => equipped.amount = TraitAmount::MAX,
            None => {
                let name = trait_item.name.clone();
                if let Err(err) = traits.push(EquippedTrait::new(trait_item, TraitAmount::MAX)) {
                    tracing::debug!("archetype trait '{}' not added: {}", name, err);
                }
            }
        }
    }

    build
}

/// Collects `(index, linked item)` for every slot of `source` whose item
/// links into `target`.
fn linked_at_each_index<C>(
    catalog: &C,
    build: &BuildState,
    source: ItemCategory,
    target: ItemCategory,
) -> Vec<(usize, Item)>
where
    C: CatalogOracle + ?Sized,
{
    let Some(arena) = build.items.sequence(source) else {
        return Vec::new();
    };
    arena
        .occupied()
        .filter_map(|(index, item)| {
            let link = item.linked_to(target)?;
            lookup_link(catalog, link).map(|linked| (index, linked))
        })
        .collect()
}

/// Resolves a link strictly: the catalog record must carry the linked
/// category.
fn lookup_link<C>(catalog: &C, link: &LinkedItem) -> Option<Item>
where
    C: CatalogOracle + ?Sized,
{
    match catalog.item_by_name(link.category, &link.name) {
        Some(item) if item.category() == link.category => Some(item),
        Some(item) => {
            tracing::debug!(
                "linked item '{}' resolved to category {}, expected {}",
                link.name,
                item.category(),
                link.category
            );
            None
        }
        None => {
            tracing::debug!("linked {} '{}' not found in catalog", link.category, link.name);
            None
        }
    }
}
