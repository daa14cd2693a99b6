//! Query-string codec.
//!
//! The query string is the only wire format a build crosses. Keys are the
//! lowercase category names plus `name`:
//!
//! ```text
//! ?name=Tank&helm=ironclad_helm&weapon=wrangler,,sorrow&trait=vigor;3,ammo_reserves;10
//! ```
//!
//! - singleton values are a bare id
//! - sequence values are comma-joined ids; an empty segment keeps its
//!   position so weapon slot *i* still lines up with mod slot *i*
//! - trait entries are `id;amount`, the amount defaulting to 1
//!
//! An unknown id decodes to an empty slot. An unknown key fails the whole
//! decode before any slot is filled.
mod error;

pub use error::DecodeError;

use std::collections::HashSet;
use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::build::{BuildState, CategorySlots, EquippedTrait, SlotArray, TraitAmount};
use crate::config::EngineConfig;
use crate::env::CatalogOracle;
use crate::item::{Item, ItemCategory};

/// Query key carrying the build's display name.
pub const NAME_KEY: &str = "name";

const LIST_SEPARATOR: char = ',';
const AMOUNT_SEPARATOR: char = ';';

/// Decodes a raw `a=b&c=d` query string. A leading `?` is accepted.
pub fn decode_query<C>(catalog: &C, query: &str) -> Result<BuildState, DecodeError>
where
    C: CatalogOracle + ?Sized,
{
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        })
        .collect();

    decode_pairs(catalog, pairs)
}

/// Decodes already-split key/value pairs. The first occurrence of a key wins.
pub fn decode_pairs<C, I, K, V>(catalog: &C, pairs: I) -> Result<BuildState, DecodeError>
where
    C: CatalogOracle + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut name = None;
    let mut fields = Vec::new();
    let mut seen = HashSet::new();

    // Validate every key before touching the build.
    for (key, value) in pairs {
        let key = key.as_ref();
        if !seen.insert(key.to_owned()) {
            continue;
        }
        if key == NAME_KEY {
            name = Some(value.as_ref().to_owned());
            continue;
        }
        let category = ItemCategory::from_str(key)
            .map_err(|_| DecodeError::UnknownCategory(key.to_owned()))?;
        fields.push((category, value.as_ref().to_owned()));
    }

    let mut build =
        BuildState::named(name.unwrap_or_else(|| EngineConfig::DEFAULT_BUILD_NAME.to_owned()));
    for (category, value) in fields {
        decode_field(catalog, &mut build, category, &value);
    }
    Ok(build)
}

fn decode_field<C>(catalog: &C, build: &mut BuildState, category: ItemCategory, value: &str)
where
    C: CatalogOracle + ?Sized,
{
    if category == ItemCategory::Trait {
        let traits = decode_sequence(category, value, |segment| decode_trait(catalog, segment));
        if let Err(err) = build.items.replace_traits(traits) {
            tracing::debug!("trait slots not decoded: {}", err);
        }
    } else if category.is_singleton() {
        if let Some(slot) = build.items.singleton_mut(category) {
            *slot = lookup(catalog, category, value);
        }
    } else {
        let arena = decode_sequence(category, value, |id| lookup(catalog, category, id));
        if let Err(err) = build.items.replace_sequence(category, arena) {
            tracing::debug!("{} slots not decoded: {}", category, err);
        }
    }
}

/// Splits a comma list positionally into a fresh arena for `category`.
fn decode_sequence<T>(
    category: ItemCategory,
    value: &str,
    mut parse: impl FnMut(&str) -> Option<T>,
) -> SlotArray<T> {
    let capacity = category.slot_count();
    let mut arena = SlotArray::new(capacity);
    if value.is_empty() {
        return arena;
    }

    for (index, segment) in value.split(LIST_SEPARATOR).enumerate() {
        if index >= capacity {
            if !segment.is_empty() {
                tracing::debug!(
                    "{} position {} dropped: only {} slots",
                    category,
                    index,
                    capacity
                );
            }
            continue;
        }
        // Index is within capacity, so `set` cannot fail.
        let _ = arena.set(index, parse(segment));
    }
    arena
}

fn decode_trait<C>(catalog: &C, segment: &str) -> Option<EquippedTrait>
where
    C: CatalogOracle + ?Sized,
{
    let (id, amount) = match segment.split_once(AMOUNT_SEPARATOR) {
        Some((id, amount)) => (id, parse_amount(amount)),
        None => (segment, TraitAmount::DECODE_DEFAULT),
    };
    lookup(catalog, ItemCategory::Trait, id).map(|item| EquippedTrait::new(item, amount))
}

fn parse_amount(raw: &str) -> TraitAmount {
    raw.trim()
        .parse::<i64>()
        .map(TraitAmount::clamped)
        .unwrap_or(TraitAmount::DECODE_DEFAULT)
}

fn lookup<C>(catalog: &C, category: ItemCategory, id: &str) -> Option<Item>
where
    C: CatalogOracle + ?Sized,
{
    if id.is_empty() {
        return None;
    }
    let item = catalog.item_in(category, id);
    if item.is_none() {
        tracing::debug!("{} id '{}' not in catalog", category, id);
    }
    item
}

/// Projects a build onto query pairs: `name` first, then every non-empty
/// category in canonical order.
pub fn encode_pairs(build: &BuildState) -> Vec<(String, String)> {
    let mut pairs = vec![(NAME_KEY.to_owned(), build.name.clone())];

    for category in ItemCategory::iter() {
        let value = match build.items.slots(category) {
            CategorySlots::Singleton(item) => item.map(|item| item.id.clone()),
            CategorySlots::Sequence(arena) => {
                encode_sequence(arena, |item: &Item| item.id.clone())
            }
            CategorySlots::Traits(arena) => encode_sequence(arena, |equipped: &EquippedTrait| {
                format!(
                    "{}{}{}",
                    equipped.item.id,
                    AMOUNT_SEPARATOR,
                    equipped.amount.get()
                )
            }),
        };
        if let Some(value) = value {
            pairs.push((category.to_string(), value));
        }
    }
    pairs
}

/// Encodes a build as a percent-encoded query string without a leading `?`.
pub fn encode(build: &BuildState) -> String {
    encode_pairs(build)
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(&key),
                urlencoding::encode(&value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Joins positions up to the last occupied one; `None` for an empty arena.
fn encode_sequence<T>(arena: &SlotArray<T>, encode: impl Fn(&T) -> String) -> Option<String> {
    let last = arena.occupied().map(|(index, _)| index).last()?;
    let segments: Vec<String> = arena
        .iter()
        .take(last + 1)
        .map(|slot| slot.map(|value| encode(value)).unwrap_or_default())
        .collect();
    Some(segments.join(&LIST_SEPARATOR.to_string()))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => {
            String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::CatalogSnapshot;
    use crate::item::{ArmorSlot, ItemKind, TraitData};

    fn catalog() -> CatalogSnapshot {
        CatalogSnapshot::new(vec![
            Item::new("ironclad", "Ironclad Helm", ItemKind::Armor(ArmorSlot::Helm)),
            Item::new("wrangler", "Wrangler", ItemKind::Weapon),
            Item::new("sorrow", "Sorrow", ItemKind::Weapon),
            Item::new("hot_shot", "Hot Shot", ItemKind::Mod),
            Item::new("vigor", "Vigor", ItemKind::Trait(TraitData::new())),
            Item::new("endurance", "Endurance", ItemKind::Trait(TraitData::new())),
        ])
        .expect("valid fixture catalog")
    }

    fn ids(arena: &SlotArray<Item>) -> Vec<Option<&str>> {
        arena.iter().map(|slot| slot.map(|i| i.id.as_str())).collect()
    }

    #[test]
    fn empty_query_is_default_build() {
        let build = decode_query(&catalog(), "").unwrap();
        assert_eq!(build, BuildState::default());
        let build = decode_query(&catalog(), "?").unwrap();
        assert_eq!(build, BuildState::default());
    }

    #[test]
    fn sequence_keeps_empty_positions() {
        let build = decode_query(&catalog(), "weapon=wrangler,,sorrow").unwrap();
        assert_eq!(
            ids(build.items.weapons()),
            vec![Some("wrangler"), None, Some("sorrow")]
        );
    }

    #[test]
    fn unknown_and_mismatched_ids_are_absent() {
        let build = decode_query(&catalog(), "helm=nope&weapon=hot_shot,sorrow").unwrap();
        assert!(build.items.helm.is_none());
        assert_eq!(ids(build.items.weapons()), vec![None, Some("sorrow"), None]);
    }

    #[test]
    fn unknown_category_fails_whole_decode() {
        let err = decode_query(&catalog(), "helm=ironclad&gem=ruby").unwrap_err();
        assert_eq!(err, DecodeError::UnknownCategory("gem".into()));
    }

    #[test]
    fn trait_amounts_default_and_clamp() {
        let build = decode_query(&catalog(), "trait=vigor,endurance;42,missing;3").unwrap();
        let traits: Vec<_> = build
            .items
            .traits()
            .occupied()
            .map(|(i, t)| (i, t.item.id.as_str(), t.amount.get()))
            .collect();
        assert_eq!(traits, vec![(0, "vigor", 1), (1, "endurance", 10)]);

        let build = decode_query(&catalog(), "trait=vigor;x").unwrap();
        assert_eq!(build.items.traits().get(0).map(|t| t.amount), Some(TraitAmount::MIN));
    }

    #[test]
    fn positions_past_capacity_are_dropped() {
        let build = decode_query(&catalog(), "weapon=wrangler,sorrow,wrangler,sorrow").unwrap();
        assert_eq!(build.items.weapons().capacity(), 3);
        assert_eq!(build.items.weapons().occupied_count(), 3);
    }

    #[test]
    fn name_is_verbatim_and_first_key_wins() {
        let build = decode_query(&catalog(), "name=Glass+Cannon%21&name=Other").unwrap();
        assert_eq!(build.name, "Glass Cannon!");

        let build = decode_query(&catalog(), "name=").unwrap();
        assert_eq!(build.name, "");
    }

    #[test]
    fn encode_trims_and_orders() {
        let build =
            decode_query(&catalog(), "weapon=,sorrow,&trait=vigor;3&helm=ironclad&name=Tank")
                .unwrap();
        let pairs = encode_pairs(&build);
        assert_eq!(
            pairs,
            vec![
                ("name".to_owned(), "Tank".to_owned()),
                ("helm".to_owned(), "ironclad".to_owned()),
                ("weapon".to_owned(), ",sorrow".to_owned()),
                ("trait".to_owned(), "vigor;3".to_owned()),
            ]
        );
        assert_eq!(
            encode(&build),
            "name=Tank&helm=ironclad&weapon=%2Csorrow&trait=vigor%3B3"
        );
    }

    #[test]
    fn decode_encode_decode_is_stable() {
        let catalog = catalog();
        let query = "name=My%20Tank&helm=ironclad&weapon=wrangler,,sorrow&mod=hot_shot&trait=vigor;4,,endurance";
        let first = decode_query(&catalog, query).unwrap();
        let second = decode_query(&catalog, &encode(&first)).unwrap();
        assert_eq!(first, second);
    }
}
