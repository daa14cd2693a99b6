//! Deterministic build resolution and derived-stat aggregation.
//!
//! `build-core` defines the canonical rules for a character build: the item
//! model, the link resolver that auto-equips bound items, the stat
//! aggregator, and the query-string codec that is the only external wire
//! format. Every API here is pure and synchronous; the item catalog is
//! injected through [`env::CatalogOracle`] and never held globally.
//!
//! ```text
//! query string → [codec::decode] → BuildState → [resolve] → BuildState → [stats::aggregate] → StatsReport
//! ```
//!
//! [`engine::BuildEngine`] bundles those steps for callers that want the
//! whole pipeline at once.
pub mod build;
pub mod codec;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod item;
pub mod records;
pub mod resolve;
pub mod stats;

pub use build::{
    BuildItems, BuildState, CategorySlots, EquippedTrait, SlotArray, SlotError, TraitAmount,
};
pub use codec::{DecodeError, NAME_KEY, decode_pairs, decode_query, encode, encode_pairs};
pub use config::{EngineConfig, WeightClassThresholds};
pub use engine::{BuildEngine, Evaluation};
pub use env::{CatalogOracle, CatalogSnapshot, OracleError};
pub use error::{BuildError, ErrorSeverity};
pub use item::{
    ArmorSlot, Item, ItemCategory, ItemKind, LinkedItem, ResistanceKind, SlotLayout,
    StatContributions, StatField, StepField, TraitData,
};
pub use records::{BuildItemRecord, from_records, to_records};
pub use resolve::{link_archetypes_to_traits, link_weapons_to_mods, resolve};
pub use stats::{Resistances, StatsReport, WeightClass, aggregate};
