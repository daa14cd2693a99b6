//! Data-driven catalog and configuration loaders.
//!
//! This crate reads the files a deployment ships alongside the engine:
//! - the item catalog (RON)
//! - engine configuration (TOML)
//!
//! Content is handed to runtime oracles and never appears inside a
//! `BuildState` except as copied item records.
//!
//! All loaders deserialize build-core types directly through serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, LoadResult};
