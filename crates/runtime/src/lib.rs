//! Runtime services around the pure build engine.
//!
//! This crate owns the mutable side of build editing. Consumers load content
//! into an [`OracleManager`] and drive a [`BuildSession`], which re-runs link
//! resolution and stat aggregation from scratch after every edit.
//!
//! Modules are organized by responsibility:
//! - [`oracle`] provides catalog adapters over loaded content
//! - [`session`] hosts the build editor and its error type
pub mod oracle;
pub mod session;

pub use oracle::{CatalogOracleImpl, OracleManager};
pub use session::{BuildSession, SessionError};
