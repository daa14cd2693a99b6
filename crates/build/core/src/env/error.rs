//! Catalog errors.
//!
//! Errors raised while assembling a catalog. Lookups never fail; these only
//! surface when loading or registering records.

use crate::error::{BuildError, ErrorSeverity};

/// Errors that occur when building a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Two records share the same id.
    #[error("duplicate item id '{0}'")]
    DuplicateItemId(String),

    /// An item's link points at an invalid category.
    #[error("item '{id}' links to its own category {category}")]
    SelfLink { id: String, category: String },
}

impl BuildError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            DuplicateItemId(_) | SelfLink { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            DuplicateItemId(_) => "ORACLE_DUPLICATE_ITEM_ID",
            SelfLink { .. } => "ORACLE_SELF_LINK",
        }
    }
}
