//! Error types raised by build session edits.

use build_core::{BuildError, DecodeError, ErrorSeverity, ItemCategory, SlotError};
use thiserror::Error;

/// Errors surfaced by [`super::BuildSession`] mutations.
///
/// A failed edit leaves the session's build unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("item '{0}' not found in catalog")]
    UnknownItem(String),

    #[error("item '{id}' is {actual}, cannot equip as {expected}")]
    CategoryMismatch {
        id: String,
        expected: ItemCategory,
        actual: ItemCategory,
    },

    #[error("{category}: {source}")]
    Slot {
        category: ItemCategory,
        #[source]
        source: SlotError,
    },

    #[error("trait slot {0} is empty")]
    EmptyTraitSlot(usize),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl BuildError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SessionError::Slot { source, .. } => source.severity(),
            SessionError::Decode(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SessionError::UnknownItem(_) => "SESSION_UNKNOWN_ITEM",
            SessionError::CategoryMismatch { .. } => "SESSION_CATEGORY_MISMATCH",
            SessionError::Slot { source, .. } => source.error_code(),
            SessionError::EmptyTraitSlot(_) => "SESSION_EMPTY_TRAIT_SLOT",
            SessionError::Decode(err) => err.error_code(),
        }
    }
}
