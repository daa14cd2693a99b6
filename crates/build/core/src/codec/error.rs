//! Decode failures.

use crate::error::{BuildError, ErrorSeverity};

/// Errors raised while decoding a query string.
///
/// Unknown ids are never errors; they decode to empty slots.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("unknown build category '{0}'")]
    UnknownCategory(String),
}

impl BuildError for DecodeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            DecodeError::UnknownCategory(_) => "DECODE_UNKNOWN_CATEGORY",
        }
    }
}
