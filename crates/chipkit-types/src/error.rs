//! Error types for chip construction.

use thiserror::Error;

/// Result alias for chip operations.
pub type ChipResult<T> = Result<T, ChipError>;

/// Primary error type for chip construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChipError {
    /// An input failed validation; no chip was produced.
    #[error("{message}")]
    InvalidArgument {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable error description.
        message: String,
    },
}

impl ChipError {
    pub(crate) fn invalid_label() -> Self {
        Self::InvalidArgument {
            field: "label",
            message: "Incorrect value for label".to_string(),
        }
    }

    /// Name of the field that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidArgument { field, .. } => *field,
        }
    }
}
