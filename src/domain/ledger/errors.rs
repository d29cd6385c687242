//! Ledger-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, GroupId, PaymentId, ValidationError};

/// Errors raised by ledger operations.
///
/// Every variant leaves the ledger exactly as it was before the failing
/// operation started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Malformed or missing input.
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),

    #[error("Group not found: {0:?}")]
    GroupNameNotFound(String),

    #[error("Payment not found: {0}")]
    PaymentNotFound(PaymentId),

    /// A unique name is already taken.
    #[error("{kind} already exists: {name:?}")]
    Duplicate { kind: &'static str, name: String },

    /// I/O or constraint failure in the backing store.
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl LedgerError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        LedgerError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn duplicate_group(name: impl Into<String>) -> Self {
        LedgerError::Duplicate {
            kind: "Group",
            name: name.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        LedgerError::Storage(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LedgerError::Validation { .. } => ErrorCode::ValidationFailed,
            LedgerError::GroupNotFound(_) | LedgerError::GroupNameNotFound(_) => {
                ErrorCode::GroupNotFound
            }
            LedgerError::PaymentNotFound(_) => ErrorCode::PaymentNotFound,
            LedgerError::Duplicate { .. } => ErrorCode::DuplicateName,
            LedgerError::Storage(_) => ErrorCode::StorageError,
        }
    }

    /// True for errors caused by the caller rather than the store.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, LedgerError::Storage(_))
    }
}

impl From<ValidationError> for LedgerError {
    fn from(err: ValidationError) -> Self {
        LedgerError::Validation {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
