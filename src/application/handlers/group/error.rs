//! Errors returned by the group handlers.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

/// Group handler failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    #[error("Selection is incomplete, missing: {}", .0.join(", "))]
    IncompleteSelection(Vec<&'static str>),

    #[error("Member {0} has already submitted; reopen the selection first")]
    AlreadyReady(UserId),

    #[error("Member not found: {0}")]
    MemberNotFound(UserId),

    #[error("Validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl GroupError {
    /// Error code shared with the domain error vocabulary.
    pub fn code(&self) -> ErrorCode {
        match self {
            GroupError::IncompleteSelection(_) => ErrorCode::IncompleteSelection,
            GroupError::AlreadyReady(_) => ErrorCode::InvalidStateTransition,
            GroupError::MemberNotFound(_) => ErrorCode::MemberNotFound,
            GroupError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            GroupError::Infrastructure(_) => ErrorCode::StoreUnavailable,
        }
    }
}

impl From<DomainError> for GroupError {
    fn from(err: DomainError) -> Self {
        GroupError::Infrastructure(err.to_string())
    }
}

impl From<ValidationError> for GroupError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::IncompleteSelection { missing } => {
                GroupError::IncompleteSelection(missing)
            }
            ValidationError::EmptyField { ref field }
            | ValidationError::OutOfRange { ref field, .. }
            | ValidationError::InvalidFormat { ref field, .. } => GroupError::ValidationFailed {
                field: field.clone(),
                message: err.to_string(),
            },
        }
    }
}
