//! Error types for the access ledger.

use thiserror::Error;

use attesta_core::ViolationKind;

/// Errors that can occur during grant operations.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The caller's derived subject hash does not match the record's.
    #[error("caller is not the record's subject")]
    NotSubject,

    /// The verifier identity is the reserved zero value.
    #[error("verifier identity must be non-zero")]
    ZeroVerifier,

    /// The requested grant duration is outside `(0, 365 days]`.
    #[error("grant duration {0}ms is out of range")]
    DurationOutOfRange(i64),

    /// No active grant exists for this verifier.
    #[error("no active grant for verifier")]
    NoActiveGrant,
}

impl AccessError {
    /// Classify this error into the shared violation taxonomy.
    pub fn kind(&self) -> ViolationKind {
        match self {
            AccessError::NotSubject => ViolationKind::Authorization,
            AccessError::ZeroVerifier | AccessError::DurationOutOfRange(_) => {
                ViolationKind::Precondition
            }
            AccessError::NoActiveGrant => ViolationKind::NotFound,
        }
    }
}

/// Result type for access operations.
pub type Result<T> = std::result::Result<T, AccessError>;
