//! Error types for the record store.

use thiserror::Error;

use attesta_access::AccessError;
use attesta_core::{RecordId, RecordStatus, ViolationKind};

/// Errors that can occur during record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The caller is not the tenant's issuing authority.
    #[error("caller is not the issuing authority")]
    NotIssuer,

    /// The caller is not the tenant's platform admin.
    #[error("caller is not the platform admin")]
    NotAdmin,

    /// The store is deactivated and the operation requires it active.
    #[error("record store is inactive")]
    StoreInactive,

    /// The subject hash is the zero sentinel.
    #[error("subject hash must be non-zero")]
    ZeroSubjectHash,

    /// The content hash is the zero sentinel.
    #[error("content hash must be non-zero")]
    ZeroContentHash,

    /// The metadata reference is empty.
    #[error("metadata reference must be non-empty")]
    EmptyMetadataRef,

    /// No record exists with this id.
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),

    /// Derivation produced an id that already exists.
    ///
    /// This implies a derivation weakness or counter corruption and is
    /// never retried.
    #[error("record id collision: {0}")]
    RecordIdCollision(RecordId),

    /// The record already has the requested status.
    #[error("record already has status {0}")]
    SameStatus(RecordStatus),

    /// The store's active flag already has the requested value.
    #[error("store active flag is already {0}")]
    ActiveUnchanged(bool),

    /// The caller holds no live grant for the record.
    #[error("no live access grant for caller")]
    NoLiveGrant,

    /// A grant operation was rejected by the access ledger.
    #[error("access error: {0}")]
    Access(#[from] AccessError),
}

impl StoreError {
    /// Classify this error into the shared violation taxonomy.
    pub fn kind(&self) -> ViolationKind {
        match self {
            StoreError::NotIssuer | StoreError::NotAdmin | StoreError::NoLiveGrant => {
                ViolationKind::Authorization
            }
            StoreError::ZeroSubjectHash
            | StoreError::ZeroContentHash
            | StoreError::EmptyMetadataRef => ViolationKind::Precondition,
            StoreError::StoreInactive
            | StoreError::RecordIdCollision(_)
            | StoreError::SameStatus(_)
            | StoreError::ActiveUnchanged(_) => ViolationKind::Conflict,
            StoreError::RecordNotFound(_) => ViolationKind::NotFound,
            StoreError::Access(e) => e.kind(),
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
