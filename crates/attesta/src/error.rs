//! Error types for the tenant directory.

use thiserror::Error;

use attesta_core::{SwitchError, TenantId, ViolationKind};
use attesta_store::StoreError;

/// Errors that can occur during directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The tenant name is empty.
    #[error("tenant name must be non-empty")]
    EmptyName,

    /// The issuing authority is the reserved zero identity.
    #[error("issuing authority must be non-zero")]
    ZeroIssuingAuthority,

    /// No tenant exists with this id.
    #[error("tenant not found: {0}")]
    TenantNotFound(TenantId),

    /// The tenant is already active.
    #[error("tenant {0} is already active")]
    TenantAlreadyActive(TenantId),

    /// The tenant is already inactive.
    #[error("tenant {0} is already inactive")]
    TenantAlreadyInactive(TenantId),

    /// The caller is not the tenant's platform admin.
    #[error("caller is not the platform admin")]
    NotAdmin,

    /// The caller is not the directory operator.
    #[error("caller is not the directory operator")]
    NotOperator,

    /// Pagination offset points past the tenant arena.
    #[error("offset {offset} is out of range for {total} tenants")]
    OffsetOutOfRange { offset: usize, total: usize },

    /// An implementation upgrade was rejected.
    #[error("upgrade error: {0}")]
    Switch(#[from] SwitchError),

    /// A store-level failure surfaced through the directory.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl DirectoryError {
    /// Classify this error into the shared violation taxonomy.
    pub fn kind(&self) -> ViolationKind {
        match self {
            DirectoryError::EmptyName
            | DirectoryError::ZeroIssuingAuthority
            | DirectoryError::OffsetOutOfRange { .. } => ViolationKind::Precondition,
            DirectoryError::NotAdmin | DirectoryError::NotOperator => ViolationKind::Authorization,
            DirectoryError::TenantAlreadyActive(_) | DirectoryError::TenantAlreadyInactive(_) => {
                ViolationKind::Conflict
            }
            DirectoryError::TenantNotFound(_) => ViolationKind::NotFound,
            DirectoryError::Switch(e) => e.kind(),
            DirectoryError::Store(e) => e.kind(),
        }
    }
}

/// Result type for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
