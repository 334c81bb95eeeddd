//! # Attesta
//!
//! A tenant-isolated academic-transcript registry with time-bounded access
//! control and atomic multi-tenant implementation upgrade.
//!
//! ## Overview
//!
//! - **Tenants**: isolated institution-scoped partitions, each with its own
//!   record store, issuing authority, and platform admin
//! - **Records**: transcript digests plus an external metadata pointer;
//!   the file itself never enters the registry
//! - **Access**: the record's subject grants verifiers time-bounded access,
//!   proven by hash equality rather than a stored owner identity
//! - **Upgrade**: one shared implementation switch repoints every tenant in
//!   a single operation
//!
//! ## Usage
//!
//! ```rust
//! use attesta::{TenantDirectory, Keypair, StandardLogic, RegistryLogic, ContentHash};
//!
//! let operator = Keypair::generate();
//! let admin = Keypair::generate();
//! let issuer = Keypair::generate();
//! let student = Keypair::generate();
//!
//! let directory = TenantDirectory::new(operator.identity());
//! let (tenant_id, store) = directory
//!     .create_tenant(&admin.identity(), "Alpha University", issuer.identity())
//!     .unwrap();
//!
//! let subject_hash = StandardLogic::V1.derive_subject_hash(&student.identity());
//! let record_id = store
//!     .register(
//!         &issuer.identity(),
//!         subject_hash,
//!         "cid-1",
//!         ContentHash::hash(b"transcript bytes"),
//!     )
//!     .unwrap();
//!
//! assert_eq!(store.get_record(&record_id).unwrap().metadata_ref, "cid-1");
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `attesta::core` - Core primitives (Identity, TranscriptRecord, etc.)
//! - `attesta::access` - Access grants and the per-record ledger
//! - `attesta::store` - The per-tenant record store

pub mod directory;
pub mod error;

// Re-export component crates
pub use attesta_access as access;
pub use attesta_core as core;
pub use attesta_store as store;

// Re-export main types for convenience
pub use directory::{DirectoryStats, Tenant, TenantDirectory};
pub use error::{DirectoryError, Result};

// Re-export commonly used component types
pub use attesta_access::{AccessError, AccessGrant, AccessLedger, MAX_GRANT_DURATION_MS};
pub use attesta_core::{
    AuditEntry, AuditLog, Clock, ContentHash, Identity, ImplementationSwitch, Keypair, RecordId,
    RecordStatus, RegistryLogic, StandardLogic, SubjectHash, SwitchError, SystemClock, TenantId,
    TranscriptRecord, ViolationKind,
};
pub use attesta_store::{RecordStore, StoreError, StoreStats};
