//! # Attesta Core
//!
//! Pure primitives for the Attesta registry: identities, digests, transcript
//! records, and versioned derivation logic.
//!
//! This crate contains no I/O and no storage. It is pure computation over
//! strongly typed values.
//!
//! ## Key Types
//!
//! - [`Identity`] - Opaque 32-byte caller identity
//! - [`SubjectHash`] / [`ContentHash`] - Blake3 digests
//! - [`TranscriptRecord`] - The atomic unit the registry stores
//! - [`RegistryLogic`] - Pluggable, versioned derivation logic
//! - [`ImplementationSwitch`] - The shared slot all tenant stores read
//!
//! ## Ownership by hash
//!
//! A record's subject is identified only by a digest. Ownership is proven
//! by presenting an identity whose derived digest matches the stored one;
//! the registry never learns the subject's real identity otherwise.

pub mod audit;
pub mod crypto;
pub mod error;
pub mod logic;
pub mod record;
pub mod time;
pub mod types;

pub use audit::{AuditEntry, AuditLog};
pub use crypto::{ContentHash, Identity, Keypair, SubjectHash};
pub use error::{SwitchError, ViolationKind};
pub use logic::{ImplementationSwitch, RegistryLogic, StandardLogic};
pub use record::TranscriptRecord;
pub use time::{Clock, SystemClock};
pub use types::{RecordId, RecordStatus, TenantId};
