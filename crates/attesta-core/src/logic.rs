//! Versioned derivation logic and the shared implementation switch.
//!
//! Every tenant store holds a reference to one [`ImplementationSwitch`]
//! rather than its own copy of the logic. Swapping the slot repoints every
//! existing and future store in a single operation, with no per-tenant
//! migration step and no partial-upgrade state.

use std::sync::{Arc, RwLock};

use crate::crypto::{ContentHash, Identity, SubjectHash};
use crate::error::SwitchError;
use crate::types::RecordId;

/// Domain separator for subject-hash derivation.
pub const SUBJECT_DOMAIN: &[u8] = b"attesta.subject.v1";

/// Domain separator for record-id derivation.
pub const RECORD_ID_DOMAIN: &[u8] = b"attesta.record-id.v1";

/// The pluggable derivation logic shared by all tenant stores.
///
/// Ownership of a record is proven by hash equality: a caller is the
/// record's subject iff `derive_subject_hash(caller)` equals the stored
/// subject hash. Both derivations must be pure functions of their inputs.
pub trait RegistryLogic: Send + Sync {
    /// Monotonic version number reported by every store using this logic.
    fn version(&self) -> u32;

    /// Derive the privacy-preserving subject digest for an identity.
    fn derive_subject_hash(&self, identity: &Identity) -> SubjectHash;

    /// Derive a record identifier from the registration inputs and the
    /// store's registration counter at creation time.
    fn derive_record_id(
        &self,
        subject_hash: &SubjectHash,
        content_hash: &ContentHash,
        issued_at: i64,
        sequence: u64,
    ) -> RecordId;
}

/// The production derivation logic: domain-separated Blake3.
#[derive(Debug, Clone, Copy)]
pub struct StandardLogic {
    version: u32,
}

impl StandardLogic {
    /// Create logic reporting the given version number.
    ///
    /// The derivations are identical across versions; the number exists so
    /// an upgrade is observable. A real revision would ship a new type.
    pub const fn new(version: u32) -> Self {
        Self { version }
    }

    /// The initial logic version.
    pub const V1: Self = Self::new(1);
}

impl RegistryLogic for StandardLogic {
    fn version(&self) -> u32 {
        self.version
    }

    fn derive_subject_hash(&self, identity: &Identity) -> SubjectHash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(SUBJECT_DOMAIN);
        hasher.update(identity.as_bytes());
        SubjectHash(*hasher.finalize().as_bytes())
    }

    fn derive_record_id(
        &self,
        subject_hash: &SubjectHash,
        content_hash: &ContentHash,
        issued_at: i64,
        sequence: u64,
    ) -> RecordId {
        let mut hasher = blake3::Hasher::new();
        hasher.update(RECORD_ID_DOMAIN);
        hasher.update(subject_hash.as_bytes());
        hasher.update(content_hash.as_bytes());
        hasher.update(&issued_at.to_be_bytes());
        hasher.update(&sequence.to_be_bytes());
        RecordId(*hasher.finalize().as_bytes())
    }
}

/// The single shared slot holding the current [`RegistryLogic`].
///
/// Cloning the `Arc` around a switch shares the slot; all holders observe a
/// swap on their next read. The slot is never empty.
pub struct ImplementationSwitch {
    current: RwLock<Arc<dyn RegistryLogic>>,
}

impl ImplementationSwitch {
    /// Create a switch seeded with the given logic.
    pub fn new(initial: Arc<dyn RegistryLogic>) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// Get the current logic.
    pub fn current(&self) -> Arc<dyn RegistryLogic> {
        self.current.read().expect("switch lock poisoned").clone()
    }

    /// The version number of the current logic.
    pub fn version(&self) -> u32 {
        self.current().version()
    }

    /// Atomically repoint the slot to `new`.
    ///
    /// Rejects a swap to the version already installed; there is no
    /// downgrade guard beyond that, matching the upgrade authority's
    /// freedom to roll back.
    pub fn switch_to(&self, new: Arc<dyn RegistryLogic>) -> Result<(), SwitchError> {
        let mut slot = self.current.write().expect("switch lock poisoned");
        if slot.version() == new.version() {
            return Err(SwitchError::AlreadyCurrent(new.version()));
        }
        let from = slot.version();
        *slot = new;
        tracing::info!(from, to = slot.version(), "implementation switched");
        Ok(())
    }
}

impl Default for ImplementationSwitch {
    fn default() -> Self {
        Self::new(Arc::new(StandardLogic::V1))
    }
}

impl std::fmt::Debug for ImplementationSwitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImplementationSwitch")
            .field("version", &self.version())
            .finish()
    }
}
