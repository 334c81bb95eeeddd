//! Test fixtures and helpers.
//!
//! Common setup code for integration and property tests: seeded identities,
//! a manual clock, a pre-wired directory, and substitute logic versions.

use std::sync::Arc;

use attesta::TenantDirectory;
use attesta_core::{
    ContentHash, Identity, Keypair, RecordId, RegistryLogic, StandardLogic, SubjectHash, TenantId,
};
use attesta_store::RecordStore;

use crate::clock::ManualClock;

/// A fixture with seeded identities, a manual clock, and a directory.
///
/// Every identity is derived from a fixed seed, so record ids and subject
/// hashes are reproducible across runs.
pub struct RegistryFixture {
    pub directory: TenantDirectory,
    pub clock: Arc<ManualClock>,
    pub operator: Keypair,
    pub admin: Keypair,
    pub issuer: Keypair,
    pub student: Keypair,
    pub verifier: Keypair,
}

impl RegistryFixture {
    /// Create a fixture running [`StandardLogic::V1`].
    pub fn new() -> Self {
        Self::with_logic(Arc::new(StandardLogic::V1))
    }

    /// Create a fixture with substitute logic installed from the start.
    pub fn with_logic(logic: Arc<dyn RegistryLogic>) -> Self {
        let clock = ManualClock::default_epoch();
        let operator = Keypair::from_seed(&[0xa1; 32]);
        let directory = TenantDirectory::with_parts(operator.identity(), logic, clock.clone());
        Self {
            directory,
            clock,
            operator,
            admin: Keypair::from_seed(&[0xa2; 32]),
            issuer: Keypair::from_seed(&[0xa3; 32]),
            student: Keypair::from_seed(&[0xa4; 32]),
            verifier: Keypair::from_seed(&[0xa5; 32]),
        }
    }

    /// Create a tenant administered by the fixture's admin and issued to by
    /// the fixture's issuer.
    pub fn create_tenant(&self, name: &str) -> (TenantId, Arc<RecordStore>) {
        self.directory
            .create_tenant(&self.admin.identity(), name, self.issuer.identity())
            .expect("fixture tenant creation should succeed")
    }

    /// The fixture student's subject hash.
    pub fn student_hash(&self) -> SubjectHash {
        self.subject_hash(&self.student.identity())
    }

    /// Derive a subject hash for any identity.
    ///
    /// Uses [`StandardLogic`]'s derivation, which is identical across
    /// versions; fixtures rely on that when a test upgrades mid-way.
    pub fn subject_hash(&self, identity: &Identity) -> SubjectHash {
        StandardLogic::V1.derive_subject_hash(identity)
    }

    /// Register a record for the fixture student in the given store.
    pub fn register(&self, store: &RecordStore, metadata_ref: &str, content: &[u8]) -> RecordId {
        store
            .register(
                &self.issuer.identity(),
                self.student_hash(),
                metadata_ref,
                ContentHash::hash(content),
            )
            .expect("fixture registration should succeed")
    }
}

impl Default for RegistryFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Logic that derives every record id to the same constant.
///
/// Installing this forces the second registration in any store to collide,
/// which is the only way to exercise the fatal-collision path.
#[derive(Debug, Clone, Copy)]
pub struct FixedIdLogic {
    version: u32,
    id: [u8; 32],
}

impl FixedIdLogic {
    /// Create colliding logic reporting the given version.
    pub const fn new(version: u32, id: [u8; 32]) -> Self {
        Self { version, id }
    }
}

impl RegistryLogic for FixedIdLogic {
    fn version(&self) -> u32 {
        self.version
    }

    fn derive_subject_hash(&self, identity: &Identity) -> SubjectHash {
        StandardLogic::V1.derive_subject_hash(identity)
    }

    fn derive_record_id(
        &self,
        _subject_hash: &SubjectHash,
        _content_hash: &ContentHash,
        _issued_at: i64,
        _sequence: u64,
    ) -> RecordId {
        RecordId::from_bytes(self.id)
    }
}
