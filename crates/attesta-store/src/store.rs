//! The per-tenant record store.
//!
//! One `RecordStore` exists per tenant and exclusively owns that tenant's
//! transcript records, their per-subject index, and one access ledger per
//! record. All state sits behind a single RwLock: mutations validate fully
//! under the write guard and commit construct-then-insert, so a failed
//! validation leaves state untouched. No lock is ever held across two
//! stores, which is what gives tenants their isolation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use attesta_access::AccessLedger;
use attesta_core::{
    AuditEntry, AuditLog, Clock, ContentHash, Identity, ImplementationSwitch, RecordId,
    RecordStatus, SubjectHash, TenantId, TranscriptRecord,
};

use crate::error::{Result, StoreError};

/// Counters and flags reported by [`RecordStore::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of records registered.
    pub record_count: u64,
    /// Number of successful verifications.
    pub verification_count: u64,
    /// Whether the store currently accepts mutations.
    pub active: bool,
}

struct StoredRecord {
    record: TranscriptRecord,
    ledger: AccessLedger,
}

struct StoreInner {
    /// Records indexed by derived id.
    records: HashMap<RecordId, StoredRecord>,

    /// Per-subject record index, insertion ordered.
    by_subject: HashMap<SubjectHash, Vec<RecordId>>,

    /// Monotonic registration counter fed into id derivation. Incremented
    /// only on successful registration, never reset.
    registrations: u64,

    /// Successful verification counter.
    verifications: u64,

    /// Gate for mutations; reads are never gated.
    active: bool,
}

/// One tenant's transcript record store.
pub struct RecordStore {
    tenant_id: TenantId,
    issuing_authority: Identity,
    platform_admin: Identity,
    switch: Arc<ImplementationSwitch>,
    clock: Arc<dyn Clock>,
    audit: Arc<AuditLog>,
    inner: RwLock<StoreInner>,
}

impl RecordStore {
    /// Create an active, empty store bound to its authorities and the
    /// shared implementation switch.
    pub fn new(
        tenant_id: TenantId,
        issuing_authority: Identity,
        platform_admin: Identity,
        switch: Arc<ImplementationSwitch>,
        clock: Arc<dyn Clock>,
        audit: Arc<AuditLog>,
    ) -> Self {
        Self {
            tenant_id,
            issuing_authority,
            platform_admin,
            switch,
            clock,
            audit,
            inner: RwLock::new(StoreInner {
                records: HashMap::new(),
                by_subject: HashMap::new(),
                registrations: 0,
                verifications: 0,
                active: true,
            }),
        }
    }

    /// The tenant this store belongs to.
    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    /// The identity allowed to register records and change statuses.
    pub fn issuing_authority(&self) -> Identity {
        self.issuing_authority
    }

    /// The identity allowed to toggle the store's active flag.
    pub fn platform_admin(&self) -> Identity {
        self.platform_admin
    }

    /// The logic version this store currently runs under.
    pub fn logic_version(&self) -> u32 {
        self.switch.version()
    }

    fn check_issuer(&self, caller: &Identity, op: &str) -> Result<()> {
        if *caller != self.issuing_authority {
            tracing::warn!(tenant = %self.tenant_id, caller = %caller, op, "issuer check failed");
            return Err(StoreError::NotIssuer);
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Record Operations
    // ─────────────────────────────────────────────────────────────────────

    /// Register a new transcript record.
    ///
    /// Issuer-gated and only allowed while the store is active. The record
    /// id is derived from `(subject_hash, content_hash, issued_at, counter)`
    /// by the current logic; a collision with an existing id is fatal and
    /// commits nothing.
    pub fn register(
        &self,
        caller: &Identity,
        subject_hash: SubjectHash,
        metadata_ref: impl Into<String>,
        content_hash: ContentHash,
    ) -> Result<RecordId> {
        self.check_issuer(caller, "record.register")?;

        let metadata_ref = metadata_ref.into();
        if subject_hash.is_zero() {
            return Err(StoreError::ZeroSubjectHash);
        }
        if content_hash.is_zero() {
            return Err(StoreError::ZeroContentHash);
        }
        if metadata_ref.is_empty() {
            return Err(StoreError::EmptyMetadataRef);
        }

        let logic = self.switch.current();
        let now = self.clock.now_millis();

        let mut inner = self.inner.write().expect("store lock poisoned");
        if !inner.active {
            return Err(StoreError::StoreInactive);
        }

        let record_id =
            logic.derive_record_id(&subject_hash, &content_hash, now, inner.registrations);
        if inner.records.contains_key(&record_id) {
            tracing::error!(
                tenant = %self.tenant_id,
                record = %record_id,
                seq = inner.registrations,
                "record id collision; derivation or counter is corrupt"
            );
            return Err(StoreError::RecordIdCollision(record_id));
        }

        let record = TranscriptRecord {
            record_id,
            subject_hash,
            metadata_ref,
            content_hash,
            issuer: *caller,
            issued_at: now,
            status: RecordStatus::Active,
        };
        let ledger = AccessLedger::new(subject_hash);

        inner.records.insert(record_id, StoredRecord { record, ledger });
        inner.by_subject.entry(subject_hash).or_default().push(record_id);
        inner.registrations += 1;
        drop(inner);

        self.audit.append(
            AuditEntry::new("record.register", *caller, now)
                .tenant(self.tenant_id)
                .record(record_id),
        );
        Ok(record_id)
    }

    /// Move a record to a different status.
    ///
    /// Issuer-gated; the store must be active (the same policy as
    /// registration, applied consistently across tenants). A transition to
    /// the status the record already holds is rejected.
    pub fn update_status(
        &self,
        caller: &Identity,
        record_id: &RecordId,
        new_status: RecordStatus,
        reason: Option<&str>,
    ) -> Result<()> {
        self.check_issuer(caller, "record.update_status")?;

        let now = self.clock.now_millis();
        let mut inner = self.inner.write().expect("store lock poisoned");
        if !inner.active {
            return Err(StoreError::StoreInactive);
        }

        let stored = inner
            .records
            .get_mut(record_id)
            .ok_or(StoreError::RecordNotFound(*record_id))?;
        if !stored.record.can_transition_to(new_status) {
            return Err(StoreError::SameStatus(new_status));
        }
        stored.record.status = new_status;
        drop(inner);

        let mut entry = AuditEntry::new("record.update_status", *caller, now)
            .tenant(self.tenant_id)
            .record(*record_id)
            .detail(new_status.to_string());
        if let Some(reason) = reason {
            entry = entry.detail(format!("{new_status}: {reason}"));
        }
        self.audit.append(entry);
        Ok(())
    }

    /// Fetch a record by id. Readable regardless of the active flag.
    pub fn get_record(&self, record_id: &RecordId) -> Result<TranscriptRecord> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .records
            .get(record_id)
            .map(|s| s.record.clone())
            .ok_or(StoreError::RecordNotFound(*record_id))
    }

    /// All record ids for a subject, in registration order. Possibly empty.
    pub fn list_by_subject(&self, subject_hash: &SubjectHash) -> Vec<RecordId> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .by_subject
            .get(subject_hash)
            .cloned()
            .unwrap_or_default()
    }

    /// Compare a caller-supplied content digest against the stored one.
    ///
    /// The caller must hold a live access grant on the record. A mismatch
    /// is an ordinary `Ok(false)`, not an error, and does not bump the
    /// verification counter.
    pub fn verify(
        &self,
        caller: &Identity,
        record_id: &RecordId,
        content_hash: &ContentHash,
    ) -> Result<bool> {
        let now = self.clock.now_millis();
        let mut inner = self.inner.write().expect("store lock poisoned");

        let matched = {
            let stored = inner
                .records
                .get(record_id)
                .ok_or(StoreError::RecordNotFound(*record_id))?;
            if !stored.ledger.check(caller, now) {
                tracing::warn!(
                    tenant = %self.tenant_id,
                    record = %record_id,
                    caller = %caller,
                    "verify without live grant"
                );
                return Err(StoreError::NoLiveGrant);
            }
            stored.record.content_hash == *content_hash
        };

        if matched {
            inner.verifications += 1;
            drop(inner);
            self.audit.append(
                AuditEntry::new("record.verify", *caller, now)
                    .tenant(self.tenant_id)
                    .record(*record_id),
            );
        }
        Ok(matched)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Access Operations
    // ─────────────────────────────────────────────────────────────────────

    /// Grant a verifier time-bounded access to a record.
    ///
    /// Only a caller whose derived subject hash matches the record's may
    /// grant; the ledger performs that check. Overwrites any prior grant
    /// for the pair. Returns the new deadline (unix ms). Not gated on the
    /// store's active flag: subjects keep control of their records even
    /// when issuance is frozen.
    pub fn grant_access(
        &self,
        caller: &Identity,
        record_id: &RecordId,
        verifier: Identity,
        duration_ms: i64,
    ) -> Result<i64> {
        let now = self.clock.now_millis();
        let caller_hash = self.switch.current().derive_subject_hash(caller);

        let mut inner = self.inner.write().expect("store lock poisoned");
        let stored = inner
            .records
            .get_mut(record_id)
            .ok_or(StoreError::RecordNotFound(*record_id))?;
        let expires_at = stored.ledger.grant(&caller_hash, verifier, duration_ms, now)?;
        drop(inner);

        self.audit.append(
            AuditEntry::new("access.grant", *caller, now)
                .tenant(self.tenant_id)
                .record(*record_id)
                .detail(format!("verifier {verifier} until {expires_at}")),
        );
        Ok(expires_at)
    }

    /// Revoke a verifier's grant on a record, effective immediately.
    pub fn revoke_access(
        &self,
        caller: &Identity,
        record_id: &RecordId,
        verifier: &Identity,
    ) -> Result<()> {
        let now = self.clock.now_millis();
        let caller_hash = self.switch.current().derive_subject_hash(caller);

        let mut inner = self.inner.write().expect("store lock poisoned");
        let stored = inner
            .records
            .get_mut(record_id)
            .ok_or(StoreError::RecordNotFound(*record_id))?;
        stored.ledger.revoke(&caller_hash, verifier)?;
        drop(inner);

        self.audit.append(
            AuditEntry::new("access.revoke", *caller, now)
                .tenant(self.tenant_id)
                .record(*record_id)
                .detail(format!("verifier {verifier}")),
        );
        Ok(())
    }

    /// Whether a verifier holds a live grant on a record right now.
    ///
    /// Pure query with no ownership check; unknown records report `false`.
    pub fn check_access(&self, record_id: &RecordId, verifier: &Identity) -> bool {
        let now = self.clock.now_millis();
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .records
            .get(record_id)
            .map(|s| s.ledger.check(verifier, now))
            .unwrap_or(false)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Administration
    // ─────────────────────────────────────────────────────────────────────

    /// Toggle the store's active flag. Platform-admin gated.
    ///
    /// Setting the flag to its current value is rejected, mirroring the
    /// tenant-level (de)activation rules.
    pub fn set_active(&self, caller: &Identity, active: bool) -> Result<()> {
        if *caller != self.platform_admin {
            tracing::warn!(tenant = %self.tenant_id, caller = %caller, "admin check failed");
            return Err(StoreError::NotAdmin);
        }

        let now = self.clock.now_millis();
        let mut inner = self.inner.write().expect("store lock poisoned");
        if inner.active == active {
            return Err(StoreError::ActiveUnchanged(active));
        }
        inner.active = active;
        drop(inner);

        self.audit.append(
            AuditEntry::new("store.set_active", *caller, now)
                .tenant(self.tenant_id)
                .detail(active.to_string()),
        );
        Ok(())
    }

    /// Current counters and the active flag.
    pub fn stats(&self) -> StoreStats {
        let inner = self.inner.read().expect("store lock poisoned");
        StoreStats {
            record_count: inner.records.len() as u64,
            verification_count: inner.verifications,
            active: inner.active,
        }
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("RecordStore")
            .field("tenant_id", &self.tenant_id)
            .field("records", &stats.record_count)
            .field("active", &stats.active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attesta_access::{AccessError, MAX_GRANT_DURATION_MS};
    use attesta_core::{Keypair, RegistryLogic, StandardLogic};
    use std::sync::atomic::{AtomicI64, Ordering};

    const DAY_MS: i64 = 24 * 3600 * 1000;

    struct TestClock(AtomicI64);

    impl TestClock {
        fn at(now: i64) -> Arc<Self> {
            Arc::new(Self(AtomicI64::new(now)))
        }

        fn advance(&self, ms: i64) {
            self.0.fetch_add(ms, Ordering::SeqCst);
        }
    }

    impl Clock for TestClock {
        fn now_millis(&self) -> i64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    /// Logic that derives every record id to the same constant, to force
    /// a collision.
    struct CollidingLogic;

    impl RegistryLogic for CollidingLogic {
        fn version(&self) -> u32 {
            99
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
            RecordId::from_bytes([0xcc; 32])
        }
    }

    struct Harness {
        store: RecordStore,
        clock: Arc<TestClock>,
        issuer: Identity,
        admin: Identity,
        subject: Keypair,
        verifier: Identity,
    }

    fn harness() -> Harness {
        harness_with(Arc::new(ImplementationSwitch::default()))
    }

    fn harness_with(switch: Arc<ImplementationSwitch>) -> Harness {
        let clock = TestClock::at(1_700_000_000_000);
        let issuer = Keypair::from_seed(&[1; 32]).identity();
        let admin = Keypair::from_seed(&[2; 32]).identity();
        let store = RecordStore::new(
            TenantId::new(0),
            issuer,
            admin,
            switch,
            clock.clone(),
            Arc::new(AuditLog::new()),
        );
        Harness {
            store,
            clock,
            issuer,
            admin,
            subject: Keypair::from_seed(&[3; 32]),
            verifier: Keypair::from_seed(&[4; 32]).identity(),
        }
    }

    fn subject_hash(h: &Harness) -> SubjectHash {
        StandardLogic::V1.derive_subject_hash(&h.subject.identity())
    }

    fn register(h: &Harness, content: ContentHash) -> RecordId {
        h.store
            .register(&h.issuer, subject_hash(h), "cid-1", content)
            .unwrap()
    }

    #[test]
    fn test_register_then_get_roundtrip() {
        let h = harness();
        let content = ContentHash::hash(b"transcript");
        let id = register(&h, content);

        let record = h.store.get_record(&id).unwrap();
        assert_eq!(record.record_id, id);
        assert_eq!(record.subject_hash, subject_hash(&h));
        assert_eq!(record.metadata_ref, "cid-1");
        assert_eq!(record.content_hash, content);
        assert_eq!(record.issuer, h.issuer);
        assert_eq!(record.status, RecordStatus::Active);
        assert_eq!(h.store.stats().record_count, 1);
    }

    #[test]
    fn test_register_rejects_bad_inputs() {
        let h = harness();
        let content = ContentHash::hash(b"t");

        let err = h
            .store
            .register(&h.issuer, SubjectHash::ZERO, "cid", content)
            .unwrap_err();
        assert!(matches!(err, StoreError::ZeroSubjectHash));

        let err = h
            .store
            .register(&h.issuer, subject_hash(&h), "cid", ContentHash::ZERO)
            .unwrap_err();
        assert!(matches!(err, StoreError::ZeroContentHash));

        let err = h
            .store
            .register(&h.issuer, subject_hash(&h), "", content)
            .unwrap_err();
        assert!(matches!(err, StoreError::EmptyMetadataRef));

        assert_eq!(h.store.stats().record_count, 0);
    }

    #[test]
    fn test_register_issuer_gated() {
        let h = harness();
        let err = h
            .store
            .register(&h.admin, subject_hash(&h), "cid", ContentHash::hash(b"t"))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotIssuer));
    }

    #[test]
    fn test_register_requires_active_store() {
        let h = harness();
        h.store.set_active(&h.admin, false).unwrap();
        let err = h
            .store
            .register(&h.issuer, subject_hash(&h), "cid", ContentHash::hash(b"t"))
            .unwrap_err();
        assert!(matches!(err, StoreError::StoreInactive));
    }

    #[test]
    fn test_same_inputs_different_counters_do_not_collide() {
        let h = harness();
        let content = ContentHash::hash(b"t");
        // Clock does not advance between the two calls: only the counter
        // separates the derivations.
        let a = register(&h, content);
        let b = register(&h, content);
        assert_ne!(a, b);
        assert_eq!(h.store.stats().record_count, 2);
    }

    #[test]
    fn test_forced_collision_is_fatal_and_commits_nothing() {
        let switch = Arc::new(ImplementationSwitch::default());
        switch.switch_to(Arc::new(CollidingLogic)).unwrap();
        let h = harness_with(switch);
        let content = ContentHash::hash(b"t");

        register(&h, content);
        let err = h
            .store
            .register(&h.issuer, subject_hash(&h), "cid-2", content)
            .unwrap_err();
        assert!(matches!(err, StoreError::RecordIdCollision(_)));
        assert_eq!(h.store.stats().record_count, 1);
        assert_eq!(h.store.list_by_subject(&subject_hash(&h)).len(), 1);
    }

    #[test]
    fn test_update_status_transitions() {
        let h = harness();
        let id = register(&h, ContentHash::hash(b"t"));

        let err = h
            .store
            .update_status(&h.issuer, &id, RecordStatus::Active, None)
            .unwrap_err();
        assert!(matches!(err, StoreError::SameStatus(RecordStatus::Active)));

        h.store
            .update_status(&h.issuer, &id, RecordStatus::Revoked, Some("typo in grades"))
            .unwrap();
        assert_eq!(h.store.get_record(&id).unwrap().status, RecordStatus::Revoked);

        // Revoked is not terminal.
        h.store
            .update_status(&h.issuer, &id, RecordStatus::Amended, None)
            .unwrap();
        assert_eq!(h.store.get_record(&id).unwrap().status, RecordStatus::Amended);
    }

    #[test]
    fn test_update_status_gates() {
        let h = harness();
        let id = register(&h, ContentHash::hash(b"t"));

        let err = h
            .store
            .update_status(&h.admin, &id, RecordStatus::Revoked, None)
            .unwrap_err();
        assert!(matches!(err, StoreError::NotIssuer));

        let missing = RecordId::from_bytes([9; 32]);
        let err = h
            .store
            .update_status(&h.issuer, &missing, RecordStatus::Revoked, None)
            .unwrap_err();
        assert!(matches!(err, StoreError::RecordNotFound(_)));

        h.store.set_active(&h.admin, false).unwrap();
        let err = h
            .store
            .update_status(&h.issuer, &id, RecordStatus::Revoked, None)
            .unwrap_err();
        assert!(matches!(err, StoreError::StoreInactive));
    }

    #[test]
    fn test_reads_ignore_active_flag() {
        let h = harness();
        let id = register(&h, ContentHash::hash(b"t"));
        h.store.set_active(&h.admin, false).unwrap();

        assert!(h.store.get_record(&id).is_ok());
        assert_eq!(h.store.list_by_subject(&subject_hash(&h)).len(), 1);
    }

    #[test]
    fn test_list_by_subject_insertion_order() {
        let h = harness();
        let a = register(&h, ContentHash::hash(b"a"));
        let b = register(&h, ContentHash::hash(b"b"));
        let c = register(&h, ContentHash::hash(b"c"));
        assert_eq!(h.store.list_by_subject(&subject_hash(&h)), vec![a, b, c]);

        let unknown = SubjectHash::from_bytes([0x77; 32]);
        assert!(h.store.list_by_subject(&unknown).is_empty());
    }

    #[test]
    fn test_verify_requires_live_grant() {
        let h = harness();
        let content = ContentHash::hash(b"t");
        let id = register(&h, content);

        let err = h.store.verify(&h.verifier, &id, &content).unwrap_err();
        assert!(matches!(err, StoreError::NoLiveGrant));

        h.store
            .grant_access(&h.subject.identity(), &id, h.verifier, 30 * DAY_MS)
            .unwrap();
        assert!(h.store.verify(&h.verifier, &id, &content).unwrap());
        assert_eq!(h.store.stats().verification_count, 1);
    }

    #[test]
    fn test_verify_mismatch_is_ok_false() {
        let h = harness();
        let content = ContentHash::hash(b"t");
        let id = register(&h, content);
        h.store
            .grant_access(&h.subject.identity(), &id, h.verifier, 30 * DAY_MS)
            .unwrap();

        let other = ContentHash::hash(b"tampered");
        assert!(!h.store.verify(&h.verifier, &id, &other).unwrap());
        assert_eq!(h.store.stats().verification_count, 0);
    }

    #[test]
    fn test_verify_after_expiry_fails() {
        let h = harness();
        let content = ContentHash::hash(b"t");
        let id = register(&h, content);
        h.store
            .grant_access(&h.subject.identity(), &id, h.verifier, 30 * DAY_MS)
            .unwrap();

        h.clock.advance(30 * DAY_MS);
        assert!(!h.store.check_access(&id, &h.verifier));
        let err = h.store.verify(&h.verifier, &id, &content).unwrap_err();
        assert!(matches!(err, StoreError::NoLiveGrant));
    }

    #[test]
    fn test_grant_only_by_subject() {
        let h = harness();
        let id = register(&h, ContentHash::hash(b"t"));

        let stranger = Keypair::from_seed(&[9; 32]).identity();
        let err = h
            .store
            .grant_access(&stranger, &id, h.verifier, DAY_MS)
            .unwrap_err();
        assert!(matches!(err, StoreError::Access(AccessError::NotSubject)));
        assert!(!h.store.check_access(&id, &h.verifier));
    }

    #[test]
    fn test_grant_duration_bounds_surface() {
        let h = harness();
        let id = register(&h, ContentHash::hash(b"t"));
        let subject = h.subject.identity();

        let err = h.store.grant_access(&subject, &id, h.verifier, 0).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Access(AccessError::DurationOutOfRange(0))
        ));
        let err = h
            .store
            .grant_access(&subject, &id, h.verifier, MAX_GRANT_DURATION_MS + 1)
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Access(AccessError::DurationOutOfRange(_))
        ));
    }

    #[test]
    fn test_revoke_flow() {
        let h = harness();
        let content = ContentHash::hash(b"t");
        let id = register(&h, content);
        let subject = h.subject.identity();

        h.store.grant_access(&subject, &id, h.verifier, DAY_MS).unwrap();
        assert!(h.store.check_access(&id, &h.verifier));

        h.store.revoke_access(&subject, &id, &h.verifier).unwrap();
        assert!(!h.store.check_access(&id, &h.verifier));
        let err = h.store.verify(&h.verifier, &id, &content).unwrap_err();
        assert!(matches!(err, StoreError::NoLiveGrant));

        let err = h.store.revoke_access(&subject, &id, &h.verifier).unwrap_err();
        assert!(matches!(err, StoreError::Access(AccessError::NoActiveGrant)));
    }

    #[test]
    fn test_check_access_unknown_record_false() {
        let h = harness();
        let missing = RecordId::from_bytes([8; 32]);
        assert!(!h.store.check_access(&missing, &h.verifier));
    }

    #[test]
    fn test_set_active_admin_gated_and_no_op_rejected() {
        let h = harness();
        let err = h.store.set_active(&h.issuer, false).unwrap_err();
        assert!(matches!(err, StoreError::NotAdmin));

        let err = h.store.set_active(&h.admin, true).unwrap_err();
        assert!(matches!(err, StoreError::ActiveUnchanged(true)));

        h.store.set_active(&h.admin, false).unwrap();
        assert!(!h.store.stats().active);
        h.store.set_active(&h.admin, true).unwrap();
        assert!(h.store.stats().active);
    }

    #[test]
    fn test_grants_survive_store_deactivation() {
        let h = harness();
        let content = ContentHash::hash(b"t");
        let id = register(&h, content);
        h.store.set_active(&h.admin, false).unwrap();

        // Subjects keep control while issuance is frozen.
        h.store
            .grant_access(&h.subject.identity(), &id, h.verifier, DAY_MS)
            .unwrap();
        assert!(h.store.verify(&h.verifier, &id, &content).unwrap());
    }
}
