//! Per-record access ledger.
//!
//! Each transcript record owns one ledger mapping verifier identities to
//! grants. Ownership is proven by hash equality: the ledger is created with
//! the record's subject hash and compares it against the caller's derived
//! hash on every mutation. No explicit owner identity is ever stored.

use std::collections::HashMap;

use attesta_core::{Identity, SubjectHash};

use crate::error::{AccessError, Result};
use crate::grant::{duration_in_range, AccessGrant};

/// The (verifier → grant) map for a single record.
#[derive(Debug, Clone)]
pub struct AccessLedger {
    /// The owning record's subject digest; the ownership proof target.
    subject_hash: SubjectHash,

    /// Grants keyed by verifier identity. At most one grant per verifier;
    /// re-granting overwrites.
    grants: HashMap<Identity, AccessGrant>,
}

impl AccessLedger {
    /// Create an empty ledger bound to a record's subject hash.
    pub fn new(subject_hash: SubjectHash) -> Self {
        Self {
            subject_hash,
            grants: HashMap::new(),
        }
    }

    /// Prove ownership: the caller's derived hash must equal the record's.
    fn check_subject(&self, caller_hash: &SubjectHash) -> Result<()> {
        if *caller_hash != self.subject_hash {
            return Err(AccessError::NotSubject);
        }
        Ok(())
    }

    /// Grant `verifier` access for `duration_ms` starting at `now`.
    ///
    /// Overwrites any prior grant for the verifier, live or not. Returns
    /// the new deadline.
    pub fn grant(
        &mut self,
        caller_hash: &SubjectHash,
        verifier: Identity,
        duration_ms: i64,
        now: i64,
    ) -> Result<i64> {
        self.check_subject(caller_hash)?;
        if verifier.is_zero() {
            return Err(AccessError::ZeroVerifier);
        }
        if !duration_in_range(duration_ms) {
            return Err(AccessError::DurationOutOfRange(duration_ms));
        }

        let grant = AccessGrant::new(now, duration_ms);
        let expires_at = grant.expires_at;
        self.grants.insert(verifier, grant);
        Ok(expires_at)
    }

    /// Revoke the verifier's grant.
    ///
    /// Fails with [`AccessError::NoActiveGrant`] if no grant exists or it
    /// was already revoked. An expired-but-active grant can still be
    /// revoked; revocation and expiry are independent.
    pub fn revoke(&mut self, caller_hash: &SubjectHash, verifier: &Identity) -> Result<()> {
        self.check_subject(caller_hash)?;

        match self.grants.get_mut(verifier) {
            Some(grant) if grant.active => {
                grant.active = false;
                Ok(())
            }
            _ => Err(AccessError::NoActiveGrant),
        }
    }

    /// Whether the verifier holds a live grant at `now`.
    ///
    /// Pure query: no side effects and no ownership check, so anyone may
    /// probe a grant's liveness.
    pub fn check(&self, verifier: &Identity, now: i64) -> bool {
        self.grants
            .get(verifier)
            .map(|g| g.is_live(now))
            .unwrap_or(false)
    }

    /// The grant stored for a verifier, if any (live or not).
    pub fn get(&self, verifier: &Identity) -> Option<&AccessGrant> {
        self.grants.get(verifier)
    }
}
