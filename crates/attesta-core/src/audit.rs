//! Append-only audit log.
//!
//! Every successful state-changing operation records an immutable entry:
//! the operation name, the primary keys it touched, the caller, and a
//! timestamp. External observability tooling consumes the log; the registry
//! itself never reads it back for decisions.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::crypto::Identity;
use crate::types::{RecordId, TenantId};

/// One immutable audit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Operation name, e.g. `"record.register"`.
    pub op: String,

    /// The tenant the operation was scoped to, if any.
    pub tenant_id: Option<TenantId>,

    /// The record the operation touched, if any.
    pub record_id: Option<RecordId>,

    /// Who performed the operation.
    pub caller: Identity,

    /// When the entry was appended (unix ms).
    pub at: i64,

    /// Free-form detail, e.g. a deactivation reason.
    pub detail: Option<String>,
}

impl AuditEntry {
    /// Create an entry with no key context.
    pub fn new(op: impl Into<String>, caller: Identity, at: i64) -> Self {
        Self {
            op: op.into(),
            tenant_id: None,
            record_id: None,
            caller,
            at,
            detail: None,
        }
    }

    /// Attach a tenant id.
    pub fn tenant(mut self, id: TenantId) -> Self {
        self.tenant_id = Some(id);
        self
    }

    /// Attach a record id.
    pub fn record(mut self, id: RecordId) -> Self {
        self.record_id = Some(id);
        self
    }

    /// Attach free-form detail.
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Append-only, in-process audit log.
///
/// Entries are never rewritten or dropped. Thread-safe via RwLock; shared
/// between the directory and every tenant store through an `Arc`.
#[derive(Default)]
pub struct AuditLog {
    entries: RwLock<Vec<AuditEntry>>,
}

impl AuditLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&self, entry: AuditEntry) {
        tracing::info!(
            op = %entry.op,
            caller = %entry.caller,
            at = entry.at,
            "audit"
        );
        self.entries.write().expect("audit lock poisoned").push(entry);
    }

    /// Snapshot of all entries, in append order.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.read().expect("audit lock poisoned").clone()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().expect("audit lock poisoned").len()
    }

    /// True if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for AuditLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditLog").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_order_preserved() {
        let log = AuditLog::new();
        let caller = Identity::from_bytes([1; 32]);

        log.append(AuditEntry::new("tenant.create", caller, 10).tenant(TenantId::new(0)));
        log.append(AuditEntry::new("record.register", caller, 20));

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].op, "tenant.create");
        assert_eq!(entries[0].tenant_id, Some(TenantId::new(0)));
        assert_eq!(entries[1].op, "record.register");
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = AuditEntry::new("tenant.deactivate", Identity::from_bytes([2; 32]), 99)
            .tenant(TenantId::new(3))
            .detail("accreditation lapsed");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["op"], "tenant.deactivate");
        assert_eq!(json["detail"], "accreditation lapsed");
    }
}
