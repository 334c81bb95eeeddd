//! The tenant directory: the multi-tenant entry point.
//!
//! The directory exclusively owns the tenant arena (a dense, append-only
//! vector indexed by tenant id) and one record store per tenant. All stores
//! share one implementation switch, one clock, and one audit log, wired in
//! here at instance-creation time.

use std::sync::{Arc, RwLock};

use attesta_core::{
    AuditEntry, AuditLog, Clock, Identity, ImplementationSwitch, RegistryLogic, StandardLogic,
    SystemClock, TenantId,
};
use attesta_store::RecordStore;

use crate::error::{DirectoryError, Result};

/// One institution's entry in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    /// Dense sequential id, immutable once assigned.
    pub tenant_id: TenantId,

    /// Institution name, non-empty.
    pub name: String,

    /// Identity allowed to register records in this tenant's store.
    pub issuing_authority: Identity,

    /// Identity allowed to (de)activate the tenant and its store.
    pub platform_admin: Identity,

    /// Directory-level activation flag. Independent of the store's own
    /// active flag; deactivating a tenant does not freeze its store.
    pub active: bool,

    /// When the tenant was created (unix ms).
    pub created_at: i64,
}

/// Counters reported by [`TenantDirectory::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryStats {
    /// Total tenants ever created.
    pub total: u64,
    /// Tenants currently active.
    pub active: u64,
}

struct DirectoryInner {
    tenants: Vec<Tenant>,
    stores: Vec<Arc<RecordStore>>,
}

/// The multi-tenant registry directory.
///
/// Tenants are never deleted; ids are dense from 0 and the id-to-store
/// mapping never changes once assigned.
pub struct TenantDirectory {
    /// The only identity allowed to swap the implementation.
    operator: Identity,
    switch: Arc<ImplementationSwitch>,
    clock: Arc<dyn Clock>,
    audit: Arc<AuditLog>,
    inner: RwLock<DirectoryInner>,
}

impl TenantDirectory {
    /// Create a directory running [`StandardLogic::V1`] on the system clock.
    pub fn new(operator: Identity) -> Self {
        Self::with_parts(operator, Arc::new(StandardLogic::V1), Arc::new(SystemClock))
    }

    /// Create a directory with explicit logic and clock, for tests and
    /// embedders that control time.
    pub fn with_parts(
        operator: Identity,
        initial_logic: Arc<dyn RegistryLogic>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            operator,
            switch: Arc::new(ImplementationSwitch::new(initial_logic)),
            clock,
            audit: Arc::new(AuditLog::new()),
            inner: RwLock::new(DirectoryInner {
                tenants: Vec::new(),
                stores: Vec::new(),
            }),
        }
    }

    /// The logic version every tenant currently runs under.
    pub fn logic_version(&self) -> u32 {
        self.switch.version()
    }

    /// Snapshot of the shared audit log.
    pub fn audit(&self) -> Vec<AuditEntry> {
        self.audit.entries()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tenant Lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Create a tenant and its record store.
    ///
    /// The caller becomes the tenant's platform admin. Returns the new id
    /// and a handle to the store.
    pub fn create_tenant(
        &self,
        caller: &Identity,
        name: &str,
        issuing_authority: Identity,
    ) -> Result<(TenantId, Arc<RecordStore>)> {
        if name.is_empty() {
            return Err(DirectoryError::EmptyName);
        }
        if issuing_authority.is_zero() {
            return Err(DirectoryError::ZeroIssuingAuthority);
        }

        let now = self.clock.now_millis();
        let mut inner = self.inner.write().expect("directory lock poisoned");

        let tenant_id = TenantId::new(inner.tenants.len() as u64);
        let store = Arc::new(RecordStore::new(
            tenant_id,
            issuing_authority,
            *caller,
            Arc::clone(&self.switch),
            Arc::clone(&self.clock),
            Arc::clone(&self.audit),
        ));

        inner.tenants.push(Tenant {
            tenant_id,
            name: name.to_string(),
            issuing_authority,
            platform_admin: *caller,
            active: true,
            created_at: now,
        });
        inner.stores.push(Arc::clone(&store));
        drop(inner);

        tracing::info!(tenant = %tenant_id, name, "tenant created");
        self.audit.append(
            AuditEntry::new("tenant.create", *caller, now)
                .tenant(tenant_id)
                .detail(format!("{name}, issuer {issuing_authority}")),
        );
        Ok((tenant_id, store))
    }

    /// Mark a tenant inactive. Platform-admin gated.
    ///
    /// Does not touch the tenant's store: freezing issuance is a separate,
    /// store-level authority boundary ([`RecordStore::set_active`]).
    pub fn deactivate_tenant(
        &self,
        caller: &Identity,
        tenant_id: TenantId,
        reason: &str,
    ) -> Result<()> {
        let now = self.clock.now_millis();
        let mut inner = self.inner.write().expect("directory lock poisoned");
        let tenant = Self::tenant_mut(&mut inner, tenant_id)?;
        if *caller != tenant.platform_admin {
            tracing::warn!(tenant = %tenant_id, caller = %caller, "admin check failed");
            return Err(DirectoryError::NotAdmin);
        }
        if !tenant.active {
            return Err(DirectoryError::TenantAlreadyInactive(tenant_id));
        }
        tenant.active = false;
        drop(inner);

        self.audit.append(
            AuditEntry::new("tenant.deactivate", *caller, now)
                .tenant(tenant_id)
                .detail(reason),
        );
        Ok(())
    }

    /// Mark a tenant active again. Platform-admin gated.
    pub fn reactivate_tenant(&self, caller: &Identity, tenant_id: TenantId) -> Result<()> {
        let now = self.clock.now_millis();
        let mut inner = self.inner.write().expect("directory lock poisoned");
        let tenant = Self::tenant_mut(&mut inner, tenant_id)?;
        if *caller != tenant.platform_admin {
            tracing::warn!(tenant = %tenant_id, caller = %caller, "admin check failed");
            return Err(DirectoryError::NotAdmin);
        }
        if tenant.active {
            return Err(DirectoryError::TenantAlreadyActive(tenant_id));
        }
        tenant.active = true;
        drop(inner);

        self.audit
            .append(AuditEntry::new("tenant.reactivate", *caller, now).tenant(tenant_id));
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Implementation Upgrade
    // ─────────────────────────────────────────────────────────────────────

    /// Atomically repoint every tenant to a new logic version.
    ///
    /// Operator-gated. One swap of the shared slot; zero per-tenant work,
    /// and no partial-upgrade state is ever observable.
    pub fn upgrade_implementation(
        &self,
        caller: &Identity,
        new: Arc<dyn RegistryLogic>,
    ) -> Result<()> {
        if *caller != self.operator {
            tracing::warn!(caller = %caller, "operator check failed");
            return Err(DirectoryError::NotOperator);
        }
        let version = new.version();
        self.switch.switch_to(new)?;

        self.audit.append(
            AuditEntry::new("logic.upgrade", *caller, self.clock.now_millis())
                .detail(format!("version {version}")),
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    /// Ids of active tenants within the window `[offset, offset + limit)`.
    ///
    /// The window is over the dense id space, so ids outside it are never
    /// inspected. `limit` is clamped to the remaining count; an offset at
    /// or past the end is rejected. Results are ascending.
    pub fn list_active(&self, offset: usize, limit: usize) -> Result<Vec<TenantId>> {
        let inner = self.inner.read().expect("directory lock poisoned");
        let total = inner.tenants.len();
        if offset >= total {
            return Err(DirectoryError::OffsetOutOfRange { offset, total });
        }
        let end = offset.saturating_add(limit).min(total);
        Ok(inner.tenants[offset..end]
            .iter()
            .filter(|t| t.active)
            .map(|t| t.tenant_id)
            .collect())
    }

    /// Total and active tenant counts.
    pub fn stats(&self) -> DirectoryStats {
        let inner = self.inner.read().expect("directory lock poisoned");
        DirectoryStats {
            total: inner.tenants.len() as u64,
            active: inner.tenants.iter().filter(|t| t.active).count() as u64,
        }
    }

    /// A tenant's directory entry.
    pub fn tenant(&self, tenant_id: TenantId) -> Result<Tenant> {
        let inner = self.inner.read().expect("directory lock poisoned");
        inner
            .tenants
            .get(tenant_id.as_u64() as usize)
            .cloned()
            .ok_or(DirectoryError::TenantNotFound(tenant_id))
    }

    /// A handle to a tenant's record store.
    pub fn store(&self, tenant_id: TenantId) -> Result<Arc<RecordStore>> {
        let inner = self.inner.read().expect("directory lock poisoned");
        inner
            .stores
            .get(tenant_id.as_u64() as usize)
            .cloned()
            .ok_or(DirectoryError::TenantNotFound(tenant_id))
    }

    fn tenant_mut(inner: &mut DirectoryInner, tenant_id: TenantId) -> Result<&mut Tenant> {
        inner
            .tenants
            .get_mut(tenant_id.as_u64() as usize)
            .ok_or(DirectoryError::TenantNotFound(tenant_id))
    }
}

impl std::fmt::Debug for TenantDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("TenantDirectory")
            .field("total", &stats.total)
            .field("active", &stats.active)
            .field("logic_version", &self.logic_version())
            .finish()
    }
}
