//! # Attesta Store
//!
//! The per-tenant transcript record store.
//!
//! ## Overview
//!
//! Each tenant owns exactly one [`RecordStore`]. The store owns its records,
//! a per-subject index, and one access ledger per record, and reads the
//! shared implementation switch for all derivations. Mutations are
//! serialized behind one lock per store; two tenants never contend.
//!
//! ## Gating
//!
//! - `register` and `update_status`: issuing authority, store active
//! - `set_active`: platform admin
//! - `grant_access` / `revoke_access`: the record's subject (by hash)
//! - `verify`: any holder of a live grant
//! - reads: ungated

pub mod error;
pub mod store;

pub use error::{Result, StoreError};
pub use store::{RecordStore, StoreStats};
