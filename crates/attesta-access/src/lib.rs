//! # Attesta Access
//!
//! Time-bounded access control for transcript records.
//!
//! ## Overview
//!
//! Each record owns an [`AccessLedger`]: a map from verifier identity to a
//! single [`AccessGrant`]. The record's subject controls the ledger, proving
//! ownership by hash equality rather than a stored owner identity.
//!
//! ## Key Concepts
//!
//! - **Grant**: permission for one verifier, bounded to at most 365 days
//! - **Revoke**: flips the grant inactive, effective immediately
//! - **Expiry**: `now < expires_at`, evaluated live on every check
//!
//! Grants are never swept or garbage collected; an expired grant simply
//! stops passing `check`.

pub mod error;
pub mod grant;
pub mod ledger;

pub use error::{AccessError, Result};
pub use grant::{duration_in_range, AccessGrant, MAX_GRANT_DURATION_MS};
pub use ledger::AccessLedger;
