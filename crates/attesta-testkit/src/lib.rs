//! # Attesta Testkit
//!
//! Testing utilities for the Attesta registry.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: seeded identities, a manual clock, and a pre-wired
//!   directory for scenario tests
//! - **Generators**: proptest strategies for registry inputs
//! - **Substitute logic**: [`FixedIdLogic`] to force record-id collisions
//!
//! ## Test Fixtures
//!
//! ```rust
//! use attesta_testkit::RegistryFixture;
//!
//! let fixture = RegistryFixture::new();
//! let (tenant_id, store) = fixture.create_tenant("Alpha U");
//! let record_id = fixture.register(&store, "cid-1", b"transcript bytes");
//! assert!(store.get_record(&record_id).is_ok());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use attesta_testkit::generators::valid_duration_ms;
//!
//! proptest! {
//!     #[test]
//!     fn grants_check_true_at_grant_time(duration in valid_duration_ms()) {
//!         // ...
//!     }
//! }
//! ```

pub mod clock;
pub mod fixtures;
pub mod generators;

pub use clock::ManualClock;
pub use fixtures::{FixedIdLogic, RegistryFixture};
