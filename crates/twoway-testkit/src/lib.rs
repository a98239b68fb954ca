//! # twoway Testkit
//!
//! Testing utilities for twoway.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Record**: A small versioned item type with ready-made comparators
//! - **Golden scenarios**: Known inputs with every expected category
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: A builder for hand-written A/B inputs
//!
//! ## Golden Scenarios
//!
//! ```rust
//! use twoway_testkit::scenarios::verify_all_scenarios;
//!
//! for (name, passed) in verify_all_scenarios() {
//!     assert!(passed, "{name}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use twoway_testkit::{by_id, by_version, SidePair};
//!
//! proptest! {
//!     #[test]
//!     fn counts_are_conserved(pair: SidePair) {
//!         let r = twoway_core::reconcile(pair.a.clone(), pair.b.clone(), by_id, by_version).unwrap();
//!         prop_assert_eq!(r.total_items(), pair.a.len() + pair.b.len());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use twoway_testkit::Fixture;
//!
//! let diff = Fixture::new().only_a(1, 5).shared(2, 1, 9).only_b(3, 1).reconcile().unwrap();
//! assert!(diff.has_changes());
//! ```

pub mod fixtures;
pub mod generators;
pub mod record;
pub mod scenarios;

pub use fixtures::{mirrored_fixture, Fixture};
pub use generators::SidePair;
pub use record::{by_id, by_id_desc, by_version, records, Record};
pub use scenarios::{all_scenarios, run_scenario, verify_all_scenarios, GoldenScenario};
