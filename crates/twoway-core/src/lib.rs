//! # twoway-core
//!
//! Pure primitives for two-way reconciliation: sorting two collections by a
//! caller-defined identity, merging them, and classifying every item.
//!
//! This crate contains no I/O and no shared state. A reconciliation is a
//! single synchronous call over owned working copies.
//!
//! ## Key Types
//!
//! - [`IdentityOrder`] - Outcome of the caller's identity comparison
//! - [`Recency`] - Outcome of the caller's version comparison
//! - [`Reconciled`] - Immutable classification result
//! - [`NotMap`] - Read-only newer→older lookup
//! - [`ReconcileConfig`] - Duplicate handling and Equal-pair ordering
//!
//! ## Categories
//!
//! | category | meaning |
//! |---|---|
//! | only in A | no identity match in B |
//! | only in B | no identity match in A |
//! | newer in A | matched, A's version is more recent |
//! | newer in B | matched, B's version is more recent |
//! | equal | matched, same version |

pub mod config;
pub mod error;
pub mod merge;
pub mod reconciled;
pub mod types;

pub use config::{DuplicatePolicy, ReconcileConfig};
pub use error::{ReconcileError, Result};
pub use merge::{reconcile, reconcile_ordered, reconcile_with};
pub use reconciled::{NotMap, ReconcileSummary, Reconciled, ReconciledParts};
pub use types::{IdentityOrder, Recency, Side};
