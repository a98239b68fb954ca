//! # twoway
//!
//! Two-way reconciliation of identity-bearing, versioned items.
//!
//! ## Overview
//!
//! Given two collections of the same logical entities (say, local and remote
//! copies of a set of records), twoway reports:
//!
//! - **Only in A / only in B**: entities present on one side
//! - **Newer in A / newer in B**: entities on both sides where one version
//!   is more recent, with a lookup from each newer item to the older one
//! - **Equal**: entities on both sides with the same version
//!
//! The caller supplies the notion of identity, the notion of recency, and
//! optionally an order for the output. The item type needs no `Ord`, `Hash`
//! or `Clone` implementation.
//!
//! ## Usage
//!
//! ```rust
//! use twoway::{Reconciler, Recency};
//!
//! let reconciler = Reconciler::new(
//!     |a: &(u32, u32), b: &(u32, u32)| a.0.cmp(&b.0).into(),
//!     |a: &(u32, u32), b: &(u32, u32)| Recency::greater_is_newer(a.1.cmp(&b.1)),
//! );
//!
//! let diff = reconciler
//!     .reconcile(vec![(1, 5), (2, 1)], vec![(2, 9), (3, 1)])
//!     .unwrap();
//!
//! assert_eq!(diff.only_in_a(), &[(1, 5)]);
//! assert_eq!(diff.only_in_b(), &[(3, 1)]);
//! assert_eq!(diff.newer_in_b(), &[(2, 9)]);
//! assert_eq!(diff.not().get(&(2, 9)), Some(&(2, 1)));
//! assert!(diff.has_changes());
//! ```
//!
//! ## Re-exports
//!
//! - `twoway::core` - Sentinels, merge-classify and the result model

pub mod reconciler;
pub mod report;

// Re-export component crates
pub use twoway_core as core;

pub use reconciler::Reconciler;
pub use report::{render_with, Report};

// Re-export commonly used core types
pub use twoway_core::{
    reconcile, reconcile_ordered, reconcile_with, DuplicatePolicy, IdentityOrder, NotMap,
    Recency, ReconcileConfig, ReconcileError, ReconcileSummary, Reconciled, ReconciledParts,
    Result, Side,
};
