//! Reconciliation configuration.

use serde::{Deserialize, Serialize};

use crate::types::Side;

/// How items sharing an identity within one input are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// Abort with [`crate::ReconcileError::DuplicateIdentity`].
    #[default]
    Reject,
    /// Walk duplicates in input order, each one compared against whatever
    /// the other cursor currently holds. The first duplicate can pair with
    /// a match on the other side; later ones usually land in an
    /// Only-category.
    PairInOrder,
}

/// Configuration for a reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Duplicate-identity handling.
    pub duplicates: DuplicatePolicy,
    /// Which item of an Equal pair the result order sorts on.
    pub order_equal_by: Side,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::Reject,
            order_equal_by: Side::A,
        }
    }
}

impl ReconcileConfig {
    /// Set the duplicate-identity policy.
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Set the side an Equal pair is ordered by.
    pub fn order_equal_by(mut self, side: Side) -> Self {
        self.order_equal_by = side;
        self
    }
}
