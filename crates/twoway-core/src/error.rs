//! Error types for twoway-core.

use thiserror::Error;

use crate::types::Side;

/// Errors raised by the reconciler itself.
///
/// Panics inside caller-supplied comparators are not caught or wrapped;
/// they unwind through the reconciliation unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// Two items on the same side share an identity.
    ///
    /// Positions refer to the order the items were supplied in.
    #[error("duplicate identity on side {side}: input positions {first} and {second}")]
    DuplicateIdentity {
        side: Side,
        first: usize,
        second: usize,
    },
}

/// Result type for reconciliation.
pub type Result<T> = std::result::Result<T, ReconcileError>;
