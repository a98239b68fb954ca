//! Sentinel types returned by caller-supplied comparison functions.
//!
//! Both sentinels are closed enums, so a comparator cannot hand back a value
//! outside the defined set.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Outcome of comparing two items by identity.
///
/// `Same` means the two items represent the same logical entity. It says
/// nothing about whether their other fields agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityOrder {
    /// The A item sorts before the B item.
    AFirst,
    /// Both items share an identity.
    Same,
    /// The B item sorts before the A item.
    BFirst,
}

impl IdentityOrder {
    /// The outcome with the roles of A and B exchanged.
    pub fn reverse(self) -> Self {
        match self {
            IdentityOrder::AFirst => IdentityOrder::BFirst,
            IdentityOrder::Same => IdentityOrder::Same,
            IdentityOrder::BFirst => IdentityOrder::AFirst,
        }
    }

    /// Check if the two items share an identity.
    pub fn is_same(self) -> bool {
        matches!(self, IdentityOrder::Same)
    }

    /// Sort order implied by this outcome.
    pub fn to_ordering(self) -> Ordering {
        match self {
            IdentityOrder::AFirst => Ordering::Less,
            IdentityOrder::Same => Ordering::Equal,
            IdentityOrder::BFirst => Ordering::Greater,
        }
    }
}

impl From<Ordering> for IdentityOrder {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => IdentityOrder::AFirst,
            Ordering::Equal => IdentityOrder::Same,
            Ordering::Greater => IdentityOrder::BFirst,
        }
    }
}

/// Outcome of comparing the versions of two identity-matched items.
///
/// There is no `From<Ordering>`: whether a larger timestamp or revision
/// means "newer" is up to the caller. Use [`Recency::greater_is_newer`] or
/// [`Recency::lesser_is_newer`] to say which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recency {
    /// The A item is more recent.
    ANewer,
    /// Both items carry the same version.
    SameVersion,
    /// The B item is more recent.
    BNewer,
}

impl Recency {
    /// Map a magnitude comparison of `a` against `b` where the greater
    /// value is the more recent one.
    pub fn greater_is_newer(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Recency::ANewer,
            Ordering::Equal => Recency::SameVersion,
            Ordering::Less => Recency::BNewer,
        }
    }

    /// Map a magnitude comparison where the smaller value is the more
    /// recent one (e.g. "age" or "distance from head").
    pub fn lesser_is_newer(ord: Ordering) -> Self {
        Self::greater_is_newer(ord.reverse())
    }

    /// The outcome with the roles of A and B exchanged.
    pub fn reverse(self) -> Self {
        match self {
            Recency::ANewer => Recency::BNewer,
            Recency::SameVersion => Recency::SameVersion,
            Recency::BNewer => Recency::ANewer,
        }
    }
}

/// One of the two input collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Side {
    #[default]
    A,
    B,
}

impl Side {
    /// The opposite side.
    pub fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}
