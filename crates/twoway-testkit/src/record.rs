//! A small versioned record used throughout the tests.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use twoway_core::{IdentityOrder, Recency};

/// A record identified by `id` and versioned by `version`.
///
/// `label` stands in for payload fields that take no part in either
/// comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub version: u32,
    pub label: String,
}

impl Record {
    /// Create a record with an empty label.
    pub fn new(id: u32, version: u32) -> Self {
        Self {
            id,
            version,
            label: String::new(),
        }
    }

    /// Create a labelled record.
    pub fn labelled(id: u32, version: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            version,
            label: label.into(),
        }
    }
}

impl From<(u32, u32)> for Record {
    fn from((id, version): (u32, u32)) -> Self {
        Self::new(id, version)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@v{}", self.id, self.version)
    }
}

/// Identity order: ascending `id`.
pub fn by_id(a: &Record, b: &Record) -> IdentityOrder {
    a.id.cmp(&b.id).into()
}

/// Version order: higher `version` is newer.
pub fn by_version(a: &Record, b: &Record) -> Recency {
    Recency::greater_is_newer(a.version.cmp(&b.version))
}

/// Result order: descending `id`.
pub fn by_id_desc(a: &Record, b: &Record) -> Ordering {
    b.id.cmp(&a.id)
}

/// Build records from `(id, version)` pairs.
pub fn records(pairs: &[(u32, u32)]) -> Vec<Record> {
    pairs.iter().copied().map(Record::from).collect()
}
