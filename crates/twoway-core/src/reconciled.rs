//! The immutable outcome of a reconciliation.
//!
//! A [`Reconciled`] is built once from a completed merge walk and never
//! mutated afterwards. Every sequence is exposed as a slice; the newer→older
//! lookup is exposed through the [`NotMap`] view.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::types::{IdentityOrder, Side};

/// Sequences accumulated during the merge walk, before ordering and freezing.
///
/// Each `newer_in_*` entry keeps its older counterpart at the same index of
/// the matching `older_in_*` vector.
#[derive(Debug)]
pub(crate) struct Classified<T> {
    pub(crate) only_in_a: Vec<T>,
    pub(crate) only_in_b: Vec<T>,
    pub(crate) newer_in_a: Vec<T>,
    pub(crate) older_in_b: Vec<T>,
    pub(crate) newer_in_b: Vec<T>,
    pub(crate) older_in_a: Vec<T>,
    pub(crate) equal: Vec<(T, T)>,
}

impl<T> Classified<T> {
    pub(crate) fn new() -> Self {
        Self {
            only_in_a: Vec::new(),
            only_in_b: Vec::new(),
            newer_in_a: Vec::new(),
            older_in_b: Vec::new(),
            newer_in_b: Vec::new(),
            older_in_a: Vec::new(),
            equal: Vec::new(),
        }
    }

    pub(crate) fn push_newer_in_a(&mut self, newer: T, older: T) {
        self.newer_in_a.push(newer);
        self.older_in_b.push(older);
    }

    pub(crate) fn push_newer_in_b(&mut self, newer: T, older: T) {
        self.newer_in_b.push(newer);
        self.older_in_a.push(older);
    }

    /// Apply the optional result order and freeze into a [`Reconciled`].
    pub(crate) fn freeze(
        self,
        result_order: Option<&mut dyn FnMut(&T, &T) -> Ordering>,
        order_equal_by: Side,
    ) -> Reconciled<T> {
        let Classified {
            mut only_in_a,
            mut only_in_b,
            newer_in_a,
            older_in_b,
            newer_in_b,
            older_in_a,
            mut equal,
        } = self;

        let Some(order) = result_order else {
            return Reconciled {
                only_in_a,
                only_in_b,
                newer_in_a,
                older_in_b,
                newer_in_b,
                older_in_a,
                equal,
            };
        };

        only_in_a.sort_by(|x, y| order(x, y));
        only_in_b.sort_by(|x, y| order(x, y));
        let (newer_in_a, older_in_b) = sort_paired(newer_in_a, older_in_b, order);
        let (newer_in_b, older_in_a) = sort_paired(newer_in_b, older_in_a, order);
        match order_equal_by {
            Side::A => equal.sort_by(|(x, _), (y, _)| order(x, y)),
            Side::B => equal.sort_by(|(_, x), (_, y)| order(x, y)),
        }

        Reconciled {
            only_in_a,
            only_in_b,
            newer_in_a,
            older_in_b,
            newer_in_b,
            older_in_a,
            equal,
        }
    }
}

/// Sort `newer` by `order`, carrying each older counterpart along.
fn sort_paired<T>(
    newer: Vec<T>,
    older: Vec<T>,
    order: &mut dyn FnMut(&T, &T) -> Ordering,
) -> (Vec<T>, Vec<T>) {
    let mut pairs: Vec<(T, T)> = newer.into_iter().zip(older).collect();
    pairs.sort_by(|(x, _), (y, _)| order(x, y));
    pairs.into_iter().unzip()
}

/// Result of reconciling collection A against collection B.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled<T> {
    only_in_a: Vec<T>,
    only_in_b: Vec<T>,
    newer_in_a: Vec<T>,
    older_in_b: Vec<T>,
    newer_in_b: Vec<T>,
    older_in_a: Vec<T>,
    equal: Vec<(T, T)>,
}

impl<T> Reconciled<T> {
    /// Items of A with no identity match in B.
    pub fn only_in_a(&self) -> &[T] {
        &self.only_in_a
    }

    /// Items of B with no identity match in A.
    pub fn only_in_b(&self) -> &[T] {
        &self.only_in_b
    }

    /// Items of A that are newer than their B counterpart.
    pub fn newer_in_a(&self) -> &[T] {
        &self.newer_in_a
    }

    /// Items of B that are newer than their A counterpart.
    pub fn newer_in_b(&self) -> &[T] {
        &self.newer_in_b
    }

    /// Identity matches with the same version, as (A item, B item).
    pub fn equal(&self) -> &[(T, T)] {
        &self.equal
    }

    /// Lookup from every newer item to the older item it supersedes.
    pub fn not(&self) -> NotMap<'_, T> {
        NotMap {
            newer_in_a: &self.newer_in_a,
            older_in_b: &self.older_in_b,
            newer_in_b: &self.newer_in_b,
            older_in_a: &self.older_in_a,
        }
    }

    /// Whether A and B differ at all. Equal pairs never count.
    pub fn has_changes(&self) -> bool {
        !(self.only_in_a.is_empty()
            && self.only_in_b.is_empty()
            && self.newer_in_a.is_empty()
            && self.newer_in_b.is_empty())
    }

    /// Number of input items accounted for, counting Equal pairs twice.
    pub fn total_items(&self) -> usize {
        self.only_in_a.len()
            + self.only_in_b.len()
            + 2 * (self.newer_in_a.len() + self.newer_in_b.len() + self.equal.len())
    }

    /// Per-category counts.
    pub fn summary(&self) -> ReconcileSummary {
        ReconcileSummary {
            only_in_a: self.only_in_a.len(),
            only_in_b: self.only_in_b.len(),
            newer_in_a: self.newer_in_a.len(),
            newer_in_b: self.newer_in_b.len(),
            equal: self.equal.len(),
            has_changes: self.has_changes(),
        }
    }

    /// The result reconciling (B, A) would have produced with the version
    /// order reversed.
    pub fn swap_sides(self) -> Self {
        Self {
            only_in_a: self.only_in_b,
            only_in_b: self.only_in_a,
            newer_in_a: self.newer_in_b,
            older_in_b: self.older_in_a,
            newer_in_b: self.newer_in_a,
            older_in_a: self.older_in_b,
            equal: self.equal.into_iter().map(|(a, b)| (b, a)).collect(),
        }
    }

    /// Consume the result, taking ownership of every category.
    pub fn into_parts(self) -> ReconciledParts<T> {
        ReconciledParts {
            only_in_a: self.only_in_a,
            only_in_b: self.only_in_b,
            newer_in_a: self.newer_in_a.into_iter().zip(self.older_in_b).collect(),
            newer_in_b: self.newer_in_b.into_iter().zip(self.older_in_a).collect(),
            equal: self.equal,
        }
    }
}

/// Owned categories of a consumed [`Reconciled`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledParts<T> {
    pub only_in_a: Vec<T>,
    pub only_in_b: Vec<T>,
    /// (newer A item, older B item)
    pub newer_in_a: Vec<(T, T)>,
    /// (newer B item, older A item)
    pub newer_in_b: Vec<(T, T)>,
    pub equal: Vec<(T, T)>,
}

/// Read-only view mapping each newer item to the item it supersedes.
///
/// Keys are not hashed. Look entries up by structural equality
/// ([`NotMap::get`]), by the identity order used for the reconciliation
/// ([`NotMap::get_by`]) or build a hash index from a key function
/// ([`NotMap::index_by`]).
pub struct NotMap<'a, T> {
    newer_in_a: &'a [T],
    older_in_b: &'a [T],
    newer_in_b: &'a [T],
    older_in_a: &'a [T],
}

impl<T> Clone for NotMap<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NotMap<'_, T> {}

impl<'a, T> NotMap<'a, T> {
    /// Number of entries; equals `|NewerInA| + |NewerInB|`.
    pub fn len(&self) -> usize {
        self.newer_in_a.len() + self.newer_in_b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate (newer, older) entries, A-newer entries first.
    pub fn iter(&self) -> impl Iterator<Item = (&'a T, &'a T)> + 'a {
        let NotMap {
            newer_in_a,
            older_in_b,
            newer_in_b,
            older_in_a,
        } = *self;
        newer_in_a
            .iter()
            .zip(older_in_b)
            .chain(newer_in_b.iter().zip(older_in_a))
    }

    /// Older counterpart of `newer`, matched by `PartialEq`.
    ///
    /// Each call scans the entries linearly. To look up many items, build
    /// an index once with [`NotMap::index_by`].
    pub fn get(&self, newer: &T) -> Option<&'a T>
    where
        T: PartialEq,
    {
        self.iter().find(|(key, _)| *key == newer).map(|(_, old)| old)
    }

    /// Older counterpart of the entry whose newer item shares `newer`'s
    /// identity. Linear in the number of entries, like [`NotMap::get`].
    pub fn get_by<F>(&self, newer: &T, mut identity: F) -> Option<&'a T>
    where
        F: FnMut(&T, &T) -> IdentityOrder,
    {
        self.iter()
            .find(|(key, _)| identity(*key, newer).is_same())
            .map(|(_, old)| old)
    }

    /// Build a hash index over the entries using a caller key function.
    ///
    /// Later entries overwrite earlier ones if two keys collide.
    pub fn index_by<K, F>(&self, mut key: F) -> HashMap<K, &'a T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.iter().map(|(newer, old)| (key(newer), old)).collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for NotMap<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Per-category counts of a reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReconcileSummary {
    pub only_in_a: usize,
    pub only_in_b: usize,
    pub newer_in_a: usize,
    pub newer_in_b: usize,
    pub equal: usize,
    pub has_changes: bool,
}

impl fmt::Display for ReconcileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "only_in_a={} only_in_b={} newer_in_a={} newer_in_b={} equal={}",
            self.only_in_a, self.only_in_b, self.newer_in_a, self.newer_in_b, self.equal
        )
    }
}
