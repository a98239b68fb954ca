//! Merge-classify: the sorted two-way merge-join at the heart of
//! reconciliation.
//!
//! Algorithm:
//! 1. Take ownership of both inputs, tagging each item with its input position
//! 2. Stable-sort each side by the identity order
//! 3. Check each side for duplicate identities (see [`DuplicatePolicy`])
//! 4. Walk both sides with one cursor each:
//!    - `AFirst`: the A item has no match left in B, so it is only in A
//!    - `BFirst`: symmetric, only in B
//!    - `Same`: consult the version order, then advance both cursors
//! 5. Whatever remains on the non-exhausted side is only on that side
//!
//! Sorting is `O(n log n)` per side; the walk is linear. Comparators must be
//! consistent total orders. Intransitive or non-deterministic comparators
//! give an undefined classification and may make the standard sort panic.

use std::cmp::Ordering;

use crate::config::{DuplicatePolicy, ReconcileConfig};
use crate::error::{ReconcileError, Result};
use crate::reconciled::{Classified, Reconciled};
use crate::types::{IdentityOrder, Recency, Side};

/// Reconcile `a` against `b` with the default configuration.
///
/// Output sequences are in ascending identity order.
///
/// # Example
///
/// ```
/// use twoway_core::{reconcile, Recency};
///
/// let local = vec![(1, 5), (2, 1)];
/// let remote = vec![(2, 9), (3, 1)];
///
/// let diff = reconcile(
///     local,
///     remote,
///     |x: &(u32, u32), y: &(u32, u32)| x.0.cmp(&y.0).into(),
///     |x: &(u32, u32), y: &(u32, u32)| Recency::greater_is_newer(x.1.cmp(&y.1)),
/// )
/// .unwrap();
///
/// assert_eq!(diff.only_in_a(), &[(1, 5)]);
/// assert_eq!(diff.newer_in_b(), &[(2, 9)]);
/// assert_eq!(diff.not().get(&(2, 9)), Some(&(2, 1)));
/// ```
pub fn reconcile<T, I, V>(
    a: impl IntoIterator<Item = T>,
    b: impl IntoIterator<Item = T>,
    identity: I,
    version: V,
) -> Result<Reconciled<T>>
where
    I: FnMut(&T, &T) -> IdentityOrder,
    V: FnMut(&T, &T) -> Recency,
{
    reconcile_with(a, b, identity, version, None, &ReconcileConfig::default())
}

/// Reconcile `a` against `b`, then order every category by `result_order`.
pub fn reconcile_ordered<T, I, V, R>(
    a: impl IntoIterator<Item = T>,
    b: impl IntoIterator<Item = T>,
    identity: I,
    version: V,
    mut result_order: R,
) -> Result<Reconciled<T>>
where
    I: FnMut(&T, &T) -> IdentityOrder,
    V: FnMut(&T, &T) -> Recency,
    R: FnMut(&T, &T) -> Ordering,
{
    reconcile_with(
        a,
        b,
        identity,
        version,
        Some(&mut result_order),
        &ReconcileConfig::default(),
    )
}

/// Reconcile `a` against `b` with an explicit configuration and an optional
/// result order.
///
/// `version` is only called on pairs that `identity` reported as `Same`.
/// `result_order` never affects classification.
pub fn reconcile_with<T, I, V>(
    a: impl IntoIterator<Item = T>,
    b: impl IntoIterator<Item = T>,
    mut identity: I,
    mut version: V,
    result_order: Option<&mut dyn FnMut(&T, &T) -> Ordering>,
    config: &ReconcileConfig,
) -> Result<Reconciled<T>>
where
    I: FnMut(&T, &T) -> IdentityOrder,
    V: FnMut(&T, &T) -> Recency,
{
    let a = sort_side(a, &mut identity);
    let b = sort_side(b, &mut identity);

    check_duplicates(&a, Side::A, &mut identity, config.duplicates)?;
    check_duplicates(&b, Side::B, &mut identity, config.duplicates)?;

    let (len_a, len_b) = (a.len(), b.len());
    let classified = merge_walk(
        a.into_iter().map(|(_, item)| item),
        b.into_iter().map(|(_, item)| item),
        &mut identity,
        &mut version,
    );

    let result = classified.freeze(result_order, config.order_equal_by);

    tracing::debug!(
        len_a,
        len_b,
        only_in_a = result.only_in_a().len(),
        only_in_b = result.only_in_b().len(),
        newer_in_a = result.newer_in_a().len(),
        newer_in_b = result.newer_in_b().len(),
        equal = result.equal().len(),
        "reconciled"
    );

    Ok(result)
}

/// Collect one side and stable-sort it by identity, keeping input positions.
fn sort_side<T, I>(items: impl IntoIterator<Item = T>, identity: &mut I) -> Vec<(usize, T)>
where
    I: FnMut(&T, &T) -> IdentityOrder,
{
    let mut items: Vec<(usize, T)> = items.into_iter().enumerate().collect();
    items.sort_by(|(_, x), (_, y)| identity(x, y).to_ordering());
    items
}

/// Scan a sorted side for neighbours sharing an identity.
fn check_duplicates<T, I>(
    sorted: &[(usize, T)],
    side: Side,
    identity: &mut I,
    policy: DuplicatePolicy,
) -> Result<()>
where
    I: FnMut(&T, &T) -> IdentityOrder,
{
    for pair in sorted.windows(2) {
        let (first, x) = &pair[0];
        let (second, y) = &pair[1];
        if !identity(x, y).is_same() {
            continue;
        }

        match policy {
            DuplicatePolicy::Reject => {
                return Err(ReconcileError::DuplicateIdentity {
                    side,
                    first: *first,
                    second: *second,
                });
            }
            DuplicatePolicy::PairInOrder => {
                tracing::warn!(
                    %side,
                    first = *first,
                    second = *second,
                    "duplicate identity, pairing in input order"
                );
            }
        }
    }

    Ok(())
}

/// Walk two identity-sorted sides with one cursor each.
fn merge_walk<T, I, V>(
    mut a: impl Iterator<Item = T>,
    mut b: impl Iterator<Item = T>,
    identity: &mut I,
    version: &mut V,
) -> Classified<T>
where
    I: FnMut(&T, &T) -> IdentityOrder,
    V: FnMut(&T, &T) -> Recency,
{
    let mut out = Classified::new();
    let mut cur_a = a.next();
    let mut cur_b = b.next();

    loop {
        let (x, y) = match (cur_a.take(), cur_b.take()) {
            (Some(x), Some(y)) => (x, y),
            (rest_a, rest_b) => {
                // At most one side still holds items.
                out.only_in_a.extend(rest_a.into_iter().chain(a));
                out.only_in_b.extend(rest_b.into_iter().chain(b));
                return out;
            }
        };

        match identity(&x, &y) {
            IdentityOrder::AFirst => {
                out.only_in_a.push(x);
                cur_a = a.next();
                cur_b = Some(y);
            }
            IdentityOrder::BFirst => {
                out.only_in_b.push(y);
                cur_a = Some(x);
                cur_b = b.next();
            }
            IdentityOrder::Same => {
                let recency = version(&x, &y);
                tracing::trace!(?recency, "identity match");
                match recency {
                    Recency::ANewer => out.push_newer_in_a(x, y),
                    Recency::SameVersion => out.equal.push((x, y)),
                    Recency::BNewer => out.push_newer_in_b(y, x),
                }
                cur_a = a.next();
                cur_b = b.next();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type Item = (u32, u32);

    fn by_id(x: &Item, y: &Item) -> IdentityOrder {
        x.0.cmp(&y.0).into()
    }

    fn by_version(x: &Item, y: &Item) -> Recency {
        Recency::greater_is_newer(x.1.cmp(&y.1))
    }

    #[test]
    fn test_mixed_scenario() {
        let r = reconcile(vec![(1, 5), (2, 1)], vec![(2, 9), (3, 1)], by_id, by_version).unwrap();

        assert_eq!(r.only_in_a(), &[(1, 5)]);
        assert_eq!(r.only_in_b(), &[(3, 1)]);
        assert!(r.newer_in_a().is_empty());
        assert_eq!(r.newer_in_b(), &[(2, 9)]);
        assert_eq!(r.not().get(&(2, 9)), Some(&(2, 1)));
        assert!(r.equal().is_empty());
        assert!(r.has_changes());
    }

    #[test]
    fn test_identical_single_item() {
        let r = reconcile(vec![(7, 2)], vec![(7, 2)], by_id, by_version).unwrap();

        assert_eq!(r.equal(), &[((7, 2), (7, 2))]);
        assert!(r.only_in_a().is_empty());
        assert!(r.only_in_b().is_empty());
        assert!(r.not().is_empty());
        assert!(!r.has_changes());
    }

    #[test]
    fn test_newer_in_a() {
        let r = reconcile(vec![(4, 3)], vec![(4, 1)], by_id, by_version).unwrap();

        assert_eq!(r.newer_in_a(), &[(4, 3)]);
        assert_eq!(r.not().get(&(4, 3)), Some(&(4, 1)));
    }

    #[test]
    fn test_empty_inputs() {
        let r = reconcile(Vec::<Item>::new(), Vec::new(), by_id, by_version).unwrap();
        assert!(!r.has_changes());
        assert_eq!(r.total_items(), 0);

        let r = reconcile(vec![(2, 1), (1, 1)], Vec::new(), by_id, by_version).unwrap();
        assert_eq!(r.only_in_a(), &[(1, 1), (2, 1)]);

        let r = reconcile(Vec::new(), vec![(2, 1), (1, 1)], by_id, by_version).unwrap();
        assert_eq!(r.only_in_b(), &[(1, 1), (2, 1)]);
    }

    #[test]
    fn test_inputs_sorted_before_walk() {
        let a = vec![(5, 1), (1, 1), (3, 2)];
        let b = vec![(3, 1), (4, 1), (1, 1)];
        let r = reconcile(a, b, by_id, by_version).unwrap();

        assert_eq!(r.only_in_a(), &[(5, 1)]);
        assert_eq!(r.only_in_b(), &[(4, 1)]);
        assert_eq!(r.newer_in_a(), &[(3, 2)]);
        assert_eq!(r.equal(), &[((1, 1), (1, 1))]);
    }

    #[test]
    fn test_leftovers_go_to_only_category() {
        let r = reconcile(vec![(1, 1)], vec![(1, 1), (2, 1), (3, 1)], by_id, by_version).unwrap();
        assert_eq!(r.only_in_b(), &[(2, 1), (3, 1)]);

        let r = reconcile(vec![(1, 1), (8, 1), (9, 1)], vec![(1, 1)], by_id, by_version).unwrap();
        assert_eq!(r.only_in_a(), &[(8, 1), (9, 1)]);
    }

    #[test]
    fn test_version_only_called_on_matches() {
        let mut calls = Vec::new();
        let r = reconcile(
            vec![(1, 1), (2, 1)],
            vec![(2, 2), (3, 1)],
            by_id,
            |x: &Item, y: &Item| {
                calls.push((x.0, y.0));
                by_version(x, y)
            },
        )
        .unwrap();

        assert_eq!(calls, vec![(2, 2)]);
        assert_eq!(r.newer_in_b(), &[(2, 2)]);
    }

    #[test]
    fn test_result_order_descending() {
        let r = reconcile_ordered(
            vec![(1, 1), (3, 1), (2, 1)],
            Vec::new(),
            by_id,
            by_version,
            |x: &Item, y: &Item| y.0.cmp(&x.0),
        )
        .unwrap();

        assert_eq!(r.only_in_a(), &[(3, 1), (2, 1), (1, 1)]);
    }

    #[test]
    fn test_equal_ordered_by_b_side() {
        // Every match counts as equal; only the B items carry distinct sort keys.
        let config = ReconcileConfig::default().order_equal_by(Side::B);
        let mut by_second = |x: &Item, y: &Item| x.1.cmp(&y.1);
        let r = reconcile_with(
            vec![(1, 0), (2, 0)],
            vec![(1, 9), (2, 3)],
            by_id,
            |_: &Item, _: &Item| Recency::SameVersion,
            Some(&mut by_second),
            &config,
        )
        .unwrap();

        assert_eq!(r.equal(), &[((2, 0), (2, 3)), ((1, 0), (1, 9))]);
    }

    #[test]
    fn test_duplicate_identity_rejected() {
        let err = reconcile(vec![(1, 1), (2, 1), (1, 2)], vec![(1, 1)], by_id, by_version)
            .unwrap_err();

        assert_eq!(
            err,
            ReconcileError::DuplicateIdentity {
                side: Side::A,
                first: 0,
                second: 2,
            }
        );
    }

    #[test]
    fn test_duplicate_identity_on_b() {
        let err = reconcile(vec![(1, 1)], vec![(4, 1), (4, 2)], by_id, by_version).unwrap_err();
        assert!(matches!(
            err,
            ReconcileError::DuplicateIdentity { side: Side::B, .. }
        ));
    }

    #[test]
    fn test_duplicate_identity_paired_in_order() {
        let config = ReconcileConfig::default().duplicates(DuplicatePolicy::PairInOrder);
        let r = reconcile_with(
            vec![(1, 3), (1, 1)],
            vec![(1, 2)],
            by_id,
            by_version,
            None,
            &config,
        )
        .unwrap();

        // First duplicate (input order) pairs with B; the second is left over.
        assert_eq!(r.newer_in_a(), &[(1, 3)]);
        assert_eq!(r.only_in_a(), &[(1, 1)]);
        assert_eq!(r.total_items(), 3);
    }

    proptest! {
        #[test]
        fn test_every_item_accounted_for(
            a in prop::collection::btree_map(0u32..32, 0u32..4, 0..16),
            b in prop::collection::btree_map(0u32..32, 0u32..4, 0..16),
        ) {
            let r = reconcile(a.clone(), b.clone(), by_id, by_version).unwrap();
            let matched = r.newer_in_a().len() + r.newer_in_b().len() + r.equal().len();

            prop_assert_eq!(r.total_items(), a.len() + b.len());
            prop_assert_eq!(r.only_in_a().len() + matched, a.len());
            prop_assert_eq!(r.not().len(), r.newer_in_a().len() + r.newer_in_b().len());
        }
    }
}
