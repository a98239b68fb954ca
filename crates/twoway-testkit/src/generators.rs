//! Proptest generators for property-based testing.

use proptest::prelude::*;

use crate::record::Record;

/// Ids are drawn from a small range so that two independently generated
/// sides overlap often.
pub const ID_RANGE: u32 = 48;

/// Generate a short label.
pub fn label() -> impl Strategy<Value = String> {
    "[a-z]{0,6}".prop_map(String::from)
}

/// Generate a version.
pub fn version() -> impl Strategy<Value = u32> {
    0u32..6
}

/// Generate a single record.
pub fn record() -> impl Strategy<Value = Record> {
    (0..ID_RANGE, version(), label()).prop_map(|(id, version, label)| Record {
        id,
        version,
        label,
    })
}

/// Generate up to `max_len` records with distinct ids, in shuffled order.
pub fn unique_records(max_len: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::btree_map(0..ID_RANGE, (version(), label()), 0..=max_len)
        .prop_map(|by_id| {
            by_id
                .into_iter()
                .map(|(id, (version, label))| Record { id, version, label })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

/// Generate two sides whose ids never collide: even ids on A, odd on B.
pub fn disjoint_sides(max_len: usize) -> impl Strategy<Value = SidePair> {
    (unique_records(max_len), unique_records(max_len)).prop_map(|(a, b)| SidePair {
        a: a.into_iter()
            .map(|r| Record { id: r.id * 2, ..r })
            .collect(),
        b: b.into_iter()
            .map(|r| Record { id: r.id * 2 + 1, ..r })
            .collect(),
    })
}

/// Generate records drawn from a handful of ids, so duplicates are common.
pub fn crowded_records(max_len: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((0u32..6, version()), 0..=max_len)
        .prop_map(|pairs| pairs.into_iter().map(|(id, v)| Record::new(id, v)).collect())
}

/// Two input collections, each free of duplicate identities.
#[derive(Debug, Clone)]
pub struct SidePair {
    pub a: Vec<Record>,
    pub b: Vec<Record>,
}

impl Arbitrary for SidePair {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (unique_records(24), unique_records(24))
            .prop_map(|(a, b)| SidePair { a, b })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn test_unique_records_have_distinct_ids(records in unique_records(32)) {
            let ids: HashSet<u32> = records.iter().map(|r| r.id).collect();
            prop_assert_eq!(ids.len(), records.len());
        }

        #[test]
        fn test_disjoint_sides_share_no_id(pair in disjoint_sides(16)) {
            let a: HashSet<u32> = pair.a.iter().map(|r| r.id).collect();
            prop_assert!(pair.b.iter().all(|r| !a.contains(&r.id)));
        }

        #[test]
        fn test_record_in_range(record in record()) {
            prop_assert!(record.id < ID_RANGE);
        }
    }
}
