//! Test fixtures and helpers.
//!
//! Common setup code for reconciliation tests.

use twoway_core::{reconcile, reconcile_ordered, Reconciled, Result};

use crate::record::{by_id, by_id_desc, by_version, Record};

/// Two sides under construction.
#[derive(Debug, Clone, Default)]
pub struct Fixture {
    pub a: Vec<Record>,
    pub b: Vec<Record>,
}

impl Fixture {
    /// Create an empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record that exists only on A.
    pub fn only_a(mut self, id: u32, version: u32) -> Self {
        self.a.push(Record::new(id, version));
        self
    }

    /// Add a record that exists only on B.
    pub fn only_b(mut self, id: u32, version: u32) -> Self {
        self.b.push(Record::new(id, version));
        self
    }

    /// Add the same identity to both sides with the given versions.
    pub fn shared(mut self, id: u32, version_a: u32, version_b: u32) -> Self {
        self.a.push(Record::new(id, version_a));
        self.b.push(Record::new(id, version_b));
        self
    }

    /// Reconcile A against B by id and version.
    pub fn reconcile(&self) -> Result<Reconciled<Record>> {
        reconcile(self.a.clone(), self.b.clone(), by_id, by_version)
    }

    /// Reconcile and order every category by descending id.
    pub fn reconcile_desc(&self) -> Result<Reconciled<Record>> {
        reconcile_ordered(self.a.clone(), self.b.clone(), by_id, by_version, by_id_desc)
    }

    /// Reconcile with the roles of A and B exchanged.
    pub fn reconcile_swapped(&self) -> Result<Reconciled<Record>> {
        reconcile(self.b.clone(), self.a.clone(), by_id, by_version)
    }
}

/// A fixture whose sides hold `count` identical records.
pub fn mirrored_fixture(count: u32) -> Fixture {
    (0..count).fold(Fixture::new(), |f, id| f.shared(id, 1, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_builds_both_sides() {
        let fixture = Fixture::new().only_a(1, 1).shared(2, 1, 3).only_b(4, 1);

        assert_eq!(fixture.a.len(), 2);
        assert_eq!(fixture.b.len(), 2);

        let r = fixture.reconcile().unwrap();
        assert_eq!(r.newer_in_b(), &[Record::new(2, 3)]);
    }

    #[test]
    fn test_swapped_mirrors_categories() {
        let fixture = Fixture::new().only_a(1, 1).shared(2, 5, 3);
        let swapped = fixture.reconcile_swapped().unwrap();

        assert_eq!(swapped.only_in_b(), &[Record::new(1, 1)]);
        assert_eq!(swapped.newer_in_b(), &[Record::new(2, 5)]);
    }

    #[test]
    fn test_mirrored_fixture_has_no_changes() {
        let r = mirrored_fixture(5).reconcile().unwrap();
        assert_eq!(r.equal().len(), 5);
        assert!(!r.has_changes());
    }
}
