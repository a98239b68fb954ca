//! The Reconciler: a reusable bundle of comparators and configuration.
//!
//! Comparators are stored as `Send + Sync` trait objects, so one instance
//! can be shared between threads and reused for any number of
//! reconciliations.

use std::cmp::Ordering;
use std::fmt;

use twoway_core::{
    reconcile_with, IdentityOrder, Recency, ReconcileConfig, Reconciled, Result,
};

type IdentityFn<T> = Box<dyn Fn(&T, &T) -> IdentityOrder + Send + Sync>;
type VersionFn<T> = Box<dyn Fn(&T, &T) -> Recency + Send + Sync>;
type OrderFn<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Reconciles pairs of collections of `T`.
///
/// # Example
///
/// ```
/// use twoway::{Reconciler, Recency};
///
/// #[derive(Debug, PartialEq)]
/// struct Note { guid: u64, modified: i64 }
///
/// let reconciler = Reconciler::new(
///     |a: &Note, b: &Note| a.guid.cmp(&b.guid).into(),
///     |a: &Note, b: &Note| Recency::greater_is_newer(a.modified.cmp(&b.modified)),
/// );
///
/// let local = vec![Note { guid: 1, modified: 10 }];
/// let remote = vec![Note { guid: 1, modified: 20 }, Note { guid: 2, modified: 5 }];
///
/// let diff = reconciler.reconcile(local, remote).unwrap();
/// assert_eq!(diff.newer_in_b(), &[Note { guid: 1, modified: 20 }]);
/// assert_eq!(diff.only_in_b().len(), 1);
/// ```
pub struct Reconciler<T> {
    identity: IdentityFn<T>,
    version: VersionFn<T>,
    result_order: Option<OrderFn<T>>,
    config: ReconcileConfig,
}

impl<T> Reconciler<T> {
    /// Create a reconciler from an identity order and a version order.
    pub fn new<I, V>(identity: I, version: V) -> Self
    where
        I: Fn(&T, &T) -> IdentityOrder + Send + Sync + 'static,
        V: Fn(&T, &T) -> Recency + Send + Sync + 'static,
    {
        Self {
            identity: Box::new(identity),
            version: Box::new(version),
            result_order: None,
            config: ReconcileConfig::default(),
        }
    }

    /// Order every output category with `order`.
    pub fn result_order<R>(mut self, order: R) -> Self
    where
        R: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.result_order = Some(Box::new(order));
        self
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ReconcileConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration used for every reconciliation.
    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Reconcile `a` against `b`.
    pub fn reconcile(
        &self,
        a: impl IntoIterator<Item = T>,
        b: impl IntoIterator<Item = T>,
    ) -> Result<Reconciled<T>> {
        let mut order = self
            .result_order
            .as_ref()
            .map(|order| move |x: &T, y: &T| order(x, y));

        reconcile_with(
            a,
            b,
            |x, y| (self.identity)(x, y),
            |x, y| (self.version)(x, y),
            order
                .as_mut()
                .map(|order| order as &mut dyn FnMut(&T, &T) -> Ordering),
            &self.config,
        )
    }
}

impl<T> fmt::Debug for Reconciler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reconciler")
            .field("result_order", &self.result_order.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
