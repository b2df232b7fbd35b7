mod criteria;
mod include;


pub use include::IncludeChain;

use crate::{
    path::{Nav, PathError},
    predicate::Predicate,
};
use std::marker::PhantomData;

///
/// Specification
///
/// Reusable, composable description of a query over entity type `T`:
/// optional filter criteria, eager-load paths in insertion order, at most
/// one active ordering, and two execution hints.
///
/// Mutators are intended for the construction window, while the value is
/// still exclusively owned by the code assembling it. Evaluators only
/// consume the read accessors; nothing mutates a specification after it
/// has been handed to a pipeline, so sharing across threads needs no
/// coordination.
///

#[derive(Clone, Debug)]
pub struct Specification<T> {
    criteria: Option<Predicate>,
    include_paths: Vec<String>,
    order_by: Option<String>,
    order_by_desc: Option<String>,
    no_tracking: bool,
    split_query: bool,
    _marker: PhantomData<fn(&T)>,
}

impl<T> Default for Specification<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Specification<T> {
    /// Empty specification: matches everything, loads nothing eagerly.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            criteria: None,
            include_paths: Vec::new(),
            order_by: None,
            order_by_desc: None,
            no_tracking: false,
            split_query: false,
            _marker: PhantomData,
        }
    }

    // ------------------------------------------------------------------
    // Read accessors (the contract evaluators consume)
    // ------------------------------------------------------------------

    /// Combined filter criteria; `None` matches everything.
    #[must_use]
    pub const fn criteria(&self) -> Option<&Predicate> {
        self.criteria.as_ref()
    }

    /// Eager-load paths in insertion order.
    #[must_use]
    pub fn include_paths(&self) -> &[String] {
        &self.include_paths
    }

    /// Ascending order key path. Wins over descending when both are set.
    #[must_use]
    pub fn order_by(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    /// Descending order key path. Only consulted when ascending is absent.
    #[must_use]
    pub fn order_by_desc(&self) -> Option<&str> {
        self.order_by_desc.as_deref()
    }

    /// Whether results should be produced detached from change tracking.
    #[must_use]
    pub const fn is_no_tracking(&self) -> bool {
        self.no_tracking
    }

    /// Whether eager loads should run as separate round trips.
    /// Only takes effect when at least one include path exists.
    #[must_use]
    pub const fn is_split_query(&self) -> bool {
        self.split_query
    }

    // ------------------------------------------------------------------
    // Ordering and hints (construction window)
    // ------------------------------------------------------------------

    /// Order ascending by the navigated key. Last write wins.
    pub fn apply_order_by<K>(&mut self, nav: Nav<T, K>) -> Result<(), PathError> {
        self.order_by = Some(nav.resolve()?);
        Ok(())
    }

    /// Order descending by the navigated key. Last write wins.
    pub fn apply_order_by_desc<K>(&mut self, nav: Nav<T, K>) -> Result<(), PathError> {
        self.order_by_desc = Some(nav.resolve()?);
        Ok(())
    }

    /// Produce detached results.
    pub const fn enable_no_tracking(&mut self) {
        self.no_tracking = true;
    }

    /// Run eager loads as separate round trips.
    pub const fn enable_split_query(&mut self) {
        self.split_query = true;
    }
}
