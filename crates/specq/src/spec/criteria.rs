use super::Specification;
use crate::predicate::Predicate;

///
/// Criteria builder
///
/// Folds filters into a single combined predicate, flat and left to right:
/// each call combines with the *entire* criteria accumulated so far, never
/// with just the preceding term. `filter(a); or_filter(b); filter(c)`
/// therefore yields `(a OR b) AND c`.
///

impl<T> Specification<T> {
    /// Add a filter, AND-combining with any existing criteria.
    /// The first call establishes the base criteria.
    pub fn filter(&mut self, predicate: Predicate) {
        self.criteria = Some(match self.criteria.take() {
            Some(existing) => existing & predicate,
            None => predicate,
        });
    }

    /// Add a filter, OR-combining with the entire criteria so far.
    ///
    /// Called first, this establishes the base criteria exactly like
    /// `filter` would: OR with nothing is the identity. That behavior is
    /// deliberate and relied upon by conditional composition.
    pub fn or_filter(&mut self, predicate: Predicate) {
        self.criteria = Some(match self.criteria.take() {
            Some(existing) => existing | predicate,
            None => predicate,
        });
    }

    /// `filter`, but only when `condition` holds.
    pub fn filter_if(&mut self, condition: bool, predicate: Predicate) {
        if condition {
            self.filter(predicate);
        }
    }

    /// `or_filter`, but only when `condition` holds.
    pub fn or_filter_if(&mut self, condition: bool, predicate: Predicate) {
        if condition {
            self.or_filter(predicate);
        }
    }
}
