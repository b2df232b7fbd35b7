use crate::{spec::Specification, traits::Record};
use std::cmp::Reverse;

/// Sort the sequence in place by the active order key.
///
/// Ascending wins when both orderings are set. The sort is stable and
/// missing keys group first (ascending) or last (descending) via `Option`
/// ordering.
pub(super) fn apply<T: Record>(mut items: Vec<T>, spec: &Specification<T>) -> Vec<T> {
    if let Some(path) = spec.order_by() {
        items.sort_by_cached_key(|row| row.field(path));
    } else if let Some(path) = spec.order_by_desc() {
        items.sort_by_cached_key(|row| Reverse(row.field(path)));
    }

    items
}
