use crate::{predicate::matches, spec::Specification, traits::Record};

/// Filter the sequence in place against the combined criteria.
pub(super) fn apply<T: Record>(mut items: Vec<T>, spec: &Specification<T>) -> Vec<T> {
    if let Some(predicate) = spec.criteria() {
        items.retain(|row| matches(row, predicate));
    }

    items
}
