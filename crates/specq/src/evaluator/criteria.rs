use crate::{source::QuerySource, spec::Specification};

/// Apply the combined filter criteria. Pass through when none is set.
pub(super) fn apply<T, Q: QuerySource<T>>(query: Q, spec: &Specification<T>) -> Q {
    match spec.criteria() {
        Some(predicate) => query.filter(predicate),
        None => query,
    }
}
