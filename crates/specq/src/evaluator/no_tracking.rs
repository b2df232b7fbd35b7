use crate::{source::QuerySource, spec::Specification};

/// Mark the source as producing detached rows when the hint is set.
pub(super) fn apply<T, Q: QuerySource<T>>(query: Q, spec: &Specification<T>) -> Q {
    if spec.is_no_tracking() {
        query.no_tracking()
    } else {
        query
    }
}
