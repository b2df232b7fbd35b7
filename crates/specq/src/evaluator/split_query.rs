use crate::{source::QuerySource, spec::Specification};

/// Mark the source to run eager loads as separate round trips.
///
/// Splitting without any include path would be meaningless, so the hint
/// only takes effect when eager loads exist.
pub(super) fn apply<T, Q: QuerySource<T>>(query: Q, spec: &Specification<T>) -> Q {
    if spec.is_split_query() && !spec.include_paths().is_empty() {
        query.split_query()
    } else {
        query
    }
}
