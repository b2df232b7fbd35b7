use crate::{source::QuerySource, spec::Specification};

/// Apply eager-load directives for every include path.
///
/// Includes are logically commutative; list order is preserved anyway so
/// the transformation is deterministic.
pub(super) fn apply<T, Q: QuerySource<T>>(query: Q, spec: &Specification<T>) -> Q {
    spec.include_paths()
        .iter()
        .fold(query, |query, path| query.include(path))
}
