use crate::{
    source::{OrderDirection, QuerySource},
    spec::Specification,
};

/// Apply at most one ordering. Ascending wins when both are set;
/// descending is only consulted when ascending is absent.
pub(super) fn apply<T, Q: QuerySource<T>>(query: Q, spec: &Specification<T>) -> Q {
    if let Some(path) = spec.order_by() {
        query.order_by(path, OrderDirection::Asc)
    } else if let Some(path) = spec.order_by_desc() {
        query.order_by(path, OrderDirection::Desc)
    } else {
        query
    }
}
