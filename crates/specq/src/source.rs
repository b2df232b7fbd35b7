use crate::predicate::Predicate;
use serde::{Deserialize, Serialize};

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum OrderDirection {
    Asc,
    Desc,
}

///
/// QuerySource
///
/// The storage engine's queryable abstraction. The engine only *transforms*
/// a source through these five operations; SQL translation, round trips,
/// and materialization stay entirely on the storage side.
///
/// Implementations are expected to be cheap value transformations: each
/// operation consumes the source and returns the transformed one.
///

pub trait QuerySource<T>: Sized {
    /// Restrict the source to rows matching `predicate`.
    #[must_use]
    fn filter(self, predicate: &Predicate) -> Self;

    /// Request eager loading of the dot-separated navigation `path`.
    #[must_use]
    fn include(self, path: &str) -> Self;

    /// Mark the source as producing detached, untracked rows.
    #[must_use]
    fn no_tracking(self) -> Self;

    /// Mark the source to execute eager loads as separate round trips.
    #[must_use]
    fn split_query(self) -> Self;

    /// Order rows by the field at `path`.
    #[must_use]
    fn order_by(self, path: &str, direction: OrderDirection) -> Self;
}
