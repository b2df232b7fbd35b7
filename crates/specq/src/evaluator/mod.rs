//! Evaluator pipelines.
//!
//! Each stage applies exactly one specification concern to a query source.
//! Stages are pure and stateless; the pipelines are fixed constants built
//! once and shared freely across threads and entity types.

mod criteria;
mod include_paths;
mod no_tracking;
mod ordering;
mod split_query;

pub mod memory;


use crate::{source::QuerySource, spec::Specification};

///
/// QueryStage
///
/// One concern of the query-source pipeline.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueryStage {
    Criteria,
    IncludePaths,
    NoTracking,
    SplitQuery,
    Ordering,
}

impl QueryStage {
    /// Whether this stage participates in criteria-only evaluation.
    #[must_use]
    pub const fn is_criteria(self) -> bool {
        matches!(self, Self::Criteria)
    }

    fn apply<T, Q: QuerySource<T>>(self, query: Q, spec: &Specification<T>) -> Q {
        match self {
            Self::Criteria => criteria::apply(query, spec),
            Self::IncludePaths => include_paths::apply(query, spec),
            Self::NoTracking => no_tracking::apply(query, spec),
            Self::SplitQuery => split_query::apply(query, spec),
            Self::Ordering => ordering::apply(query, spec),
        }
    }
}

/// Fixed stage order: filtering first, ordering last.
pub const QUERY_PIPELINE: [QueryStage; 5] = [
    QueryStage::Criteria,
    QueryStage::IncludePaths,
    QueryStage::NoTracking,
    QueryStage::SplitQuery,
    QueryStage::Ordering,
];

/// Apply every stage of the pipeline to `query`.
///
/// A missing specification leaves the source untouched.
pub fn apply_all<T, Q: QuerySource<T>>(query: Q, spec: Option<&Specification<T>>) -> Q {
    let Some(spec) = spec else {
        return query;
    };

    QUERY_PIPELINE
        .iter()
        .fold(query, |query, stage| stage.apply(query, spec))
}

/// Apply only the criteria stages.
///
/// Used to compute match counts independent of ordering, eager loads, and
/// execution hints.
pub fn apply_criteria_only<T, Q: QuerySource<T>>(query: Q, spec: Option<&Specification<T>>) -> Q {
    let Some(spec) = spec else {
        return query;
    };

    QUERY_PIPELINE
        .iter()
        .filter(|stage| stage.is_criteria())
        .fold(query, |query, stage| stage.apply(query, spec))
}
