//! In-memory pipeline: applies a specification to a materialized sequence.
//!
//! Only criteria and ordering apply here; eager loads and execution hints
//! are storage concerns with no in-memory counterpart.

mod criteria;
mod ordering;


use crate::{spec::Specification, traits::Record};

///
/// MemoryStage
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MemoryStage {
    Criteria,
    Ordering,
}

impl MemoryStage {
    fn apply<T: Record>(self, items: Vec<T>, spec: &Specification<T>) -> Vec<T> {
        match self {
            Self::Criteria => criteria::apply(items, spec),
            Self::Ordering => ordering::apply(items, spec),
        }
    }
}

/// Fixed stage order: filtering first, ordering second.
pub const MEMORY_PIPELINE: [MemoryStage; 2] = [MemoryStage::Criteria, MemoryStage::Ordering];

/// Apply the specification to an already-materialized sequence.
///
/// Both stages work in place, so a specification with neither criteria nor
/// ordering returns the input allocation unchanged. That identity is part
/// of the contract, not an accident; callers may rely on it.
pub fn evaluate<T: Record>(items: Vec<T>, spec: &Specification<T>) -> Vec<T> {
    MEMORY_PIPELINE
        .iter()
        .fold(items, |items, stage| stage.apply(items, spec))
}
