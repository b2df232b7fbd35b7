//! Specification-pattern query layer: a reusable description of *what* to
//! fetch (filter criteria, eager-load paths, ordering, execution hints),
//! applied uniformly to either a storage-backed query source or an
//! already-materialized in-memory sequence.

// public exports are one module level down
pub mod evaluator;
pub mod path;
pub mod predicate;
pub mod source;
pub mod spec;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary; evaluators and errors are
/// imported from their modules.
///

pub mod prelude {
    pub use crate::{
        path::Nav,
        predicate::Predicate,
        source::{OrderDirection, QuerySource},
        spec::Specification,
        traits::Record,
        value::Value,
    };
}
