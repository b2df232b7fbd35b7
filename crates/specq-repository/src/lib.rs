//! Specification-driven read surface on top of the `specq` engine:
//! pagination models, the storage backend contract, and a generic
//! repository that wires specifications through the evaluator pipelines.

// public exports are one module level down
pub mod backend;
pub mod page;
pub mod repository;

// test
#[cfg(test)]
pub(crate) mod test_support;
