mod eval;

pub use eval::matches;

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr};

///
/// Predicate AST
///
/// Pure, schema-agnostic representation of filter criteria: a tagged
/// boolean tree (AND/OR/NOT) over field comparisons. Construction is
/// purely structural; interpretation happens in the evaluators or in
/// whatever storage layer walks the tree.
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    StartsWith,
    Contains,
}

///
/// Compare
///
/// A single comparison leaf: field name, operator, expected value.
/// Field names are accepted as strings; whether a field exists is the
/// row's or storage layer's concern.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Compare {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl Compare {
    #[must_use]
    pub fn new(field: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(Compare),
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::Or(vec![self, rhs])
    }
}

// ------------------------------------------------------------------
// Leaf constructors
// ------------------------------------------------------------------

#[must_use]
pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Predicate {
    Predicate::Compare(Compare::new(field, CompareOp::Eq, value.into()))
}

#[must_use]
pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Predicate {
    Predicate::Compare(Compare::new(field, CompareOp::Ne, value.into()))
}

#[must_use]
pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Predicate {
    Predicate::Compare(Compare::new(field, CompareOp::Lt, value.into()))
}

#[must_use]
pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Predicate {
    Predicate::Compare(Compare::new(field, CompareOp::Lte, value.into()))
}

#[must_use]
pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Predicate {
    Predicate::Compare(Compare::new(field, CompareOp::Gt, value.into()))
}

#[must_use]
pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Predicate {
    Predicate::Compare(Compare::new(field, CompareOp::Gte, value.into()))
}

/// Text prefix match.
#[must_use]
pub fn starts_with(field: impl Into<String>, value: impl Into<String>) -> Predicate {
    Predicate::Compare(Compare::new(
        field,
        CompareOp::StartsWith,
        Value::Text(value.into()),
    ))
}

/// Text substring match.
#[must_use]
pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Predicate {
    Predicate::Compare(Compare::new(
        field,
        CompareOp::Contains,
        Value::Text(value.into()),
    ))
}

#[must_use]
pub fn not(predicate: Predicate) -> Predicate {
    Predicate::Not(Box::new(predicate))
}
