use crate::{
    predicate::{Compare, CompareOp, Predicate},
    traits::Record,
    value::Value,
};
use std::cmp::Ordering;

/// Evaluate a predicate against a single row.
///
/// This is pure runtime evaluation: no schema access, no planning. A
/// missing field or an undefined comparison simply evaluates to `false`.
#[must_use]
pub fn matches<R: Record + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::And(children) => children.iter().all(|child| matches(row, child)),
        Predicate::Or(children) => children.iter().any(|child| matches(row, child)),
        Predicate::Not(inner) => !matches(row, inner),
        Predicate::Compare(cmp) => eval_compare(row, cmp),
    }
}

/// Evaluate one comparison leaf.
///
/// Returns `false` if the field is missing or the operand types do not
/// admit the comparison (ordering a bool against text, prefix-matching a
/// number, and so on).
fn eval_compare<R: Record + ?Sized>(row: &R, cmp: &Compare) -> bool {
    let Some(actual) = row.field(&cmp.field) else {
        return false;
    };

    match cmp.op {
        CompareOp::Eq => actual == cmp.value,
        CompareOp::Ne => actual != cmp.value,
        CompareOp::Lt => ordered(&actual, &cmp.value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => ordered(&actual, &cmp.value).is_some_and(Ordering::is_le),
        CompareOp::Gt => ordered(&actual, &cmp.value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => ordered(&actual, &cmp.value).is_some_and(Ordering::is_ge),
        CompareOp::StartsWith => text_pair(&actual, &cmp.value)
            .is_some_and(|(actual, expected)| actual.starts_with(expected)),
        CompareOp::Contains => {
            text_pair(&actual, &cmp.value).is_some_and(|(actual, expected)| actual.contains(expected))
        }
    }
}

// Order comparisons are only defined between two numbers or two texts.
fn ordered(actual: &Value, expected: &Value) -> Option<Ordering> {
    match (actual, expected) {
        (Value::Text(_), Value::Text(_)) => Some(actual.cmp(expected)),
        _ if actual.is_numeric() && expected.is_numeric() => Some(actual.cmp(expected)),
        _ => None,
    }
}

fn text_pair<'v>(actual: &'v Value, expected: &'v Value) -> Option<(&'v str, &'v str)> {
    Some((actual.as_text()?, expected.as_text()?))
}
