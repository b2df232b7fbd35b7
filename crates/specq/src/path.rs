use std::{fmt, marker::PhantomData};
use thiserror::Error as ThisError;

///
/// PathExpr
///
/// Minimal navigation-expression tree. Stands in for the expression AST a
/// storage layer would hand us when describing a projection like
/// `x.address.city`: member accesses chained down to the root parameter,
/// optionally wrapped in a conversion node around value-typed terminals.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathExpr {
    /// The root parameter of a navigation lambda.
    Param,

    /// Member access on a target expression.
    Member { name: String, target: Box<Self> },

    /// Type-conversion wrapper inserted around value-typed terminals.
    /// Transparent to path extraction.
    Convert(Box<Self>),

    /// A method call. Never a valid navigation step.
    Call { method: String, target: Box<Self> },
}

///
/// PathError
///

#[derive(Debug, ThisError, Eq, PartialEq)]
pub enum PathError {
    #[error("expected a member access chain like x.field or x.field.subfield")]
    NotMemberAccess,
}

/// Resolve an expression into a dot-separated member path.
///
/// Unwraps a single outer conversion node, then walks member accesses from
/// the terminal back to the root, reversing so the output reads
/// root-to-leaf (`"address.city"`). An expression that contains no member
/// access at all is a programmer error and fails fast.
pub fn member_path(expr: &PathExpr) -> Result<String, PathError> {
    let mut node = match expr {
        PathExpr::Convert(inner) => inner.as_ref(),
        other => other,
    };

    let mut parts = Vec::new();
    while let PathExpr::Member { name, target } = node {
        parts.push(name.as_str());
        node = target.as_ref();
    }

    if parts.is_empty() {
        return Err(PathError::NotMemberAccess);
    }

    parts.reverse();
    Ok(parts.join("."))
}

///
/// Nav
///
/// Typed navigation descriptor rooted at `T` and terminating in `U`. The
/// type parameters only thread compile-time shape through include chains;
/// the runtime payload is the expression tree itself, which is validated
/// when the navigation is resolved into a path.
///

pub struct Nav<T, U> {
    expr: PathExpr,
    _marker: PhantomData<fn(&T) -> U>,
}

impl<T, U> Nav<T, U> {
    /// Navigation to a direct member of the root, `x.name`.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self::from_expr(PathExpr::Member {
            name: name.into(),
            target: Box::new(PathExpr::Param),
        })
    }

    /// Wrap an arbitrary expression. The expression is only checked once
    /// the navigation is resolved, so an invalid tree surfaces as a
    /// `PathError` at specification-construction time.
    #[must_use]
    pub const fn from_expr(expr: PathExpr) -> Self {
        Self {
            expr,
            _marker: PhantomData,
        }
    }

    /// Extend with a nested member access, rebinding the terminal type.
    #[must_use]
    pub fn dot<V>(self, name: impl Into<String>) -> Nav<T, V> {
        Nav::from_expr(PathExpr::Member {
            name: name.into(),
            target: Box::new(self.expr),
        })
    }

    /// Wrap in a conversion node, mirroring the boxing a language inserts
    /// around value-typed terminals.
    #[must_use]
    pub fn converted(self) -> Self {
        Self::from_expr(PathExpr::Convert(Box::new(self.expr)))
    }

    /// Borrow the underlying expression tree.
    #[must_use]
    pub const fn expr(&self) -> &PathExpr {
        &self.expr
    }

    /// Resolve into a dot-separated member path.
    pub fn resolve(&self) -> Result<String, PathError> {
        member_path(&self.expr)
    }
}

impl<T, U> Clone for Nav<T, U> {
    fn clone(&self) -> Self {
        Self {
            expr: self.expr.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, U> fmt::Debug for Nav<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Nav").field(&self.expr).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person;
    struct Address;

    #[test]
    fn member_path_joins_root_to_leaf() {
        let nav: Nav<Person, String> = Nav::<Person, Address>::field("address").dot("city");

        assert_eq!(nav.resolve(), Ok("address.city".to_string()));
    }

    #[test]
    fn member_path_unwraps_one_outer_conversion() {
        let nav: Nav<Person, i64> = Nav::field("age");
        let boxed = nav.converted();

        assert_eq!(boxed.resolve(), Ok("age".to_string()));
    }

    #[test]
    fn bare_parameter_is_not_a_member_access() {
        let nav: Nav<Person, Person> = Nav::from_expr(PathExpr::Param);

        assert_eq!(nav.resolve(), Err(PathError::NotMemberAccess));
    }

    #[test]
    fn method_call_is_not_a_member_access() {
        let nav: Nav<Person, String> = Nav::from_expr(PathExpr::Call {
            method: "to_string".to_string(),
            target: Box::new(PathExpr::Param),
        });

        assert_eq!(nav.resolve(), Err(PathError::NotMemberAccess));
    }

    #[test]
    fn conversion_around_a_call_still_fails() {
        let expr = PathExpr::Convert(Box::new(PathExpr::Call {
            method: "len".to_string(),
            target: Box::new(PathExpr::Param),
        }));

        assert_eq!(member_path(&expr), Err(PathError::NotMemberAccess));
    }
}
