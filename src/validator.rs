//! Kind compatibility checks for filter trees.
//!
//! The compilers are total: handed an operator against a value kind it
//! cannot compare, they render syntactically valid but semantically
//! wrong SQL. These checks let a caller reject such trees up front; the
//! compile path never calls them.

use crate::ast::{Operator, Predicate, Value, WhereExpr};
use crate::error::{SiftError, SiftResult};

/// Walk a filter tree and verify every operator/value pairing.
///
/// Returns the first violation found, in tree order.
pub fn check_expr(expr: &WhereExpr) -> SiftResult<()> {
    match expr {
        WhereExpr::Simple(simple) => {
            for (column, predicate) in simple.iter() {
                check_predicate(column, predicate)?;
            }
            Ok(())
        }
        WhereExpr::And(parts) | WhereExpr::Or(parts) => {
            for part in parts {
                check_expr(part)?;
            }
            Ok(())
        }
    }
}

fn check_predicate(column: &str, predicate: &Predicate) -> SiftResult<()> {
    let compatible = match &predicate.value {
        // NULL is only meaningful under the IS / IS NOT overrides.
        Value::Null => matches!(predicate.op, Operator::Eq | Operator::Ne),
        Value::Bool(_) => predicate.op.compares_bools(),
        Value::Int(_) | Value::Float(_) => predicate.op.compares_numbers(),
        Value::String(_) => predicate.op.compares_strings(),
    };

    if compatible {
        Ok(())
    } else {
        Err(SiftError::KindMismatch {
            column: column.to_string(),
            op: predicate.op,
            kind: predicate.value.kind(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::{contains, eq, gt, lte, ne, starts_with};
    use crate::ast::{SimpleExpr, Value};

    #[test]
    fn test_accepts_matching_kinds() {
        let expr = WhereExpr::or([
            WhereExpr::field("name", starts_with("Krish")),
            SimpleExpr::new()
                .field("age", gt(15))
                .field("age", lte(64))
                .into(),
            WhereExpr::field("active", eq(true)),
            WhereExpr::field("address", ne(Value::Null)),
        ]);
        assert!(check_expr(&expr).is_ok());
    }

    #[test]
    fn test_rejects_ordering_on_string() {
        let expr = WhereExpr::field("name", gt("Krish"));
        match check_expr(&expr) {
            Err(SiftError::KindMismatch { column, op, kind }) => {
                assert_eq!(column, "name");
                assert_eq!(op, Operator::Gt);
                assert_eq!(kind, "string");
            }
            other => panic!("expected KindMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_pattern_on_number() {
        let expr = WhereExpr::field("age", starts_with(21));
        assert!(matches!(
            check_expr(&expr),
            Err(SiftError::KindMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_null_under_pattern_operator() {
        let expr = WhereExpr::field("address", contains(Value::Null));
        assert!(matches!(
            check_expr(&expr),
            Err(SiftError::KindMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_bool_under_ordering() {
        let expr = WhereExpr::field("active", gt(true));
        assert!(matches!(
            check_expr(&expr),
            Err(SiftError::KindMismatch { .. })
        ));
    }

    #[test]
    fn test_violation_inside_nested_branch_is_found() {
        let expr = WhereExpr::and([
            WhereExpr::field("name", eq("Tejas")),
            WhereExpr::or([WhereExpr::field("phone", gt("00"))]),
        ]);
        assert!(check_expr(&expr).is_err());
    }
}
