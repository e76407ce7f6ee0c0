//! Recursive WHERE clause compiler.

use crate::ast::{Operator, Predicate, SimpleExpr, WhereExpr};

/// Compile a filter tree into a parenthesized SQL boolean expression.
///
/// The leading `WHERE` keyword is not included. An empty leaf, or a
/// combinator whose members all compile empty, yields `""` with no
/// parentheses.
pub fn where_clause(expr: &WhereExpr) -> String {
    match expr {
        WhereExpr::Simple(simple) => simple_clause(simple),
        WhereExpr::And(parts) => group_clause(parts, " AND "),
        WhereExpr::Or(parts) => group_clause(parts, " OR "),
    }
}

/// Compile each member, drop the ones that compile empty, join the
/// survivors, wrap.
fn group_clause(parts: &[WhereExpr], joiner: &str) -> String {
    let clause = parts
        .iter()
        .map(where_clause)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(joiner);

    if clause.is_empty() {
        clause
    } else {
        format!("({})", clause)
    }
}

/// A leaf with several entries is an implicit conjunction.
fn simple_clause(simple: &SimpleExpr) -> String {
    let clause = simple
        .iter()
        .map(|(column, predicate)| field_test(column, predicate))
        .collect::<Vec<_>>()
        .join(" AND ");

    if clause.is_empty() {
        clause
    } else {
        format!("({})", clause)
    }
}

/// Render one `` `column` <op> <value> `` fragment.
fn field_test(column: &str, predicate: &Predicate) -> String {
    // NULL comparisons ignore the operator symbol: equality becomes IS,
    // every other operator becomes IS NOT.
    if predicate.value.is_null() {
        let symbol = if predicate.op == Operator::Eq {
            "IS"
        } else {
            "IS NOT"
        };
        return format!("`{}` {} null", column, symbol);
    }

    let mut lexeme = predicate.value.lexeme();
    if predicate.op.is_pattern() {
        lexeme = wrap_pattern(predicate.op, lexeme);
    }

    // Double quotes track the runtime value kind, after pattern
    // wrapping. A number under a LIKE operator stays unquoted.
    let rendered = if predicate.value.is_string() {
        format!("\"{}\"", lexeme)
    } else {
        lexeme
    };

    format!("`{}` {} {}", column, predicate.op.sql_symbol(), rendered)
}

fn wrap_pattern(op: Operator, lexeme: String) -> String {
    match op {
        Operator::StartsWith | Operator::NotStartsWith => format!("{}%", lexeme),
        Operator::EndsWith | Operator::NotEndsWith => format!("%{}", lexeme),
        Operator::Contains | Operator::NotContains => format!("%{}%", lexeme),
        _ => lexeme,
    }
}
