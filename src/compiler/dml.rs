//! Statement compilers for the five DML shapes.
//!
//! Each function is a single-pass assembly of the final statement
//! string: table names pass through unquoted (callers pre-quote by
//! convention), column names are backtick-quoted, values are rendered
//! with the inline-literal policy of [`crate::ast::Value`].

use crate::ast::{Row, WhereExpr};
use crate::compiler::where_clause::where_clause;

/// Compile an INSERT statement.
///
/// An empty row yields `INSERT INTO t () VALUES ()`; the row payload is
/// the caller's contract.
pub fn insert(table: &str, row: &Row) -> String {
    let mut columns = String::new();
    let mut values = String::new();

    for (column, value) in row.iter() {
        if !columns.is_empty() {
            columns.push_str(", ");
        }
        columns.push('`');
        columns.push_str(column);
        columns.push('`');

        if !values.is_empty() {
            values.push_str(", ");
        }
        values.push_str(&value.to_string());
    }

    format!("INSERT INTO {} ({}) VALUES ({})", table, columns, values)
}

/// Compile an UPDATE statement.
///
/// The `WHERE` keyword is emitted even when the filter compiles empty.
pub fn update(table: &str, row: &Row, where_expr: &WhereExpr) -> String {
    let assignments = row
        .iter()
        .map(|(column, value)| format!("`{}` = {}", column, value))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {} WHERE {}",
        table,
        assignments,
        where_clause(where_expr)
    )
}

/// Compile a DELETE statement.
///
/// Same unconditional `WHERE` as [`update`].
pub fn delete(table: &str, where_expr: &WhereExpr) -> String {
    format!("DELETE FROM {} WHERE {}", table, where_clause(where_expr))
}

/// Compile a SELECT statement.
///
/// Projects `*` when `fields` is empty; the WHERE fragment appears only
/// when the compiled clause is non-empty; `LIMIT`/`OFFSET` always
/// terminate the statement.
pub fn select(
    table: &str,
    fields: &[&str],
    where_expr: &WhereExpr,
    offset: u64,
    limit: u64,
) -> String {
    let projection = if fields.is_empty() {
        "*".to_string()
    } else {
        fields.join(", ")
    };

    let mut sql = format!("SELECT {} FROM {}", projection, table);

    let clause = where_clause(where_expr);
    if !clause.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clause);
    }

    sql.push_str(&format!(" LIMIT {} OFFSET {}", limit, offset));
    sql
}

/// Compile a COUNT statement.
///
/// The compiled filter fragment lands directly after the table name;
/// no `WHERE` keyword is emitted on this path. The result is trimmed
/// of trailing whitespace.
pub fn count(table: &str, where_expr: Option<&WhereExpr>) -> String {
    let clause = where_expr.map(where_clause).unwrap_or_default();

    format!("SELECT COUNT(*) AS `count` FROM {} {}", table, clause)
        .trim_end()
        .to_string()
}
