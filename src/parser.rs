//! Filter-shape parser.
//!
//! Filter descriptions travel as plain JSON objects: either a
//! combinator (`{"OR": [...]}`, `{"AND": [...]}`) or a flat object of
//! column tests (`{"age": {"op": "GREATER_THAN", "value": 15}}`). This
//! module turns that shape into the tagged [`WhereExpr`] tree, deciding
//! the variant once at construction time.
//!
//! A combinator key only discriminates when it is the object's *sole*
//! key; a multi-key object is always a simple expression, so a column
//! legitimately named `AND` or `OR` can still be filtered on alongside
//! its neighbors.

use serde_json::Value as Json;

use crate::ast::{Operator, Predicate, Row, SimpleExpr, Value, WhereExpr};
use crate::error::{SiftError, SiftResult};

/// Parse a JSON filter description into a where-expression tree.
pub fn parse_where(json: &Json) -> SiftResult<WhereExpr> {
    let object = json.as_object().ok_or_else(|| {
        SiftError::MalformedExpression(format!("expected a filter object, got {}", json))
    })?;

    if object.len() == 1 {
        if let Some(parts) = object.get("AND") {
            return Ok(WhereExpr::And(parse_members(parts, "AND")?));
        }
        if let Some(parts) = object.get("OR") {
            return Ok(WhereExpr::Or(parse_members(parts, "OR")?));
        }
    }

    let mut simple = SimpleExpr::new();
    for (column, test) in object {
        simple = simple.field(column.clone(), parse_predicate(column, test)?);
    }
    Ok(WhereExpr::Simple(simple))
}

/// Parse a flat JSON object into a [`Row`] payload.
pub fn parse_row(json: &Json) -> SiftResult<Row> {
    let object = json.as_object().ok_or_else(|| {
        SiftError::MalformedExpression(format!("expected a row object, got {}", json))
    })?;

    let mut row = Row::new();
    for (column, value) in object {
        row = row.set(column.clone(), parse_value(value)?);
    }
    Ok(row)
}

fn parse_members(parts: &Json, combinator: &str) -> SiftResult<Vec<WhereExpr>> {
    let parts = parts.as_array().ok_or_else(|| {
        SiftError::MalformedExpression(format!(
            "{} expects an array of sub-expressions",
            combinator
        ))
    })?;

    parts.iter().map(parse_where).collect()
}

fn parse_predicate(column: &str, test: &Json) -> SiftResult<Predicate> {
    let object = test.as_object().ok_or_else(|| {
        SiftError::MalformedExpression(format!(
            "column '{}' expects an {{op, value}} object",
            column
        ))
    })?;

    let raw_op = object.get("op").and_then(Json::as_str).ok_or_else(|| {
        SiftError::MalformedExpression(format!("column '{}' is missing an 'op' string", column))
    })?;
    let op: Operator = serde_json::from_value(Json::String(raw_op.to_string()))
        .map_err(|_| SiftError::InvalidOperator(raw_op.to_string()))?;

    let value = object.get("value").ok_or_else(|| {
        SiftError::MalformedExpression(format!("column '{}' is missing 'value'", column))
    })?;

    Ok(Predicate::new(op, parse_value(value)?))
}

fn parse_value(json: &Json) -> SiftResult<Value> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else {
                n.as_f64()
                    .map(Value::Float)
                    .ok_or_else(|| SiftError::InvalidValue(format!("unrepresentable number {}", n)))
            }
        }
        Json::String(s) => Ok(Value::String(s.clone())),
        other => Err(SiftError::InvalidValue(format!(
            "expected a scalar, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::{eq, gt, starts_with};
    use serde_json::json;

    #[test]
    fn test_parse_simple_expression() {
        let json = json!({
            "name": { "op": "STARTS_WITH", "value": "Krish" },
            "age": { "op": "GREATER_THAN", "value": 15 }
        });

        let expected: WhereExpr = SimpleExpr::new()
            .field("name", starts_with("Krish"))
            .field("age", gt(15))
            .into();
        assert_eq!(parse_where(&json).unwrap(), expected);
    }

    #[test]
    fn test_parse_empty_object_is_empty_filter() {
        assert_eq!(parse_where(&json!({})).unwrap(), WhereExpr::none());
    }

    #[test]
    fn test_parse_nested_combinators() {
        let json = json!({
            "OR": [
                { "name": { "op": "STARTS_WITH", "value": "Tej" } },
                { "AND": [
                    { "age": { "op": "EQUALS", "value": 21 } }
                ]}
            ]
        });

        let expected = WhereExpr::or([
            WhereExpr::field("name", starts_with("Tej")),
            WhereExpr::and([WhereExpr::field("age", eq(21))]),
        ]);
        assert_eq!(parse_where(&json).unwrap(), expected);
    }

    #[test]
    fn test_combinator_key_must_be_sole_key() {
        // AND next to an ordinary column is not a combinator, so its
        // value must parse as a predicate — and this one does not.
        let json = json!({
            "AND": [],
            "age": { "op": "EQUALS", "value": 21 }
        });
        assert!(matches!(
            parse_where(&json),
            Err(SiftError::MalformedExpression(_))
        ));
    }

    #[test]
    fn test_column_named_and_with_predicate_parses() {
        let json = json!({
            "AND": { "op": "EQUALS", "value": 1 },
            "age": { "op": "EQUALS", "value": 21 }
        });

        let expected: WhereExpr = SimpleExpr::new()
            .field("AND", eq(1))
            .field("age", eq(21))
            .into();
        assert_eq!(parse_where(&json).unwrap(), expected);
    }

    #[test]
    fn test_unknown_operator_is_rejected() {
        let json = json!({ "age": { "op": "ALMOST_EQUALS", "value": 21 } });
        match parse_where(&json) {
            Err(SiftError::InvalidOperator(name)) => assert_eq!(name, "ALMOST_EQUALS"),
            other => panic!("expected InvalidOperator, got {:?}", other),
        }
    }

    #[test]
    fn test_non_scalar_value_is_rejected() {
        let json = json!({ "age": { "op": "EQUALS", "value": [21] } });
        assert!(matches!(
            parse_where(&json),
            Err(SiftError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_parse_row_preserves_document_order() {
        let json: Json =
            serde_json::from_str(r#"{"name": "Tejas", "age": 21, "phone": "9123456789"}"#)
                .unwrap();
        let row = parse_row(&json).unwrap();
        let columns: Vec<&str> = row.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(columns, vec!["name", "age", "phone"]);
    }

    #[test]
    fn test_parse_row_rejects_nested_objects() {
        let json = json!({ "name": { "first": "Tejas" } });
        assert!(matches!(parse_row(&json), Err(SiftError::InvalidValue(_))));
    }
}
