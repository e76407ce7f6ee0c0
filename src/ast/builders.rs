//! Predicate builders for filter trees.

use crate::ast::{Operator, Predicate, Value};

/// Create an equality test (column = value)
pub fn eq(value: impl Into<Value>) -> Predicate {
    Predicate::new(Operator::Eq, value)
}

/// Create a not-equal test (column != value)
pub fn ne(value: impl Into<Value>) -> Predicate {
    Predicate::new(Operator::Ne, value)
}

/// Create a greater-than test (column > value)
pub fn gt(value: impl Into<Value>) -> Predicate {
    Predicate::new(Operator::Gt, value)
}

/// Create a greater-than-or-equal test (column >= value)
pub fn gte(value: impl Into<Value>) -> Predicate {
    Predicate::new(Operator::Gte, value)
}

/// Create a less-than test (column < value)
pub fn lt(value: impl Into<Value>) -> Predicate {
    Predicate::new(Operator::Lt, value)
}

/// Create a less-than-or-equal test (column <= value)
pub fn lte(value: impl Into<Value>) -> Predicate {
    Predicate::new(Operator::Lte, value)
}

/// Create a prefix test (column LIKE "value%")
pub fn starts_with(value: impl Into<Value>) -> Predicate {
    Predicate::new(Operator::StartsWith, value)
}

/// Create a negated prefix test (column NOT LIKE "value%")
pub fn not_starts_with(value: impl Into<Value>) -> Predicate {
    Predicate::new(Operator::NotStartsWith, value)
}

/// Create a suffix test (column LIKE "%value")
pub fn ends_with(value: impl Into<Value>) -> Predicate {
    Predicate::new(Operator::EndsWith, value)
}

/// Create a negated suffix test (column NOT LIKE "%value")
pub fn not_ends_with(value: impl Into<Value>) -> Predicate {
    Predicate::new(Operator::NotEndsWith, value)
}

/// Create a substring test (column LIKE "%value%")
pub fn contains(value: impl Into<Value>) -> Predicate {
    Predicate::new(Operator::Contains, value)
}

/// Create a negated substring test (column NOT LIKE "%value%")
pub fn not_contains(value: impl Into<Value>) -> Predicate {
    Predicate::new(Operator::NotContains, value)
}
