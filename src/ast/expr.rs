//! The filter tree and row payload types.

use serde::{Deserialize, Serialize};

use crate::ast::{Operator, Value};

/// One column's comparison test: an operator paired with the value it
/// compares against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub op: Operator,
    pub value: Value,
}

impl Predicate {
    pub fn new(op: Operator, value: impl Into<Value>) -> Self {
        Self {
            op,
            value: value.into(),
        }
    }
}

/// A leaf filter: ordered column tests, implicitly AND-ed together.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleExpr {
    entries: Vec<(String, Predicate)>,
}

impl SimpleExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column test. Repeating a column keeps both entries;
    /// key uniqueness is the caller's contract.
    pub fn field(mut self, column: impl Into<String>, predicate: Predicate) -> Self {
        self.entries.push((column.into(), predicate));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, Predicate)> {
        self.entries.iter()
    }
}

/// A nestable filter tree.
///
/// The variant is decided at construction time; nothing ever inspects
/// key names to tell a combinator from a leaf, so a column legitimately
/// named `AND` or `OR` stays a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WhereExpr {
    /// Leaf column tests.
    Simple(SimpleExpr),
    /// Conjunction of sub-expressions.
    And(Vec<WhereExpr>),
    /// Disjunction of sub-expressions.
    Or(Vec<WhereExpr>),
}

impl WhereExpr {
    /// An empty filter. Compiles to `""`, which the statement
    /// compilers treat as "no clause".
    pub fn none() -> Self {
        WhereExpr::Simple(SimpleExpr::new())
    }

    /// A one-column leaf.
    pub fn field(column: impl Into<String>, predicate: Predicate) -> Self {
        WhereExpr::Simple(SimpleExpr::new().field(column, predicate))
    }

    /// Combine sub-expressions with logical AND.
    pub fn and(parts: impl IntoIterator<Item = WhereExpr>) -> Self {
        WhereExpr::And(parts.into_iter().collect())
    }

    /// Combine sub-expressions with logical OR.
    pub fn or(parts: impl IntoIterator<Item = WhereExpr>) -> Self {
        WhereExpr::Or(parts.into_iter().collect())
    }
}

impl Default for WhereExpr {
    fn default() -> Self {
        Self::none()
    }
}

impl From<SimpleExpr> for WhereExpr {
    fn from(simple: SimpleExpr) -> Self {
        WhereExpr::Simple(simple)
    }
}

/// An ordered column-to-value mapping, used for INSERT values and
/// UPDATE set-values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    entries: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column value.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((column.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.entries.iter()
    }
}
