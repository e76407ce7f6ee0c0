//! Abstract syntax for filter trees.
//!
//! This module defines the data structures a compile call consumes: a
//! recursive where-expression tree, the per-column predicates inside
//! it, and the ordered row payloads for writes.

pub mod builders;
pub mod expr;
pub mod operators;
pub mod values;

pub use self::expr::{Predicate, Row, SimpleExpr, WhereExpr};
pub use self::operators::Operator;
pub use self::values::Value;
