//! # siftql — typed filter trees compiled to MySQL statements
//!
//! A filter is a nestable AND/OR tree of per-column comparison tests.
//! [`compiler`] turns a tree into a parenthesized WHERE clause string
//! and assembles complete SELECT / INSERT / UPDATE / DELETE / COUNT
//! statements around it; [`parser`] accepts the same trees as plain
//! JSON objects; [`validator`] optionally rejects operator/value-kind
//! mismatches before compiling.
//!
//! Values are rendered inline as literals, with no escaping of embedded
//! quotes. The compiled strings are meant for trusted inputs; this
//! crate is not an injection barrier.
//!
//! ```
//! use siftql::prelude::*;
//!
//! let filter = WhereExpr::field("name", starts_with("Krish"));
//! let sql = select("users", &["name", "age"], &filter, 0, 5);
//! assert_eq!(
//!     sql,
//!     "SELECT name, age FROM users WHERE (`name` LIKE \"Krish%\") LIMIT 5 OFFSET 0"
//! );
//! ```

pub mod ast;
pub mod compiler;
pub mod error;
pub mod parser;
pub mod validator;

pub use parser::parse_where;

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::{Operator, Predicate, Row, SimpleExpr, Value, WhereExpr};
    pub use crate::compiler::{count, delete, insert, select, update, where_clause};
    pub use crate::error::{SiftError, SiftResult};
    pub use crate::parser::{parse_row, parse_where};
    pub use crate::validator::check_expr;
}
