//! SQL statement compilers.
//!
//! Turns filter trees and row payloads into executable MySQL strings.
//! Every function here is pure and total: same input, same string, no
//! errors raised.

pub mod dml;
pub mod where_clause;


pub use dml::{count, delete, insert, select, update};
pub use where_clause::where_clause;
