//! # sqlbuf
//!
//! A fluent builder for SQL statement text.
//!
//! Builders accumulate fragments (fields, table names, predicates,
//! assignments) into a text buffer and render the final statement. Values are
//! inlined as literals; there is no parameter binding, parsing or execution.
//!
//! ## Features
//!
//! - **SELECT**: projection, FROM list, WHERE with `=`, `[NOT] BETWEEN` and
//!   `[NOT] LIKE` predicates in bare, `and_*` and `or_*` forms
//! - **INSERT**: bulk or incremental column list, VALUES list
//! - **UPDATE**: comma-joined SET assignments
//! - **Typed literals**: numbers unquoted, text and timestamps single-quoted,
//!   timestamps formatted with a per-builder pattern
//!
//! ```rust
//! use sqlbuf::{SqlStatement, UpdateBuilder};
//!
//! let mut q = UpdateBuilder::table("employee")?;
//! q.set("name", "Anton")?.set("age", 45)?;
//! assert_eq!(q.to_sql(), "UPDATE employee SET name = 'Anton', age = 45");
//! # Ok::<(), sqlbuf::SqlError>(())
//! ```
//!
//! Text values are **not** escaped. Never feed untrusted input into a value.

pub mod buffer;
pub mod builder;
pub mod config;
pub mod error;
pub mod prelude;
pub mod value;

pub use buffer::QueryBuffer;
pub use builder::{
    InsertBuilder, SelectBuilder, SqlStatement, Table, UpdateBuilder, WildcardPosition,
};
pub use config::{BuilderConfig, DEFAULT_DATE_TIME_FORMAT};
pub use error::{SqlError, SqlResult};
pub use value::Value;
