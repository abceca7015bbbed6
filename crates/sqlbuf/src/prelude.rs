//! Convenient imports for typical `sqlbuf` usage.
//!
//! ```ignore
//! use sqlbuf::prelude::*;
//! ```

pub use crate::{
    BuilderConfig, InsertBuilder, SelectBuilder, SqlError, SqlResult, SqlStatement, Table,
    UpdateBuilder, Value, WildcardPosition,
};
