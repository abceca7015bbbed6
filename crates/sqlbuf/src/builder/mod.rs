//! Fluent statement builders.
//!
//! Each builder accumulates statement text directly into a [`QueryBuffer`]
//! and renders it on demand.
//!
//! ## Design
//!
//! - Fragments are appended eagerly with their separator; rendering trims the
//!   dangling comma/space.
//! - Values are inlined as literals (see [`Value`](crate::Value)), there are no
//!   placeholders.
//! - The first predicate after WHERE (or assignment after SET) never gets a
//!   leading `AND `/`OR `/`, `. This is tracked explicitly, not by inspecting
//!   the buffer.
//! - Fallible methods validate before appending, so an error leaves the
//!   statement exactly as it was.
//!
//! [`QueryBuffer`]: crate::buffer::QueryBuffer

pub mod insert;
pub mod select;
pub mod table;
pub mod traits;
pub mod update;

pub use insert::InsertBuilder;
pub use select::{SelectBuilder, WildcardPosition};
pub use table::Table;
pub use traits::SqlStatement;
pub use update::UpdateBuilder;
