use crate::buffer::QueryBuffer;

/// Base trait for statement builders.
pub trait SqlStatement {
    /// The underlying text buffer.
    fn buffer(&self) -> &QueryBuffer;

    /// The statement text, trimmed of dangling separators.
    fn to_sql(&self) -> &str {
        self.buffer().rendered()
    }

    /// Finish the statement and hand out an owned string.
    fn build(&self) -> String {
        let sql = self.to_sql().to_string();
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "sqlbuf.sql", sql = %sql, "built statement");
        sql
    }

    /// Pattern used for timestamp literals.
    fn date_time_format(&self) -> &str {
        self.buffer().date_time_format()
    }
}

/// Whether the next predicate/assignment is the first of its section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PredicateState {
    open: bool,
    written: bool,
}

impl PredicateState {
    /// A WHERE or SET section has just been written.
    pub(crate) fn open(&mut self) {
        self.open = true;
        self.written = false;
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn is_first(&self) -> bool {
        !self.written
    }

    pub(crate) fn mark_written(&mut self) {
        self.written = true;
    }
}

/// Logical operator written in front of a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Connector {
    None,
    And,
    Or,
}

impl Connector {
    pub(crate) fn prefix(self) -> &'static str {
        match self {
            Connector::None => "",
            Connector::And => "AND ",
            Connector::Or => "OR ",
        }
    }
}

/// Value semantics over the rendered text: equality, hashing and `Display`.
macro_rules! impl_rendered_eq {
    ($builder:ty) => {
        impl PartialEq for $builder {
            fn eq(&self, other: &Self) -> bool {
                self.to_sql() == other.to_sql()
            }
        }

        impl Eq for $builder {}

        impl std::hash::Hash for $builder {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.to_sql().hash(state);
            }
        }

        impl std::fmt::Display for $builder {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.to_sql())
            }
        }
    };
}

pub(crate) use impl_rendered_eq;
