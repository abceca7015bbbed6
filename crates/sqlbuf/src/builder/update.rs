use super::traits::{PredicateState, SqlStatement, impl_rendered_eq};
use crate::buffer::QueryBuffer;
use crate::config::BuilderConfig;
use crate::error::{SqlError, SqlResult};
use crate::value::Value;

/// UPDATE builder.
///
/// Assignments are comma-joined: `UPDATE t SET a = 1, b = 'x'`.
#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    buf: QueryBuffer,
    assignments: PredicateState,
}

impl Default for UpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateBuilder {
    /// Create an empty `UPDATE `.
    pub fn new() -> Self {
        Self {
            buf: QueryBuffer::new("UPDATE ", BuilderConfig::default()),
            assignments: PredicateState::default(),
        }
    }

    /// Create an empty `UPDATE ` governed by `config`.
    pub fn with_config(config: BuilderConfig) -> SqlResult<Self> {
        let mut builder = Self::new();
        builder.buf.set_config(config)?;
        Ok(builder)
    }

    /// Create `UPDATE table SET `, ready for assignments.
    pub fn table(table: &str) -> SqlResult<Self> {
        let mut builder = Self::new();
        builder.table_name(table)?.set_clause();
        Ok(builder)
    }

    /// Change the timestamp pattern for literals appended from now on.
    pub fn set_date_time_format(&mut self, format: impl Into<String>) -> SqlResult<&mut Self> {
        self.buf.set_date_time_format(format)?;
        Ok(self)
    }

    /// Append the target table. Rejected once the SET clause is open.
    pub fn table_name(&mut self, name: &str) -> SqlResult<&mut Self> {
        if self.assignments.is_open() {
            return Err(SqlError::invalid_argument(
                "table name cannot follow the SET clause",
            ));
        }
        if self.buf.accept_name("table name", name)? {
            self.buf.append_field(name, " ");
        }
        Ok(self)
    }

    /// Open the assignment list. Calling it again has no effect.
    pub fn set_clause(&mut self) -> &mut Self {
        if !self.assignments.is_open() {
            self.buf.push_keyword("SET");
            self.assignments.open();
        }
        self
    }

    /// Append `field = value`, comma-separated from the previous assignment.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> SqlResult<&mut Self> {
        if !self.buf.accept_name("field name", field)? {
            return Ok(self);
        }
        let literal = self.buf.literal(&value.into())?;

        self.set_clause();
        if !self.assignments.is_first() {
            self.buf.push(", ");
        }
        self.buf.push(field).push(" = ").push(&literal);
        self.assignments.mark_written();
        Ok(self)
    }
}

impl SqlStatement for UpdateBuilder {
    fn buffer(&self) -> &QueryBuffer {
        &self.buf
    }
}

impl_rendered_eq!(UpdateBuilder);
