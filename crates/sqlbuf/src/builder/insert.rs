use super::traits::{SqlStatement, impl_rendered_eq};
use crate::buffer::QueryBuffer;
use crate::config::BuilderConfig;
use crate::error::{SqlError, SqlResult};
use crate::value::Value;

const COLUMN_SEPARATOR: &str = ",";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Stage {
    Target,
    Columns,
    Values,
}

impl Stage {
    fn clause(self) -> &'static str {
        match self {
            Stage::Target => "INSERT INTO",
            Stage::Columns => "column list",
            Stage::Values => "VALUES",
        }
    }
}

/// INSERT builder.
///
/// `INSERT INTO table (columns) VALUES (values)`. The number of columns and
/// values is not cross-checked. Clauses are written in that order; a table
/// after the column list, a second column list, or anything after VALUES is
/// rejected.
#[derive(Debug, Clone)]
pub struct InsertBuilder {
    buf: QueryBuffer,
    stage: Stage,
    /// Columns written so far, `None` until a column list is started
    column_count: Option<usize>,
    /// Whether an incremental column list is still open
    columns_open: bool,
}

impl Default for InsertBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InsertBuilder {
    /// Create an empty `INSERT INTO `.
    pub fn new() -> Self {
        Self {
            buf: QueryBuffer::new("INSERT INTO ", BuilderConfig::default()),
            stage: Stage::Target,
            column_count: None,
            columns_open: false,
        }
    }

    /// Create an empty `INSERT INTO ` governed by `config`.
    pub fn with_config(config: BuilderConfig) -> SqlResult<Self> {
        let mut builder = Self::new();
        builder.buf.set_config(config)?;
        Ok(builder)
    }

    /// Create `INSERT INTO table `.
    pub fn into_table(table: &str) -> SqlResult<Self> {
        let mut builder = Self::new();
        builder.table_name(table)?;
        Ok(builder)
    }

    /// Change the timestamp pattern for literals appended from now on.
    pub fn set_date_time_format(&mut self, format: impl Into<String>) -> SqlResult<&mut Self> {
        self.buf.set_date_time_format(format)?;
        Ok(self)
    }

    /// Append the target table.
    pub fn table_name(&mut self, name: &str) -> SqlResult<&mut Self> {
        self.require_stage(Stage::Target, "table name")?;
        if self.buf.accept_name("table name", name)? {
            self.buf.append_field(name, " ");
        }
        Ok(self)
    }

    /// Write the whole column list at once: `(a,b,c) `.
    pub fn columns<I, S>(&mut self, columns: I) -> SqlResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.require_stage(Stage::Target, "column list")?;
        let columns: Vec<S> = columns.into_iter().collect();
        if columns.is_empty() {
            return Err(SqlError::invalid_argument("column list cannot be empty"));
        }

        let mut accepted = Vec::with_capacity(columns.len());
        for name in &columns {
            let name = name.as_ref();
            if self.buf.accept_name("column name", name)? {
                accepted.push(name);
            }
        }

        if accepted.is_empty() {
            return Ok(self);
        }
        self.buf.push("(").push(&accepted.join(COLUMN_SEPARATOR)).push(") ");
        self.column_count = Some(accepted.len());
        self.stage = Stage::Columns;
        Ok(self)
    }

    /// Open an incremental column list. Calling it while the list is open has
    /// no effect.
    pub fn begin_columns(&mut self) -> SqlResult<&mut Self> {
        if self.columns_open {
            return Ok(self);
        }
        self.require_stage(Stage::Target, "column list")?;
        self.buf.push("(");
        self.columns_open = true;
        self.column_count = Some(0);
        self.stage = Stage::Columns;
        Ok(self)
    }

    /// Append one column to the open list, opening it if needed.
    pub fn column(&mut self, name: &str) -> SqlResult<&mut Self> {
        if !self.columns_open {
            self.require_stage(Stage::Target, "column")?;
        }
        if !self.buf.accept_name("column name", name)? {
            return Ok(self);
        }
        self.begin_columns()?;
        self.buf.append_field(name, COLUMN_SEPARATOR);
        self.column_count = Some(self.column_count.unwrap_or(0) + 1);
        Ok(self)
    }

    /// Close the incremental column list.
    pub fn end_columns(&mut self) -> &mut Self {
        if self.columns_open {
            self.buf.trim_trailing_comma();
            self.buf.push(") ");
            self.columns_open = false;
        }
        self
    }

    /// Write ` VALUES (v1,v2,...)`.
    pub fn values<I, V>(&mut self, values: I) -> SqlResult<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.require_stage(Stage::Columns, "VALUES")?;
        let literals = values
            .into_iter()
            .map(|v| self.buf.literal(&v.into()))
            .collect::<SqlResult<Vec<_>>>()?;
        if literals.is_empty() {
            return Err(SqlError::invalid_argument("value list cannot be empty"));
        }

        #[cfg(feature = "tracing")]
        if let Some(columns) = self.column_count {
            if columns != literals.len() {
                tracing::warn!(
                    target: "sqlbuf",
                    columns,
                    values = literals.len(),
                    "INSERT column and value counts differ"
                );
            }
        }

        self.end_columns();
        self.buf
            .push_keyword("VALUES")
            .push("(")
            .push(&literals.join(COLUMN_SEPARATOR))
            .push(")");
        self.stage = Stage::Values;
        Ok(self)
    }

    fn require_stage(&self, latest: Stage, what: &str) -> SqlResult<()> {
        if self.stage > latest {
            return Err(SqlError::invalid_argument(format!(
                "{what} cannot follow the {} clause",
                self.stage.clause()
            )));
        }
        Ok(())
    }

    /// Number of columns written so far, if a column list was started.
    pub fn column_count(&self) -> Option<usize> {
        self.column_count
    }
}

impl SqlStatement for InsertBuilder {
    fn buffer(&self) -> &QueryBuffer {
        &self.buf
    }
}

impl_rendered_eq!(InsertBuilder);
