use super::traits::{Connector, PredicateState, SqlStatement, impl_rendered_eq};
use crate::buffer::QueryBuffer;
use crate::config::BuilderConfig;
use crate::error::{SqlError, SqlResult, require_name};
use crate::value::Value;

const FIELD_SEPARATOR: &str = ",";

/// Where a LIKE wildcard is spliced relative to the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WildcardPosition {
    /// `'%value'`
    AtStart,
    /// `'value%'`
    AtEnd,
    /// `'value'`, the wildcard is dropped
    #[default]
    None,
}

impl WildcardPosition {
    fn splice(self, value: &str, wildcard: char) -> String {
        match self {
            WildcardPosition::AtStart => format!("{wildcard}{value}"),
            WildcardPosition::AtEnd => format!("{value}{wildcard}"),
            WildcardPosition::None => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Projection,
    From,
    Where,
}

/// SELECT statement builder.
///
/// Clauses are written in order: `SELECT fields FROM tables WHERE predicates`.
/// A table or predicate added before its clause opens that clause; going back
/// to an earlier clause is rejected.
///
/// # Example
///
/// ```rust
/// use sqlbuf::{SelectBuilder, SqlStatement};
///
/// let mut q = SelectBuilder::with_fields(["name", "family", "sex"])?;
/// q.from(Some("employee"))?.where_clause();
/// q.is_equals("id", 143)?;
/// assert_eq!(q.to_sql(), "SELECT name,family,sex FROM employee WHERE id=143");
/// # Ok::<(), sqlbuf::SqlError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    buf: QueryBuffer,
    stage: Stage,
    predicates: PredicateState,
}

impl Default for SelectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectBuilder {
    /// Create an empty `SELECT `.
    pub fn new() -> Self {
        Self {
            buf: QueryBuffer::new("SELECT ", BuilderConfig::default()),
            stage: Stage::Projection,
            predicates: PredicateState::default(),
        }
    }

    /// Create an empty `SELECT ` governed by `config`.
    pub fn with_config(config: BuilderConfig) -> SqlResult<Self> {
        let mut qb = Self::new();
        qb.buf.set_config(config)?;
        Ok(qb)
    }

    /// Create a `SELECT` seeded with projected fields.
    pub fn with_fields<I, S>(fields: I) -> SqlResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut qb = Self::new();
        qb.fields(fields)?;
        Ok(qb)
    }

    /// Change the timestamp pattern for literals appended from now on.
    pub fn set_date_time_format(&mut self, format: impl Into<String>) -> SqlResult<&mut Self> {
        self.buf.set_date_time_format(format)?;
        Ok(self)
    }

    // ==================== Projection ====================

    /// Append one projected column.
    pub fn field(&mut self, name: &str) -> SqlResult<&mut Self> {
        self.require_stage(Stage::Projection, "field")?;
        if self.buf.accept_name("field name", name)? {
            self.buf.append_field(name, FIELD_SEPARATOR);
        }
        Ok(self)
    }

    /// Append several projected columns; nothing is appended if any name is rejected.
    pub fn fields<I, S>(&mut self, fields: I) -> SqlResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.require_stage(Stage::Projection, "field")?;
        let fields: Vec<S> = fields.into_iter().collect();
        if fields.is_empty() {
            return Err(SqlError::invalid_argument("field list cannot be empty"));
        }

        let mut accepted = Vec::with_capacity(fields.len());
        for name in &fields {
            let name = name.as_ref();
            if self.buf.accept_name("field name", name)? {
                accepted.push(name);
            }
        }
        for name in accepted {
            self.buf.append_field(name, FIELD_SEPARATOR);
        }
        Ok(self)
    }

    // ==================== FROM ====================

    /// Open the FROM clause, optionally with its first table.
    pub fn from(&mut self, table: Option<&str>) -> SqlResult<&mut Self> {
        self.require_stage(Stage::Projection, "FROM")?;
        let table = match table {
            Some(name) => self.buf.accept_name("table name", name)?.then_some(name),
            None => None,
        };

        self.open_from();
        if let Some(name) = table {
            self.buf.append_field(name, FIELD_SEPARATOR);
        }
        Ok(self)
    }

    /// Append another table to the FROM list.
    pub fn table_name(&mut self, name: &str) -> SqlResult<&mut Self> {
        self.require_stage(Stage::From, "table name")?;
        if !self.buf.accept_name("table name", name)? {
            return Ok(self);
        }
        if self.stage == Stage::Projection {
            self.open_from();
        }
        self.buf.append_field(name, FIELD_SEPARATOR);
        Ok(self)
    }

    fn open_from(&mut self) {
        self.buf.trim_trailing_comma();
        self.buf.push_keyword("FROM");
        self.stage = Stage::From;
    }

    // ==================== WHERE ====================

    /// Open the WHERE clause. Calling it again has no effect.
    pub fn where_clause(&mut self) -> &mut Self {
        if self.stage == Stage::Where {
            return self;
        }
        self.buf.trim_trailing_comma();
        self.buf.push_keyword("WHERE");
        self.stage = Stage::Where;
        self.predicates.open();
        self
    }

    fn require_stage(&self, latest: Stage, what: &str) -> SqlResult<()> {
        let rank = |s: Stage| match s {
            Stage::Projection => 0,
            Stage::From => 1,
            Stage::Where => 2,
        };
        if rank(self.stage) > rank(latest) {
            return Err(SqlError::invalid_argument(format!(
                "{what} cannot follow the {} clause",
                match self.stage {
                    Stage::Projection => "SELECT",
                    Stage::From => "FROM",
                    Stage::Where => "WHERE",
                }
            )));
        }
        Ok(())
    }

    /// Append a rendered predicate, prefixed by `connector` unless it is the
    /// first one of the WHERE clause.
    fn predicate(&mut self, connector: Connector, body: String) -> &mut Self {
        self.where_clause();
        if !self.predicates.is_first() {
            self.buf.push(connector.prefix());
        }
        self.buf.push(&body).push_char(' ');
        self.predicates.mark_written();
        self
    }

    // ==================== Equality ====================

    fn equals_with(&mut self, connector: Connector, name: &str, value: Value) -> SqlResult<&mut Self> {
        require_name("field name", name)?;
        let literal = self.buf.literal(&value)?;
        Ok(self.predicate(connector, format!("{name}={literal}")))
    }

    /// `name=value`
    pub fn is_equals(&mut self, name: &str, value: impl Into<Value>) -> SqlResult<&mut Self> {
        self.equals_with(Connector::None, name, value.into())
    }

    /// `AND name=value`
    pub fn and_is_equals(&mut self, name: &str, value: impl Into<Value>) -> SqlResult<&mut Self> {
        self.equals_with(Connector::And, name, value.into())
    }

    /// `OR name=value`
    pub fn or_is_equals(&mut self, name: &str, value: impl Into<Value>) -> SqlResult<&mut Self> {
        self.equals_with(Connector::Or, name, value.into())
    }

    // ==================== BETWEEN ====================

    fn between_with(
        &mut self,
        connector: Connector,
        negated: bool,
        name: &str,
        low: Value,
        high: Value,
    ) -> SqlResult<&mut Self> {
        require_name("field name", name)?;
        let low = self.buf.literal(&low)?;
        let high = self.buf.literal(&high)?;
        let op = if negated { "NOT BETWEEN" } else { "BETWEEN" };
        Ok(self.predicate(connector, format!("{name} {op} {low} AND {high}")))
    }

    /// `name BETWEEN low AND high`
    pub fn between(
        &mut self,
        name: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> SqlResult<&mut Self> {
        self.between_with(Connector::None, false, name, low.into(), high.into())
    }

    pub fn and_between(
        &mut self,
        name: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> SqlResult<&mut Self> {
        self.between_with(Connector::And, false, name, low.into(), high.into())
    }

    pub fn or_between(
        &mut self,
        name: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> SqlResult<&mut Self> {
        self.between_with(Connector::Or, false, name, low.into(), high.into())
    }

    /// `name NOT BETWEEN low AND high`
    pub fn not_between(
        &mut self,
        name: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> SqlResult<&mut Self> {
        self.between_with(Connector::None, true, name, low.into(), high.into())
    }

    pub fn and_not_between(
        &mut self,
        name: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> SqlResult<&mut Self> {
        self.between_with(Connector::And, true, name, low.into(), high.into())
    }

    pub fn or_not_between(
        &mut self,
        name: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> SqlResult<&mut Self> {
        self.between_with(Connector::Or, true, name, low.into(), high.into())
    }

    // ==================== LIKE ====================

    fn like_with(
        &mut self,
        connector: Connector,
        negated: bool,
        name: &str,
        value: Value,
        wildcard: Option<(char, WildcardPosition)>,
    ) -> SqlResult<&mut Self> {
        require_name("field name", name)?;
        let raw = self.buf.raw(&value)?;
        let pattern = match wildcard {
            Some((ch, position)) => position.splice(&raw, ch),
            None => raw,
        };
        let op = if negated { "NOT LIKE" } else { "LIKE" };
        Ok(self.predicate(connector, format!("{name} {op} '{pattern}'")))
    }

    /// `name LIKE 'value'`
    ///
    /// The value is placed between quotes verbatim, so it may carry its own
    /// wildcards. Numbers and timestamps are quoted too.
    pub fn like(&mut self, name: &str, value: impl Into<Value>) -> SqlResult<&mut Self> {
        self.like_with(Connector::None, false, name, value.into(), None)
    }

    pub fn and_like(&mut self, name: &str, value: impl Into<Value>) -> SqlResult<&mut Self> {
        self.like_with(Connector::And, false, name, value.into(), None)
    }

    pub fn or_like(&mut self, name: &str, value: impl Into<Value>) -> SqlResult<&mut Self> {
        self.like_with(Connector::Or, false, name, value.into(), None)
    }

    /// `name LIKE '%value'` / `'value%'` / `'value'` depending on `position`.
    pub fn like_with_wildcard(
        &mut self,
        name: &str,
        value: impl Into<Value>,
        wildcard: char,
        position: WildcardPosition,
    ) -> SqlResult<&mut Self> {
        self.like_with(Connector::None, false, name, value.into(), Some((wildcard, position)))
    }

    pub fn and_like_with_wildcard(
        &mut self,
        name: &str,
        value: impl Into<Value>,
        wildcard: char,
        position: WildcardPosition,
    ) -> SqlResult<&mut Self> {
        self.like_with(Connector::And, false, name, value.into(), Some((wildcard, position)))
    }

    pub fn or_like_with_wildcard(
        &mut self,
        name: &str,
        value: impl Into<Value>,
        wildcard: char,
        position: WildcardPosition,
    ) -> SqlResult<&mut Self> {
        self.like_with(Connector::Or, false, name, value.into(), Some((wildcard, position)))
    }

    /// `name NOT LIKE 'value'`
    pub fn not_like(&mut self, name: &str, value: impl Into<Value>) -> SqlResult<&mut Self> {
        self.like_with(Connector::None, true, name, value.into(), None)
    }

    pub fn and_not_like(&mut self, name: &str, value: impl Into<Value>) -> SqlResult<&mut Self> {
        self.like_with(Connector::And, true, name, value.into(), None)
    }

    pub fn or_not_like(&mut self, name: &str, value: impl Into<Value>) -> SqlResult<&mut Self> {
        self.like_with(Connector::Or, true, name, value.into(), None)
    }

    pub fn not_like_with_wildcard(
        &mut self,
        name: &str,
        value: impl Into<Value>,
        wildcard: char,
        position: WildcardPosition,
    ) -> SqlResult<&mut Self> {
        self.like_with(Connector::None, true, name, value.into(), Some((wildcard, position)))
    }

    pub fn and_not_like_with_wildcard(
        &mut self,
        name: &str,
        value: impl Into<Value>,
        wildcard: char,
        position: WildcardPosition,
    ) -> SqlResult<&mut Self> {
        self.like_with(Connector::And, true, name, value.into(), Some((wildcard, position)))
    }

    pub fn or_not_like_with_wildcard(
        &mut self,
        name: &str,
        value: impl Into<Value>,
        wildcard: char,
        position: WildcardPosition,
    ) -> SqlResult<&mut Self> {
        self.like_with(Connector::Or, true, name, value.into(), Some((wildcard, position)))
    }
}

impl SqlStatement for SelectBuilder {
    fn buffer(&self) -> &QueryBuffer {
        &self.buf
    }
}

impl_rendered_eq!(SelectBuilder);
