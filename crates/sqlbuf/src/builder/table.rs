use super::insert::InsertBuilder;
use super::select::SelectBuilder;
use super::update::UpdateBuilder;
use crate::error::SqlResult;

/// Table metadata helper.
///
/// A small ergonomic wrapper to create builders with consistent
/// select/insert column lists.
///
/// # Example
///
/// ```rust
/// use sqlbuf::{SqlStatement, Table};
///
/// const EMPLOYEE: Table = Table::new("employee")
///     .with_select_cols(&["name", "family", "sex"]);
///
/// let mut q = EMPLOYEE.select()?;
/// q.is_equals("id", 143)?;
/// assert_eq!(q.to_sql(), "SELECT name,family,sex FROM employee WHERE id=143");
/// # Ok::<(), sqlbuf::SqlError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub name: &'static str,
    pub select_cols: &'static [&'static str],
    pub insert_cols: &'static [&'static str],
}

impl Table {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            select_cols: &["*"],
            insert_cols: &[],
        }
    }

    pub const fn with_select_cols(mut self, cols: &'static [&'static str]) -> Self {
        self.select_cols = cols;
        self
    }

    pub const fn with_insert_cols(mut self, cols: &'static [&'static str]) -> Self {
        self.insert_cols = cols;
        self
    }

    /// `SELECT cols FROM name`
    pub fn select(&self) -> SqlResult<SelectBuilder> {
        let mut qb = SelectBuilder::with_fields(self.select_cols)?;
        qb.from(Some(self.name))?;
        Ok(qb)
    }

    /// `INSERT INTO name (cols) `, or without a column list when none is set.
    pub fn insert(&self) -> SqlResult<InsertBuilder> {
        let mut builder = InsertBuilder::into_table(self.name)?;
        if !self.insert_cols.is_empty() {
            builder.columns(self.insert_cols)?;
        }
        Ok(builder)
    }

    /// `UPDATE name SET `
    pub fn update(&self) -> SqlResult<UpdateBuilder> {
        UpdateBuilder::table(self.name)
    }
}
