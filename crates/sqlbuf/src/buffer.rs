//! The text buffer shared by all statement builders.
//!
//! Fragments are appended eagerly together with their separator (`,`, `, `
//! or a space). Cleaning up the dangling separator is the job of
//! [`QueryBuffer::rendered`] and of the clause openers that call
//! [`QueryBuffer::trim_trailing_comma`] before writing a keyword.

use crate::config::{BuilderConfig, validate_date_time_format};
use crate::error::{SqlError, SqlResult};
use crate::value::Value;

/// Append-only statement text plus the configuration that governs it.
#[derive(Debug, Clone)]
pub struct QueryBuffer {
    text: String,
    config: BuilderConfig,
}

impl QueryBuffer {
    /// Create a buffer seeded with `initial` text.
    pub fn new(initial: &str, config: BuilderConfig) -> Self {
        Self {
            text: initial.to_string(),
            config,
        }
    }

    /// Raw, untrimmed text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn date_time_format(&self) -> &str {
        &self.config.date_time_format
    }

    /// Change the timestamp pattern for literals appended from now on.
    pub fn set_date_time_format(&mut self, format: impl Into<String>) -> SqlResult<()> {
        let format = format.into();
        validate_date_time_format(&format)?;
        self.config.date_time_format = format;
        Ok(())
    }

    pub(crate) fn set_config(&mut self, config: BuilderConfig) -> SqlResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Append raw text.
    pub fn push(&mut self, sql: &str) -> &mut Self {
        self.text.push_str(sql);
        self
    }

    pub fn push_char(&mut self, ch: char) -> &mut Self {
        self.text.push(ch);
        self
    }

    /// Append a keyword followed by a space, separated from the previous
    /// fragment by exactly one space.
    pub fn push_keyword(&mut self, keyword: &str) -> &mut Self {
        if !self.text.is_empty() && !self.text.ends_with(' ') {
            self.text.push(' ');
        }
        self.text.push_str(keyword);
        self.text.push(' ');
        self
    }

    /// Append `name` and its separator.
    pub fn append_field(&mut self, name: &str, separator: &str) -> &mut Self {
        self.text.push_str(name);
        self.text.push_str(separator);
        self
    }

    /// Remove a dangling `,` or a dangling `, ` pair.
    pub fn trim_trailing_comma(&mut self) -> &mut Self {
        if self.text.ends_with(", ") {
            self.text.truncate(self.text.len() - 2);
        } else if self.text.ends_with(',') {
            self.text.pop();
        }
        self
    }

    /// Remove a single trailing space.
    pub fn trim_trailing_space(&mut self) -> &mut Self {
        if self.text.ends_with(' ') {
            self.text.pop();
        }
        self
    }

    /// The statement text with a dangling comma and trailing space removed.
    ///
    /// This is a view: the buffer itself is not modified, so rendering any
    /// number of times (or appending more afterwards) is safe.
    pub fn rendered(&self) -> &str {
        let s = self.text.as_str();
        let s = s
            .strip_suffix(", ")
            .or_else(|| s.strip_suffix(','))
            .unwrap_or(s);
        s.strip_suffix(' ').unwrap_or(s)
    }

    /// Render the literal for `value` using this buffer's date/time format.
    pub fn literal(&self, value: &Value) -> SqlResult<String> {
        value.literal(&self.config.date_time_format)
    }

    /// Render `value` without quotes using this buffer's date/time format.
    pub fn raw(&self, value: &Value) -> SqlResult<String> {
        value.raw(&self.config.date_time_format)
    }

    /// Check a required name.
    ///
    /// Returns `Ok(false)` when the name is empty and the buffer is lenient;
    /// the caller then skips the fragment entirely.
    pub(crate) fn accept_name(&self, what: &str, name: &str) -> SqlResult<bool> {
        if !name.trim().is_empty() {
            return Ok(true);
        }
        if self.config.strict {
            return Err(SqlError::invalid_argument(format!("{what} cannot be empty")));
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(target: "sqlbuf", what, "skipping empty name in lenient mode");
        Ok(false)
    }
}
