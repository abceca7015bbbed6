use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

use crate::error::{SqlError, SqlResult};

/// Default pattern for timestamp literals, e.g. `2011-09-15 00:22:13.870`.
pub const DEFAULT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Per-builder configuration.
///
/// Strict mode is on by default: empty field and table names are rejected
/// with [`SqlError::InvalidArgument`]. In lenient mode they are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// `chrono` strftime pattern used for timestamp literals.
    pub date_time_format: String,
    /// Reject empty names instead of skipping them.
    pub strict: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            date_time_format: DEFAULT_DATE_TIME_FORMAT.to_string(),
            strict: true,
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp pattern.
    ///
    /// The pattern is checked up front so that rendering a timestamp later
    /// cannot fail half-way through a statement.
    pub fn with_date_time_format(mut self, format: impl Into<String>) -> SqlResult<Self> {
        let format = format.into();
        validate_date_time_format(&format)?;
        self.date_time_format = format;
        Ok(self)
    }

    /// Skip empty names instead of failing.
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Fail on empty names (default).
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Validate a configuration obtained through deserialization.
    pub fn validate(&self) -> SqlResult<()> {
        validate_date_time_format(&self.date_time_format)
    }
}

pub(crate) fn validate_date_time_format(format: &str) -> SqlResult<()> {
    if format.is_empty() {
        return Err(SqlError::invalid_argument("date/time format cannot be empty"));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(SqlError::invalid_argument(format!(
            "invalid date/time format '{format}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = BuilderConfig::new();
        assert_eq!(cfg.date_time_format, DEFAULT_DATE_TIME_FORMAT);
        assert!(cfg.strict);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_pattern() {
        let err = BuilderConfig::new().with_date_time_format("%Y-%Q").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(BuilderConfig::new().with_date_time_format("").is_err());
    }

    #[test]
    fn deserializes_with_defaults() {
        let cfg: BuilderConfig = serde_json::from_str(r#"{"strict": false}"#).unwrap();
        assert!(!cfg.strict);
        assert_eq!(cfg.date_time_format, DEFAULT_DATE_TIME_FORMAT);

        let cfg: BuilderConfig =
            serde_json::from_str(r#"{"date_time_format": "%Q"}"#).unwrap();
        assert!(cfg.validate().is_err());
    }
}
