//! Typed values and their literal rendering.
//!
//! Values are inlined into the statement text, not bound as parameters:
//!
//! | Variant     | Literal                          |
//! |-------------|----------------------------------|
//! | `Int`       | `143`                            |
//! | `BigInt`    | `12345678912345`                 |
//! | `Text`      | `'Petrov'` (quotes not escaped)  |
//! | `Timestamp` | `'2011-09-15 00:22:13.870'`      |

use std::fmt::{self, Write};

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{SqlError, SqlResult};

/// A value that can be inlined into a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// 32-bit integer
    Int(i32),
    /// 64-bit integer
    BigInt(i64),
    /// Text, rendered single-quoted
    Text(String),
    /// Wall-clock timestamp, rendered with the builder's date/time format
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Whether the literal form of this value is wrapped in single quotes.
    pub fn is_quoted(&self) -> bool {
        matches!(self, Value::Text(_) | Value::Timestamp(_))
    }

    /// Render the SQL literal for this value.
    ///
    /// Embedded apostrophes in text are left as they are.
    pub fn literal(&self, date_time_format: &str) -> SqlResult<String> {
        let raw = self.raw(date_time_format)?;
        if self.is_quoted() {
            Ok(format!("'{raw}'"))
        } else {
            Ok(raw)
        }
    }

    /// Render the value text without quotes (used inside LIKE patterns).
    pub fn raw(&self, date_time_format: &str) -> SqlResult<String> {
        match self {
            Value::Int(n) => Ok(n.to_string()),
            Value::BigInt(n) => Ok(n.to_string()),
            Value::Text(s) => Ok(s.clone()),
            Value::Timestamp(ts) => format_timestamp(ts, date_time_format),
        }
    }
}

fn format_timestamp(ts: &NaiveDateTime, date_time_format: &str) -> SqlResult<String> {
    let mut out = String::new();
    write!(out, "{}", ts.format(date_time_format)).map_err(|_: fmt::Error| {
        SqlError::invalid_argument(format!(
            "date/time format '{date_time_format}' cannot render a timestamp"
        ))
    })?;
    Ok(out)
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int(v.into())
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Int(v.into())
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Int(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::BigInt(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::BigInt(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v.naive_utc())
    }
}
