use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

use crate::{CanonicalDate, prelude::*};

/// A raw cell value as it arrives from a spreadsheet row.
///
/// Every normalization entry point accepts `impl Into<DateInput>`, so callers
/// can pass strings, serial numbers, chrono dates, `Option`s of those, or JSON
/// cells directly.
#[derive(Debug, Clone, PartialEq, Default, Display)]
pub enum DateInput {
    /// Empty cell
    #[default]
    #[display(fmt = "")]
    Absent,
    #[display(fmt = "{_0}")]
    Text(String),
    /// Spreadsheet serial day number
    #[display(fmt = "{_0}")]
    Serial(f64),
    #[display(fmt = "{_0}")]
    Date(NaiveDate),
    #[display(fmt = "{_0}")]
    DateTime(NaiveDateTime),
}

impl DateInput {
    /// True for an empty cell or a cell holding only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Serial(_) | Self::Date(_) | Self::DateTime(_) => false,
        }
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for DateInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for DateInput {
    fn from(value: f64) -> Self {
        Self::Serial(value)
    }
}

impl From<i32> for DateInput {
    fn from(value: i32) -> Self {
        Self::Serial(f64::from(value))
    }
}

impl From<u32> for DateInput {
    fn from(value: u32) -> Self {
        Self::Serial(f64::from(value))
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<CanonicalDate> for DateInput {
    fn from(value: CanonicalDate) -> Self {
        Self::Date(value.as_naive())
    }
}

impl From<&CanonicalDate> for DateInput {
    fn from(value: &CanonicalDate) -> Self {
        Self::Date(value.as_naive())
    }
}

impl From<&DateInput> for DateInput {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// JSON cells: `null` is absent, numbers are serials, strings are text.
/// Booleans, arrays and objects become text of their JSON rendering, which
/// no date pattern accepts.
impl From<&Value> for DateInput {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Number(number) => number.as_f64().map_or_else(|| Self::Text(number.to_string()), Self::Serial),
            Value::String(text) => Self::Text(text.clone()),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => Self::Text(value.to_string()),
        }
    }
}

impl From<Value> for DateInput {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl<'de> Deserialize<'de> for DateInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from(&value))
    }
}
