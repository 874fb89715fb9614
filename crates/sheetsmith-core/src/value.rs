//! Cell value types

use crate::error::{Error, Result};
use serde_json::Value;
use std::fmt;

/// A value written to or compared against a cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// String value
    Text(String),

    /// Numeric value (all numbers stored as f64)
    Number(f64),

    /// Boolean value (TRUE/FALSE)
    Bool(bool),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Convert a JSON scalar. Arrays and objects are rejected.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(CellValue::Empty),
            Value::Bool(b) => Ok(CellValue::Bool(*b)),
            Value::Number(n) => n
                .as_f64()
                .map(CellValue::Number)
                .ok_or_else(|| Error::invalid(format!("number {} is not representable", n))),
            Value::String(s) => Ok(CellValue::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => Err(Error::invalid(format!(
                "cell values must be JSON scalars, got {}",
                value
            ))),
        }
    }

    /// Convert a JSON array of arrays of scalars into rows of values.
    ///
    /// Rows may have different lengths; each row keeps its own length.
    pub fn rows_from_json(value: &Value) -> Result<Vec<Vec<CellValue>>> {
        let rows = value
            .as_array()
            .ok_or_else(|| Error::invalid("JSON document must be an array of rows"))?;

        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                let cells = row.as_array().ok_or_else(|| {
                    Error::invalid(format!("row {} is not an array: {}", i, row))
                })?;
                cells.iter().map(CellValue::from_json).collect()
            })
            .collect()
    }

    /// Compare against the raw text an engine reports for a cell.
    ///
    /// Numbers compare numerically, so `3` matches a cell holding `3.0`.
    pub fn matches_raw(&self, raw: &str) -> bool {
        match self {
            CellValue::Empty => raw.is_empty(),
            CellValue::Text(s) => s == raw,
            CellValue::Number(n) => raw.trim().parse::<f64>().map_or(false, |v| v == *n),
            CellValue::Bool(b) => raw.eq_ignore_ascii_case(if *b { "true" } else { "false" }),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(true) => f.write_str("TRUE"),
            CellValue::Bool(false) => f.write_str("FALSE"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}
