//! # Records
//!
//! A record is one JSON object from the input payload. Records in a payload
//! don't have to share the same keys.

use std::fmt;

use serde_json::{Map, Value};

/// One input row: column name → scalar value.
pub type Record = Map<String, Value>;

#[derive(Debug)]
pub enum DataError {
    Json(serde_json::Error),
    NotAList,
    NotARecord { index: usize },
    Empty,
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Json(e) => write!(f, "data is not valid JSON: {e}"),
            DataError::NotAList => write!(f, "data must be a JSON array of objects"),
            DataError::NotARecord { index } => {
                write!(f, "item {index} of the data array is not an object")
            }
            DataError::Empty => write!(f, "data contains no records"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Json(e) => Some(e),
            _ => None,
        }
    }
}

/// Decode a raw payload into records.
///
/// Fails on anything that isn't a non-empty array of objects, so malformed
/// input never reaches the viewport.
pub fn parse_records(payload: &str) -> Result<Vec<Record>, DataError> {
    let value: Value = serde_json::from_str(payload).map_err(DataError::Json)?;
    let Value::Array(items) = value else {
        return Err(DataError::NotAList);
    };
    if items.is_empty() {
        return Err(DataError::Empty);
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            _ => Err(DataError::NotARecord { index }),
        })
        .collect()
}

/// Union of keys across all records, in first-seen order.
pub fn union_columns(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Text shown for a value in a cell. Strings lose their quotes, nested
/// values fall back to compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
