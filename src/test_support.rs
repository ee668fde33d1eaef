//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::projection::ProjectionMode;
use crate::core::record::{Record, parse_records};
use crate::core::state::App;

pub const PEOPLE: &str = r#"[
    {"id": 1, "name": "Alice"},
    {"id": 2, "name": "Bob"},
    {"id": 3, "name": "Carol"}
]"#;

pub fn people() -> Vec<Record> {
    parse_records(PEOPLE).unwrap()
}

/// Three people on a 40 × 10 terminal.
pub fn test_app() -> App {
    App::new(
        people(),
        vec!["id".to_string(), "name".to_string()],
        ProjectionMode::Ragged,
        40,
        10,
    )
}

/// `count` numbered rows on a `cols` × `rows` terminal.
pub fn numbered_app(count: usize, cols: u16, rows: u16) -> App {
    let records = (0..count)
        .map(|i| {
            let mut record = Record::new();
            record.insert("n".to_string(), serde_json::json!(i));
            record.insert("label".to_string(), serde_json::json!(format!("row {i}")));
            record
        })
        .collect();
    App::new(
        records,
        vec!["n".to_string(), "label".to_string()],
        ProjectionMode::Ragged,
        cols,
        rows,
    )
}
