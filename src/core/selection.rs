//! # Selection
//!
//! Maps the highlighted row back to the record it came from, and lays out
//! that record for the detail screen.

use crate::core::projection::Table;
use crate::core::record::{Record, render_value};

/// Column → value for one row. Missing cells are left out.
pub fn current_row_snapshot(table: &Table, row: usize) -> Record {
    let mut snapshot = Record::new();
    for column in &table.columns {
        if let Some(value) = column.cells.get(row).and_then(|cell| cell.value()) {
            snapshot.insert(column.title.clone(), value.clone());
        }
    }
    snapshot
}

/// First record holding every entry of `snapshot`, with its position in
/// `records`. Identical rows resolve to the earliest one.
pub fn resolve_full_record<'a>(
    snapshot: &Record,
    records: &'a [Record],
) -> Option<(usize, &'a Record)> {
    records.iter().enumerate().find(|(_, record)| {
        snapshot
            .iter()
            .all(|(key, value)| record.get(key) == Some(value))
    })
}

/// Label/value pairs for the detail screen: columns in table order first,
/// then any keys the table doesn't show.
pub fn detail_entries(record: &Record, column_order: &[String]) -> Vec<(String, String)> {
    let shown = column_order
        .iter()
        .filter_map(|key| record.get(key).map(|value| (key, value)));
    let hidden = record
        .iter()
        .filter(|(key, _)| !column_order.contains(*key));

    let mut entries: Vec<(String, String)> = Vec::with_capacity(record.len());
    for (key, value) in shown.chain(hidden) {
        if entries.iter().any(|(label, _)| label == key) {
            continue;
        }
        entries.push((key.clone(), render_value(value)));
    }
    entries
}
