//! # Tabular Projection
//!
//! Turns a list of records into named columns of cells. Column sequences are
//! built once per session and stay read-only afterwards.
//!
//! ```text
//! [{"a":1,"b":2},{"a":3}]  --(order a,b)-->  a: [1, 3]
//!                                            b: [2]        (Ragged)
//!                                            b: [2, -]     (Aligned)
//! ```

use serde_json::Value;

use crate::core::record::{Record, render_value};

/// How records lacking a column are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectionMode {
    /// Records without the key contribute nothing to that column, so
    /// columns can differ in length.
    #[default]
    Ragged,
    /// Records without the key contribute a `Cell::Missing`, so every
    /// column has one cell per record.
    Aligned,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Present(Value),
    Missing,
}

impl Cell {
    pub fn text(&self) -> String {
        match self {
            Cell::Present(value) => render_value(value),
            Cell::Missing => String::new(),
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Cell::Present(value) => Some(value),
            Cell::Missing => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub title: String,
    pub cells: Vec<Cell>,
}

/// Projected table: columns in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    /// Height of the virtual row space: the longest column.
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(|c| c.cells.len()).max().unwrap_or(0)
    }

    pub fn column(&self, title: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.title == title)
    }
}

/// Project `records` onto `column_order`.
///
/// A name no record defines yields an empty column (or an all-missing one in
/// aligned mode). Duplicate names in `column_order` are projected once.
pub fn project(records: &[Record], column_order: &[String], mode: ProjectionMode) -> Table {
    let mut columns: Vec<Column> = Vec::with_capacity(column_order.len());

    for title in column_order {
        if columns.iter().any(|c| &c.title == title) {
            continue;
        }
        let cells = records
            .iter()
            .filter_map(|record| match (record.get(title), mode) {
                (Some(value), _) => Some(Cell::Present(value.clone())),
                (None, ProjectionMode::Aligned) => Some(Cell::Missing),
                (None, ProjectionMode::Ragged) => None,
            })
            .collect();
        columns.push(Column {
            title: title.clone(),
            cells,
        });
    }

    Table { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::parse_records;
    use serde_json::json;

    fn order(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn values(column: &Column) -> Vec<Value> {
        column.cells.iter().filter_map(|c| c.value().cloned()).collect()
    }

    #[test]
    fn test_ragged_projection_drops_absent_keys() {
        let records = parse_records(r#"[{"a":1,"b":2},{"a":3}]"#).unwrap();
        let table = project(&records, &order(&["a", "b"]), ProjectionMode::Ragged);

        assert_eq!(values(&table.columns[0]), vec![json!(1), json!(3)]);
        assert_eq!(values(&table.columns[1]), vec![json!(2)]);
        assert_eq!(table.columns[1].cells.len(), 1);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_aligned_projection_pads_missing() {
        let records = parse_records(r#"[{"a":1},{"a":3,"b":4}]"#).unwrap();
        let table = project(&records, &order(&["a", "b"]), ProjectionMode::Aligned);

        let b = table.column("b").unwrap();
        assert_eq!(b.cells, vec![Cell::Missing, Cell::Present(json!(4))]);
        assert_eq!(b.cells[0].text(), "");
    }

    #[test]
    fn test_projection_follows_column_order() {
        let records = parse_records(r#"[{"a":1,"b":2,"c":3}]"#).unwrap();
        let table = project(&records, &order(&["c", "a"]), ProjectionMode::Ragged);

        let titles: Vec<&str> = table.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "a"]);
    }

    #[test]
    fn test_unknown_column_is_empty_not_an_error() {
        let records = parse_records(r#"[{"a":1}]"#).unwrap();
        let table = project(&records, &order(&["a", "zzz"]), ProjectionMode::Ragged);

        assert!(table.column("zzz").unwrap().cells.is_empty());
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_duplicate_names_projected_once() {
        let records = parse_records(r#"[{"a":1}]"#).unwrap();
        let table = project(&records, &order(&["a", "a"]), ProjectionMode::Ragged);
        assert_eq!(table.columns.len(), 1);
    }
}
