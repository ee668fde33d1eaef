//! # Application State
//!
//! Everything a table session knows, in one place. No terminal types here;
//! presentation-only state (like the detail scroll offset) lives in `tui`.
//!
//! ```text
//! App
//! ├── records: Vec<Record>       // input rows, untouched
//! ├── column_order: Vec<String>  // display order
//! ├── table: Table               // projected columns, read-only
//! ├── viewport: Viewport         // scroll offset + selected row
//! └── mode: Mode                 // table, help overlay, or detail view
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use crate::core::projection::{ProjectionMode, Table, project};
use crate::core::record::Record;
use crate::core::selection::current_row_snapshot;
use crate::core::viewport::Viewport;

/// Which screen has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Table,
    Help,
    /// Detail view for `records[record]`.
    Detail { record: usize },
}

pub struct App {
    pub records: Vec<Record>,
    pub column_order: Vec<String>,
    pub table: Table,
    pub viewport: Viewport,
    pub mode: Mode,
}

impl App {
    /// Project `records` and size the viewport for a `cols` × `rows` terminal.
    pub fn new(
        records: Vec<Record>,
        column_order: Vec<String>,
        projection: ProjectionMode,
        cols: u16,
        rows: u16,
    ) -> Self {
        let table = project(&records, &column_order, projection);
        let viewport = Viewport::new(table.row_count(), cols, rows);
        Self {
            records,
            column_order,
            table,
            viewport,
            mode: Mode::Table,
        }
    }

    /// Column → value at the selected row, rebuilt on every call.
    pub fn current_row(&self) -> Record {
        current_row_snapshot(&self.table, self.viewport.selected())
    }

    /// The record open in the detail view, if any.
    pub fn detail_record(&self) -> Option<&Record> {
        match self.mode {
            Mode::Detail { record } => self.records.get(record),
            _ => None,
        }
    }
}
