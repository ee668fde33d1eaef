//! # Actions
//!
//! Everything that can happen in a table session becomes an `Action`.
//! User presses `j`? That's `Action::Down`. Terminal resized? That's
//! `Action::Resize { cols, rows }`.
//!
//! `update()` applies an action to the `App` and returns an `Effect` telling
//! the adapter whether to keep going. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::record::Record;
use crate::core::selection::resolve_full_record;
use crate::core::state::{App, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Down,
    Up,
    PageDown,
    PageUp,
    First,
    Last,
    Recenter,
    /// Enter: open the detail view, or pick the record already open.
    Confirm,
    ToggleHelp,
    /// q / Esc: close the current overlay, or end the session from the table.
    Quit,
    Resize { cols: u16, rows: u16 },
    /// A key with no binding. Only closes the help overlay.
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    Select(Record),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    if let Action::Resize { cols, rows } = action {
        debug!("Resize to {cols}x{rows}");
        app.viewport.resize(cols, rows);
        return Effect::None;
    }

    match app.mode {
        Mode::Table => update_table(app, action),
        Mode::Help => {
            debug!("Help closed");
            app.mode = Mode::Table;
            Effect::None
        }
        Mode::Detail { record } => match action {
            Action::Confirm => match app.detail_record() {
                Some(selected) => {
                    info!("Selected record {record}");
                    Effect::Select(selected.clone())
                }
                None => Effect::None,
            },
            Action::Quit => {
                debug!("Detail view closed");
                app.mode = Mode::Table;
                Effect::None
            }
            // Scrolling inside the detail view is presentation state.
            _ => Effect::None,
        },
    }
}

fn update_table(app: &mut App, action: Action) -> Effect {
    let viewport = &mut app.viewport;
    match action {
        Action::Down => viewport.down_row(),
        Action::Up => viewport.up_row(),
        Action::PageDown => viewport.pgdn_row(),
        Action::PageUp => viewport.pgup_row(),
        Action::First => viewport.first_item(),
        Action::Last => viewport.last_item(),
        Action::Recenter => viewport.recenter(),
        Action::ToggleHelp => {
            debug!("Help opened");
            app.mode = Mode::Help;
        }
        Action::Confirm => {
            let snapshot = app.current_row();
            match resolve_full_record(&snapshot, &app.records) {
                Some((record, full)) => {
                    debug!("Detail view opened for record {record} ({} fields)", full.len());
                    app.mode = Mode::Detail { record };
                }
                None => warn!(
                    "No record matches row {} ({} columns)",
                    app.viewport.selected(),
                    snapshot.len()
                ),
            }
        }
        Action::Quit => return Effect::Quit,
        Action::Resize { .. } | Action::Other => {}
    }
    Effect::None
}
