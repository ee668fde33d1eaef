use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::selection::detail_entries;
use crate::core::state::{App, Mode};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DetailView, HelpOverlay, StatusBar, TableView};

/// Bookkeeping from one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrawReport {
    /// Cells cut short or skipped to stay inside the frame.
    pub clipped: usize,
}

const TABLE_HINT: &str = "Press ? or F1 for help";
const DETAIL_HINT: &str = "Enter to select, q to go back";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) -> DrawReport {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Min(0), Length(1)]);
    let [main_area, footer_area] = layout.areas(frame.area());
    let mut report = DrawReport::default();

    match app.mode {
        Mode::Detail { record } => {
            if let Some(selected) = app.records.get(record) {
                let entries = detail_entries(selected, &app.column_order);
                let title = format!(" Record {} of {} ", record + 1, app.records.len());
                DetailView::new(&mut tui.detail, &entries, title).render(frame, main_area);
            }
        }
        Mode::Table | Mode::Help => {
            let mut table = TableView::new(&app.table, app.viewport.plan(&app.table));
            table.render(frame, main_area);
            report.clipped = table.clipped;
        }
    }

    let hint = match app.mode {
        Mode::Detail { .. } => DETAIL_HINT,
        _ => TABLE_HINT,
    };
    StatusBar::new(app.viewport.position_label(), hint).render(frame, footer_area);

    if app.mode == Mode::Help {
        let area = frame.area();
        HelpOverlay.render(frame, area);
    }

    report
}
