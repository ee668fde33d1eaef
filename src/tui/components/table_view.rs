//! # TableView Component
//!
//! Draws the header row and one body column per projected column. All
//! columns read the same `RenderPlan`, so they scroll and highlight as one.
//!
//! ## Bounds
//!
//! Nothing is written outside `area`. Each column's rectangle is
//! intersected with it first, and text is fitted to the column width before
//! it becomes a `Line`. Every cell that had to be cut or skipped bumps
//! `clipped`, which the event loop logs.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Paragraph};

use crate::core::layout::{fit_cell, pad_to};
use crate::core::projection::{Column, Table};
use crate::core::viewport::RenderPlan;
use crate::tui::component::Component;

pub fn header_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Blue)
}

pub fn highlight_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// One column's share of the frame's plan.
#[derive(Debug, Clone)]
struct ColumnSlot {
    x: usize,
    width: usize,
    rows: Range<usize>,
    highlighted: usize,
}

pub struct TableView<'a> {
    table: &'a Table,
    plan: RenderPlan,
    /// Cells cut short or skipped during the last render.
    pub clipped: usize,
}

impl<'a> TableView<'a> {
    pub fn new(table: &'a Table, plan: RenderPlan) -> Self {
        Self {
            table,
            plan,
            clipped: 0,
        }
    }
}

impl Component for TableView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let header_area = Rect { height: 1, ..area };
        frame.render_widget(Block::default().style(header_style()), header_area);

        let mut x = usize::from(area.x);
        for (column, &width) in self.table.columns.iter().zip(&self.plan.widths) {
            let slot = ColumnSlot {
                x,
                width,
                rows: self.plan.visible_rows.clone(),
                highlighted: self.plan.highlighted,
            };
            self.clipped += draw_column(frame, column, slot, area);
            x += width;
        }
    }
}

/// Draw one column clipped to `area`. Returns how many cells were clipped.
fn draw_column(frame: &mut Frame, column: &Column, slot: ColumnSlot, area: Rect) -> usize {
    let visible_cells = slot.rows.clone().filter(|&row| row < column.cells.len()).count();
    if slot.width == 0 {
        return visible_cells;
    }

    let Ok(x) = u16::try_from(slot.x) else {
        return visible_cells;
    };
    let width = u16::try_from(slot.width).unwrap_or(u16::MAX);
    let column_area = Rect::new(x, area.y, width, area.height).intersection(area);
    if column_area.is_empty() {
        return visible_cells;
    }
    // Cells beyond the right edge of the frame are drawn into fewer columns.
    let usable = usize::from(column_area.width);
    let mut clipped = 0;

    let title = fit_cell(&column.title, usable);
    if title.truncated {
        clipped += 1;
    }
    let header = Rect { height: 1, ..column_area };
    frame.render_widget(Paragraph::new(title.text).style(header_style()), header);

    let body = Rect {
        y: column_area.y + 1,
        height: column_area.height.saturating_sub(1),
        ..column_area
    };
    let body_rows = usize::from(body.height);

    let mut lines: Vec<Line> = Vec::with_capacity(body_rows);
    for (screen_row, row) in slot.rows.enumerate() {
        let Some(cell) = column.cells.get(row) else {
            break;
        };
        if screen_row >= body_rows {
            clipped += 1;
            continue;
        }
        let fitted = fit_cell(&cell.text(), usable);
        if fitted.truncated || usable < slot.width {
            clipped += 1;
        }
        let line = if row == slot.highlighted {
            Line::styled(pad_to(&fitted.text, usable), highlight_style())
        } else {
            Line::raw(fitted.text)
        };
        lines.push(line);
    }

    if body.height > 0 {
        frame.render_widget(Paragraph::new(Text::from(lines)), body);
    }
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{numbered_app, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn render(app: &crate::core::state::App, width: u16, height: u16) -> (Buffer, usize) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut clipped = 0;
        terminal
            .draw(|f| {
                let area = f.area();
                let mut view = TableView::new(&app.table, app.viewport.plan(&app.table));
                view.render(f, area);
                clipped = view.clipped;
            })
            .unwrap();
        (terminal.backend().buffer().clone(), clipped)
    }

    #[test]
    fn test_columns_line_up() {
        let app = test_app();
        let (buffer, clipped) = render(&app, 40, 8);

        assert!(row_text(&buffer, 0).starts_with("id name"));
        assert!(row_text(&buffer, 1).starts_with("1  Alice"));
        assert!(row_text(&buffer, 3).starts_with("3  Carol"));
        assert_eq!(clipped, 0);
    }

    #[test]
    fn test_selected_row_is_highlighted() {
        let mut app = test_app();
        app.viewport.down_row();
        let (buffer, _) = render(&app, 40, 8);

        assert_eq!(buffer[(0, 2)].bg, Color::Magenta);
        // The highlight fills the column width, padding included.
        assert_eq!(buffer[(2, 2)].bg, Color::Magenta);
        assert_ne!(buffer[(0, 1)].bg, Color::Magenta);
        assert_eq!(buffer[(0, 0)].bg, Color::Blue);
    }

    #[test]
    fn test_scrolled_view_starts_at_pad_top() {
        let mut app = numbered_app(50, 20, 6);
        for _ in 0..10 {
            app.viewport.down_row();
        }
        assert_eq!(app.viewport.pad_top(), 7);
        let (buffer, _) = render(&app, 20, 6);
        assert!(row_text(&buffer, 1).starts_with("7 "));
        assert!(row_text(&buffer, 4).starts_with("10"));
    }

    #[test]
    fn test_frame_narrower_than_plan_clips_instead_of_panicking() {
        // Viewport thinks the screen is 40 wide; the frame is only 6.
        let app = test_app();
        let (buffer, clipped) = render(&app, 6, 8);

        assert!(row_text(&buffer, 1).starts_with("1  A.."));
        assert!(clipped > 0);
    }

    #[test]
    fn test_frame_shorter_than_plan_skips_rows() {
        let app = numbered_app(20, 20, 12);
        let (_, clipped) = render(&app, 20, 4);
        // 10 planned rows, 3 body rows on screen, 2 columns.
        assert_eq!(clipped, 14);
    }

    #[test]
    fn test_truncated_title_counts_as_clipped() {
        let records = crate::core::record::parse_records(r#"[{"identifier": 1}]"#).unwrap();
        let app = crate::core::state::App::new(
            records,
            vec!["identifier".to_string()],
            crate::core::projection::ProjectionMode::Ragged,
            6,
            5,
        );
        let (buffer, clipped) = render(&app, 6, 5);

        assert_eq!(row_text(&buffer, 0), "iden..");
        assert_eq!(clipped, 1);
    }
}
