//! # Viewport
//!
//! Scroll state over the virtual row space. The table is drawn as one pad
//! per column; every pad shares the scroll offset and the selected row kept
//! here, so columns stay vertically aligned.
//!
//! ```text
//!  virtual rows            screen
//!  0 ┌──────────┐
//!    │          │
//!  pad_top ─────┼──────►  row 0   header
//!    │ ████████ │ ◄─┐     body    page_height rows
//!    │          │   selected
//!    ├──────────┤ ◄── pad_top + page_height
//!    │          │         footer
//!  row_count └──┘
//! ```
//!
//! Every operation is total: it clamps or wraps, never fails. After each one
//!
//! - `selected < row_count` (when `row_count > 0`)
//! - `pad_top <= row_count.saturating_sub(page_height)`
//! - `pad_top <= selected < pad_top + page_height`

use std::ops::Range;

use crate::core::layout;
use crate::core::projection::Table;

/// Screen rows taken by chrome: the header line and the footer line.
pub const CHROME_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First virtual row shown on screen.
    pad_top: usize,
    /// Highlighted virtual row.
    selected: usize,
    /// Height of the virtual row space.
    row_count: usize,
    /// Body rows available on screen (never zero).
    page_height: usize,
    /// Screen width in columns.
    screen_cols: usize,
}

/// What one frame needs to draw the body. Computed once per frame and
/// handed to every column's draw step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub visible_rows: Range<usize>,
    pub highlighted: usize,
    pub widths: Vec<usize>,
}

impl Viewport {
    /// A viewport at the first row, sized for a `cols` × `rows` terminal.
    pub fn new(row_count: usize, cols: u16, rows: u16) -> Self {
        let mut viewport = Self {
            pad_top: 0,
            selected: 0,
            row_count,
            page_height: 1,
            screen_cols: 0,
        };
        viewport.resize(cols, rows);
        viewport
    }

    pub fn pad_top(&self) -> usize {
        self.pad_top
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn page_height(&self) -> usize {
        self.page_height
    }

    pub fn screen_cols(&self) -> usize {
        self.screen_cols
    }

    fn max_pad_top(&self) -> usize {
        self.row_count.saturating_sub(self.page_height)
    }

    fn last_row(&self) -> usize {
        self.row_count.saturating_sub(1)
    }

    /// Move the pad the least amount that puts `selected` on screen.
    fn scroll_into_view(&mut self) {
        self.pad_top = self.pad_top.min(self.max_pad_top());
        if self.selected < self.pad_top {
            self.pad_top = self.selected;
        } else if self.selected >= self.pad_top + self.page_height {
            self.pad_top = self.selected + 1 - self.page_height;
        }
    }

    pub fn first_item(&mut self) {
        self.pad_top = 0;
        self.selected = 0;
    }

    pub fn last_item(&mut self) {
        self.pad_top = self.max_pad_top();
        self.selected = self.last_row();
    }

    /// Next row; wraps to the first row from the last.
    pub fn down_row(&mut self) {
        if self.row_count == 0 {
            return;
        }
        if self.selected >= self.last_row() {
            self.first_item();
            return;
        }
        self.selected += 1;
        if self.selected >= self.pad_top + self.page_height {
            self.pad_top = self.selected + 1 - self.page_height;
        }
    }

    /// Previous row; wraps to the last row from the first.
    pub fn up_row(&mut self) {
        if self.row_count == 0 {
            return;
        }
        if self.selected == 0 {
            self.last_item();
            return;
        }
        self.selected -= 1;
        if self.selected < self.pad_top {
            self.pad_top = self.selected;
        }
    }

    /// One page down. Paging past the end wraps to the first row.
    pub fn pgdn_row(&mut self) {
        if self.row_count == 0 {
            return;
        }
        let target = self.selected + self.page_height;
        if target >= self.row_count {
            self.first_item();
            return;
        }
        self.selected = target;
        self.pad_top = (self.pad_top + self.page_height).min(self.max_pad_top());
        self.scroll_into_view();
    }

    /// One page up. Paging past the start wraps to the last row.
    pub fn pgup_row(&mut self) {
        if self.row_count == 0 {
            return;
        }
        if self.selected < self.page_height {
            self.last_item();
            return;
        }
        self.selected -= self.page_height;
        self.pad_top = self.pad_top.saturating_sub(self.page_height);
        self.scroll_into_view();
    }

    /// Scroll so the selected row sits mid-screen, as far as the edges allow.
    pub fn recenter(&mut self) {
        if self.row_count == 0 {
            return;
        }
        self.pad_top = self
            .selected
            .saturating_sub(self.page_height / 2)
            .min(self.max_pad_top());
    }

    /// Apply new terminal dimensions. The selection is kept and the pad is
    /// re-clamped around it.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.screen_cols = usize::from(cols);
        self.page_height = usize::from(rows.saturating_sub(CHROME_ROWS)).max(1);
        self.selected = self.selected.min(self.last_row());
        self.scroll_into_view();
    }

    /// Virtual rows currently on screen.
    pub fn visible_rows(&self) -> Range<usize> {
        self.pad_top..(self.pad_top + self.page_height).min(self.row_count)
    }

    /// Freeze this frame's scroll state together with column widths.
    pub fn plan(&self, table: &Table) -> RenderPlan {
        RenderPlan {
            visible_rows: self.visible_rows(),
            highlighted: self.selected,
            widths: layout::column_widths(table, self.screen_cols),
        }
    }

    /// Footer position label, 1-based.
    pub fn position_label(&self) -> String {
        if self.row_count == 0 {
            return "[0/0]".to_string();
        }
        format!("[{}/{}]", self.selected + 1, self.row_count)
    }
}
