//! # StatusBar Component
//!
//! Bottom line of the screen: selection position and a hint for the
//! current mode.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! StatusBar is purely presentational. It receives all data as props and
//! has no internal state:
//!
//! ```rust,ignore
//! let mut status_bar = StatusBar::new(app.viewport.position_label(), "Press ? or F1 for help");
//! status_bar.render(frame, footer_area);
//! ```
//!
//! ### Props-in-Struct Pattern
//!
//! Props are struct fields rather than `render()` parameters so the bar
//! fits the fixed `Component::render` signature.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::table_view::header_style;

/// Footer showing `[row/total]` and a hint.
pub struct StatusBar {
    /// Position label, e.g. `[2/3]`
    pub position: String,
    /// Hint for the active mode
    pub hint: String,
}

impl StatusBar {
    pub fn new(position: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            hint: hint.into(),
        }
    }

    fn text(&self) -> String {
        if self.hint.is_empty() {
            self.position.clone()
        } else {
            format!("{} ({})", self.position, self.hint)
        }
    }
}

impl Component for StatusBar {
    /// Always a single line; a plain styled `Paragraph` clips at the edge.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.text()).style(header_style()), area);
    }
}
