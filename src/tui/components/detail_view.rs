//! # DetailView Component
//!
//! Full-screen view of one record as label/value pairs. Read-only: it
//! never touches the table's viewport.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DetailViewState` lives in `TuiState` and keeps the scroll offset
//! - `DetailView` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::layout::{display_width, fit_cell, pad_to};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Gap between the label column and the value column.
const GUTTER: usize = 2;

/// Scroll state for the detail view. Reset each time a record is opened.
#[derive(Default)]
pub struct DetailViewState {
    pub scroll_state: ScrollViewState,
    /// Content height from the last render
    pub content_height: u16,
    /// Viewport height from the last render
    pub viewport_height: u16,
}

impl DetailViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the offset inside the content.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Events emitted by the detail view.
#[derive(Debug, PartialEq, Eq)]
pub enum DetailEvent {
    Scrolled,
}

impl EventHandler for DetailViewState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Down => self.scroll_state.scroll_down(),
            TuiEvent::Up => self.scroll_state.scroll_up(),
            TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::Home => self.scroll_state.scroll_to_top(),
            TuiEvent::End => self.scroll_state.set_offset(Position {
                x: 0,
                y: self.content_height.saturating_sub(self.viewport_height),
            }),
            _ => return None,
        }
        self.clamp_scroll();
        Some(DetailEvent::Scrolled)
    }
}

/// Transient render wrapper for the detail view.
pub struct DetailView<'a> {
    state: &'a mut DetailViewState,
    entries: &'a [(String, String)],
    title: String,
}

impl<'a> DetailView<'a> {
    pub fn new(
        state: &'a mut DetailViewState,
        entries: &'a [(String, String)],
        title: String,
    ) -> Self {
        Self {
            state,
            entries,
            title,
        }
    }

    /// Lay out entries as lines for a content area `width` columns wide.
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let longest_label = self
            .entries
            .iter()
            .map(|(label, _)| display_width(label))
            .max()
            .unwrap_or(0);
        // Labels get at most a third of the width.
        let label_width = longest_label.min(width / 3).max(1);
        let value_width = width.saturating_sub(label_width + GUTTER).max(1);

        let label_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let indent = " ".repeat(label_width + GUTTER);

        let mut lines = Vec::new();
        for (label, value) in self.entries {
            let label = if display_width(label) <= label_width {
                pad_to(label, label_width)
            } else {
                fit_cell(label, label_width).text
            };
            let wrapped = textwrap::wrap(value, value_width);
            let mut wrapped = wrapped.iter();

            let first = wrapped.next().map(|l| l.to_string()).unwrap_or_default();
            lines.push(Line::from(vec![
                Span::styled(label, label_style),
                Span::raw(" ".repeat(GUTTER)),
                Span::raw(first),
            ]));
            for rest in wrapped {
                lines.push(Line::from(vec![
                    Span::raw(indent.clone()),
                    Span::raw(rest.to_string()),
                ]));
            }
        }
        lines
    }
}

impl Component for DetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let help_text = " Enter Select  q/Esc Back ";
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(self.title.clone())
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.is_empty() {
            return;
        }

        let content_width = inner.width.saturating_sub(1); // -1 for scrollbar
        let lines = self.lines(usize::from(content_width));
        let content_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

        self.state.content_height = content_height;
        self.state.viewport_height = inner.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, 0, content_width, content_height),
        );
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
