//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! Strictly single-threaded and blocking: draw a frame, block on one input
//! event, apply it, repeat. Resize arrives as an ordinary event between key
//! presses. Help and detail screens are modes of the same loop; closing
//! them drops straight back to the table.
//!
//! The terminal is put into raw/alternate-screen mode once for the whole
//! session and restored by `TerminalSession`'s `Drop`, so every exit path,
//! errors included, leaves the shell usable.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info};
use std::io;

use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::record::Record;
use crate::core::state::{App, Mode};
use crate::tui::component::EventHandler;
use crate::tui::components::DetailViewState;
use crate::tui::event::{EventReader, TuiEvent};

/// TUI-specific presentation state (not part of core table logic)
pub struct TuiState {
    pub detail: DetailViewState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            detail: DetailViewState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the loop does after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Continue,
    /// End the session, with the picked record if there is one.
    Exit(Option<Record>),
}

/// Apply one input event to the session.
pub fn step(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Flow {
    if event == TuiEvent::ForceQuit {
        info!("Force quit");
        return Flow::Exit(None);
    }

    if matches!(app.mode, Mode::Detail { .. }) && tui.detail.handle_event(&event).is_some() {
        return Flow::Continue;
    }

    let Some(action) = event.action() else {
        return Flow::Continue;
    };
    let previous = app.mode;
    let effect = update(app, action);
    if app.mode != previous && matches!(app.mode, Mode::Detail { .. }) {
        tui.detail = DetailViewState::new();
    }

    match effect {
        Effect::None => Flow::Continue,
        Effect::Quit => Flow::Exit(None),
        Effect::Select(record) => Flow::Exit(Some(record)),
    }
}

/// Owns the terminal for the length of a session.
struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    fn start() -> io::Result<Self> {
        let mut session = Self {
            terminal: ratatui::try_init()?,
        };
        session.terminal.hide_cursor()?;
        info!("Terminal modes enabled (raw, alternate screen, hidden cursor)");
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        ratatui::restore();
    }
}

/// Run an interactive session over `app`. Returns the record picked with
/// Enter from the detail view, or `None` on quit.
pub fn run(app: &mut App, config: &ResolvedConfig) -> io::Result<Option<Record>> {
    let (cols, rows) = crossterm::terminal::size()?;
    update(app, Action::Resize { cols, rows });

    let mut session = TerminalSession::start()?;
    let mut events = EventReader::new(config.escape_timeout);
    let mut tui = TuiState::new();

    info!(
        "Session started: {} rows, {} columns, {}x{} terminal",
        app.viewport.row_count(),
        app.table.columns.len(),
        cols,
        rows
    );

    loop {
        let mut report = ui::DrawReport::default();
        session
            .terminal
            .draw(|f| report = ui::draw_ui(f, app, &mut tui))?;
        if report.clipped > 0 {
            debug!("Clipped {} cells this frame", report.clipped);
        }

        let event = events.next_event()?;
        if let Flow::Exit(selected) = step(app, &mut tui, event) {
            info!("Session ended (selected: {})", selected.is_some());
            return Ok(selected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{numbered_app, people, test_app};

    #[test]
    fn test_quit_leaves_state_untouched() {
        let mut app = test_app();
        let before = app.viewport;
        assert_eq!(step(&mut app, &mut TuiState::new(), TuiEvent::Quit), Flow::Exit(None));
        assert_eq!(app.viewport, before);
    }

    #[test]
    fn test_force_quit_from_any_mode() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        step(&mut app, &mut tui, TuiEvent::Submit);
        assert!(matches!(app.mode, Mode::Detail { .. }));
        assert_eq!(step(&mut app, &mut tui, TuiEvent::ForceQuit), Flow::Exit(None));
    }

    #[test]
    fn test_enter_twice_picks_record() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        step(&mut app, &mut tui, TuiEvent::End);
        assert_eq!(step(&mut app, &mut tui, TuiEvent::Submit), Flow::Continue);
        assert_eq!(
            step(&mut app, &mut tui, TuiEvent::Submit),
            Flow::Exit(Some(people()[2].clone()))
        );
    }

    #[test]
    fn test_detail_scroll_keys_do_not_move_table() {
        let mut app = numbered_app(10, 40, 10);
        let mut tui = TuiState::new();
        step(&mut app, &mut tui, TuiEvent::Submit);
        tui.detail.content_height = 40;
        tui.detail.viewport_height = 5;

        step(&mut app, &mut tui, TuiEvent::Down);
        step(&mut app, &mut tui, TuiEvent::Down);
        assert_eq!(tui.detail.scroll_state.offset().y, 2);
        assert_eq!(app.viewport.selected(), 0);

        step(&mut app, &mut tui, TuiEvent::Quit);
        assert_eq!(app.mode, Mode::Table);
        step(&mut app, &mut tui, TuiEvent::Down);
        assert_eq!(app.viewport.selected(), 1);
    }

    #[test]
    fn test_reopening_detail_resets_scroll() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        step(&mut app, &mut tui, TuiEvent::Submit);
        tui.detail.content_height = 40;
        tui.detail.viewport_height = 5;
        step(&mut app, &mut tui, TuiEvent::End);
        assert_eq!(tui.detail.scroll_state.offset().y, 35);

        step(&mut app, &mut tui, TuiEvent::Quit);
        step(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(tui.detail.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_resize_event_reaches_viewport() {
        let mut app = numbered_app(100, 40, 30);
        let mut tui = TuiState::new();
        step(&mut app, &mut tui, TuiEvent::Resize(40, 12));
        assert_eq!(app.viewport.page_height(), 10);
        assert_eq!(app.viewport.screen_cols(), 40);
    }
}
