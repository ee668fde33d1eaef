use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Down,
    Up,
    PageDown,
    PageUp,
    Home,
    End,
    Recenter,
    Submit,
    Help,
    Quit,
    ForceQuit, // Ctrl+C - raw mode swallows SIGINT
    Resize(u16, u16),
    /// Any key press without a binding
    Other,
}

impl TuiEvent {
    /// The core action for this event. `ForceQuit` is handled by the loop.
    pub fn action(self) -> Option<Action> {
        let action = match self {
            TuiEvent::Down => Action::Down,
            TuiEvent::Up => Action::Up,
            TuiEvent::PageDown => Action::PageDown,
            TuiEvent::PageUp => Action::PageUp,
            TuiEvent::Home => Action::First,
            TuiEvent::End => Action::Last,
            TuiEvent::Recenter => Action::Recenter,
            TuiEvent::Submit => Action::Confirm,
            TuiEvent::Help => Action::ToggleHelp,
            TuiEvent::Quit => Action::Quit,
            TuiEvent::Resize(cols, rows) => Action::Resize { cols, rows },
            TuiEvent::Other => Action::Other,
            TuiEvent::ForceQuit => return None,
        };
        Some(action)
    }
}

/// Translate a key press into a `TuiEvent`. Unbound keys give `None`.
pub fn map_key(key: KeyEvent) -> Option<TuiEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(TuiEvent::ForceQuit),
            KeyCode::Char('l') => Some(TuiEvent::Recenter),
            _ => None,
        };
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Char('j' | 'n') | KeyCode::Down => Some(TuiEvent::Down),
        KeyCode::Char('k' | 'p') | KeyCode::Up => Some(TuiEvent::Up),
        KeyCode::Char('f' | 'd') | KeyCode::PageDown => Some(TuiEvent::PageDown),
        KeyCode::Char('b' | 'u') | KeyCode::PageUp => Some(TuiEvent::PageUp),
        KeyCode::Char('g' | '<') | KeyCode::Home => Some(TuiEvent::Home),
        KeyCode::Char('G' | '>') | KeyCode::End => Some(TuiEvent::End),
        KeyCode::Char('z') => Some(TuiEvent::Recenter),
        KeyCode::Enter => Some(TuiEvent::Submit),
        KeyCode::Char('?') | KeyCode::F(1) => Some(TuiEvent::Help),
        KeyCode::Char('q') | KeyCode::Esc => Some(TuiEvent::Quit),
        _ => None,
    }
}

/// Where raw terminal events come from.
pub trait EventSource {
    /// Wait up to `timeout` for an event to become readable.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Block until the next event.
    fn read(&mut self) -> io::Result<Event>;
}

/// The real terminal, via crossterm's global event queue.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Blocking reader over terminal events.
///
/// A bare `Esc` is held for `escape_timeout`. If another key press lands
/// inside that window the pair is an Alt chord split by the terminal, and
/// both are dropped.
pub struct EventReader<S = CrosstermEvents> {
    source: S,
    escape_timeout: Duration,
    pending: Option<Event>,
}

impl EventReader<CrosstermEvents> {
    pub fn new(escape_timeout: Duration) -> Self {
        Self::with_source(CrosstermEvents, escape_timeout)
    }
}

impl<S: EventSource> EventReader<S> {
    pub fn with_source(source: S, escape_timeout: Duration) -> Self {
        Self {
            source,
            escape_timeout,
            pending: None,
        }
    }

    fn read_raw(&mut self) -> io::Result<Event> {
        match self.pending.take() {
            Some(event) => Ok(event),
            None => self.source.read(),
        }
    }

    /// Block until the next key press or a resize.
    pub fn next_event(&mut self) -> io::Result<TuiEvent> {
        loop {
            match self.read_raw()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    log::trace!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
                    if key.code == KeyCode::Esc && key.modifiers.is_empty() && self.escape_chord()? {
                        continue;
                    }
                    return Ok(map_key(key).unwrap_or(TuiEvent::Other));
                }
                Event::Resize(cols, rows) => return Ok(TuiEvent::Resize(cols, rows)),
                _ => {}
            }
        }
    }

    /// True if a key press follows `Esc` within the timeout. Any other
    /// event arriving in the window is kept for the next read.
    fn escape_chord(&mut self) -> io::Result<bool> {
        if self.escape_timeout.is_zero() || !self.source.poll(self.escape_timeout)? {
            return Ok(false);
        }
        match self.source.read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                debug!("Dropped Esc+{:?} as an Alt chord", key.code);
                Ok(true)
            }
            other => {
                self.pending = Some(other);
                Ok(false)
            }
        }
    }
}
