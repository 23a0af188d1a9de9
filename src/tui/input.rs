use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Key actions understood by the selector. Bindings are fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Toggle,
    Commit,
    Cancel,
    /// Any other printable character; ignored by the selector.
    Char(char),
    Other,
}

impl Key {
    pub fn label(self) -> String {
        match self {
            Key::Up => "up".to_string(),
            Key::Down => "down".to_string(),
            Key::Toggle => "toggle".to_string(),
            Key::Commit => "commit".to_string(),
            Key::Cancel => "cancel".to_string(),
            Key::Char(c) => format!("char:{}", c),
            Key::Other => "other".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorEvent {
    Key(Key),
    Resize { cols: u16, rows: u16 },
}

/// Blocking source of selector events.
pub trait EventSource {
    fn next_event(&mut self) -> Result<SelectorEvent>;
}

/// Reads events from the process terminal via crossterm.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> Result<SelectorEvent> {
        loop {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => {
                    return Ok(SelectorEvent::Key(map_key(k)));
                }
                Event::Resize(cols, rows) => return Ok(SelectorEvent::Resize { cols, rows }),
                _ => {}
            }
        }
    }
}

pub fn map_key(key: KeyEvent) -> Key {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Key::Cancel,
        KeyCode::Char(_) if ctrl => Key::Other,
        KeyCode::Esc => Key::Cancel,
        KeyCode::Enter => Key::Commit,
        KeyCode::Up | KeyCode::Char('k') => Key::Up,
        KeyCode::Down | KeyCode::Char('j') => Key::Down,
        KeyCode::Char(' ') => Key::Toggle,
        KeyCode::Char('q') | KeyCode::Char('Q') => Key::Cancel,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

#[cfg(test)]
#[path = "../tests/tui/input_tests.rs"]
mod tests;
