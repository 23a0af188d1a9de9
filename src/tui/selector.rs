use anyhow::{Context, Result};
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::input::{EventSource, Key, SelectorEvent};
use super::render::{self, INSTRUCTIONS, ListView};
use super::viewport::{ensure_visible, view_height};
use crate::catalog::Catalog;
use crate::trace::SessionTrace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorState {
    Running,
    Committed,
    Aborted,
}

impl SelectorState {
    fn label(self) -> &'static str {
        match self {
            SelectorState::Running => "running",
            SelectorState::Committed => "committed",
            SelectorState::Aborted => "aborted",
        }
    }
}

/// How a session ended. Only a commit hands the catalog back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Committed(Catalog),
    Aborted,
}

/// Cursor, scroll offset and catalog for one interactive session.
#[derive(Debug)]
pub struct Selector {
    catalog: Catalog,
    cursor: usize,
    offset: usize,
    state: SelectorState,
}

impl Selector {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cursor: 0,
            offset: 0,
            state: SelectorState::Running,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn view<'a>(&'a self, empty_notice: &'a str) -> ListView<'a> {
        ListView {
            items: self.catalog.items(),
            cursor: self.cursor,
            offset: self.offset,
            instructions: INSTRUCTIONS,
            empty_notice,
        }
    }

    /// Re-derives the scroll offset for the current view height.
    pub fn sync_viewport(&mut self, view_height: usize) {
        self.offset = ensure_visible(self.cursor, self.offset, view_height, self.catalog.len());
    }

    /// Applies one event. Events after the session ended are ignored.
    pub fn handle(&mut self, event: SelectorEvent, trace: &mut SessionTrace) {
        if self.state != SelectorState::Running {
            return;
        }

        let key = match event {
            SelectorEvent::Resize { cols, rows } => {
                trace.resize(cols, rows);
                return;
            }
            SelectorEvent::Key(key) => key,
        };
        trace.user_action(&key.label(), self.cursor);

        match key {
            Key::Up => self.move_up(),
            Key::Down => self.move_down(),
            Key::Toggle => {
                if let Some(checked) = self.catalog.toggle(self.cursor)
                    && let Some(item) = self.catalog.get(self.cursor)
                {
                    trace.toggled(&item.name, checked);
                }
            }
            Key::Commit => self.transition(SelectorState::Committed, trace),
            Key::Cancel => self.transition(SelectorState::Aborted, trace),
            Key::Char(_) | Key::Other => {}
        }
    }

    /// Consumes the selector once it has left `Running`.
    pub fn into_outcome(self) -> Option<Outcome> {
        match self.state {
            SelectorState::Running => None,
            SelectorState::Committed => Some(Outcome::Committed(self.catalog)),
            SelectorState::Aborted => Some(Outcome::Aborted),
        }
    }

    fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_down(&mut self) {
        if self.cursor + 1 < self.catalog.len() {
            self.cursor += 1;
        }
    }

    fn transition(&mut self, to: SelectorState, trace: &mut SessionTrace) {
        trace.state_change(self.state.label(), to.label());
        self.state = to;
    }
}

/// Draw, wait for one event, apply it; repeat until commit or cancel.
pub fn run_selector<B, E>(
    terminal: &mut Terminal<B>,
    events: &mut E,
    catalog: Catalog,
    empty_notice: &str,
    trace: &mut SessionTrace,
) -> Result<Outcome>
where
    B: Backend,
    E: EventSource + ?Sized,
{
    let mut selector = Selector::new(catalog);

    loop {
        let size = terminal.size().context("query terminal size")?;
        selector.sync_viewport(view_height(size.height));

        let view = selector.view(empty_notice);
        terminal
            .draw(|frame| render::draw(frame, &view))
            .context("draw")?;
        trace.redraw();

        let event = events.next_event()?;
        selector.handle(event, trace);
        if selector.state() != SelectorState::Running {
            break;
        }
    }

    selector
        .into_outcome()
        .context("selector stopped while still running")
}

#[cfg(test)]
#[path = "../tests/tui/selector_tests.rs"]
mod tests;
