use std::collections::VecDeque;

use ratatui::backend::TestBackend;

use super::*;

/// Replays a fixed list of events and then fails, like a closed input stream.
struct Script {
    events: VecDeque<SelectorEvent>,
}

impl Script {
    fn keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            events: keys.into_iter().map(SelectorEvent::Key).collect(),
        }
    }
}

impl EventSource for Script {
    fn next_event(&mut self) -> Result<SelectorEvent> {
        self.events.pop_front().context("event script exhausted")
    }
}

fn screen(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(usize::from(buffer.area.width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .map(|row| row.trim_end().to_string())
        .collect()
}

fn catalog(n: usize) -> Catalog {
    Catalog::from_names((0..n).map(|i| format!("doc{:02}", i)))
}

#[test]
fn toggle_then_commit_returns_checked_catalog() -> Result<()> {
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).context("create terminal")?;
    let mut events = Script::keys([Key::Down, Key::Toggle, Key::Commit]);
    let mut trace = SessionTrace::disabled();

    let outcome = run_selector(
        &mut terminal,
        &mut events,
        Catalog::from_names(["alpha", "beta", "gamma"]),
        "empty",
        &mut trace,
    )?;

    let Outcome::Committed(catalog) = outcome else {
        panic!("expected commit");
    };
    assert_eq!(catalog.checked_names().collect::<Vec<_>>(), vec!["beta"]);
    assert_eq!(trace.stats().redraws, 3);
    assert_eq!(trace.stats().toggles, 1);
    Ok(())
}

#[test]
fn cancel_returns_nothing() -> Result<()> {
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).context("create terminal")?;
    let mut events = Script::keys([Key::Toggle, Key::Cancel]);
    let mut trace = SessionTrace::disabled();

    let outcome = run_selector(&mut terminal, &mut events, catalog(3), "empty", &mut trace)?;
    assert_eq!(outcome, Outcome::Aborted);
    Ok(())
}

#[test]
fn empty_catalog_ignores_moves_and_commits_empty() -> Result<()> {
    let mut terminal = Terminal::new(TestBackend::new(30, 6)).context("create terminal")?;
    let mut events = Script::keys([Key::Up, Key::Down, Key::Toggle, Key::Commit]);
    let mut trace = SessionTrace::disabled();

    let outcome = run_selector(
        &mut terminal,
        &mut events,
        Catalog::default(),
        "nothing to pick",
        &mut trace,
    )?;
    assert_eq!(outcome, Outcome::Committed(Catalog::default()));
    assert_eq!(screen(&terminal)[2], "nothing to pick");
    Ok(())
}

#[test]
fn exhausted_events_surface_as_error() {
    let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
    let mut events = Script::keys([Key::Down]);
    let mut trace = SessionTrace::disabled();

    let res = run_selector(&mut terminal, &mut events, catalog(2), "empty", &mut trace);
    assert!(res.is_err());
}

#[test]
fn cursor_is_clamped_to_catalog_bounds() {
    let mut trace = SessionTrace::disabled();
    let mut selector = Selector::new(catalog(3));

    selector.handle(SelectorEvent::Key(Key::Up), &mut trace);
    assert_eq!(selector.cursor(), 0);
    for _ in 0..5 {
        selector.handle(SelectorEvent::Key(Key::Down), &mut trace);
    }
    assert_eq!(selector.cursor(), 2);
    selector.handle(SelectorEvent::Key(Key::Char('x')), &mut trace);
    selector.handle(SelectorEvent::Key(Key::Other), &mut trace);
    assert_eq!(selector.cursor(), 2);
    assert_eq!(selector.state(), SelectorState::Running);
    assert!(selector.into_outcome().is_none());
}

#[test]
fn events_after_commit_are_ignored() {
    let mut trace = SessionTrace::disabled();
    let mut selector = Selector::new(catalog(2));
    selector.handle(SelectorEvent::Key(Key::Commit), &mut trace);
    selector.handle(SelectorEvent::Key(Key::Toggle), &mut trace);
    selector.handle(SelectorEvent::Key(Key::Cancel), &mut trace);

    assert_eq!(selector.state(), SelectorState::Committed);
    assert_eq!(selector.catalog().checked_count(), 0);
}

#[test]
fn viewport_follows_cursor_through_any_key_sequence() {
    let keys = [Key::Down, Key::Down, Key::Up, Key::Toggle, Key::Down];
    let mut trace = SessionTrace::disabled();
    for total in 1..9 {
        for height in 1..6 {
            let mut selector = Selector::new(catalog(total));
            for step in 0..40 {
                let key = keys[(step * 7 + total) % keys.len()];
                selector.handle(SelectorEvent::Key(key), &mut trace);
                selector.sync_viewport(height);
                let (cursor, offset) = (selector.cursor(), selector.offset());
                assert!(cursor < total);
                assert!(offset <= cursor && cursor < offset + height);
                assert!(offset <= total.saturating_sub(height));
            }
        }
    }
}

#[test]
fn scrolling_keeps_cursor_row_on_screen() -> Result<()> {
    let mut terminal = Terminal::new(TestBackend::new(20, 5)).context("create terminal")?;
    let mut events = Script::keys(std::iter::repeat_n(Key::Down, 9).chain([Key::Commit]));
    let mut trace = SessionTrace::disabled();

    run_selector(&mut terminal, &mut events, catalog(10), "empty", &mut trace)?;

    let rows = screen(&terminal);
    assert_eq!(rows[2..], ["  [ ] doc07", "  [ ] doc08", "> [ ] doc09"]);
    assert_eq!(trace.stats().redraws, 10);
    Ok(())
}

#[test]
fn resize_changes_only_the_next_viewport() {
    let mut trace = SessionTrace::disabled();
    let mut selector = Selector::new(catalog(8));
    for _ in 0..5 {
        selector.handle(SelectorEvent::Key(Key::Down), &mut trace);
    }
    selector.sync_viewport(view_height(10));
    assert_eq!(selector.offset(), 0);

    selector.handle(SelectorEvent::Resize { cols: 12, rows: 4 }, &mut trace);
    assert_eq!((selector.cursor(), selector.offset()), (5, 0));
    assert_eq!(trace.stats().resizes, 1);

    selector.sync_viewport(view_height(4));
    assert_eq!(selector.offset(), 4);

    let lines = render::screen_lines(&selector.view("empty"), 12, 4);
    let texts: Vec<&str> = lines.iter().map(|l| l.text.trim_end()).collect();
    assert_eq!(
        texts,
        vec!["↑/↓ move • s", "------------", "  [ ] doc04", "> [ ] doc05"]
    );
}
