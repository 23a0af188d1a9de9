//! Interactive checklist session.

use anyhow::Result;

use crate::catalog::Catalog;
use crate::trace::SessionTrace;

pub mod input;
pub mod render;
pub mod runtime;
pub mod selector;
pub mod viewport;

pub use input::{CrosstermEvents, EventSource, Key, SelectorEvent};
pub use selector::{Outcome, Selector, SelectorState, run_selector};

/// Runs a selector session on the process terminal.
///
/// The terminal is restored before this returns, whatever the result.
pub fn run(catalog: Catalog, empty_notice: &str, trace: &mut SessionTrace) -> Result<Outcome> {
    let mut session = match runtime::TerminalGuard::acquire() {
        Ok(session) => session,
        Err(err) => {
            trace.session_end("error");
            return Err(err);
        }
    };
    let mut events = CrosstermEvents;
    let res = run_selector(session.terminal_mut(), &mut events, catalog, empty_notice, trace);
    drop(session);

    match &res {
        Ok(Outcome::Committed(_)) => trace.session_end("commit"),
        Ok(Outcome::Aborted) => trace.session_end("cancel"),
        Err(_) => trace.session_end("error"),
    }
    res
}
