//! Optional JSONL session trace.
//!
//! Each line is one JSON object carrying a sequence number, an RFC 3339
//! timestamp, the event name and a payload. Tracing never fails a session: a
//! write error switches the trace off.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TraceStats {
    pub redraws: u64,
    pub user_actions: u64,
    pub toggles: u64,
    pub resizes: u64,
}

#[derive(Debug)]
struct TraceWriter {
    out: BufWriter<File>,
    path: PathBuf,
    seq: u64,
}

impl TraceWriter {
    fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!(
                    "create parent directories for trace path {}",
                    path.display()
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open trace file {}", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
            seq: 0,
        })
    }

    fn write_event<T: Serialize>(&mut self, event: &str, payload: T) -> Result<()> {
        self.seq += 1;
        let line = json!({
            "seq": self.seq,
            "ts": now_ts(),
            "event": event,
            "payload": payload
        });
        serde_json::to_writer(&mut self.out, &line).context("serialize trace event")?;
        self.out.write_all(b"\n").context("write trace newline")?;
        self.out.flush().context("flush trace event")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct SessionTrace {
    writer: Option<TraceWriter>,
    stats: TraceStats,
}

impl SessionTrace {
    /// A trace that records statistics but writes nothing.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            writer: Some(TraceWriter::open(path)?),
            stats: TraceStats::default(),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    pub fn stats(&self) -> TraceStats {
        self.stats
    }

    pub fn session_start(&mut self, dir: &Path, output: &Path, items: usize, checked: usize) {
        self.write_event(
            "session_start",
            json!({
                "dir": dir.display().to_string(),
                "output": output.display().to_string(),
                "items": items,
                "pre_checked": checked,
            }),
        );
    }

    pub fn redraw(&mut self) {
        self.stats.redraws += 1;
    }

    pub fn user_action(&mut self, key: &str, cursor: usize) {
        self.stats.user_actions += 1;
        self.write_event(
            "user_action",
            json!({
                "source": "keyboard",
                "key": key,
                "cursor": cursor,
            }),
        );
    }

    pub fn toggled(&mut self, name: &str, checked: bool) {
        self.stats.toggles += 1;
        self.write_event("toggle", json!({ "item": name, "checked": checked }));
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.stats.resizes += 1;
        self.write_event("resize", json!({ "cols": cols, "rows": rows }));
    }

    pub fn state_change(&mut self, from: &str, to: &str) {
        self.write_event("state_change", json!({ "from": from, "to": to }));
    }

    pub fn session_end(&mut self, reason: &str) {
        let path = self.writer.as_ref().map(|w| w.path.display().to_string());
        let stats = self.stats;
        self.write_event(
            "session_end",
            json!({
                "reason": reason,
                "stats": stats,
                "trace_path": path,
            }),
        );
    }

    fn write_event<T: Serialize>(&mut self, event: &str, payload: T) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        if writer.write_event(event, payload).is_err() {
            self.writer = None;
        }
    }
}

fn now_ts() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

#[cfg(test)]
#[path = "tests/trace_tests.rs"]
mod tests;
