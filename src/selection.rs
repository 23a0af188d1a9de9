//! Persisted selection: reading it back onto a fresh catalog and writing the
//! final checked set.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::Catalog;

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("selection entry {name:?} (line {line}) not found among candidates")]
    UnknownEntry { name: String, line: usize },

    #[error("read selection file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write selection file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads the persisted selection at `path`.
///
/// A missing file means no selection was ever written and yields `None`.
pub fn load_selection(path: &Path) -> Result<Option<String>, SelectionError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(SelectionError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Applies a persisted selection onto `catalog`.
///
/// Lines are trimmed and blank lines skipped. The first line naming an item
/// the catalog does not contain fails the whole reconciliation.
pub fn reconcile(
    mut catalog: Catalog,
    persisted: Option<&str>,
) -> Result<Catalog, SelectionError> {
    let Some(text) = persisted else {
        return Ok(catalog);
    };

    for (idx, raw) in text.lines().enumerate() {
        let entry = raw.trim();
        if entry.is_empty() {
            continue;
        }
        if !catalog.set_checked(entry) {
            return Err(SelectionError::UnknownEntry {
                name: entry.to_string(),
                line: idx + 1,
            });
        }
    }

    Ok(catalog)
}

/// Serializes the checked items, one name per line, in catalog order.
pub fn render_selection(catalog: &Catalog) -> String {
    let mut out = String::new();
    for name in catalog.checked_names() {
        out.push_str(name);
        out.push('\n');
    }
    out
}

/// Writes the checked subset of `catalog` to `path` and returns how many
/// entries were written.
pub fn write_selection(catalog: &Catalog, path: &Path) -> Result<usize, SelectionError> {
    let content = render_selection(catalog);
    write_atomic(path, content.as_bytes()).map_err(|source| SelectionError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(catalog.checked_count())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
