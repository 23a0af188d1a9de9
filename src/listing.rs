//! Directory scan producing candidate document stems.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("list directory {path}")]
pub struct ListingError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Lists the stems of regular files in `dir` whose extension matches
/// `extension` (compared case-insensitively, without the leading dot).
///
/// The scan is not recursive. Directories, symlinks and other special files are
/// skipped, as are names that are not valid UTF-8 and names whose stem would
/// be empty (`.md`). Output order follows the directory and is not sorted.
pub fn list_documents(dir: &Path, extension: &str) -> Result<Vec<String>, ListingError> {
    let wrap = |source: io::Error| ListingError {
        path: dir.to_path_buf(),
        source,
    };

    let wanted = extension.trim_start_matches('.').to_lowercase();
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).map_err(wrap)? {
        let entry = entry.map_err(wrap)?;
        let file_type = entry.file_type().map_err(wrap)?;
        if !file_type.is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if let Some(stem) = document_stem(&name, &wanted) {
            out.push(stem.to_string());
        }
    }

    Ok(out)
}

/// Splits `file_name` at its last dot and returns the stem if the suffix
/// matches `extension` (already lowercased, no dot).
fn document_stem<'a>(file_name: &'a str, extension: &str) -> Option<&'a str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.to_lowercase() != extension {
        return None;
    }
    Some(stem)
}

#[cfg(test)]
#[path = "tests/listing_tests.rs"]
mod tests;
