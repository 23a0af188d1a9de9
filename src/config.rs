use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";
pub const DEFAULT_EXTENSION: &str = "md";

/// Fully resolved settings for one run.
///
/// Everything here is absolute so nothing downstream depends on the process
/// working directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub dir: PathBuf,
    pub output: PathBuf,
    pub extension: String,
    pub trace: Option<PathBuf>,
}

impl RunConfig {
    /// Resolves relative paths against `cwd`.
    pub fn resolve(
        cwd: &Path,
        dir: &Path,
        output: Option<&Path>,
        extension: Option<&str>,
        trace: Option<&Path>,
    ) -> Self {
        let output = output.unwrap_or(Path::new(DEFAULT_OUTPUT_FILE));
        let extension = extension
            .map(|ext| ext.trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .unwrap_or(DEFAULT_EXTENSION);
        Self {
            dir: cwd.join(dir),
            output: cwd.join(output),
            extension: extension.to_string(),
            trace: trace.map(|p| cwd.join(p)),
        }
    }

    pub fn from_current_dir(
        dir: &Path,
        output: Option<&Path>,
        extension: Option<&str>,
        trace: Option<&Path>,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("get current dir")?;
        Ok(Self::resolve(&cwd, dir, output, extension, trace))
    }

    /// Line shown when the directory holds no matching documents.
    pub fn empty_notice(&self) -> String {
        format!("No .{} files found.", self.extension)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
