use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mdpick::catalog::Catalog;
use mdpick::config::RunConfig;
use mdpick::listing::list_documents;
use mdpick::selection::{load_selection, reconcile, write_selection};
use mdpick::trace::SessionTrace;
use mdpick::tui::{self, Outcome};

#[derive(Parser)]
#[command(name = "mdpick")]
#[command(about = "Pick documents from a directory into a checklist file", long_about = None)]
struct Cli {
    /// Directory holding the documents
    dir: PathBuf,

    /// Selection file to read and rewrite (relative to the current directory)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Document extension to list, without the dot
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,

    /// Append a JSONL trace of the session to PATH
    #[arg(long, value_name = "PATH")]
    trace: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = RunConfig::from_current_dir(
        &cli.dir,
        cli.output.as_deref(),
        cli.extension.as_deref(),
        cli.trace.as_deref(),
    )?;

    let names = list_documents(&cfg.dir, &cfg.extension)?;
    let persisted = load_selection(&cfg.output)?;
    let catalog = reconcile(Catalog::from_names(names), persisted.as_deref())
        .with_context(|| format!("reconcile {}", cfg.output.display()))?;

    if catalog.is_empty() {
        println!("No .{} files found in {}", cfg.extension, cfg.dir.display());
        return Ok(());
    }

    let mut trace = open_trace(&cfg);
    trace.session_start(&cfg.dir, &cfg.output, catalog.len(), catalog.checked_count());

    match tui::run(catalog, &cfg.empty_notice(), &mut trace)? {
        Outcome::Aborted => println!("Selection aborted."),
        Outcome::Committed(catalog) => {
            let count = write_selection(&catalog, &cfg.output)?;
            if count == 0 {
                println!("Wrote empty selection to {}", cfg.output.display());
            } else {
                println!("Saved {} selection(s) to {}", count, cfg.output.display());
            }
        }
    }

    Ok(())
}

fn open_trace(cfg: &RunConfig) -> SessionTrace {
    let Some(path) = &cfg.trace else {
        return SessionTrace::disabled();
    };
    match SessionTrace::open(path) {
        Ok(trace) => trace,
        Err(err) => {
            eprintln!("trace disabled: {:#}", err);
            SessionTrace::disabled()
        }
    }
}
