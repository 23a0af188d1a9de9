//! Interactive terminal checklist over the documents of a single directory.
//!
//! The pieces compose in one direction: [`listing`] produces candidate names,
//! [`catalog::Catalog`] orders them, [`selection`] seeds checks from a prior
//! run and persists the final choice, and [`tui`] drives the interactive
//! session in between.

pub mod catalog;
pub mod config;
pub mod listing;
pub mod selection;
pub mod trace;
pub mod tui;
