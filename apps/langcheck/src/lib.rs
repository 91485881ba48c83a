//! Langcheck core library.
//!
//! Checks that a tree of per-language translation folders mirrors a
//! reference language folder, both in directory layout and in the top-level
//! keys of every JSON file.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `languages`: The allowed language identifier set.
//! - `tree`: Folder tree enumeration shared by the checks.
//! - `checks`: Folder-name, structure and JSON key checks.
//! - `validate`: Driver running the checks in order.
//! - `models`: Issue records, warnings and the run report.
//! - `output`: Human/JSON printers.
//! - `error`: Fatal error type.
//! - `utils`: Supporting helpers.
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod languages;
pub mod models;
pub mod output;
pub mod tree;
pub mod utils;
pub mod validate;

pub use error::{Error, Result};
