//! Fatal errors that stop a run before or outside of validation.
//!
//! Validation findings are data (see `models`), never errors. Only problems
//! that prevent the checks from running at all end up here; the binary maps
//! every variant to exit status 2.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot list base directory {}: {source}", .path.display())]
    BaseDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },
    #[error("invalid language identifier '{0}'")]
    InvalidLanguage(String),
    #[error("reference language '{0}' is not in the allowed language set")]
    UnknownReference(String),
    #[error("unsupported output mode '{0}' (expected human|json)")]
    OutputMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
