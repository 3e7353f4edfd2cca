//! Error types for health dump processing.
//!
//! Two tiers exist. [`DumpError`] is fatal and stops the tool before any
//! record is processed. [`SkipReason`] is record-local: the record produces
//! no line and the pipeline moves on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a health dump.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("Unable to open the input file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed decoding JSON from input {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a selected record could not be rendered as a line.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkipReason {
    /// Required field is absent, null, empty, `false` or zero.
    #[error("field {0} is missing, empty, or zero")]
    MissingField(&'static str),

    /// Field must be split as text but holds some other JSON value.
    #[error("field {0} is not a string")]
    NotText(&'static str),

    /// HRI splits into fewer tokens than the path layout requires.
    #[error("HRI has {0} tokens, at least 5 required")]
    ShortPath(usize),
}
