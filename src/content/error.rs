//! Dictionary loading errors.
//!
//! Lookups never fail; only getting a dictionary into memory can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("dictionary `{0}` is not valid JSON")]
    Json(String, #[source] serde_json::Error),

    #[error("dictionary `{origin}` must be a JSON object at the top level, found {found}")]
    NotAnObject { origin: String, found: &'static str },

    #[error("no dictionary for locale `{0}`")]
    UnknownLocale(String),
}
