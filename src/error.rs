// src/error.rs
use std::path::PathBuf;

/// Everything that can abort a refresh, a startup, or a single lookup.
/// A lookup miss is not here; see `lookup::Lookup::NotFound`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network/fetch failure, including non-2xx statuses.
    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Page markup did not have the shape a source expects.
    #[error("Parse failed for {source_name}: {reason}")]
    Parse { source_name: &'static str, reason: String },

    /// Persisted snapshot could not be read, decoded or written.
    #[error("Store error at {}: {reason}", path.display())]
    Store { path: PathBuf, reason: String },

    /// The model call failed. The handle stays usable for later requests.
    #[error("Translation failed: {0}")]
    Translate(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn fetch(url: &str, reason: impl ToString) -> Self {
        Error::Fetch { url: s!(url), reason: reason.to_string() }
    }

    pub fn store(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Store { path: path.into(), reason: reason.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
