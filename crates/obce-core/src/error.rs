// crates/obce-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading a municipality document or writing/reading
/// a listing.
#[derive(Debug, Error)]
pub enum ObceError {
    /// The input file could not be opened.
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not valid JSON, or does not have the expected shape
    /// (e.g. no top-level `municipalities` array).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A municipality with coordinates has no `hezkyNazev`.
    #[error("municipality #{index} has coordinates but no `hezkyNazev`")]
    MissingName { index: usize },

    /// `souradnice` is non-empty but holds fewer than two values.
    #[error("municipality #{index} has {len} coordinate value(s), expected 2")]
    IncompleteCoordinates { index: usize, len: usize },

    /// A listing line could not be parsed.
    #[error("listing line {line}: {reason}")]
    Listing { line: usize, reason: String },
}

impl ObceError {
    /// `true` for errors caused by a well-formed JSON document that lacks
    /// expected fields or types.
    pub fn is_schema(&self) -> bool {
        match self {
            ObceError::Json(e) => e.is_data(),
            ObceError::MissingName { .. } | ObceError::IncompleteCoordinates { .. } => true,
            _ => false,
        }
    }

    /// `true` for errors caused by malformed JSON.
    pub fn is_syntax(&self) -> bool {
        matches!(self, ObceError::Json(e) if e.is_syntax() || e.is_eof())
    }

    /// `true` for errors raised by the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(self, ObceError::NotFound(_) | ObceError::Io(_))
            || matches!(self, ObceError::Json(e) if e.is_io())
    }
}

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, ObceError>;
