// crates/obce-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O, optional decompression) and hands
//! the byte stream to `serde_json`.

use crate::error::{ObceError, Result};
use crate::model::Document;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;

mod common_io;

pub use common_io::open_stream;

/// Parses a whole municipality document from `reader`.
///
/// The document is read into memory in full before anything is returned.
pub fn parse_document<R: Read>(reader: R) -> Result<Document> {
    let doc: Document = serde_json::from_reader(reader)?;
    debug!("parsed {} municipalities", doc.municipalities.len());
    Ok(doc)
}

/// Opens `path` (gunzipping `.gz` files when the `compact` feature is on) and
/// parses it.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    debug!("loading municipalities from {}", path.display());
    let reader = open_stream(path)?;
    parse_document(reader)
}

/// Creates (or truncates) the listing file at `path`.
pub fn create_output(path: impl AsRef<Path>) -> Result<BufWriter<File>> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        ObceError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to create {}: {}", path.display(), e),
        ))
    })?;
    Ok(BufWriter::new(file))
}
