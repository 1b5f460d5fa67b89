// crates/obce-core/src/convert.rs

//! The converter: municipality JSON in, listing out.

use crate::common::ConvertSummary;
use crate::error::Result;
use crate::listing::write_listing;
use crate::loader::{create_output, load_document, parse_document};
use crate::model::Document;
use log::info;
use std::io::{Read, Write};
use std::path::Path;

/// Converts the JSON document at `input` into a listing at `output`.
///
/// The input is parsed in full before `output` is created, so unreadable or
/// malformed input never touches the output path. An existing `output` is
/// overwritten. A failure while writing may leave a truncated file behind.
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<ConvertSummary> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let doc = load_document(input)?;
    let writer = create_output(output)?;
    let summary = convert_document(&doc, writer)?;
    info!(
        "wrote {} of {} municipalities from {} to {} ({} without coordinates)",
        summary.written,
        summary.municipalities,
        input.display(),
        output.display(),
        summary.skipped
    );
    Ok(summary)
}

/// Same as [`convert`] over arbitrary streams.
pub fn convert_reader<R: Read, W: Write>(reader: R, writer: W) -> Result<ConvertSummary> {
    let doc = parse_document(reader)?;
    convert_document(&doc, writer)
}

/// Writes the listing for an already-parsed document.
pub fn convert_document<W: Write>(doc: &Document, writer: W) -> Result<ConvertSummary> {
    let written = write_listing(doc.entries(), writer)?.written;
    let municipalities = doc.municipalities.len();
    Ok(ConvertSummary {
        municipalities,
        written,
        skipped: municipalities - written,
    })
}
