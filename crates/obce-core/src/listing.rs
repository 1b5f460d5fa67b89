// crates/obce-core/src/listing.rs

//! Reading and writing the plain-text listing.
//!
//! Each line is `"<name>" <first> <second>` terminated by a single `\n`.

use crate::common::ConvertSummary;
use crate::error::{ObceError, Result};
use crate::model::Entry;
use std::io::{BufRead, Write};

/// Writes every entry as one line and flushes `writer`.
///
/// Stops at the first `Err` from `entries` or from the writer; lines already
/// written stay written. The returned summary only fills `written`.
pub fn write_listing<I, W>(entries: I, mut writer: W) -> Result<ConvertSummary>
where
    I: IntoIterator<Item = Result<Entry>>,
    W: Write,
{
    let mut written = 0;
    for entry in entries {
        writeln!(writer, "{}", entry?)?;
        written += 1;
    }
    writer.flush()?;

    Ok(ConvertSummary {
        written,
        ..ConvertSummary::default()
    })
}

/// Parses a listing back into entries. Blank lines are skipped; errors carry
/// the 1-based line number.
///
/// The first non-blank line may be a bare entry count, as route planners
/// expect. When present it must match the number of entries that follow.
pub fn read_listing<R: BufRead>(reader: R) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut header: Option<(usize, usize)> = None;
    let mut seen_content = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let first = !seen_content;
        seen_content = true;
        if first && is_count_line(line) {
            let count = line.trim().parse::<usize>().map_err(|_| ObceError::Listing {
                line: idx + 1,
                reason: format!("entry count `{}` is out of range", line.trim()),
            })?;
            header = Some((idx + 1, count));
            continue;
        }

        entries.push(Entry::parse_line(line, idx + 1)?);
    }

    if let Some((line, count)) = header {
        if count != entries.len() {
            return Err(ObceError::Listing {
                line,
                reason: format!("header announces {count} entries, found {}", entries.len()),
            });
        }
    }

    Ok(entries)
}

fn is_count_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}
