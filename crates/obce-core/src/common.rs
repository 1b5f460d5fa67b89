// crates/obce-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a municipality document.
///
/// Returned by [`Document::stats`](crate::Document::stats). The two partial
/// counts always add up to `municipalities`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocStats {
    pub municipalities: usize,
    pub with_coordinates: usize,
    pub without_coordinates: usize,
}

/// Outcome of a single conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertSummary {
    /// Records seen in the input.
    pub municipalities: usize,
    /// Lines written to the listing.
    pub written: usize,
    /// Records skipped for lack of coordinates.
    pub skipped: usize,
}
