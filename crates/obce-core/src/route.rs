// crates/obce-core/src/route.rs

//! Distances over a listing, treated as a closed tour in listing order.

use crate::model::Entry;

/// Length in kilometres of the round trip that visits `entries` in order and
/// returns to the first one.
///
/// Empty and single-entry tours are `0.0`. Returns `None` if any coordinate
/// cannot be read as `f64`.
pub fn tour_length_km(entries: &[Entry]) -> Option<f64> {
    let (first, last) = match (entries.first(), entries.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Some(0.0),
    };

    let mut total = 0.0;
    for pair in entries.windows(2) {
        total += pair[0].coordinates.distance_km(&pair[1].coordinates)?;
    }
    total += last.coordinates.distance_km(&first.coordinates)?;
    Some(total)
}
