// crates/obce-core/src/model/entry.rs
use crate::error::{ObceError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;
use std::str::FromStr;

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// An ordered coordinate pair, kept exactly as it appeared in the input.
///
/// The values stay [`Number`]s rather than `f64` so that the listing renders
/// them in their source form: `50` stays `50`, `50.0` stays `50.0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub first: Number,
    pub second: Number,
}

impl Coordinates {
    /// Both values as `f64`, for callers that want to compute with them.
    pub fn as_f64(&self) -> Option<(f64, f64)> {
        Some((self.first.as_f64()?, self.second.as_f64()?))
    }

    /// Great-circle (haversine) distance in kilometres, reading the pair as
    /// `(latitude, longitude)` in degrees.
    pub fn distance_km(&self, other: &Coordinates) -> Option<f64> {
        let (lat1, lon1) = self.as_f64()?;
        let (lat2, lon2) = other.as_f64()?;

        let d_lat = (lat2 - lat1).to_radians();
        let d_lon = (lon2 - lon1).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + (d_lon / 2.0).sin().powi(2) * lat1.to_radians().cos() * lat2.to_radians().cos();

        Some(EARTH_RADIUS_KM * 2.0 * a.sqrt().asin())
    }
}

/// One line of the listing: `"<name>" <first> <second>`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub coordinates: Coordinates,
}

impl fmt::Display for Entry {
    /// The name is written verbatim between quotes; embedded quotes are not
    /// escaped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" {} {}",
            self.name, self.coordinates.first, self.coordinates.second
        )
    }
}

impl Entry {
    /// Parses a single listing line (without its newline).
    ///
    /// The name spans from the first to the last `"` on the line, so names
    /// with embedded quotes survive. `line` is the 1-based line number used
    /// in errors.
    pub fn parse_line(s: &str, line: usize) -> Result<Self> {
        let fail = |reason: &str| ObceError::Listing {
            line,
            reason: reason.to_string(),
        };

        let rest = s
            .strip_prefix('"')
            .ok_or_else(|| fail("expected line to start with '\"'"))?;
        let close = rest
            .rfind('"')
            .ok_or_else(|| fail("unterminated name"))?;
        let (name, tail) = (&rest[..close], &rest[close + 1..]);

        let tail = tail
            .strip_prefix(' ')
            .ok_or_else(|| fail("expected a space after the name"))?;

        let mut values = tail.split_whitespace().map(|tok| {
            serde_json::from_str::<Number>(tok)
                .map_err(|_| fail(&format!("`{tok}` is not a number")))
        });
        let (first, second) = match (values.next(), values.next(), values.next()) {
            (Some(first), Some(second), None) => (first?, second?),
            _ => return Err(fail("expected exactly two coordinate values")),
        };

        Ok(Entry {
            name: name.to_string(),
            coordinates: Coordinates { first, second },
        })
    }
}

impl FromStr for Entry {
    type Err = ObceError;

    fn from_str(s: &str) -> Result<Self> {
        Entry::parse_line(s, 1)
    }
}
