// crates/obce-core/src/model/record.rs
use super::entry::{Coordinates, Entry};
use crate::common::DocStats;
use crate::error::{ObceError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// The input document. Only `municipalities` is read; any other top-level
/// keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub municipalities: Vec<Municipality>,
}

/// One municipality as it appears in the source JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Municipality {
    /// Display name (`hezkyNazev`). Only required for records that end up
    /// in the listing.
    #[serde(rename = "hezkyNazev", default)]
    pub name: Option<String>,

    /// `souradnice`: absent and `null` both land on `None`.
    #[serde(rename = "souradnice", default)]
    pub coordinates: Option<Vec<Number>>,
}

impl Municipality {
    /// A record is listed iff `souradnice` is present and non-empty.
    ///
    /// Absent, `null` and `[]` all collapse to `false`; `[0, 0]` is `true`.
    #[inline]
    pub fn has_coordinates(&self) -> bool {
        self.coordinates.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Builds the listing entry for this record.
    ///
    /// `index` is the record's position in `municipalities` and only used
    /// for error reporting. Values past the second coordinate are ignored.
    pub fn to_entry(&self, index: usize) -> Result<Option<Entry>> {
        let coords = match &self.coordinates {
            Some(c) if !c.is_empty() => c,
            _ => return Ok(None),
        };

        let (first, second) = match coords.as_slice() {
            [first, second, ..] => (first.clone(), second.clone()),
            _ => {
                return Err(ObceError::IncompleteCoordinates {
                    index,
                    len: coords.len(),
                })
            }
        };

        let name = self
            .name
            .clone()
            .ok_or(ObceError::MissingName { index })?;

        Ok(Some(Entry {
            name,
            coordinates: Coordinates { first, second },
        }))
    }
}

impl Document {
    /// Lazily yields an entry for every record that has coordinates, in
    /// input order.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.municipalities.iter().enumerate(),
        }
    }

    pub fn stats(&self) -> DocStats {
        let with_coordinates = self
            .municipalities
            .iter()
            .filter(|m| m.has_coordinates())
            .count();
        DocStats {
            municipalities: self.municipalities.len(),
            with_coordinates,
            without_coordinates: self.municipalities.len() - with_coordinates,
        }
    }
}

/// Single-pass iterator returned by [`Document::entries`].
///
/// Records without coordinates are skipped silently (logged at `debug`).
/// A record that cannot be turned into an entry yields an `Err`; the caller
/// decides whether to stop.
#[derive(Debug)]
pub struct Entries<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Municipality>>,
}

impl Iterator for Entries<'_> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, municipality) in self.inner.by_ref() {
            match municipality.to_entry(index) {
                Ok(Some(entry)) => return Some(Ok(entry)),
                Ok(None) => {
                    debug!(
                        "skipping municipality #{index} ({}): no coordinates",
                        municipality.name.as_deref().unwrap_or("<unnamed>")
                    );
                }
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}
