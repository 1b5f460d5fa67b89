// crates/obce-core/src/lib.rs

//! # obce-core
//!
//! Turns a JSON dataset of municipalities into a plain-text listing with one
//! `"<name>" <first> <second>` line per municipality that has coordinates.
//!
//! ```rust
//! let input = r#"{"municipalities":[
//!     {"hezkyNazev":"Praha","souradnice":[50.08,14.43]},
//!     {"hezkyNazev":"NoCoords","souradnice":[]}
//! ]}"#;
//!
//! let mut out = Vec::new();
//! let summary = obce_core::convert_reader(input.as_bytes(), &mut out).unwrap();
//!
//! assert_eq!(summary.written, 1);
//! assert_eq!(out, b"\"Praha\" 50.08 14.43\n");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod convert;
pub mod error;
pub mod listing;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod route;

// Re-exports
pub use crate::common::{ConvertSummary, DocStats};
pub use crate::convert::{convert, convert_document, convert_reader};
pub use crate::error::{ObceError, Result};
pub use crate::listing::{read_listing, write_listing};
pub use crate::loader::{create_output, load_document, open_stream, parse_document};
pub use crate::model::{Coordinates, Document, Entries, Entry, Municipality, EARTH_RADIUS_KM};
pub use crate::route::tour_length_km;

/// Input path used when none is configured.
pub const DEFAULT_INPUT: &str = "obce.json";
/// Output path used when none is configured.
pub const DEFAULT_OUTPUT: &str = "output.txt";
