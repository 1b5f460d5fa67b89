// crates/obce-core/src/prelude.rs
//! obce-rs prelude: bring the common types into scope.

pub use crate::common::{ConvertSummary, DocStats};
pub use crate::convert::{convert, convert_reader};
pub use crate::error::{ObceError, Result};
pub use crate::listing::read_listing;
pub use crate::loader::{load_document, parse_document};
pub use crate::model::{Coordinates, Document, Entry, Municipality};
pub use crate::route::tour_length_km;
