// crates/obce-core/src/model/mod.rs
pub mod entry;
pub mod record;

pub use entry::{Coordinates, Entry, EARTH_RADIUS_KM};
pub use record::{Document, Entries, Municipality};
