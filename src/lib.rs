//! obce-rs
//!
//! Workspace root crate. Re-exports [`obce_core`] so demos and integration
//! tests can depend on a single crate.
pub use obce_core::*;
