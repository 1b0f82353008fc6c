//! Spread system: layouts and their catalog.
//!
//! A spread names the positions a reading fills, in order. Everything the
//! engine knows about a layout comes from the catalog entry; no component
//! branches on a specific spread id, so adding a layout is adding an entry.

pub mod catalog;
pub mod spread;

pub use catalog::SpreadCatalog;
pub use spread::Spread;
