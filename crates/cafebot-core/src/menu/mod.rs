//! Menu catalog module.
//!
//! The catalog is the static mapping from beverage type to its allowed
//! sizes. It is leaf data: loaded once at process start, immutable for the
//! process lifetime, and passed explicitly into the dialog progressor.

mod catalog;

// Re-export public API
pub use catalog::{MenuCatalog, MenuEntry};
