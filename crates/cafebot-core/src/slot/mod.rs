//! Slot domain module.
//!
//! Slots are the pieces of information the dialog collects from the user:
//! beverage type, size, and temperature. The platform owns slot storage;
//! this module only models what one call sees.
//!
//! # Module Structure
//!
//! - `model`: Slot names and the per-call slot set (`SlotName`, `SlotSet`)
//! - `tokens`: Accepted token sets for size and temperature values

mod model;
mod tokens;

// Re-export public API
pub use model::{SlotName, SlotSet};
pub use tokens::{SIZE_TOKENS, TEMPERATURE_TOKENS, is_size_token, is_temperature_token};
