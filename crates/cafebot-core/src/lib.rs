//! CafeBot core: slot validation and dialog progression for a
//! beverage-ordering bot.
//!
//! The domain layer of the CafeBot workspace. Given one dialog request
//! (intent name, invocation phase, current slot values, session attributes)
//! it decides the single next dialog action: elicit a missing or invalid
//! slot, delegate back to the platform, or close a fulfilled order.
//!
//! Everything here is pure and synchronous. The two pieces of long-lived
//! data, [`menu::MenuCatalog`] and [`config::BotConfig`], are immutable
//! values constructed once at process start and passed in explicitly.

pub mod config;
pub mod dialogue;
pub mod error;
pub mod menu;
pub mod slot;

// Re-export common error type
pub use error::CafebotError;
