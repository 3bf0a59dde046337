//! CafeBot application layer.
//!
//! Turns one inbound platform event into one outbound dialog-action
//! envelope. The domain rules live in `cafebot-core`; this crate owns the
//! wire envelope and the dispatch guard in front of the progressor.
//!
//! # Module Structure
//!
//! - `event`: Inbound platform envelope (`PlatformEvent`)
//! - `dispatch`: Bot-name guard, intent routing (`Dispatcher`, `DispatchError`)

pub mod dispatch;
pub mod event;

// Re-export public API
pub use dispatch::{DispatchError, Dispatcher, HandlerError};
pub use event::{BotIdentity, CurrentIntent, PlatformEvent};
