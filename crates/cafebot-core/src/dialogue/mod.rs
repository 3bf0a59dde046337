//! Dialogue domain module.
//!
//! This module contains the per-call dialog request, the dialog actions the
//! core can answer with, and the progressor that decides the single next
//! action for a request.
//!
//! # Module Structure
//!
//! - `request`: Per-call input (`DialogRequest`, `InvocationPhase`)
//! - `action`: Output types (`DialogAction`, `DialogResponse`, `Message`, `ResponseCard`)
//! - `progressor`: Slot validation rules and dialog progression (`DialogProgressor`)

mod action;
mod progressor;
mod request;

// Re-export public API
pub use action::{
    CardButton, DialogAction, DialogResponse, FulfillmentState, GenericAttachment, Message,
    ResponseCard, MAX_CARD_BUTTONS,
};
pub use progressor::DialogProgressor;
pub use request::{DialogRequest, InvocationPhase};
