//! Intent dispatch.
//!
//! The dispatcher is the application-layer guard in front of the dialog
//! progressor: it rejects events for other bots, routes the beverage-order
//! intent, and refuses everything else. One event in, exactly one
//! [`DialogResponse`] or one [`DispatchError`] out.

use crate::event::PlatformEvent;
use cafebot_core::config::BotConfig;
use cafebot_core::dialogue::{DialogProgressor, DialogResponse};
use cafebot_core::menu::MenuCatalog;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dispatch failures. These are invocation errors surfaced to the caller,
/// unlike invalid slot values, which are recoverable and answered with an
/// elicit action instead.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchError {
    /// The event's intent is not one this handler fulfills.
    #[error("Intent with name {intent_name} not supported")]
    UnsupportedIntent { intent_name: String },

    /// The event was addressed to a different bot. A hard error that
    /// short-circuits dispatch; nothing downstream runs.
    #[error("Invalid bot name: {bot_name}")]
    InvalidBotName { bot_name: String },
}

impl DispatchError {
    /// Check if this is an UnsupportedIntent error
    pub fn is_unsupported_intent(&self) -> bool {
        matches!(self, Self::UnsupportedIntent { .. })
    }

    /// Check if this is an InvalidBotName error
    pub fn is_invalid_bot_name(&self) -> bool {
        matches!(self, Self::InvalidBotName { .. })
    }
}

/// Routes platform events to the dialog progressor.
///
/// Holds the two immutable values the handler needs for its lifetime: the
/// bot configuration and the menu catalog. Construct once at process start;
/// safe to share across concurrent invocations.
pub struct Dispatcher {
    config: BotConfig,
    catalog: MenuCatalog,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(BotConfig::default(), MenuCatalog::default())
    }
}

impl Dispatcher {
    /// Creates a dispatcher over the given configuration and catalog.
    pub fn new(config: BotConfig, catalog: MenuCatalog) -> Self {
        Self { config, catalog }
    }

    /// Handles one platform event end to end.
    ///
    /// Checks the bot name, routes the intent, and runs the progressor.
    pub fn handle_event(&self, event: PlatformEvent) -> Result<DialogResponse, DispatchError> {
        if !self.config.accepts_bot_name(&event.bot.name) {
            tracing::warn!(bot_name = %event.bot.name, "event addressed to an unknown bot");
            return Err(DispatchError::InvalidBotName {
                bot_name: event.bot.name,
            });
        }

        tracing::info!(
            user_id = %event.user_id,
            intent_name = %event.current_intent.name,
            "dispatching intent"
        );

        if !self.config.accepts_intent(&event.current_intent.name) {
            return Err(DispatchError::UnsupportedIntent {
                intent_name: event.current_intent.name,
            });
        }

        let request = event.into_dialog_request();
        Ok(DialogProgressor::new(&self.catalog).next_action(&request))
    }

    /// Handles one platform event delivered as a JSON body, returning the
    /// serialized response envelope.
    pub fn handle_json(&self, body: &str) -> Result<String, HandlerError> {
        let event = PlatformEvent::from_json(body).map_err(HandlerError::Envelope)?;
        let response = self.handle_event(event).map_err(HandlerError::Dispatch)?;
        serde_json::to_string(&response)
            .map_err(|e| HandlerError::Envelope(cafebot_core::CafebotError::from(e)))
    }
}

/// Failures of the JSON entry point: either the envelope itself was bad, or
/// dispatch refused the event.
#[derive(Error, Debug, Clone)]
pub enum HandlerError {
    #[error(transparent)]
    Envelope(#[from] cafebot_core::CafebotError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
