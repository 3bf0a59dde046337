//! Slot validation rules and dialog progression.

use crate::dialogue::action::{DialogResponse, FulfillmentState, Message, ResponseCard};
use crate::dialogue::request::{DialogRequest, InvocationPhase};
use crate::menu::MenuCatalog;
use crate::slot::{SlotName, is_size_token, is_temperature_token};

/// Decides the single next dialog action for a request.
///
/// The progressor is a pure function of the request and the injected
/// [`MenuCatalog`]: no mutable state, no side effects beyond diagnostic
/// logging, safe to share across concurrent invocations.
///
/// During the validation phase the rules run in a fixed order (type, then
/// size, then temperature) and the first failing rule wins: the call returns
/// an elicit for that slot and later rules are not evaluated. One call
/// therefore advances the conversation by at most one step; the platform
/// calls back with the refilled slots until everything passes and control is
/// delegated back to its own dialog manager.
pub struct DialogProgressor<'a> {
    catalog: &'a MenuCatalog,
}

impl<'a> DialogProgressor<'a> {
    /// Creates a progressor over the given menu catalog.
    pub fn new(catalog: &'a MenuCatalog) -> Self {
        Self { catalog }
    }

    /// Returns the next dialog action for the request.
    pub fn next_action(&self, request: &DialogRequest) -> DialogResponse {
        match request.phase {
            InvocationPhase::Validation => self.validate_slots(request),
            InvocationPhase::Fulfillment => self.close_order(request),
        }
    }

    /// Validation phase: type rule, then size rule, then temperature rule,
    /// stopping at the first failure. All rules passing means the platform
    /// gets control back via `Delegate` (e.g. for its confirmation step).
    fn validate_slots(&self, request: &DialogRequest) -> DialogResponse {
        let slots = &request.slots;
        let session_attributes = request.session_attributes.clone();

        let beverage_type = match slots.get(SlotName::BeverageType) {
            Some(value) if self.catalog.is_known_type(value) => value,
            _ => {
                tracing::debug!(
                    intent_name = %request.intent_name,
                    "beverage type missing or not on the menu, eliciting"
                );
                let card = ResponseCard::from_options(
                    "Our menu",
                    "What kind of beverage would you like?",
                    self.catalog.type_names(),
                );
                return DialogResponse::elicit_slot(
                    session_attributes,
                    request.intent_name.clone(),
                    slots.clone(),
                    SlotName::BeverageType,
                    Some(Message::plain_text(
                        "Sorry, that's not on our menu today. What kind of beverage would you like?",
                    )),
                    Some(card),
                );
            }
        };

        match slots.get(SlotName::BeverageSize) {
            Some(size)
                if is_size_token(size) && self.catalog.is_valid_size(beverage_type, size) => {}
            Some(size) => {
                // A size was supplied but it doesn't work for this beverage:
                // show what does.
                tracing::debug!(
                    intent_name = %request.intent_name,
                    size,
                    beverage_type,
                    "beverage size not valid for this type, eliciting"
                );
                let allowed = self.catalog.allowed_sizes(beverage_type).unwrap_or(&[]);
                let card = ResponseCard::from_options(
                    format!("Sizes for {beverage_type}"),
                    "What size would you like?",
                    allowed.iter().map(String::as_str),
                );
                return DialogResponse::elicit_slot(
                    session_attributes,
                    request.intent_name.clone(),
                    slots.clone(),
                    SlotName::BeverageSize,
                    Some(Message::plain_text(format!(
                        "Sorry, we can't make a {size} {beverage_type}. What size would you like?"
                    ))),
                    Some(card),
                );
            }
            None => {
                // No size at all: bare re-prompt, the platform supplies its
                // own default prompt for the slot.
                tracing::debug!(intent_name = %request.intent_name, "beverage size missing, eliciting");
                return DialogResponse::elicit_slot(
                    session_attributes,
                    request.intent_name.clone(),
                    slots.clone(),
                    SlotName::BeverageSize,
                    None,
                    None,
                );
            }
        }

        match slots.get(SlotName::BeverageTemp) {
            Some(temp) if is_temperature_token(temp) => {}
            _ => {
                tracing::debug!(intent_name = %request.intent_name, "beverage temperature missing or unknown, eliciting");
                return DialogResponse::elicit_slot(
                    session_attributes,
                    request.intent_name.clone(),
                    slots.clone(),
                    SlotName::BeverageTemp,
                    None,
                    None,
                );
            }
        }

        tracing::debug!(intent_name = %request.intent_name, beverage_type, "all slots valid, delegating");
        DialogResponse::delegate(session_attributes, slots.clone())
    }

    /// Fulfillment phase: the platform is trusted to have validated during
    /// the prior phase, so no slot re-validation happens here.
    fn close_order(&self, request: &DialogRequest) -> DialogResponse {
        let beverage = request
            .slots
            .get(SlotName::BeverageType)
            .unwrap_or("beverage");
        DialogResponse::close(
            request.session_attributes.clone(),
            FulfillmentState::Fulfilled,
            Message::plain_text(format!(
                "Great! Your {beverage} will be available for pickup soon. Thanks for using CoffeeBot!"
            )),
        )
    }
}
