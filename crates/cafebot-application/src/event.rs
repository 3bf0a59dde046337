//! Inbound platform event envelope.
//!
//! The conversational platform invokes the handler with one JSON event per
//! turn. This module models that envelope and converts it into the domain
//! layer's [`DialogRequest`].

use cafebot_core::dialogue::{DialogRequest, InvocationPhase};
use cafebot_core::error::Result;
use cafebot_core::slot::SlotSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The bot the platform believes it is invoking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotIdentity {
    pub name: String,
}

/// The intent the platform is currently filling, with its slot values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default)]
    pub slots: SlotSet,
}

/// One platform invocation, as delivered on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformEvent {
    pub bot: BotIdentity,
    pub user_id: String,
    /// Which hook is firing; maps onto [`InvocationPhase`].
    pub invocation_source: InvocationPhase,
    pub current_intent: CurrentIntent,
    /// Opaque platform session state, echoed back in the response.
    #[serde(default)]
    pub session_attributes: HashMap<String, String>,
}

impl PlatformEvent {
    /// Deserializes an event from the platform's JSON body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Converts the envelope into the domain-layer request.
    pub fn into_dialog_request(self) -> DialogRequest {
        DialogRequest {
            intent_name: self.current_intent.name,
            phase: self.invocation_source,
            slots: self.current_intent.slots,
            session_attributes: self.session_attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafebot_core::slot::SlotName;

    #[test]
    fn test_from_json() {
        let body = r#"{
            "bot": {"name": "CoffeeBot"},
            "userId": "user-123",
            "invocationSource": "DialogCodeHook",
            "currentIntent": {
                "name": "cafeOrderBeverageIntent",
                "slots": {"BeverageType": "mocha"}
            },
            "sessionAttributes": {"orderId": "42"}
        }"#;
        let event = PlatformEvent::from_json(body).unwrap();
        assert_eq!(event.bot.name, "CoffeeBot");
        assert_eq!(event.invocation_source, InvocationPhase::Validation);
        assert_eq!(
            event.current_intent.slots.get(SlotName::BeverageType),
            Some("mocha")
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_body() {
        let err = PlatformEvent::from_json("{not json").unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_into_dialog_request_carries_everything_over() {
        let body = r#"{
            "bot": {"name": "CoffeeBot"},
            "userId": "user-123",
            "invocationSource": "FulfillmentCodeHook",
            "currentIntent": {"name": "cafeOrderBeverageIntent", "slots": {}},
            "sessionAttributes": {"orderId": "42"}
        }"#;
        let request = PlatformEvent::from_json(body).unwrap().into_dialog_request();
        assert_eq!(request.intent_name, "cafeOrderBeverageIntent");
        assert_eq!(request.phase, InvocationPhase::Fulfillment);
        assert_eq!(
            request.session_attributes.get("orderId").map(String::as_str),
            Some("42")
        );
    }

    #[test]
    fn test_missing_slots_default_to_unfilled() {
        let body = r#"{
            "bot": {"name": "CoffeeBot"},
            "userId": "user-123",
            "invocationSource": "DialogCodeHook",
            "currentIntent": {"name": "cafeOrderBeverageIntent"}
        }"#;
        let event = PlatformEvent::from_json(body).unwrap();
        assert_eq!(event.current_intent.slots, SlotSet::default());
        assert!(event.session_attributes.is_empty());
    }
}
