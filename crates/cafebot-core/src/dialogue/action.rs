//! Dialog action and response-envelope types.
//!
//! These serialize to the platform's dialog-action envelope:
//! `{ sessionAttributes, dialogAction: { "type": ..., ... } }`. The builder
//! functions on [`DialogResponse`] are the one place actions are assembled,
//! so session attributes are echoed through in every branch by construction.

use crate::slot::{SlotName, SlotSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum number of option buttons a response card may carry.
pub const MAX_CARD_BUTTONS: usize = 5;

/// A plain-text message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: String,
    pub content: String,
}

impl Message {
    /// Builds a `PlainText` message.
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: "PlainText".to_string(),
            content: content.into(),
        }
    }
}

/// One tappable option on a response card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardButton {
    pub text: String,
    pub value: String,
}

/// A single card attachment: title, subtitle, and option buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericAttachment {
    pub title: String,
    pub sub_title: String,
    pub buttons: Vec<CardButton>,
}

/// Presentation payload listing options for the slot being elicited.
///
/// Pure data shaping, no logic beyond the button cap: options past
/// [`MAX_CARD_BUTTONS`] are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCard {
    pub version: u32,
    pub content_type: String,
    pub generic_attachments: Vec<GenericAttachment>,
}

impl ResponseCard {
    /// Builds a one-attachment card whose buttons are the given options, in
    /// order, capped at [`MAX_CARD_BUTTONS`].
    pub fn from_options<I, S>(title: impl Into<String>, sub_title: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let buttons = options
            .into_iter()
            .take(MAX_CARD_BUTTONS)
            .map(|option| {
                let option = option.into();
                CardButton {
                    text: option.clone(),
                    value: option,
                }
            })
            .collect();
        Self {
            version: 1,
            content_type: "application/vnd.amazonaws.card.generic".to_string(),
            generic_attachments: vec![GenericAttachment {
                title: title.into(),
                sub_title: sub_title.into(),
                buttons,
            }],
        }
    }
}

/// Terminal state reported when closing the dialog.
///
/// `Failed` is part of the contract but no current rule produces it; it is
/// reserved for the platform's own dialog-failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// The next dialog action, tagged the way the platform expects.
///
/// `ConfirmIntent` is part of the action vocabulary but is never produced by
/// the current validation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    #[serde(rename_all = "camelCase")]
    ElicitSlot {
        intent_name: String,
        slots: SlotSet,
        slot_to_elicit: SlotName,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<Message>,
        #[serde(skip_serializing_if = "Option::is_none")]
        response_card: Option<ResponseCard>,
    },
    #[serde(rename_all = "camelCase")]
    ConfirmIntent {
        intent_name: String,
        slots: SlotSet,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<Message>,
        #[serde(skip_serializing_if = "Option::is_none")]
        response_card: Option<ResponseCard>,
    },
    #[serde(rename_all = "camelCase")]
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
    #[serde(rename_all = "camelCase")]
    Delegate { slots: SlotSet },
}

/// The sole output of one call: echoed session attributes plus exactly one
/// dialog action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    #[serde(default)]
    pub session_attributes: HashMap<String, String>,
    pub dialog_action: DialogAction,
}

impl DialogResponse {
    /// Asks the user for one specific slot, optionally with a message and a
    /// card listing the valid options.
    pub fn elicit_slot(
        session_attributes: HashMap<String, String>,
        intent_name: impl Into<String>,
        slots: SlotSet,
        slot_to_elicit: SlotName,
        message: Option<Message>,
        response_card: Option<ResponseCard>,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::ElicitSlot {
                intent_name: intent_name.into(),
                slots,
                slot_to_elicit,
                message,
                response_card,
            },
        }
    }

    /// Asks the user to confirm the intent as currently filled.
    pub fn confirm_intent(
        session_attributes: HashMap<String, String>,
        intent_name: impl Into<String>,
        slots: SlotSet,
        message: Option<Message>,
        response_card: Option<ResponseCard>,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::ConfirmIntent {
                intent_name: intent_name.into(),
                slots,
                message,
                response_card,
            },
        }
    }

    /// Ends the dialog with a terminal state and a message.
    pub fn close(
        session_attributes: HashMap<String, String>,
        fulfillment_state: FulfillmentState,
        message: Message,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Close {
                fulfillment_state,
                message,
            },
        }
    }

    /// Hands dialog control back to the platform with the slots unchanged.
    pub fn delegate(session_attributes: HashMap<String, String>, slots: SlotSet) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Delegate { slots },
        }
    }
}
