//! Per-call dialog request types.

use crate::slot::SlotSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which hook the platform is invoking.
///
/// The wire values are the platform's invocation-source names: the dialog
/// hook fires while slots are still being collected, the fulfillment hook
/// once the platform considers the order complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationPhase {
    /// Slots are still being collected and validated.
    #[serde(rename = "DialogCodeHook")]
    Validation,
    /// The platform is asking the core to fulfill the completed order.
    #[serde(rename = "FulfillmentCodeHook")]
    Fulfillment,
}

/// Everything the core sees for one call.
///
/// Session attributes belong to the platform; the core never inspects or
/// mutates them, it only echoes them back for round-trip continuity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogRequest {
    /// Name of the intent being fulfilled.
    pub intent_name: String,
    /// Whether the platform is validating slots or fulfilling the order.
    pub phase: InvocationPhase,
    /// Current slot values as the platform sees them.
    pub slots: SlotSet,
    /// Opaque platform session state, echoed back unchanged.
    #[serde(default)]
    pub session_attributes: HashMap<String, String>,
}
