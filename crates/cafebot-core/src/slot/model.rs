//! Slot names and the per-call slot set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The slots the beverage-order dialog collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotName {
    BeverageType,
    BeverageSize,
    BeverageTemp,
}

impl SlotName {
    /// The platform-facing slot name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeverageType => "BeverageType",
            Self::BeverageSize => "BeverageSize",
            Self::BeverageTemp => "BeverageTemp",
        }
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The slot values the platform supplies with one call.
///
/// The platform owns these; the dialog core only reads them and echoes them
/// back unmodified. A missing or empty value means the slot is unfilled —
/// the accessors normalize both to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSet {
    #[serde(rename = "BeverageType")]
    pub beverage_type: Option<String>,
    #[serde(rename = "BeverageSize")]
    pub beverage_size: Option<String>,
    #[serde(rename = "BeverageTemp")]
    pub beverage_temp: Option<String>,
}

impl SlotSet {
    /// Returns the filled value of a slot, treating empty strings as unfilled.
    pub fn get(&self, name: SlotName) -> Option<&str> {
        let value = match name {
            SlotName::BeverageType => &self.beverage_type,
            SlotName::BeverageSize => &self.beverage_size,
            SlotName::BeverageTemp => &self.beverage_temp,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Returns true if the slot has a filled (non-empty) value.
    pub fn is_filled(&self, name: SlotName) -> bool {
        self.get(name).is_some()
    }
}
