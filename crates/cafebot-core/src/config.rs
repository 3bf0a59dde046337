//! Bot configuration.
//!
//! The original deployment identified its bot and intent by name prefixes.
//! Those prefixes live here as an immutable value constructed once at process
//! start and passed explicitly into the dispatcher, instead of as module
//! globals.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Prefix an inbound `bot.name` must carry for this handler to serve it.
    pub bot_name_prefix: String,
    /// Prefix of the beverage-order intent this handler fulfills.
    pub intent_prefix: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_name_prefix: "CoffeeBot".to_string(),
            intent_prefix: "cafeOrderBeverageIntent".to_string(),
        }
    }
}

impl BotConfig {
    /// Returns true if the given bot name belongs to this deployment.
    pub fn accepts_bot_name(&self, bot_name: &str) -> bool {
        bot_name.starts_with(&self.bot_name_prefix)
    }

    /// Returns true if the given intent name is the beverage-order intent.
    pub fn accepts_intent(&self, intent_name: &str) -> bool {
        intent_name.starts_with(&self.intent_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefixes() {
        let config = BotConfig::default();
        assert!(config.accepts_bot_name("CoffeeBot"));
        assert!(config.accepts_bot_name("CoffeeBot_Staging"));
        assert!(!config.accepts_bot_name("TeaBot"));
    }

    #[test]
    fn test_intent_prefix_match() {
        let config = BotConfig::default();
        assert!(config.accepts_intent("cafeOrderBeverageIntent"));
        assert!(config.accepts_intent("cafeOrderBeverageIntent_v2"));
        assert!(!config.accepts_intent("bookHotelIntent"));
    }
}
