//! Accepted token sets for slot values.
//!
//! Explicit set-membership checks, one `const` slice per slot. The sets are
//! the contract: a value outside its set is re-prompted, never an error.

/// Size tokens the dialog accepts, across both sizing vocabularies.
pub const SIZE_TOKENS: [&str; 7] = [
    "short", "tall", "grande", "venti", "small", "medium", "large",
];

/// Temperature tokens the dialog accepts.
pub const TEMPERATURE_TOKENS: [&str; 3] = ["kids", "hot", "iced"];

/// Returns true if the value is an accepted size token.
pub fn is_size_token(value: &str) -> bool {
    SIZE_TOKENS.contains(&value)
}

/// Returns true if the value is an accepted temperature token.
pub fn is_temperature_token(value: &str) -> bool {
    TEMPERATURE_TOKENS.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_tokens() {
        for token in SIZE_TOKENS {
            assert!(is_size_token(token));
        }
        assert!(!is_size_token("gigantic"));
        assert!(!is_size_token(""));
    }

    #[test]
    fn test_temperature_tokens() {
        assert!(is_temperature_token("iced"));
        assert!(is_temperature_token("kids"));
        assert!(!is_temperature_token("lukewarm"));
    }

    #[test]
    fn test_tokens_are_exact_matches() {
        // Membership is exact, unlike the substring semantics of a regex.
        assert!(!is_size_token("extra large"));
        assert!(!is_temperature_token("hotter"));
    }
}
