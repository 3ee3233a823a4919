//! Error type shared by every card, deck and registry operation.
//!
//! All validation errors are raised at the call that violates the contract.
//! Nothing is clamped or truncated silently, and a failing operation leaves
//! decks, the registry and the pool exactly as they were.

use thiserror::Error;

/// Errors produced by card systems, cards, decks and localization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No card system is registered under this key.
    #[error("card system '{0}' is not registered")]
    UnknownSystem(String),

    /// Value or suit outside the system's legal set.
    #[error("invalid card for system '{system}': value {value}, suit {suit}")]
    InvalidCard {
        /// System key.
        system: String,
        /// Requested value.
        value: u8,
        /// Requested suit.
        suit: u8,
    },

    /// Canonical index outside `[0, deck_size)`.
    #[error("index {index} out of range for system '{system}' (deck size {deck_size})")]
    InvalidIndex {
        /// System key.
        system: String,
        /// Requested index.
        index: usize,
        /// Size of the system's full deck.
        deck_size: usize,
    },

    /// A draw asked for more cards than the deck holds.
    #[error("not enough cards to draw {requested}: deck has {available}")]
    InsufficientCards {
        /// Cards requested.
        requested: usize,
        /// Cards in the deck.
        available: usize,
    },

    /// The card to remove is not in the deck.
    #[error("card {0} not found in deck")]
    CardNotFound(String),

    /// A card or deck from one system was used with another system.
    #[error("card system mismatch: expected '{expected}', found '{found}'")]
    SystemMismatch {
        /// System the deck (or encoder) uses.
        expected: String,
        /// System of the offending card or deck.
        found: String,
    },

    /// Malformed or conflicting card system configuration.
    #[error("invalid card system configuration: {0}")]
    Configuration(String),

    /// No localized names for this language and system.
    #[error("language '{language}' is not supported for card system '{system}'")]
    UnsupportedLanguage {
        /// Requested language code.
        language: String,
        /// System key.
        system: String,
    },

    /// A state vector that cannot describe a deck of the system.
    #[error("invalid state vector for system '{system}': {reason}")]
    InvalidStateVector {
        /// System key.
        system: String,
        /// What is wrong with the vector.
        reason: String,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::UnknownSystem("tarot_78".into());
        assert_eq!(err.to_string(), "card system 'tarot_78' is not registered");

        let err = Error::InsufficientCards {
            requested: 41,
            available: 40,
        };
        assert_eq!(err.to_string(), "not enough cards to draw 41: deck has 40");

        let err = Error::SystemMismatch {
            expected: "italian_40".into(),
            found: "standard_52".into(),
        };
        assert!(err.to_string().contains("expected 'italian_40'"));
    }

    #[test]
    fn test_errors_compare_by_value() {
        let a = Error::InvalidCard {
            system: "italian_40".into(),
            value: 11,
            suit: 0,
        };
        assert_eq!(a.clone(), a);
        assert_ne!(a, Error::UnknownSystem("italian_40".into()));
    }
}
