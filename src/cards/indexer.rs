//! Canonical card indices.
//!
//! A card's index is its position in the system's total order, in
//! `[0, deck_size)`. The same order is used to sort decks, so a sorted full
//! deck lists cards by ascending index.
//!
//! For suit-major systems (all built-ins):
//!   `index = suit * value_count + position(value)`
//! For value-major systems:
//!   `index = position(value) * suit_count + suit`
//!
//! ```
//! use rust_decks::cards::{card_at, index_of};
//! use rust_decks::systems::{CardSystemRegistry, STANDARD_52};
//!
//! let registry = CardSystemRegistry::with_builtin_systems();
//! let system = registry.get(STANDARD_52).unwrap();
//!
//! assert_eq!(index_of(&system, 1, 0).unwrap(), 0);
//! assert_eq!(index_of(&system, 13, 3).unwrap(), 51);
//! assert_eq!(card_at(&system, 51).unwrap(), (13, 3));
//! ```

use crate::core::{Error, Result};
use crate::systems::{CardSystem, OrderingRule};

/// Canonical index of `(value, suit)` in `system`.
pub fn index_of(system: &CardSystem, value: u8, suit: u8) -> Result<usize> {
    let invalid = || Error::InvalidCard {
        system: system.key().to_string(),
        value,
        suit,
    };

    let suit_idx = usize::from(suit);
    if suit_idx >= system.suit_count() {
        return Err(invalid());
    }
    let position = system.position_of(value).ok_or_else(invalid)?;

    Ok(match system.ordering() {
        OrderingRule::SuitMajor => suit_idx * system.value_count() + position,
        OrderingRule::ValueMajor => position * system.suit_count() + suit_idx,
    })
}

/// `(value, suit)` of the card at `index`. Exact inverse of [`index_of`].
pub fn card_at(system: &CardSystem, index: usize) -> Result<(u8, u8)> {
    if index >= system.deck_size() {
        return Err(Error::InvalidIndex {
            system: system.key().to_string(),
            index,
            deck_size: system.deck_size(),
        });
    }

    let (position, suit) = match system.ordering() {
        OrderingRule::SuitMajor => (index % system.value_count(), index / system.value_count()),
        OrderingRule::ValueMajor => (index / system.suit_count(), index % system.suit_count()),
    };

    // index < deck_size bounds both components
    let value = system.value_at(position).ok_or(Error::InvalidIndex {
        system: system.key().to_string(),
        index,
        deck_size: system.deck_size(),
    })?;
    Ok((value, suit as u8))
}
