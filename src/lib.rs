//! # rust-decks
//!
//! Playing-card primitives for ML feature generation.
//!
//! ## Design Principles
//!
//! 1. **Systems are data**: a card system is a suit list plus a value set.
//!    The built-in Italian, Spanish, French and standard decks are just
//!    pre-registered configurations, and hosts can register more.
//!
//! 2. **One card, one object**: cards are pooled per `(system, index)`, so
//!    every request for the same card yields the same shared object.
//!
//! 3. **Vectors are first-class**: every card has a one-hot vector and every
//!    deck a presence vector of length `deck_size`, indexed canonically.
//!    Deck vectors are cached and only recomputed after the deck's
//!    composition changes.
//!
//! ## Architecture
//!
//! - **Explicit context**: the registry, pool and localizer live in a
//!   [`CardContext`]. [`CardContext::global`] is the process-wide instance;
//!   [`CardContext::new`] builds an isolated one.
//!
//! - **Persistent data structures**: decks hold an `im::Vector`, so cloning
//!   a deck for simulation is O(1).
//!
//! ## Modules
//!
//! - `core`: errors and the deterministic RNG
//! - `systems`: card-system configuration, built-ins, registry
//! - `cards`: indexer, pooled cards, the card pool
//! - `deck`: decks and the state-vector cache
//! - `i18n`: localized card names
//! - `nn`: tensor encoding for network input
//! - `python`: pyo3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use rust_decks::{CardContext, DeckBuilder};
//!
//! let ctx = CardContext::new();
//! let mut deck = DeckBuilder::new("italian_40")
//!     .language("it")
//!     .sorted(false)
//!     .seed(42)
//!     .full(&ctx)
//!     .unwrap();
//!
//! let hand = deck.draw(3).unwrap();
//! assert_eq!(deck.len(), 37);
//! assert_eq!(deck.state().iter().filter(|&&b| b == 1).count(), 37);
//! assert_eq!(hand[0].state().iter().filter(|&&b| b == 1).count(), 1);
//! ```

pub mod cards;
pub mod context;
pub mod core;
pub mod deck;
pub mod i18n;
pub mod nn;
pub mod systems;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{DeckRng, DeckRngState, Error, Result};

pub use crate::context::CardContext;

pub use crate::systems::{
    CardSystem, CardSystemConfig, CardSystemRegistry, OrderingRule, ValueSet,
    FRENCH_32, ITALIAN_40, SPANISH_40, STANDARD_52,
};

pub use crate::cards::{card_at, index_of, Card, CardPool, CardRef};

pub use crate::deck::{Deck, DeckBuilder, StateCache};

pub use crate::i18n::{LocaleTable, Localizer, Translations};

pub use crate::nn::{DeckEncoder, EncodedState};
