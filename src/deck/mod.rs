//! Decks and their cached state vectors.

pub mod cache;
pub mod collection;

pub use cache::StateCache;
pub use collection::{Deck, DeckBuilder, DEFAULT_LANGUAGE};
