//! Immutable card value objects.
//!
//! Cards are handed out by the [`CardPool`](super::CardPool) as shared
//! [`CardRef`]s: one instance per `(system, value, suit)` for the lifetime of
//! the pool. The canonical index is computed at construction, the one-hot
//! vector on first use, and both are shared by every holder.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use super::indexer::index_of;
use crate::core::Result;
use crate::i18n::Localizer;
use crate::nn::EncodedState;
use crate::systems::CardSystem;

/// Shared handle to a pooled card.
pub type CardRef = Arc<Card>;

/// A playing card of a registered system.
///
/// Equality uses `(system, value, suit)`, where systems match when they are
/// compatible (same key and config); hashing uses the system key. Pooled
/// cards are also pointer-identical, so `Arc::ptr_eq` holds for equal cards
/// from the same pool.
pub struct Card {
    system: Arc<CardSystem>,
    value: u8,
    suit: u8,
    index: usize,
    state: OnceLock<Box<[u8]>>,
}

impl Card {
    /// Build a card, validating it against `system`.
    pub(crate) fn new(system: Arc<CardSystem>, value: u8, suit: u8) -> Result<Self> {
        let index = index_of(&system, value, suit)?;
        Ok(Self {
            system,
            value,
            suit,
            index,
            state: OnceLock::new(),
        })
    }

    /// Card value.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Suit index.
    #[must_use]
    pub fn suit(&self) -> u8 {
        self.suit
    }

    /// The system this card belongs to.
    #[must_use]
    pub fn system(&self) -> &Arc<CardSystem> {
        &self.system
    }

    /// Key of the card's system.
    #[must_use]
    pub fn system_key(&self) -> &str {
        self.system.key()
    }

    /// Length of the card's state vector.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.system.deck_size()
    }

    /// Canonical index in `[0, deck_size)`.
    #[must_use]
    pub fn to_index(&self) -> usize {
        self.index
    }

    /// Native (unlocalized) suit name from the system config.
    #[must_use]
    pub fn suit_name(&self) -> &str {
        self.system.suit_name(self.suit).unwrap_or_default()
    }

    /// One-hot `u8` vector of length `deck_size` with a 1 at `to_index()`.
    ///
    /// Computed once and shared by all holders of this card.
    #[must_use]
    pub fn state(&self) -> &[u8] {
        self.state.get_or_init(|| {
            let mut bits = vec![0u8; self.deck_size()].into_boxed_slice();
            bits[self.index] = 1;
            bits
        })
    }

    /// One-hot vector as an f32 tensor of shape `[deck_size]`.
    #[must_use]
    pub fn encode(&self) -> EncodedState {
        EncodedState::from_bits(self.state())
    }

    /// Localized name, e.g. "Asso di Denari".
    ///
    /// Fails with [`Error::UnsupportedLanguage`](crate::Error::UnsupportedLanguage)
    /// when the localizer has no names for this language and system.
    pub fn to_string_in(&self, localizer: &dyn Localizer, language: &str) -> Result<String> {
        localizer.localize(self.system_key(), self.value, self.suit, language)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && self.suit == other.suit
            && self.system.is_compatible(&other.system)
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.system_key().hash(state);
        self.value.hash(state);
        self.suit.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Canonical order within a system; systems are ordered by key.
///
/// Incompatible systems sharing a key fall back to address order so that
/// `cmp` agrees with `eq`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.system_key()
            .cmp(other.system_key())
            .then_with(|| {
                if self.system.is_compatible(&other.system) {
                    Ordering::Equal
                } else {
                    Arc::as_ptr(&self.system).cmp(&Arc::as_ptr(&other.system))
                }
            })
            .then(self.index.cmp(&other.index))
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Card(value={}, suit={}, system={})",
            self.value,
            self.suit,
            self.system_key()
        )
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit_name())
    }
}
