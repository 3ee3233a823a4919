//! Decks: ordered, mutable collections of pooled cards.
//!
//! A deck keeps three things in sync on every mutation:
//! - the ordered card sequence (index 0 is the top),
//! - a multiplicity index `canonical index -> count` for O(1) `contains`,
//! - the cached aggregate state vector, invalidated when composition changes.
//!
//! Shuffling and sorting only reorder, so they keep the cached vector.
//!
//! ## Duplicates
//!
//! `append` and `from_cards` accept several copies of one card. The state
//! vector records presence and saturates at 1; use
//! [`Deck::multiplicity`] for counts.
//!
//! ## Example
//!
//! ```
//! use rust_decks::{CardContext, Deck};
//!
//! let ctx = CardContext::new();
//! let mut deck = Deck::new_full(&ctx, "italian_40", "it", true).unwrap();
//! assert_eq!(deck.state().iter().filter(|&&b| b == 1).count(), 40);
//!
//! let hand = deck.draw(3).unwrap();
//! assert_eq!(deck.len(), 37);
//! assert!(!deck.contains(&hand[0]));
//! assert_eq!(deck.state()[hand[0].to_index()], 0);
//! ```

use std::fmt;
use std::sync::Arc;

use im::Vector;
use log::debug;
use rustc_hash::FxHashMap;

use super::cache::StateCache;
use crate::cards::{Card, CardRef};
use crate::context::CardContext;
use crate::core::{DeckRng, DeckRngState, Error, Result};
use crate::nn::EncodedState;
use crate::systems::CardSystem;

/// Language used when none is given.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Ordered collection of cards of one system with a cached state vector.
///
/// Cloning is cheap: the card sequence is a persistent vector and cards are
/// shared. A clone replays the same shuffles as its source; use
/// [`Deck::fork`] for an independent shuffle stream.
#[derive(Clone)]
pub struct Deck {
    ctx: Arc<CardContext>,
    system: Arc<CardSystem>,
    language: String,
    cards: Vector<CardRef>,
    counts: FxHashMap<usize, u32>,
    cache: StateCache,
    rng: DeckRng,
}

impl Deck {
    /// Empty deck of system `key`.
    pub fn empty(ctx: &Arc<CardContext>, key: &str, language: &str) -> Result<Self> {
        DeckBuilder::new(key).language(language).empty(ctx)
    }

    /// One card per canonical index, ascending if `sorted`, else shuffled.
    pub fn new_full(ctx: &Arc<CardContext>, key: &str, language: &str, sorted: bool) -> Result<Self> {
        DeckBuilder::new(key)
            .language(language)
            .sorted(sorted)
            .full(ctx)
    }

    /// Wrap an ordered sequence of cards without deduplicating.
    ///
    /// Fails with [`Error::SystemMismatch`] if any card belongs to another
    /// system.
    pub fn from_cards(
        ctx: &Arc<CardContext>,
        cards: impl IntoIterator<Item = CardRef>,
        key: &str,
        language: &str,
    ) -> Result<Self> {
        let mut deck = Self::empty(ctx, key, language)?;
        deck.extend(cards)?;
        Ok(deck)
    }

    /// Rebuild a sorted deck from a 0/1 state vector.
    pub fn from_state(
        ctx: &Arc<CardContext>,
        key: &str,
        state: &[u8],
        language: &str,
    ) -> Result<Self> {
        let mut deck = Self::empty(ctx, key, language)?;
        let deck_size = deck.system.deck_size();

        if state.len() != deck_size {
            return Err(deck.invalid_state(format!(
                "length {} does not match deck size {deck_size}",
                state.len()
            )));
        }
        if let Some((i, &bit)) = state.iter().enumerate().find(|(_, &b)| b > 1) {
            return Err(deck.invalid_state(format!("entry {i} is {bit}, expected 0 or 1")));
        }

        let mut cards = Vec::new();
        for (index, _) in state.iter().enumerate().filter(|(_, &b)| b == 1) {
            cards.push(ctx.card_at(key, index)?);
        }
        debug!("rebuilt {key} deck of {} cards from state", cards.len());
        deck.push_all(cards);
        Ok(deck)
    }

    fn with_parts(ctx: Arc<CardContext>, system: Arc<CardSystem>, language: String, rng: DeckRng) -> Self {
        Self {
            ctx,
            system,
            language,
            cards: Vector::new(),
            counts: FxHashMap::default(),
            cache: StateCache::new(),
            rng,
        }
    }

    // === Accessors ===

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The deck's card system.
    #[must_use]
    pub fn system(&self) -> &Arc<CardSystem> {
        &self.system
    }

    /// Key of the deck's card system.
    #[must_use]
    pub fn system_key(&self) -> &str {
        self.system.key()
    }

    /// Language used by [`Deck::pretty_print`].
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Change the display language.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Context the deck draws pooled cards from.
    #[must_use]
    pub fn context(&self) -> &Arc<CardContext> {
        &self.ctx
    }

    /// Cards from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &CardRef> + '_ {
        self.cards.iter()
    }

    /// Card at `position` (0 = top).
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&CardRef> {
        self.cards.get(position)
    }

    /// Top card.
    #[must_use]
    pub fn top(&self) -> Option<&CardRef> {
        self.cards.front()
    }

    /// Cards from top to bottom, as a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<CardRef> {
        self.cards.iter().cloned().collect()
    }

    /// O(1) membership test.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.multiplicity(card) > 0
    }

    /// Copies of `card` in the deck.
    #[must_use]
    pub fn multiplicity(&self, card: &Card) -> u32 {
        if !self.system.is_compatible(card.system()) {
            return 0;
        }
        self.counts.get(&card.to_index()).copied().unwrap_or(0)
    }

    // === State vector ===

    /// Presence vector of length `deck_size`: 1 where the deck holds the card.
    ///
    /// Recomputed only after a composition change; repeated reads in between
    /// return the cached vector.
    #[must_use]
    pub fn state(&self) -> &[u8] {
        let counts = &self.counts;
        self.cache.get_or_compute(self.system.deck_size(), |bits| {
            for &index in counts.keys() {
                bits[index] = 1;
            }
        })
    }

    /// True if the next [`Deck::state`] call will recompute.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.cache.is_dirty()
    }

    /// State vector folded from the cards' one-hot vectors, bypassing the cache.
    #[must_use]
    pub fn fresh_state(&self) -> Vec<u8> {
        let mut bits = vec![0u8; self.system.deck_size()];
        for card in &self.cards {
            for (bit, &hot) in bits.iter_mut().zip(card.state()) {
                *bit |= hot;
            }
        }
        bits
    }

    /// State vector as an f32 tensor of shape `[deck_size]`.
    #[must_use]
    pub fn encode(&self) -> EncodedState {
        EncodedState::from_bits(self.state())
    }

    // === Composition changes ===

    /// Remove and return the top `n` cards, top first.
    ///
    /// Fails with [`Error::InsufficientCards`] if the deck holds fewer than
    /// `n`; the deck is left unchanged.
    pub fn draw(&mut self, n: usize) -> Result<Vec<CardRef>> {
        if n > self.cards.len() {
            return Err(Error::InsufficientCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        Ok(self.take_top(n))
    }

    /// Like [`Deck::draw`], but draws everything left when `n` is too large.
    pub fn draw_up_to(&mut self, n: usize) -> Vec<CardRef> {
        let n = n.min(self.cards.len());
        self.take_top(n)
    }

    /// Put `card` at the bottom.
    pub fn append(&mut self, card: CardRef) -> Result<()> {
        self.check_system(&card)?;
        self.push_all([card]);
        Ok(())
    }

    /// Put several cards at the bottom, in order. Nothing is added if any
    /// card belongs to another system.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = CardRef>) -> Result<()> {
        let cards: Vec<CardRef> = cards.into_iter().collect();
        for card in &cards {
            self.check_system(card)?;
        }
        self.push_all(cards);
        Ok(())
    }

    /// Remove the first occurrence of `card` (nearest the top).
    pub fn remove(&mut self, card: &Card) -> Result<CardRef> {
        if !self.contains(card) {
            return Err(Error::CardNotFound(format!("{card:?}")));
        }
        let index = card.to_index();
        let position = self
            .cards
            .iter()
            .position(|c| c.to_index() == index)
            .ok_or_else(|| Error::CardNotFound(format!("{card:?}")))?;

        let removed = self.cards.remove(position);
        self.forget(index);
        self.cache.invalidate();
        Ok(removed)
    }

    /// Move the first occurrence of `card` to the bottom of `other`.
    ///
    /// Both sides are checked before anything moves.
    pub fn move_card_to(&mut self, card: &Card, other: &mut Deck) -> Result<()> {
        other.check_system(card)?;
        let moved = self.remove(card)?;
        other.push_all([moved]);
        Ok(())
    }

    /// Replace the contents with the full, sorted deck.
    pub fn reset(&mut self) -> Result<()> {
        let full = self.ctx.pool().full_set(&self.system)?;
        self.cards = Vector::new();
        self.counts.clear();
        self.cache.invalidate();
        self.push_all(full);
        Ok(())
    }

    // === Reordering (state vector unchanged) ===

    /// Shuffle with the deck's own RNG.
    pub fn shuffle(&mut self) {
        let mut cards = self.to_vec();
        self.rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Shuffle with an external RNG.
    pub fn shuffle_with(&mut self, rng: &mut DeckRng) {
        let mut cards = self.to_vec();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Sort by ascending canonical index. Duplicates keep their relative order.
    pub fn sort(&mut self) {
        let mut cards = self.to_vec();
        cards.sort_by_key(|c| c.to_index());
        self.cards = cards.into_iter().collect();
    }

    /// Clone with an independent shuffle stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let mut forked = self.clone();
        forked.rng = self.rng.fork();
        forked
    }

    /// Checkpoint of the deck's shuffle stream.
    ///
    /// Together with [`Deck::state`] (or the card order) this is enough to
    /// replay every later shuffle.
    #[must_use]
    pub fn rng_state(&self) -> DeckRngState {
        self.rng.state()
    }

    /// Resume the shuffle stream from a checkpoint.
    pub fn restore_rng(&mut self, state: &DeckRngState) {
        self.rng = DeckRng::from_state(state);
    }

    // === Display ===

    /// One line per suit with localized names, cards ordered by value.
    ///
    /// ```text
    /// Denari: Asso di Denari, Tre di Denari
    /// Coppe:
    /// ...
    /// ```
    pub fn pretty_print(&self) -> Result<String> {
        let localizer = self.ctx.localizer();
        let key = self.system_key();

        let mut lines = Vec::with_capacity(self.system.suit_count());
        for suit in 0..self.system.suit_count() {
            let suit = suit as u8;
            let suit_name = localizer.suit_name(key, suit, &self.language)?;

            let mut suit_cards: Vec<&CardRef> = self.cards.iter().filter(|c| c.suit() == suit).collect();
            suit_cards.sort_by_key(|c| self.system.position_of(c.value()));

            let names = suit_cards
                .iter()
                .map(|c| c.to_string_in(localizer, &self.language))
                .collect::<Result<Vec<_>>>()?;
            lines.push(format!("{suit_name}: {}", names.join(", ")).trim_end().to_string());
        }
        Ok(lines.join("\n"))
    }

    // === Internals ===

    fn check_system(&self, card: &Card) -> Result<()> {
        if self.system.is_compatible(card.system()) {
            Ok(())
        } else {
            Err(Error::SystemMismatch {
                expected: self.system_key().to_string(),
                found: card.system_key().to_string(),
            })
        }
    }

    fn invalid_state(&self, reason: String) -> Error {
        Error::InvalidStateVector {
            system: self.system_key().to_string(),
            reason,
        }
    }

    /// Append already-validated cards.
    fn push_all(&mut self, cards: impl IntoIterator<Item = CardRef>) {
        let mut added = false;
        for card in cards {
            *self.counts.entry(card.to_index()).or_insert(0) += 1;
            self.cards.push_back(card);
            added = true;
        }
        if added {
            self.cache.invalidate();
        }
    }

    fn forget(&mut self, index: usize) {
        if let Some(count) = self.counts.get_mut(&index) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&index);
            }
        }
    }

    fn take_top(&mut self, n: usize) -> Vec<CardRef> {
        if n == 0 {
            return Vec::new();
        }
        let rest = self.cards.split_off(n);
        let drawn = std::mem::replace(&mut self.cards, rest);
        for card in &drawn {
            self.forget(card.to_index());
        }
        self.cache.invalidate();
        drawn.into_iter().collect()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck of {} cards ({})", self.len(), self.system_key())
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview: Vec<String> = self.cards.iter().take(4).map(|c| c.to_string()).collect();
        write!(
            f,
            "Deck(cards=[{}{}], len={}, system='{}')",
            preview.join(", "),
            if self.len() > 4 { ", ..." } else { "" },
            self.len(),
            self.system_key()
        )
    }
}

/// Builder for decks.
///
/// ```
/// use rust_decks::{CardContext, DeckBuilder};
///
/// let ctx = CardContext::new();
/// let a = DeckBuilder::new("standard_52").sorted(false).seed(7).full(&ctx).unwrap();
/// let b = DeckBuilder::new("standard_52").sorted(false).seed(7).full(&ctx).unwrap();
/// assert_eq!(a.to_vec(), b.to_vec());
/// ```
#[derive(Clone, Debug)]
pub struct DeckBuilder {
    system: String,
    language: String,
    sorted: bool,
    seed: Option<u64>,
}

impl DeckBuilder {
    /// Start a deck of system `key`: English, sorted, entropy-seeded.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            system: key.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            sorted: true,
            seed: None,
        }
    }

    /// Set the display language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Keep a full deck in canonical order (`true`) or shuffle it.
    #[must_use]
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Seed the deck's shuffle RNG.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build a deck with no cards.
    pub fn empty(self, ctx: &Arc<CardContext>) -> Result<Deck> {
        let system = ctx.system(&self.system)?;
        let rng = self.seed.map_or_else(DeckRng::from_entropy, DeckRng::new);
        Ok(Deck::with_parts(Arc::clone(ctx), system, self.language, rng))
    }

    /// Build a full deck.
    pub fn full(self, ctx: &Arc<CardContext>) -> Result<Deck> {
        let sorted = self.sorted;
        let mut deck = self.empty(ctx)?;
        deck.reset()?;
        if !sorted {
            deck.shuffle();
        }
        debug!(
            "built full {} deck ({} cards, sorted: {sorted}, seed: {})",
            deck.system_key(),
            deck.len(),
            deck.rng.seed()
        );
        Ok(deck)
    }
}
