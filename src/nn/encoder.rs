//! Stacking deck state vectors into network input.
//!
//! A model usually sees several zones at once (hand, table, discard). Each
//! zone is a [`Deck`]; the encoder lays their state vectors out as planes of
//! one `[planes, deck_size]` tensor.

use std::sync::Arc;

use crate::core::{Error, Result};
use crate::deck::Deck;
use crate::nn::tensor::EncodedState;
use crate::systems::CardSystem;

/// Encodes a fixed number of same-system decks as one tensor.
#[derive(Clone, Debug)]
pub struct DeckEncoder {
    system: Arc<CardSystem>,
    planes: usize,
}

impl DeckEncoder {
    /// Create an encoder for `planes` decks of `system`.
    pub fn new(system: Arc<CardSystem>, planes: usize) -> Self {
        Self { system, planes }
    }

    /// Shape of encoded tensors: `[planes, deck_size]`.
    #[must_use]
    pub fn output_shape(&self) -> Vec<usize> {
        vec![self.planes, self.system.deck_size()]
    }

    /// Number of planes.
    #[must_use]
    pub fn planes(&self) -> usize {
        self.planes
    }

    /// Encode `decks` in order, one plane each.
    pub fn encode(&self, decks: &[&Deck]) -> Result<EncodedState> {
        if decks.len() != self.planes {
            return Err(Error::Configuration(format!(
                "encoder expects {} decks, got {}",
                self.planes,
                decks.len()
            )));
        }

        let deck_size = self.system.deck_size();
        let mut encoded = EncodedState::zeros(self.output_shape());
        for (plane, deck) in encoded.tensor.chunks_exact_mut(deck_size).zip(decks) {
            if !self.system.is_compatible(deck.system()) {
                return Err(Error::SystemMismatch {
                    expected: self.system.key().to_string(),
                    found: deck.system_key().to_string(),
                });
            }
            for (value, &bit) in plane.iter_mut().zip(deck.state()) {
                *value = f32::from(bit);
            }
        }
        Ok(encoded)
    }
}
