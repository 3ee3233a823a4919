//! Deck bindings for Python.

use std::sync::Arc;

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::context::CardContext;
use crate::deck::{Deck, DeckBuilder, DEFAULT_LANGUAGE};
use crate::systems::ITALIAN_40;

use super::py_core::PyCard;
use super::py_nn::PyEncodedState;

/// Python wrapper for Deck.
#[pyclass(name = "Deck")]
#[derive(Clone, Debug)]
pub struct PyDeck(pub Deck);

#[pymethods]
impl PyDeck {
    /// Create a deck of `system`.
    ///
    /// With `new=True` the deck starts full, in canonical order if `sorted`,
    /// otherwise shuffled. With `new=False` it starts empty.
    #[new]
    #[pyo3(signature = (system = ITALIAN_40, language = DEFAULT_LANGUAGE, new = true, sorted = true, seed = None))]
    fn new(system: &str, language: &str, new: bool, sorted: bool, seed: Option<u64>) -> PyResult<Self> {
        let ctx = CardContext::global();
        let mut builder = DeckBuilder::new(system).language(language).sorted(sorted);
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        let deck = if new { builder.full(&ctx)? } else { builder.empty(&ctx)? };
        Ok(Self(deck))
    }

    /// Rebuild a sorted deck from a 0/1 state vector.
    #[staticmethod]
    #[pyo3(signature = (state, system = ITALIAN_40, language = DEFAULT_LANGUAGE))]
    fn from_state(state: Vec<u8>, system: &str, language: &str) -> PyResult<Self> {
        let ctx = CardContext::global();
        Ok(Self(Deck::from_state(&ctx, system, &state, language)?))
    }

    /// Remove and return the top `n` cards.
    #[pyo3(signature = (n = 1))]
    fn draw(&mut self, n: usize) -> PyResult<Vec<PyCard>> {
        Ok(self.0.draw(n)?.into_iter().map(PyCard).collect())
    }

    /// Draw up to `n` cards, fewer if the deck runs out.
    fn draw_up_to(&mut self, n: usize) -> Vec<PyCard> {
        self.0.draw_up_to(n).into_iter().map(PyCard).collect()
    }

    /// Put a card at the bottom.
    fn append(&mut self, card: &PyCard) -> PyResult<()> {
        Ok(self.0.append(Arc::clone(&card.0))?)
    }

    /// Remove the first occurrence of a card.
    fn remove(&mut self, card: &PyCard) -> PyResult<PyCard> {
        Ok(PyCard(self.0.remove(&card.0)?))
    }

    /// Move the first occurrence of a card to the bottom of `other`.
    fn move_card_to(&mut self, card: &PyCard, mut other: PyRefMut<'_, PyDeck>) -> PyResult<()> {
        Ok(self.0.move_card_to(&card.0, &mut other.0)?)
    }

    fn contains(&self, card: &PyCard) -> bool {
        self.0.contains(&card.0)
    }

    fn __contains__(&self, card: &PyCard) -> bool {
        self.0.contains(&card.0)
    }

    fn shuffle(&mut self) {
        self.0.shuffle();
    }

    fn sort(&mut self) {
        self.0.sort();
    }

    /// Refill with the full, sorted deck.
    fn reset(&mut self) -> PyResult<()> {
        Ok(self.0.reset()?)
    }

    /// Presence vector (uint8), cached between composition changes.
    fn state<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        PyArray1::from_slice_bound(py, self.0.state())
    }

    /// Presence vector as an f32 tensor.
    fn encode(&self) -> PyEncodedState {
        PyEncodedState(self.0.encode())
    }

    fn is_dirty(&self) -> bool {
        self.0.is_dirty()
    }

    fn pretty_print(&self) -> PyResult<String> {
        Ok(self.0.pretty_print()?)
    }

    /// Cards from top to bottom.
    fn cards(&self) -> Vec<PyCard> {
        self.0.iter().cloned().map(PyCard).collect()
    }

    #[getter]
    fn system(&self) -> &str {
        self.0.system_key()
    }

    #[getter]
    fn language(&self) -> &str {
        self.0.language()
    }

    #[setter]
    fn set_language(&mut self, language: String) {
        self.0.set_language(language);
    }

    fn copy(&self) -> Self {
        self.clone()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.0)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }
}
