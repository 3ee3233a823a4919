//! Python bindings for rust-decks.
//!
//! Everything runs against the process-wide [`CardContext`](crate::CardContext),
//! so cards created from Python are pooled like cards created from Rust.
//!
//! # Quick Start
//!
//! ```python
//! import rust_decks as rd
//!
//! deck = rd.Deck("italian_40", language="it", sorted=False, seed=42)
//! hand = deck.draw(3)
//! print(deck.pretty_print())
//!
//! features = deck.state()          # numpy uint8, length 40
//! ace = rd.Card(1, 0, "italian_40")
//! ace.to_string("it")              # "Asso di Denari"
//! ```

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

use crate::core::Error;

mod py_core;
mod py_deck;
mod py_nn;

pub use py_core::*;
pub use py_deck::*;
pub use py_nn::*;

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        match err {
            Error::UnknownSystem(_) => PyKeyError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// rust_decks: card systems, pooled cards and decks with state vectors.
#[pymodule]
fn rust_decks(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyDeck>()?;
    m.add_class::<PyEncodedState>()?;
    m.add_class::<PyDeckEncoder>()?;

    m.add_function(wrap_pyfunction!(register_card_system, m)?)?;
    m.add_function(wrap_pyfunction!(card_systems, m)?)?;

    Ok(())
}
