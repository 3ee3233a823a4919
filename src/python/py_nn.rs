//! Tensor bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::context::CardContext;
use crate::deck::Deck;
use crate::nn::{DeckEncoder, EncodedState};

use super::py_deck::PyDeck;

/// Python wrapper for EncodedState.
#[pyclass(name = "EncodedState")]
#[derive(Clone, Debug)]
pub struct PyEncodedState(pub EncodedState);

#[pymethods]
impl PyEncodedState {
    /// Get the tensor data as a list.
    #[getter]
    fn tensor(&self) -> Vec<f32> {
        self.0.tensor.clone()
    }

    /// Get the tensor shape.
    #[getter]
    fn shape(&self) -> Vec<usize> {
        self.0.shape.clone()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    /// Convert tensor to numpy array (flat).
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_slice_bound(py, &self.0.tensor)
    }

    fn get(&self, index: usize) -> Option<f32> {
        self.0.get(index)
    }

    fn __repr__(&self) -> String {
        format!("EncodedState(shape={:?}, len={})", self.0.shape, self.0.len())
    }
}

/// Python wrapper for DeckEncoder.
#[pyclass(name = "DeckEncoder")]
#[derive(Clone, Debug)]
pub struct PyDeckEncoder(pub DeckEncoder);

#[pymethods]
impl PyDeckEncoder {
    #[new]
    fn new(system: &str, planes: usize) -> PyResult<Self> {
        let system = CardContext::global().system(system)?;
        Ok(Self(DeckEncoder::new(system, planes)))
    }

    #[getter]
    fn output_shape(&self) -> Vec<usize> {
        self.0.output_shape()
    }

    /// Stack the decks' state vectors, one plane each.
    fn encode(&self, decks: Vec<PyRef<'_, PyDeck>>) -> PyResult<PyEncodedState> {
        let decks: Vec<&Deck> = decks.iter().map(|d| &d.0).collect();
        Ok(PyEncodedState(self.0.encode(&decks)?))
    }
}
