//! Card and card-system bindings for Python.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::CardRef;
use crate::context::CardContext;
use crate::systems::{CardSystemConfig, OrderingRule, ValueSet, ITALIAN_40};

use super::py_nn::PyEncodedState;

/// Python wrapper for a pooled card.
#[pyclass(name = "Card", frozen)]
#[derive(Clone, Debug)]
pub struct PyCard(pub CardRef);

#[pymethods]
impl PyCard {
    /// Look up the pooled card `(value, suit)` of `system`.
    #[new]
    #[pyo3(signature = (value, suit, system = ITALIAN_40))]
    fn new(value: u8, suit: u8, system: &str) -> PyResult<Self> {
        Ok(Self(CardContext::global().get_card(system, value, suit)?))
    }

    /// Pooled card at a canonical index.
    #[staticmethod]
    #[pyo3(signature = (index, system = ITALIAN_40))]
    fn from_index(index: usize, system: &str) -> PyResult<Self> {
        Ok(Self(CardContext::global().card_at(system, index)?))
    }

    #[getter]
    fn value(&self) -> u8 {
        self.0.value()
    }

    #[getter]
    fn suit(&self) -> u8 {
        self.0.suit()
    }

    #[getter]
    fn system(&self) -> &str {
        self.0.system_key()
    }

    /// Canonical index.
    #[getter]
    fn index(&self) -> usize {
        self.0.to_index()
    }

    /// One-hot state vector (uint8).
    #[getter]
    fn state<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        PyArray1::from_slice_bound(py, self.0.state())
    }

    /// One-hot vector as an f32 tensor.
    fn encode(&self) -> PyEncodedState {
        PyEncodedState(self.0.encode())
    }

    /// Localized name.
    #[pyo3(signature = (language = "en"))]
    fn to_string(&self, language: &str) -> PyResult<String> {
        let ctx = CardContext::global();
        Ok(self.0.to_string_in(ctx.localizer(), language)?)
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.0)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

/// Register a custom card system on the shared context.
///
/// Give legal values either as an explicit ascending list (`values`) or as
/// an inclusive `value_range=(min, max)`. `ordering` is `"suit_major"`
/// (default) or `"value_major"`. Registering the same key twice with the
/// same config is a no-op.
#[pyfunction]
#[pyo3(signature = (key, suits, values = None, ordering = "suit_major", value_range = None))]
pub fn register_card_system(
    key: &str,
    suits: Vec<String>,
    values: Option<Vec<u8>>,
    ordering: &str,
    value_range: Option<(u8, u8)>,
) -> PyResult<()> {
    let values = match (values, value_range) {
        (Some(values), None) => ValueSet::set(values),
        (None, Some((min, max))) => ValueSet::range(min, max),
        _ => {
            return Err(PyValueError::new_err(
                "pass exactly one of `values` or `value_range`",
            ))
        }
    };
    let ordering: OrderingRule = ordering.parse()?;
    let config = CardSystemConfig::new(suits, values).with_ordering(ordering);
    CardContext::global().register_card_system(key, config)?;
    Ok(())
}

/// Keys of all registered card systems, sorted.
#[pyfunction]
pub fn card_systems() -> Vec<String> {
    CardContext::global().registry().keys()
}
