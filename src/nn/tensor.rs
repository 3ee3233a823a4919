//! Flat f32 tensors for network input.

use serde::{Deserialize, Serialize};

/// Encoded state as a flat tensor for neural network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor (e.g. `[deck_size]` or `[planes, deck_size]`).
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// One-dimensional tensor from a 0/1 state vector.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            tensor: bits.iter().map(|&b| f32::from(b)).collect(),
            shape: vec![bits.len()],
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Get element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }
}
