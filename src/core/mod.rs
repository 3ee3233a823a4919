//! Core types shared by every module: errors and the deterministic RNG.

pub mod error;
pub mod rng;

pub use error::{Error, Result};
pub use rng::{DeckRng, DeckRngState};
