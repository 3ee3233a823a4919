//! Neural network input encoding.
//!
//! - [`EncodedState`]: flat f32 tensor with a shape
//! - [`DeckEncoder`]: several decks stacked as planes
//!
//! Single cards and decks encode themselves through `Card::encode` and
//! `Deck::encode`.
//!
//! ```
//! use rust_decks::{CardContext, DeckBuilder};
//! use rust_decks::nn::DeckEncoder;
//!
//! let ctx = CardContext::new();
//! let deck = DeckBuilder::new("italian_40").full(&ctx).unwrap();
//! let encoder = DeckEncoder::new(ctx.system("italian_40").unwrap(), 1);
//! let encoded = encoder.encode(&[&deck]).unwrap();
//! assert_eq!(encoded.shape, vec![1, 40]);
//! ```

pub mod encoder;
pub mod tensor;

pub use encoder::DeckEncoder;
pub use tensor::EncodedState;
