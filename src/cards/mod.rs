//! Cards: canonical indexing, pooled instances, one-hot vectors.
//!
//! ## Key Types
//!
//! - `index_of` / `card_at`: Pure canonical index mapping
//! - `Card`: Immutable card with a cached one-hot state vector
//! - `CardRef`: Shared handle (`Arc<Card>`) handed out by the pool
//! - `CardPool`: At most one instance per `(system, value, suit)`

pub mod card;
pub mod indexer;
pub mod pool;

pub use card::{Card, CardRef};
pub use indexer::{card_at, index_of};
pub use pool::CardPool;
