//! Card pool: one shared instance per logical card.
//!
//! `get_card` validates against the registry, then does a double-checked
//! lookup: a read-locked probe for the fast path, and on a miss a
//! write-locked `entry` re-check before inserting. Racing first requests for
//! the same card therefore all receive the same `Arc`.
//!
//! Entries are never evicted. Only legal cards are pooled, so the pool is
//! bounded by the sum of the registered systems' deck sizes.

use std::sync::Arc;

use log::trace;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::card::{Card, CardRef};
use super::indexer::{card_at, index_of};
use crate::core::Result;
use crate::systems::{CardSystem, CardSystemRegistry};

/// Pool key: system key and canonical index.
type PoolKey = (String, usize);

/// Object-identity cache for cards.
#[derive(Debug, Default)]
pub struct CardPool {
    cards: RwLock<FxHashMap<PoolKey, CardRef>>,
}

impl CardPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pooled card `(value, suit)` of system `key`.
    pub fn get_card(
        &self,
        registry: &CardSystemRegistry,
        key: &str,
        value: u8,
        suit: u8,
    ) -> Result<CardRef> {
        let system = registry.get(key)?;
        let index = index_of(&system, value, suit)?;
        self.get_or_create(system, index, value, suit)
    }

    /// The pooled card at canonical `index` of system `key`.
    pub fn card_at(&self, registry: &CardSystemRegistry, key: &str, index: usize) -> Result<CardRef> {
        let system = registry.get(key)?;
        let (value, suit) = card_at(&system, index)?;
        self.get_or_create(system, index, value, suit)
    }

    /// Every card of `system`, in canonical order.
    pub(crate) fn full_set(&self, system: &Arc<CardSystem>) -> Result<Vec<CardRef>> {
        (0..system.deck_size())
            .map(|index| {
                let (value, suit) = card_at(system, index)?;
                self.get_or_create(Arc::clone(system), index, value, suit)
            })
            .collect()
    }

    /// Number of pooled cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.read().len()
    }

    /// Check if nothing has been pooled yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.read().is_empty()
    }

    fn get_or_create(
        &self,
        system: Arc<CardSystem>,
        index: usize,
        value: u8,
        suit: u8,
    ) -> Result<CardRef> {
        let key = (system.key().to_string(), index);

        if let Some(card) = self.cards.read().get(&key) {
            return Ok(Arc::clone(card));
        }

        let mut cards = self.cards.write();
        if let Some(card) = cards.get(&key) {
            return Ok(Arc::clone(card));
        }

        let card = Arc::new(Card::new(system, value, suit)?);
        trace!("pooled card {:?} at index {index}", card);
        cards.insert(key, Arc::clone(&card));
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::systems::{ITALIAN_40, STANDARD_52};

    #[test]
    fn test_same_instance() {
        let registry = CardSystemRegistry::with_builtin_systems();
        let pool = CardPool::new();

        let a = pool.get_card(&registry, STANDARD_52, 1, 0).unwrap();
        let b = pool.get_card(&registry, STANDARD_52, 1, 0).unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_card_at_shares_instance_with_get_card() {
        let registry = CardSystemRegistry::with_builtin_systems();
        let pool = CardPool::new();

        let by_value = pool.get_card(&registry, ITALIAN_40, 8, 1).unwrap();
        let by_index = pool.card_at(&registry, ITALIAN_40, 17).unwrap();
        assert!(Arc::ptr_eq(&by_value, &by_index));
    }

    #[test]
    fn test_distinct_systems_distinct_cards() {
        let registry = CardSystemRegistry::with_builtin_systems();
        let pool = CardPool::new();

        let it = pool.get_card(&registry, ITALIAN_40, 1, 0).unwrap();
        let std = pool.get_card(&registry, STANDARD_52, 1, 0).unwrap();
        assert!(!Arc::ptr_eq(&it, &std));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_invalid_requests_not_pooled() {
        let registry = CardSystemRegistry::with_builtin_systems();
        let pool = CardPool::new();

        assert!(matches!(
            pool.get_card(&registry, ITALIAN_40, 11, 0),
            Err(Error::InvalidCard { .. })
        ));
        assert!(matches!(
            pool.get_card(&registry, "tarot_78", 1, 0),
            Err(Error::UnknownSystem(_))
        ));
        assert!(matches!(
            pool.card_at(&registry, ITALIAN_40, 40),
            Err(Error::InvalidIndex { .. })
        ));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_full_set_in_canonical_order() {
        let registry = CardSystemRegistry::with_builtin_systems();
        let pool = CardPool::new();
        let system = registry.get(ITALIAN_40).unwrap();

        let cards = pool.full_set(&system).unwrap();
        assert_eq!(cards.len(), 40);
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.to_index(), i);
        }
        assert_eq!(pool.len(), 40);
    }
}
