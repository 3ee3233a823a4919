//! Card context: the registry, pool and localizer as one service.
//!
//! Decks and host code reach card systems and pooled cards through a
//! `CardContext` handed to them explicitly. A process-wide instance is
//! created on first use by [`CardContext::global`] and lives for the rest of
//! the process; tests build their own with [`CardContext::new`] so that
//! custom registrations never leak between them.
//!
//! ```
//! use rust_decks::CardContext;
//! use std::sync::Arc;
//!
//! let ctx = CardContext::new();
//! let a = ctx.get_card("standard_52", 1, 0).unwrap();
//! let b = ctx.get_card("standard_52", 1, 0).unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//! assert_eq!(a.to_index(), 0);
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::cards::{CardPool, CardRef};
use crate::core::Result;
use crate::i18n::{Localizer, Translations};
use crate::systems::{CardSystem, CardSystemConfig, CardSystemRegistry};

static GLOBAL: OnceLock<Arc<CardContext>> = OnceLock::new();

/// Registry, card pool and localizer shared by decks.
pub struct CardContext {
    registry: CardSystemRegistry,
    pool: CardPool,
    localizer: Arc<dyn Localizer>,
}

impl CardContext {
    /// Fresh context with the built-in systems and default translations.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Self::with_localizer(Arc::new(Translations::default()))
    }

    /// Fresh context with the built-in systems and a custom localizer.
    #[must_use]
    pub fn with_localizer(localizer: Arc<dyn Localizer>) -> Arc<Self> {
        Arc::new(Self {
            registry: CardSystemRegistry::with_builtin_systems(),
            pool: CardPool::new(),
            localizer,
        })
    }

    /// The process-wide context, created on first call.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(Self::new))
    }

    /// Registered card systems.
    #[must_use]
    pub fn registry(&self) -> &CardSystemRegistry {
        &self.registry
    }

    /// Pooled cards.
    #[must_use]
    pub fn pool(&self) -> &CardPool {
        &self.pool
    }

    /// Name lookup used by decks and cards.
    #[must_use]
    pub fn localizer(&self) -> &dyn Localizer {
        self.localizer.as_ref()
    }

    /// Register a custom card system.
    pub fn register_card_system(&self, key: &str, config: CardSystemConfig) -> Result<Arc<CardSystem>> {
        self.registry.register(key, config)
    }

    /// Look up a card system.
    pub fn system(&self, key: &str) -> Result<Arc<CardSystem>> {
        self.registry.get(key)
    }

    /// Pooled card by value and suit.
    pub fn get_card(&self, key: &str, value: u8, suit: u8) -> Result<CardRef> {
        self.pool.get_card(&self.registry, key, value, suit)
    }

    /// Pooled card by canonical index.
    pub fn card_at(&self, key: &str, index: usize) -> Result<CardRef> {
        self.pool.card_at(&self.registry, key, index)
    }
}

impl fmt::Debug for CardContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardContext")
            .field("systems", &self.registry.keys())
            .field("pooled_cards", &self.pool.len())
            .finish_non_exhaustive()
    }
}
