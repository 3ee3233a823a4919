//! Registry of card systems.
//!
//! The `CardSystemRegistry` maps system keys to compiled, immutable
//! [`CardSystem`]s. It is shared between threads and never shrinks.
//!
//! ## Conflict policy
//!
//! Registering a key twice with the *same* config succeeds and keeps the
//! existing entry. Registering it with a different config fails with
//! [`Error::Configuration`]; an existing system is never replaced.

use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::builtin::builtin_systems;
use super::config::{CardSystem, CardSystemConfig};
use crate::core::{Error, Result};

/// Thread-safe table of registered card systems.
///
/// ## Example
///
/// ```
/// use rust_decks::systems::{CardSystemConfig, CardSystemRegistry, ValueSet};
///
/// let registry = CardSystemRegistry::new();
/// let config = CardSystemConfig::new(["Red", "Black"], ValueSet::range(1, 5));
/// registry.register("tiny_10", config).unwrap();
///
/// let system = registry.get("tiny_10").unwrap();
/// assert_eq!(system.deck_size(), 10);
/// assert!(registry.get("missing").is_err());
/// ```
#[derive(Debug, Default)]
pub struct CardSystemRegistry {
    systems: RwLock<FxHashMap<String, Arc<CardSystem>>>,
}

impl CardSystemRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in systems.
    #[must_use]
    pub fn with_builtin_systems() -> Self {
        let registry = Self::new();
        {
            let mut systems = registry.systems.write();
            for (key, config) in builtin_systems() {
                // built-in configs are valid by construction (see builtin tests)
                if let Ok(system) = CardSystem::compile(key, config) {
                    systems.insert(key.to_string(), Arc::new(system));
                }
            }
        }
        registry
    }

    /// Validate and register a system.
    pub fn register(&self, key: &str, config: CardSystemConfig) -> Result<Arc<CardSystem>> {
        let compiled = CardSystem::compile(key, config)?;

        let mut systems = self.systems.write();
        if let Some(existing) = systems.get(key) {
            if existing.config() == compiled.config() {
                return Ok(Arc::clone(existing));
            }
            return Err(Error::Configuration(format!(
                "card system '{key}' is already registered with a different configuration"
            )));
        }

        debug!(
            "registered card system '{key}': {} suits x {} values = {} cards",
            compiled.suit_count(),
            compiled.value_count(),
            compiled.deck_size()
        );
        let system = Arc::new(compiled);
        systems.insert(key.to_string(), Arc::clone(&system));
        Ok(system)
    }

    /// Look up a system.
    pub fn get(&self, key: &str) -> Result<Arc<CardSystem>> {
        self.systems
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| Error::UnknownSystem(key.to_string()))
    }

    /// Check if a key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.systems.read().contains_key(key)
    }

    /// Registered keys, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.systems.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of registered systems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.systems.read().len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.systems.read().is_empty()
    }
}
