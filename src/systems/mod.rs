//! Card systems: configuration, built-ins, and the registry.
//!
//! ## Key Types
//!
//! - `CardSystemConfig`: Host-supplied description (suits, values, ordering)
//! - `CardSystem`: Validated system with cached derived fields
//! - `CardSystemRegistry`: Key to system lookup, shared across threads

pub mod builtin;
pub mod config;
pub mod registry;

pub use builtin::{builtin_systems, FRENCH_32, ITALIAN_40, SPANISH_40, STANDARD_52};
pub use config::{CardSystem, CardSystemConfig, OrderingRule, ValueSet, MAX_SUITS};
pub use registry::CardSystemRegistry;
