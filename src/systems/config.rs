//! Card system configuration.
//!
//! Hosts describe a card system with a [`CardSystemConfig`]. Registration
//! validates it and compiles it into a [`CardSystem`], which caches every
//! derived field (value positions, bounds, deck size) so lookups never
//! recompute them.
//!
//! Configs are plain serde data and can come straight from JSON:
//!
//! ```
//! use rust_decks::systems::{CardSystemConfig, ValueSet};
//!
//! let json = r#"{
//!     "suits": ["Hearts", "Bells", "Leaves", "Acorns"],
//!     "values": { "set": [1, 7, 8, 9, 10, 11, 12, 13] },
//!     "deck_size": 32
//! }"#;
//! let config: CardSystemConfig = serde_json::from_str(json).unwrap();
//! assert_eq!(config.values, ValueSet::set([1, 7, 8, 9, 10, 11, 12, 13]));
//! assert!(config.validate().is_ok());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Error, Result};

/// Maximum number of suits (suits are `u8`).
pub const MAX_SUITS: usize = 256;

/// Legal card values of a system.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSet {
    /// Contiguous inclusive range.
    Range {
        /// Lowest legal value.
        min: u8,
        /// Highest legal value.
        max: u8,
    },
    /// Explicit values, strictly ascending.
    Set(Vec<u8>),
}

impl ValueSet {
    /// Contiguous range `min..=max`.
    #[must_use]
    pub fn range(min: u8, max: u8) -> Self {
        Self::Range { min, max }
    }

    /// Explicit set of values.
    #[must_use]
    pub fn set(values: impl IntoIterator<Item = u8>) -> Self {
        Self::Set(values.into_iter().collect())
    }

    /// Number of legal values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Range { min, max } if min <= max => usize::from(max - min) + 1,
            Self::Range { .. } => 0,
            Self::Set(values) => values.len(),
        }
    }

    /// True if no value is legal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All legal values in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        match self {
            Self::Range { min, max } => (*min..=*max).collect(),
            Self::Set(values) => values.clone(),
        }
    }
}

/// Total order used for canonical indices and for sorting decks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingRule {
    /// Suit is the primary key: `suit * value_count + position(value)`.
    #[default]
    SuitMajor,
    /// Value is the primary key: `position(value) * suit_count + suit`.
    ValueMajor,
}

impl FromStr for OrderingRule {
    type Err = Error;

    /// Parse the serde name (`suit_major` or `value_major`).
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "suit_major" => Ok(Self::SuitMajor),
            "value_major" => Ok(Self::ValueMajor),
            other => Err(Error::Configuration(format!(
                "unknown ordering '{other}', expected 'suit_major' or 'value_major'"
            ))),
        }
    }
}

/// Description of a card system, as supplied by the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSystemConfig {
    /// Suit names in suit-index order.
    pub suits: SmallVec<[String; 4]>,
    /// Legal values.
    pub values: ValueSet,
    /// Declared number of distinct cards; must match `values × suits`.
    pub deck_size: usize,
    /// Canonical ordering.
    #[serde(default)]
    pub ordering: OrderingRule,
}

impl CardSystemConfig {
    /// Create a config whose deck size is derived from suits and values.
    pub fn new<S: Into<String>>(suits: impl IntoIterator<Item = S>, values: ValueSet) -> Self {
        let suits: SmallVec<[String; 4]> = suits.into_iter().map(Into::into).collect();
        let deck_size = suits.len() * values.len();
        Self {
            suits,
            values,
            deck_size,
            ordering: OrderingRule::default(),
        }
    }

    /// Set the ordering rule.
    #[must_use]
    pub fn with_ordering(mut self, ordering: OrderingRule) -> Self {
        self.ordering = ordering;
        self
    }

    /// Override the declared deck size (checked on validation).
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Number of suits.
    #[must_use]
    pub fn suit_count(&self) -> usize {
        self.suits.len()
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.suits.is_empty() {
            return Err(Error::Configuration("at least one suit is required".into()));
        }
        if self.suits.len() > MAX_SUITS {
            return Err(Error::Configuration(format!(
                "{} suits exceed the maximum of {MAX_SUITS}",
                self.suits.len()
            )));
        }
        match &self.values {
            ValueSet::Range { min, max } if min > max => {
                return Err(Error::Configuration(format!(
                    "value range is empty: min {min} > max {max}"
                )));
            }
            ValueSet::Set(values) if values.is_empty() => {
                return Err(Error::Configuration("value set is empty".into()));
            }
            ValueSet::Set(values) => {
                if let Some(pair) = values.windows(2).find(|w| w[0] >= w[1]) {
                    return Err(Error::Configuration(format!(
                        "value set must be strictly ascending, found {} before {}",
                        pair[0], pair[1]
                    )));
                }
            }
            ValueSet::Range { .. } => {}
        }

        let implied = self.values.len() * self.suits.len();
        if self.deck_size != implied {
            return Err(Error::Configuration(format!(
                "deck_size {} does not match {} values x {} suits = {implied}",
                self.deck_size,
                self.values.len(),
                self.suits.len()
            )));
        }
        Ok(())
    }
}

/// A validated, registered card system with cached derived fields.
#[derive(Debug)]
pub struct CardSystem {
    key: String,
    config: CardSystemConfig,
    values: Vec<u8>,
    /// `positions[value - min]` is the value's position in `values`.
    positions: Vec<Option<u8>>,
}

impl CardSystem {
    /// Validate `config` and precompute lookups.
    pub fn compile(key: impl Into<String>, config: CardSystemConfig) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::Configuration("system key must not be empty".into()));
        }
        config.validate()?;

        let values = config.values.to_vec();
        let min = values[0];
        let max = values[values.len() - 1];
        let mut positions = vec![None; usize::from(max - min) + 1];
        for (pos, &value) in values.iter().enumerate() {
            // at most 256 distinct u8 values, so positions fit in u8
            positions[usize::from(value - min)] = Some(pos as u8);
        }

        Ok(Self {
            key,
            config,
            values,
            positions,
        })
    }

    /// Registry key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The configuration this system was built from.
    #[must_use]
    pub fn config(&self) -> &CardSystemConfig {
        &self.config
    }

    /// Number of suits.
    #[must_use]
    pub fn suit_count(&self) -> usize {
        self.config.suits.len()
    }

    /// Number of legal values per suit.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.config.deck_size
    }

    /// Canonical ordering.
    #[must_use]
    pub fn ordering(&self) -> OrderingRule {
        self.config.ordering
    }

    /// Lowest legal value.
    #[must_use]
    pub fn min_value(&self) -> u8 {
        self.values[0]
    }

    /// Highest legal value.
    #[must_use]
    pub fn max_value(&self) -> u8 {
        self.values[self.values.len() - 1]
    }

    /// Legal values, ascending.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Suit names in suit-index order.
    #[must_use]
    pub fn suit_names(&self) -> &[String] {
        &self.config.suits
    }

    /// Native name of a suit.
    #[must_use]
    pub fn suit_name(&self, suit: u8) -> Option<&str> {
        self.config.suits.get(usize::from(suit)).map(String::as_str)
    }

    /// Position of `value` among the legal values.
    #[must_use]
    pub fn position_of(&self, value: u8) -> Option<usize> {
        let offset = value.checked_sub(self.min_value())?;
        self.positions
            .get(usize::from(offset))
            .copied()
            .flatten()
            .map(usize::from)
    }

    /// Legal value at `position`.
    #[must_use]
    pub fn value_at(&self, position: usize) -> Option<u8> {
        self.values.get(position).copied()
    }

    /// True if `(value, suit)` is a card of this system.
    #[must_use]
    pub fn is_legal(&self, value: u8, suit: u8) -> bool {
        usize::from(suit) < self.suit_count() && self.position_of(value).is_some()
    }

    /// True if cards of `other` index into the same vector slots as cards
    /// of `self`.
    ///
    /// Separate contexts may register one key with different configs, so
    /// the key alone does not identify a system.
    #[must_use]
    pub fn is_compatible(&self, other: &CardSystem) -> bool {
        std::ptr::eq(self, other) || (self.key == other.key && self.config == other.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_suits() -> [&'static str; 4] {
        ["Spades", "Hearts", "Diamonds", "Clubs"]
    }

    #[test]
    fn test_value_set_len() {
        assert_eq!(ValueSet::range(1, 13).len(), 13);
        assert_eq!(ValueSet::range(5, 5).len(), 1);
        assert_eq!(ValueSet::range(6, 5).len(), 0);
        assert_eq!(ValueSet::set([1, 7, 8]).len(), 3);
        assert!(ValueSet::set([]).is_empty());
    }

    #[test]
    fn test_new_derives_deck_size() {
        let config = CardSystemConfig::new(four_suits(), ValueSet::range(1, 10));
        assert_eq!(config.deck_size, 40);
        assert_eq!(config.suit_count(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deck_size_mismatch_rejected() {
        let config =
            CardSystemConfig::new(four_suits(), ValueSet::range(1, 10)).with_deck_size(41);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::Configuration(msg) if msg.contains("deck_size 41")));
    }

    #[test]
    fn test_empty_suits_rejected() {
        let config = CardSystemConfig::new(Vec::<String>::new(), ValueSet::range(1, 10));
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_unsorted_set_rejected() {
        let config = CardSystemConfig::new(four_suits(), ValueSet::set([1, 8, 7]));
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));

        let dup = CardSystemConfig::new(four_suits(), ValueSet::set([1, 7, 7]));
        assert!(matches!(dup.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = CardSystemConfig::new(four_suits(), ValueSet::range(10, 1));
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_compile_positions_with_gaps() {
        let config = CardSystemConfig::new(four_suits(), ValueSet::set([1, 7, 8, 9, 10, 11, 12, 13]));
        let system = CardSystem::compile("french_32", config).unwrap();

        assert_eq!(system.deck_size(), 32);
        assert_eq!(system.min_value(), 1);
        assert_eq!(system.max_value(), 13);
        assert_eq!(system.position_of(1), Some(0));
        assert_eq!(system.position_of(7), Some(1));
        assert_eq!(system.position_of(13), Some(7));
        assert_eq!(system.position_of(2), None);
        assert_eq!(system.position_of(0), None);
        assert_eq!(system.position_of(14), None);
        assert_eq!(system.value_at(1), Some(7));
        assert_eq!(system.value_at(8), None);
    }

    #[test]
    fn test_compile_rejects_empty_key() {
        let config = CardSystemConfig::new(four_suits(), ValueSet::range(1, 13));
        assert!(matches!(
            CardSystem::compile("", config),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_is_legal() {
        let config = CardSystemConfig::new(four_suits(), ValueSet::range(1, 13));
        let system = CardSystem::compile("standard_52", config).unwrap();

        assert!(system.is_legal(1, 0));
        assert!(system.is_legal(13, 3));
        assert!(!system.is_legal(0, 0));
        assert!(!system.is_legal(14, 0));
        assert!(!system.is_legal(1, 4));
        assert_eq!(system.suit_name(2), Some("Diamonds"));
        assert_eq!(system.suit_name(4), None);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = CardSystemConfig::new(four_suits(), ValueSet::range(1, 13))
            .with_ordering(OrderingRule::ValueMajor);
        let json = serde_json::to_string(&config).unwrap();
        let back: CardSystemConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_ordering_from_str() {
        assert_eq!("suit_major".parse::<OrderingRule>(), Ok(OrderingRule::SuitMajor));
        assert_eq!("value_major".parse::<OrderingRule>(), Ok(OrderingRule::ValueMajor));
        assert!(matches!(
            "diagonal".parse::<OrderingRule>(),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_is_compatible() {
        let small = CardSystem::compile("tiny", CardSystemConfig::new(["R", "B"], ValueSet::range(1, 5))).unwrap();
        let same = CardSystem::compile("tiny", CardSystemConfig::new(["R", "B"], ValueSet::range(1, 5))).unwrap();
        let large = CardSystem::compile("tiny", CardSystemConfig::new(["R", "B"], ValueSet::range(1, 10))).unwrap();
        let renamed = CardSystem::compile("tiny_2", CardSystemConfig::new(["R", "B"], ValueSet::range(1, 5))).unwrap();

        assert!(small.is_compatible(&small));
        assert!(small.is_compatible(&same));
        assert!(!small.is_compatible(&large));
        assert!(!small.is_compatible(&renamed));
    }

    #[test]
    fn test_ordering_defaults_to_suit_major() {
        let json = r#"{"suits":["A","B"],"values":{"range":{"min":1,"max":3}},"deck_size":6}"#;
        let config: CardSystemConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.ordering, OrderingRule::SuitMajor);
        assert!(config.validate().is_ok());
    }
}
