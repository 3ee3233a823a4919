//! Localized card names.
//!
//! Cards never know their own display names. They ask a [`Localizer`] with
//! `(system, value, suit, language)`. The crate ships [`Translations`], a
//! table-backed localizer covering the built-in systems in English, French,
//! Italian, Spanish and German. Hosts registering custom systems can add
//! their own tables with [`Translations::insert`].
//!
//! Missing languages are an error, not a silent fallback: a feature pipeline
//! should never emit names in a language it did not ask for.

mod tables;

use rustc_hash::FxHashMap;

use crate::core::{Error, Result};

/// Source of localized card and suit names.
pub trait Localizer: Send + Sync {
    /// Full card name, e.g. "Asso di Denari".
    fn localize(&self, system: &str, value: u8, suit: u8, language: &str) -> Result<String>;

    /// Suit name alone.
    fn suit_name(&self, system: &str, suit: u8, language: &str) -> Result<String>;
}

/// Names for one language of one card system.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleTable {
    /// Suit names by suit index.
    pub suits: Vec<String>,
    /// Value names. Values without an entry print as numbers.
    pub values: FxHashMap<u8, String>,
    /// Word between value and suit ("of", "di", ...).
    pub connector: String,
}

impl LocaleTable {
    /// Create a table with suit names and a connector.
    pub fn new<S: Into<String>>(suits: impl IntoIterator<Item = S>, connector: impl Into<String>) -> Self {
        Self {
            suits: suits.into_iter().map(Into::into).collect(),
            values: FxHashMap::default(),
            connector: connector.into(),
        }
    }

    /// Name a value (builder pattern).
    #[must_use]
    pub fn with_value(mut self, value: u8, name: impl Into<String>) -> Self {
        self.values.insert(value, name.into());
        self
    }
}

/// Table-backed [`Localizer`].
#[derive(Clone, Debug)]
pub struct Translations {
    tables: FxHashMap<(String, String), LocaleTable>,
}

impl Default for Translations {
    /// Tables for every built-in system.
    fn default() -> Self {
        let mut translations = Self::empty();
        for t in tables::TABLES {
            let mut table = LocaleTable::new(t.suits, t.connector);
            for (i, name) in t.values.iter().enumerate() {
                table.values.insert(i as u8 + 1, (*name).to_string());
            }
            translations.insert(t.language, t.system, table);
        }
        translations
    }
}

impl Translations {
    /// Create a localizer with no tables.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tables: FxHashMap::default(),
        }
    }

    /// Add or replace the table for `(language, system)`.
    pub fn insert(&mut self, language: &str, system: &str, table: LocaleTable) {
        self.tables
            .insert((language.to_string(), system.to_string()), table);
    }

    /// Languages with a table for `system`, sorted.
    #[must_use]
    pub fn languages(&self, system: &str) -> Vec<&str> {
        let mut languages: Vec<_> = self
            .tables
            .keys()
            .filter(|(_, s)| s == system)
            .map(|(l, _)| l.as_str())
            .collect();
        languages.sort_unstable();
        languages
    }

    fn table(&self, system: &str, language: &str) -> Result<&LocaleTable> {
        self.tables
            .get(&(language.to_string(), system.to_string()))
            .ok_or_else(|| unsupported(system, language))
    }
}

impl Localizer for Translations {
    fn localize(&self, system: &str, value: u8, suit: u8, language: &str) -> Result<String> {
        let table = self.table(system, language)?;
        let suit_name = table
            .suits
            .get(usize::from(suit))
            .ok_or_else(|| unsupported(system, language))?;
        let value_name = table
            .values
            .get(&value)
            .cloned()
            .unwrap_or_else(|| value.to_string());
        Ok(format!("{value_name} {} {suit_name}", table.connector))
    }

    fn suit_name(&self, system: &str, suit: u8, language: &str) -> Result<String> {
        self.table(system, language)?
            .suits
            .get(usize::from(suit))
            .cloned()
            .ok_or_else(|| unsupported(system, language))
    }
}

fn unsupported(system: &str, language: &str) -> Error {
    Error::UnsupportedLanguage {
        language: language.to_string(),
        system: system.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::{FRENCH_32, ITALIAN_40, SPANISH_40, STANDARD_52};

    #[test]
    fn test_builtin_names() {
        let t = Translations::default();

        assert_eq!(t.localize(ITALIAN_40, 1, 0, "it").unwrap(), "Asso di Denari");
        assert_eq!(t.localize(ITALIAN_40, 10, 3, "it").unwrap(), "Re di Bastoni");
        assert_eq!(t.localize(ITALIAN_40, 1, 0, "en").unwrap(), "Ace of Coins");
        assert_eq!(t.localize(SPANISH_40, 8, 0, "es").unwrap(), "Sota de Oros");
        assert_eq!(t.localize(STANDARD_52, 1, 0, "en").unwrap(), "Ace of Spades");
        assert_eq!(t.localize(STANDARD_52, 12, 1, "fr").unwrap(), "Dame de Cœurs");
        assert_eq!(t.localize(FRENCH_32, 7, 3, "de").unwrap(), "Sieben von Kreuz");
    }

    #[test]
    fn test_unsupported_language_is_error() {
        let t = Translations::default();
        assert_eq!(
            t.localize(ITALIAN_40, 1, 0, "pt").unwrap_err(),
            Error::UnsupportedLanguage {
                language: "pt".into(),
                system: ITALIAN_40.into()
            }
        );
        assert!(t.suit_name("tarot_78", 0, "en").is_err());
    }

    #[test]
    fn test_suit_out_of_table_is_error() {
        let t = Translations::default();
        assert!(t.localize(ITALIAN_40, 1, 9, "en").is_err());
    }

    #[test]
    fn test_custom_table() {
        let mut t = Translations::empty();
        t.insert(
            "en",
            "tiny_10",
            LocaleTable::new(["Red", "Black"], "of").with_value(1, "One"),
        );

        assert_eq!(t.localize("tiny_10", 1, 1, "en").unwrap(), "One of Black");
        // unnamed values fall back to digits
        assert_eq!(t.localize("tiny_10", 4, 0, "en").unwrap(), "4 of Red");
        assert_eq!(t.suit_name("tiny_10", 0, "en").unwrap(), "Red");
    }

    #[test]
    fn test_languages() {
        let t = Translations::default();
        assert_eq!(t.languages(ITALIAN_40), vec!["de", "en", "es", "fr", "it"]);
        assert!(t.languages("tiny_10").is_empty());
    }
}
