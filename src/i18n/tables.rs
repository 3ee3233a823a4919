//! Built-in name tables for the built-in card systems.

use crate::systems::{FRENCH_32, ITALIAN_40, SPANISH_40, STANDARD_52};

/// Names for one `(language, system)` pair. `values[i]` names value `i + 1`.
pub(super) struct StaticTable {
    pub language: &'static str,
    pub system: &'static str,
    pub suits: [&'static str; 4],
    pub values: &'static [&'static str],
    pub connector: &'static str,
}

const EN_ITALIAN: [&str; 10] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Jack", "Knight", "King",
];
const EN_SPANISH: [&str; 10] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Sota", "Caballo", "Rey",
];
const EN_FRENCH: [&str; 13] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King",
];

const FR_ITALIAN: [&str; 10] = [
    "As", "Deux", "Trois", "Quatre", "Cinq", "Six", "Sept", "Valet", "Cavalier", "Roi",
];
const FR_SPANISH: [&str; 10] = [
    "As", "Deux", "Trois", "Quatre", "Cinq", "Six", "Sept", "Sota", "Caballo", "Rey",
];
const FR_FRENCH: [&str; 13] = [
    "As", "Deux", "Trois", "Quatre", "Cinq", "Six", "Sept", "Huit", "Neuf", "Dix", "Valet",
    "Dame", "Roi",
];

const IT_ITALIAN: [&str; 10] = [
    "Asso", "Due", "Tre", "Quattro", "Cinque", "Sei", "Sette", "Fante", "Cavallo", "Re",
];
const IT_SPANISH: [&str; 10] = [
    "As", "Due", "Tre", "Quattro", "Cinque", "Sei", "Sette", "Sota", "Caballo", "Re",
];
const IT_FRENCH: [&str; 13] = [
    "Asso", "Due", "Tre", "Quattro", "Cinque", "Sei", "Sette", "Otto", "Nove", "Dieci", "Fante",
    "Donna", "Re",
];

const ES_FORTY: [&str; 10] = [
    "As", "Dos", "Tres", "Cuatro", "Cinco", "Seis", "Siete", "Sota", "Caballo", "Rey",
];
const ES_FRENCH: [&str; 13] = [
    "As", "Dos", "Tres", "Cuatro", "Cinco", "Seis", "Siete", "Ocho", "Nueve", "Diez", "Jota",
    "Reina", "Rey",
];

const DE_FORTY: [&str; 10] = [
    "Ass", "Zwei", "Drei", "Vier", "Fünf", "Sechs", "Sieben", "Bube", "Reiter", "König",
];
const DE_FRENCH: [&str; 13] = [
    "Ass", "Zwei", "Drei", "Vier", "Fünf", "Sechs", "Sieben", "Acht", "Neun", "Zehn", "Bube",
    "Dame", "König",
];

const EN_FRENCH_SUITS: [&str; 4] = ["Spades", "Hearts", "Diamonds", "Clubs"];
const FR_FRENCH_SUITS: [&str; 4] = ["Piques", "Cœurs", "Carreaux", "Trèfles"];
const IT_FRENCH_SUITS: [&str; 4] = ["Picche", "Cuori", "Quadri", "Fiori"];
const ES_FRENCH_SUITS: [&str; 4] = ["Picas", "Corazones", "Diamantes", "Tréboles"];
const DE_FRENCH_SUITS: [&str; 4] = ["Pik", "Herz", "Karo", "Kreuz"];

pub(super) const TABLES: &[StaticTable] = &[
    // English
    StaticTable {
        language: "en",
        system: ITALIAN_40,
        suits: ["Coins", "Cups", "Swords", "Clubs"],
        values: &EN_ITALIAN,
        connector: "of",
    },
    StaticTable {
        language: "en",
        system: SPANISH_40,
        suits: ["Golds", "Cups", "Swords", "Clubs"],
        values: &EN_SPANISH,
        connector: "of",
    },
    StaticTable {
        language: "en",
        system: STANDARD_52,
        suits: EN_FRENCH_SUITS,
        values: &EN_FRENCH,
        connector: "of",
    },
    StaticTable {
        language: "en",
        system: FRENCH_32,
        suits: EN_FRENCH_SUITS,
        values: &EN_FRENCH,
        connector: "of",
    },
    // French
    StaticTable {
        language: "fr",
        system: ITALIAN_40,
        suits: ["Deniers", "Coupes", "Épées", "Bâtons"],
        values: &FR_ITALIAN,
        connector: "de",
    },
    StaticTable {
        language: "fr",
        system: SPANISH_40,
        suits: ["Ors", "Coupes", "Épées", "Bâtons"],
        values: &FR_SPANISH,
        connector: "de",
    },
    StaticTable {
        language: "fr",
        system: STANDARD_52,
        suits: FR_FRENCH_SUITS,
        values: &FR_FRENCH,
        connector: "de",
    },
    StaticTable {
        language: "fr",
        system: FRENCH_32,
        suits: FR_FRENCH_SUITS,
        values: &FR_FRENCH,
        connector: "de",
    },
    // Italian
    StaticTable {
        language: "it",
        system: ITALIAN_40,
        suits: ["Denari", "Coppe", "Spade", "Bastoni"],
        values: &IT_ITALIAN,
        connector: "di",
    },
    StaticTable {
        language: "it",
        system: SPANISH_40,
        suits: ["Oros", "Coppe", "Spade", "Bastoni"],
        values: &IT_SPANISH,
        connector: "di",
    },
    StaticTable {
        language: "it",
        system: STANDARD_52,
        suits: IT_FRENCH_SUITS,
        values: &IT_FRENCH,
        connector: "di",
    },
    StaticTable {
        language: "it",
        system: FRENCH_32,
        suits: IT_FRENCH_SUITS,
        values: &IT_FRENCH,
        connector: "di",
    },
    // Spanish
    StaticTable {
        language: "es",
        system: ITALIAN_40,
        suits: ["Oros", "Copas", "Espadas", "Bastos"],
        values: &ES_FORTY,
        connector: "de",
    },
    StaticTable {
        language: "es",
        system: SPANISH_40,
        suits: ["Oros", "Copas", "Espadas", "Bastos"],
        values: &ES_FORTY,
        connector: "de",
    },
    StaticTable {
        language: "es",
        system: STANDARD_52,
        suits: ES_FRENCH_SUITS,
        values: &ES_FRENCH,
        connector: "de",
    },
    StaticTable {
        language: "es",
        system: FRENCH_32,
        suits: ES_FRENCH_SUITS,
        values: &ES_FRENCH,
        connector: "de",
    },
    // German
    StaticTable {
        language: "de",
        system: ITALIAN_40,
        suits: ["Münzen", "Becher", "Schwerter", "Stäbe"],
        values: &DE_FORTY,
        connector: "von",
    },
    StaticTable {
        language: "de",
        system: SPANISH_40,
        suits: ["Münzen", "Becher", "Schwerter", "Stäbe"],
        values: &DE_FORTY,
        connector: "von",
    },
    StaticTable {
        language: "de",
        system: STANDARD_52,
        suits: DE_FRENCH_SUITS,
        values: &DE_FRENCH,
        connector: "von",
    },
    StaticTable {
        language: "de",
        system: FRENCH_32,
        suits: DE_FRENCH_SUITS,
        values: &DE_FRENCH,
        connector: "von",
    },
];
