//! Card systems registered out of the box.

use super::config::{CardSystemConfig, ValueSet};

/// 52-card French-suited deck, Ace = 1 ... King = 13.
pub const STANDARD_52: &str = "standard_52";
/// 40-card Italian deck, values 1-7 plus Fante (8), Cavallo (9), Re (10).
pub const ITALIAN_40: &str = "italian_40";
/// 40-card Spanish deck, values 1-7 plus Sota (8), Caballo (9), Rey (10).
pub const SPANISH_40: &str = "spanish_40";
/// 32-card piquet deck: Ace and 7 through King.
pub const FRENCH_32: &str = "french_32";

const FRENCH_SUITS: [&str; 4] = ["Spades", "Hearts", "Diamonds", "Clubs"];

/// All built-in systems as `(key, config)` pairs.
#[must_use]
pub fn builtin_systems() -> Vec<(&'static str, CardSystemConfig)> {
    vec![
        (
            STANDARD_52,
            CardSystemConfig::new(FRENCH_SUITS, ValueSet::range(1, 13)),
        ),
        (
            ITALIAN_40,
            CardSystemConfig::new(["Denari", "Coppe", "Spade", "Bastoni"], ValueSet::range(1, 10)),
        ),
        (
            SPANISH_40,
            CardSystemConfig::new(["Oros", "Copas", "Espadas", "Bastos"], ValueSet::range(1, 10)),
        ),
        (
            FRENCH_32,
            CardSystemConfig::new(FRENCH_SUITS, ValueSet::set([1, 7, 8, 9, 10, 11, 12, 13])),
        ),
    ]
}
