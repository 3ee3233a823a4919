//! Deck behaviour tests.
//!
//! These tests drive decks through the public API the way a feature
//! pipeline would:
//! - Dealing hands and reading state vectors
//! - Moving cards between decks
//! - Custom card systems end to end

use std::sync::Arc;

use rust_decks::nn::DeckEncoder;
use rust_decks::{
    CardContext, CardSystemConfig, Deck, DeckBuilder, DeckRng, Error, LocaleTable, OrderingRule,
    Translations, ValueSet, ITALIAN_40, STANDARD_52,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Drawing the whole sorted standard deck yields canonical order and empties the vector.
#[test]
fn test_draw_full_standard_deck() {
    init_logging();
    let ctx = CardContext::new();
    let mut deck = DeckBuilder::new(STANDARD_52).full(&ctx).unwrap();

    let drawn = deck.draw(52).unwrap();
    let indices: Vec<usize> = drawn.iter().map(|c| c.to_index()).collect();
    assert_eq!(indices, (0..52).collect::<Vec<_>>());

    assert!(deck.is_empty());
    assert!(deck.state().iter().all(|&b| b == 0));
    for card in &drawn {
        assert!(!deck.contains(card));
    }
}

/// Canonical indices of the standard deck's corner cards.
#[test]
fn test_standard_corner_indices() {
    let ctx = CardContext::new();
    assert_eq!(ctx.get_card(STANDARD_52, 1, 0).unwrap().to_index(), 0);
    assert_eq!(ctx.get_card(STANDARD_52, 13, 3).unwrap().to_index(), 51);
}

/// A full Italian deck has a 40-long state vector summing to 40.
#[test]
fn test_italian_full_state() {
    let ctx = CardContext::new();
    let deck = Deck::new_full(&ctx, ITALIAN_40, "it", false).unwrap();

    assert_eq!(deck.system().deck_size(), 40);
    assert_eq!(deck.state().len(), 40);
    assert_eq!(deck.state().iter().map(|&b| u32::from(b)).sum::<u32>(), 40);
}

/// Dealing hands from a shuffled deck keeps every card in exactly one place.
#[test]
fn test_deal_hands() {
    init_logging();
    let ctx = CardContext::new();
    let mut stock = DeckBuilder::new(ITALIAN_40)
        .sorted(false)
        .seed(42)
        .full(&ctx)
        .unwrap();

    let mut hands: Vec<Deck> = (0..4)
        .map(|_| Deck::empty(&ctx, ITALIAN_40, "it").unwrap())
        .collect();
    for hand in hands.iter_mut() {
        hand.extend(stock.draw(3).unwrap()).unwrap();
    }

    assert_eq!(stock.len(), 28);
    let mut total = stock.state().to_vec();
    for hand in &hands {
        assert_eq!(hand.len(), 3);
        for (t, &b) in total.iter_mut().zip(hand.state()) {
            assert_eq!(*t & b, 0, "card in two places");
            *t |= b;
        }
    }
    assert!(total.iter().all(|&b| b == 1));
}

/// Same seed, same shuffle.
#[test]
fn test_seeded_shuffles_are_reproducible() {
    let ctx = CardContext::new();
    let a = DeckBuilder::new(STANDARD_52).sorted(false).seed(9).full(&ctx).unwrap();
    let b = DeckBuilder::new(STANDARD_52).sorted(false).seed(9).full(&ctx).unwrap();
    let c = DeckBuilder::new(STANDARD_52).sorted(false).seed(10).full(&ctx).unwrap();

    assert_eq!(a.to_vec(), b.to_vec());
    assert_ne!(a.to_vec(), c.to_vec());

    let mut rng = DeckRng::new(3);
    let mut d = a.clone();
    d.shuffle_with(&mut rng);
    assert_eq!(d.state(), a.state());
}

/// Moving a card flips exactly one entry in each deck's vector.
#[test]
fn test_move_between_decks() {
    let ctx = CardContext::new();
    let mut stock = DeckBuilder::new(ITALIAN_40).full(&ctx).unwrap();
    let mut table = Deck::empty(&ctx, ITALIAN_40, "it").unwrap();
    let _ = (stock.state(), table.state());

    let settebello = ctx.get_card(ITALIAN_40, 7, 0).unwrap();
    stock.move_card_to(&settebello, &mut table).unwrap();

    assert!(stock.is_dirty());
    assert!(table.is_dirty());
    assert_eq!(stock.state()[settebello.to_index()], 0);
    assert_eq!(table.state()[settebello.to_index()], 1);
    assert_eq!(stock.state().iter().filter(|&&b| b == 1).count(), 39);
    assert_eq!(table.state().iter().filter(|&&b| b == 1).count(), 1);

    assert!(matches!(
        stock.move_card_to(&settebello, &mut table),
        Err(Error::CardNotFound(_))
    ));
}

/// A state vector survives a trip through `from_state`.
#[test]
fn test_state_rebuilds_deck() {
    let ctx = CardContext::new();
    let mut deck = DeckBuilder::new(STANDARD_52).sorted(false).seed(5).full(&ctx).unwrap();
    deck.draw(20).unwrap();

    let rebuilt = Deck::from_state(&ctx, STANDARD_52, deck.state(), "en").unwrap();
    assert_eq!(rebuilt.len(), 32);
    assert_eq!(rebuilt.state(), deck.state());

    let mut sorted = deck.clone();
    sorted.sort();
    assert_eq!(rebuilt.to_vec(), sorted.to_vec());
}

/// Custom systems work end to end, including names once a table is supplied.
#[test]
fn test_custom_system_end_to_end() {
    init_logging();
    let mut translations = Translations::default();
    translations.insert(
        "en",
        "tiny_10",
        LocaleTable::new(["Red", "Black"], "of").with_value(1, "One"),
    );
    let ctx = CardContext::with_localizer(Arc::new(translations));

    let config = CardSystemConfig::new(["Red", "Black"], ValueSet::range(1, 5));
    ctx.register_card_system("tiny_10", config.clone()).unwrap();
    ctx.register_card_system("tiny_10", config).unwrap();

    let conflicting = CardSystemConfig::new(["Red", "Black", "Green"], ValueSet::range(1, 5));
    assert!(matches!(
        ctx.register_card_system("tiny_10", conflicting),
        Err(Error::Configuration(_))
    ));

    let mut deck = DeckBuilder::new("tiny_10").full(&ctx).unwrap();
    assert_eq!(deck.len(), 10);
    deck.draw(4).unwrap();
    assert_eq!(deck.state(), &[0, 0, 0, 0, 1, 1, 1, 1, 1, 1]);
    assert_eq!(deck.pretty_print().unwrap(), "Red: 5 of Red\nBlack: One of Black, 2 of Black, 3 of Black, 4 of Black, 5 of Black");
}

/// Decks of one system stack into a single tensor; other systems are refused.
#[test]
fn test_encode_zones() {
    let ctx = CardContext::new();
    let mut stock = DeckBuilder::new(ITALIAN_40).full(&ctx).unwrap();
    let mut hand = Deck::empty(&ctx, ITALIAN_40, "it").unwrap();
    hand.extend(stock.draw(3).unwrap()).unwrap();

    let encoder = DeckEncoder::new(ctx.system(ITALIAN_40).unwrap(), 2);
    let encoded = encoder.encode(&[&hand, &stock]).unwrap();
    assert_eq!(encoded.shape, vec![2, 40]);
    assert_eq!(&encoded.tensor[..40], hand.encode().tensor.as_slice());
    assert_eq!(&encoded.tensor[40..], stock.encode().tensor.as_slice());

    let other = DeckBuilder::new(STANDARD_52).full(&ctx).unwrap();
    assert!(matches!(
        encoder.encode(&[&hand, &other]),
        Err(Error::SystemMismatch { .. })
    ));
}

/// Unknown systems are reported by key.
#[test]
fn test_unknown_system() {
    let ctx = CardContext::new();
    assert_eq!(
        Deck::empty(&ctx, "tarot_78", "en").unwrap_err(),
        Error::UnknownSystem("tarot_78".into())
    );
    assert_eq!(
        ctx.get_card("tarot_78", 1, 0).unwrap_err(),
        Error::UnknownSystem("tarot_78".into())
    );
}

/// Configurations load from JSON.
#[test]
fn test_config_from_json() {
    let ctx = CardContext::new();
    let config: CardSystemConfig = serde_json::from_str(
        r#"{"suits": ["Sun", "Moon"], "values": {"set": [2, 4, 6]}, "deck_size": 6}"#,
    )
    .unwrap();
    let system = ctx.register_card_system("astro_6", config).unwrap();

    assert_eq!(system.deck_size(), 6);
    assert_eq!(ctx.get_card("astro_6", 6, 1).unwrap().to_index(), 5);
    assert!(matches!(
        ctx.get_card("astro_6", 3, 0),
        Err(Error::InvalidCard { .. })
    ));
}

/// A card from another context whose system shares the key but not the config is refused.
#[test]
fn test_same_key_other_context() {
    let a = CardContext::new();
    let b = CardContext::new();
    a.register_card_system("tiny", CardSystemConfig::new(["Red", "Black"], ValueSet::range(1, 5)))
        .unwrap();
    b.register_card_system("tiny", CardSystemConfig::new(["Red", "Black"], ValueSet::range(1, 10)))
        .unwrap();

    let mut deck = Deck::empty(&a, "tiny", "en").unwrap();
    let outsider = b.get_card("tiny", 10, 1).unwrap();

    assert!(matches!(
        deck.append(Arc::clone(&outsider)),
        Err(Error::SystemMismatch { .. })
    ));
    assert!(matches!(
        Deck::from_cards(&a, [outsider], "tiny", "en"),
        Err(Error::SystemMismatch { .. })
    ));
    assert!(deck.is_empty());
    assert_eq!(deck.state(), &[0u8; 10]);
    assert_ne!(a.get_card("tiny", 1, 0).unwrap(), b.get_card("tiny", 1, 0).unwrap());
}

/// A value-major system chosen by name sorts by value first.
#[test]
fn test_value_major_by_name() {
    let ctx = CardContext::new();
    let ordering: OrderingRule = "value_major".parse().unwrap();
    let config = CardSystemConfig::new(["Red", "Black"], ValueSet::range(1, 3)).with_ordering(ordering);
    ctx.register_card_system("tiny_vm", config).unwrap();

    let cards = [(3, 0), (1, 1), (2, 0), (1, 0)]
        .iter()
        .map(|&(v, s)| ctx.get_card("tiny_vm", v, s).unwrap());
    let mut deck = Deck::from_cards(&ctx, cards, "tiny_vm", "en").unwrap();
    deck.sort();

    let order: Vec<(u8, u8)> = deck.iter().map(|c| (c.value(), c.suit())).collect();
    assert_eq!(order, vec![(1, 0), (1, 1), (2, 0), (3, 0)]);
    assert_eq!(deck.state(), &[1, 1, 1, 0, 1, 0]);
}
