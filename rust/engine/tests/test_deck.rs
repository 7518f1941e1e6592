use std::collections::HashSet;
use std::io::Cursor;

use parlor_engine::cards::Card;
use parlor_engine::deck::Deck;
use parlor_engine::errors::GameError;

fn drain_all(deck: &mut Deck) -> Vec<Card> {
    let mut out = Vec::new();
    while let Ok(c) = deck.deal_front() {
        out.push(c);
    }
    out
}

#[test]
fn standard_deck_has_52_unique_cards() {
    let mut deck = Deck::standard_with_seed(42);
    assert_eq!(deck.len(), 52);
    assert!(!deck.contains_duplicates());
    let set: HashSet<Card> = drain_all(&mut deck).into_iter().collect();
    assert_eq!(set.len(), 52);
    assert_eq!(deck.deal_front(), Err(GameError::EmptyDeck));
}

#[test]
fn shuffle_is_a_permutation() {
    for seed in 0..20 {
        let mut deck = Deck::standard_with_seed(seed);
        deck.shuffle();
        assert_eq!(deck.len(), 52);
        let mut shuffled = drain_all(&mut deck);
        shuffled.sort();
        let mut reference = parlor_engine::cards::full_deck();
        reference.sort();
        assert_eq!(shuffled, reference);
    }
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::standard_with_seed(12345);
    let mut d2 = Deck::standard_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    assert_eq!(drain_all(&mut d1), drain_all(&mut d2));
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::standard_with_seed(1);
    let mut d2 = Deck::standard_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(drain_all(&mut d1), drain_all(&mut d2));
}

#[test]
fn deals_from_the_front() {
    let mut deck = Deck::with_seed(0);
    deck.load_str("2c 10h Ks");
    assert_eq!(deck.deal_front().unwrap().to_string(), "2c");
    assert_eq!(deck.deal_front().unwrap().to_string(), "10h");
    assert_eq!(deck.len(), 1);
}

#[test]
fn absorb_appends_and_drains_other() {
    let mut main = Deck::with_seed(0);
    main.load_str("2c 3c");
    let mut other = Deck::with_seed(0);
    other.load_str("4c 5c 6c");
    main.absorb(&mut other);
    assert_eq!(main.len(), 5);
    assert!(other.is_empty());
    assert_eq!(main.to_string(), "[2c, 3c, 4c, 5c, 6c]");
}

#[test]
fn load_skips_malformed_tokens() {
    let mut deck = Deck::with_seed(0);
    let added = deck
        .load_from(Cursor::new("2c 10h Ks Ad\n1x zz 11h\n  Qd\n"))
        .unwrap();
    assert_eq!(added, 5);
    assert_eq!(deck.to_string(), "[2c, 10h, Ks, Ad, Qd]");
}

#[test]
fn detects_duplicates() {
    let mut deck = Deck::with_seed(0);
    deck.load_str("2c 3d 2c");
    assert!(deck.contains_duplicates());
    deck.clear();
    assert!(deck.is_empty());
    assert!(!deck.contains_duplicates());
}

#[test]
fn load_file_reads_tokens_and_reports_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.txt");
    std::fs::write(&path, "As Ks\nQs bogus Js 10s\n").unwrap();

    let mut deck = Deck::with_seed(0);
    assert_eq!(deck.load_file(&path).unwrap(), 5);
    assert_eq!(deck.len(), 5);

    let mut empty = Deck::with_seed(0);
    assert!(empty.load_file(dir.path().join("missing.txt")).is_err());
}

#[test]
fn empty_deck_displays_as_brackets() {
    assert_eq!(Deck::with_seed(0).to_string(), "[]");
}
