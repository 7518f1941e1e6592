use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use parlor_engine::cards::{full_deck, Card, Rank as R};
use parlor_engine::errors::GameError;
use parlor_engine::hand::{Category, Hand};

fn brute_force_best(cards: &[Card]) -> Hand {
    let mut best: Option<Hand> = None;
    for skip_a in 0..cards.len() {
        for skip_b in skip_a + 1..cards.len() {
            let mut h = Hand::from_cards(
                cards
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip_a && *i != skip_b)
                    .map(|(_, c)| *c),
            );
            h.rank().unwrap();
            let better = match &best {
                None => true,
                Some(b) => h.compare(b).unwrap() == Ordering::Greater,
            };
            if better {
                best = Some(h);
            }
        }
    }
    best.unwrap()
}

#[test]
fn never_beaten_by_another_subset() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    for _ in 0..300 {
        let mut deck = full_deck();
        deck.shuffle(&mut rng);
        let seven = &deck[..7];
        let (best, category) = Hand::from_cards(seven.iter().copied()).best_subset().unwrap();
        let reference = brute_force_best(seven);
        assert_eq!(best.len(), 5);
        assert_eq!(Some(category), reference.category());
        assert_eq!(best.compare(&reference).unwrap(), Ordering::Equal, "{seven:?}");
    }
}

#[test]
fn keeps_the_two_highest_pairs() {
    let seven = Hand::parse("2c 2d 3h 3s 4c 4d 5h").unwrap();
    let (best, category) = seven.best_subset().unwrap();
    assert_eq!(category, Category::TwoPair);
    let tb = best.tie_break().unwrap();
    assert_eq!(tb.pair, Some(R::Four));
    assert_eq!(tb.second_pair, Some(R::Three));
    assert_eq!(best.to_string(), "[3h, 3s, 4c, 4d, 5h]");
    assert_eq!(
        best.compare(&brute_force_best(seven.cards())).unwrap(),
        Ordering::Equal
    );
}

#[test]
fn finds_flush_hidden_among_pairs() {
    let seven = Hand::parse("2h 5h 9h Jh Kh Kc Kd").unwrap();
    let (best, category) = seven.best_subset().unwrap();
    assert_eq!(category, Category::Flush);
    assert!(best.cards().iter().all(|c| c.suit == parlor_engine::cards::Suit::Hearts));
}

#[test]
fn ties_resolve_to_first_subset_found() {
    // Five hearts plus two low off-suit cards: only one subset is the flush.
    let seven = Hand::parse("2c 3d 6h 8h 10h Qh Ah").unwrap();
    let (best, _) = seven.best_subset().unwrap();
    assert_eq!(best.to_string(), "[6h, 8h, 10h, Qh, Ah]");

    // 5h and 5s make equal kickers; the earlier subset is kept.
    let seven = Hand::parse("2h 5h 5s 9c 9d Kc Kd").unwrap();
    let (best, category) = seven.best_subset().unwrap();
    assert_eq!(category, Category::TwoPair);
    assert_eq!(best.to_string(), "[5h, 9c, 9d, Kc, Kd]");
}

#[test]
fn wheel_beats_the_six_high_straight() {
    let seven = Hand::parse("Ac 2d 3h 4s 5c 6d 9h").unwrap();
    let (best, category) = seven.best_subset().unwrap();
    assert_eq!(category, Category::Straight);
    assert_eq!(best.to_string(), "[2d, 3h, 4s, 5c, Ac]");
}

#[test]
fn requires_seven_cards() {
    let six = Hand::parse("2c 3d 4h 5s 7c 9d").unwrap();
    assert_eq!(
        six.best_subset().unwrap_err(),
        GameError::WrongHandSize {
            expected: 7,
            actual: 6
        }
    );
}
