use std::cmp::Ordering;

use parlor_engine::cards::{Card, Rank as R};
use parlor_engine::errors::GameError;
use parlor_engine::hand::{Category, Hand};

fn ranked(text: &str) -> Hand {
    let mut h = Hand::parse(text).expect("valid tokens");
    h.rank().expect("five cards");
    h
}

fn cmp(a: &str, b: &str) -> Ordering {
    ranked(a).compare(&ranked(b)).expect("comparable")
}

#[test]
fn detects_every_category() {
    let cases = [
        ("2c 5d 9h Js Kc", Category::HighCard),
        ("2c 2d 9h Js Kc", Category::OnePair),
        ("2c 2d 9h 9s Kc", Category::TwoPair),
        ("2c 2d 2h Js Kc", Category::ThreeOfAKind),
        ("5c 6d 7h 8s 9c", Category::Straight),
        ("2h 5h 9h Jh Kh", Category::Flush),
        ("2c 2d 7h 7s 7c", Category::FullHouse),
        ("9c 9d 9h 9s Kc", Category::FourOfAKind),
        ("10h Jh Qh Kh Ah", Category::StraightFlush),
    ];
    for (text, expected) in cases {
        assert_eq!(ranked(text).category(), Some(expected), "{text}");
    }
}

#[test]
fn wheel_compares_ace_high() {
    assert_eq!(ranked("Ac 2d 3h 4s 5c").category(), Some(Category::Straight));
    assert_eq!(ranked("Ad 2d 3d 4d 5d").category(), Some(Category::StraightFlush));
    assert_eq!(cmp("Ac 2d 3h 4s 5c", "2c 3d 4h 5s 6c"), Ordering::Greater);
    assert_eq!(cmp("Ac 2d 3h 4s 5c", "10c Jd Qh Ks Ac"), Ordering::Less);
    assert_eq!(cmp("Ad 2d 3d 4d 5d", "9h 10h Jh Qh Kh"), Ordering::Greater);
    assert_eq!(cmp("Ac 2d 3h 4s 5c", "Kc Qd 9h 4s 2c"), Ordering::Greater);
}

#[test]
fn near_wheel_shapes_are_not_straights() {
    assert_eq!(ranked("2c 3d 4h Ks Ac").category(), Some(Category::HighCard));
    assert_eq!(ranked("Jc Qd Kh As 2c").category(), Some(Category::HighCard));
}

#[test]
fn categories_follow_precedence() {
    let ladder = [
        "2c 5d 9h Js Kc",
        "2c 2d 9h Js Kc",
        "2c 2d 9h 9s Kc",
        "2c 2d 2h Js Kc",
        "5c 6d 7h 8s 9c",
        "2h 5h 9h Jh Kh",
        "2c 2d 7h 7s 7c",
        "9c 9d 9h 9s Kc",
        "5s 6s 7s 8s 9s",
    ];
    for (i, lower) in ladder.iter().enumerate() {
        for higher in &ladder[i + 1..] {
            assert_eq!(cmp(higher, lower), Ordering::Greater, "{higher} vs {lower}");
            assert_eq!(cmp(lower, higher), Ordering::Less, "{lower} vs {higher}");
        }
    }
}

#[test]
fn full_house_scenario() {
    let h = ranked("2c 2d 7h 7s 7c");
    let tb = h.tie_break().unwrap();
    assert_eq!(tb.triple, Some(R::Seven));
    assert_eq!(tb.pair, Some(R::Two));
    assert_eq!(cmp("2c 2d 7h 7s 7c", "2c 2d 2h 3s 3c"), Ordering::Greater);
    assert_eq!(cmp("2c 2d 7h 7s 7c", "3c 3d 8h 8s 8c"), Ordering::Less);
}

#[test]
fn identical_ranks_compare_equal() {
    assert_eq!(cmp("2c 5d 9h Js Kc", "2d 5h 9s Jc Kd"), Ordering::Equal);
    assert_eq!(cmp("3c 3d 8h 8s Ac", "3h 3s 8c 8d Ad"), Ordering::Equal);
    assert!(ranked("2c 5d 9h Js Kc").same_rank_as(&ranked("2d 5h 9s Jc Kd")));
    assert!(!ranked("2c 5d 9h Js Kc").same_rank_as(&ranked("2d 5h 9s Jc Ad")));
}

#[test]
fn high_card_compares_from_the_top() {
    assert_eq!(cmp("2c 5d 9h Js Ac", "3c 5d 9h Qs Kc"), Ordering::Greater);
    assert_eq!(cmp("2c 5d 9h Js Kc", "3c 5d 9h Js Kc"), Ordering::Less);
}

#[test]
fn pair_kickers_skip_the_pair() {
    assert_eq!(cmp("Kc Kd 2h 3s 4c", "Qc Qd Ah Js 4c"), Ordering::Greater);
    assert_eq!(cmp("8c 8d Ah 3s 2c", "8h 8s Kh Qs Jc"), Ordering::Greater);
    assert_eq!(cmp("8c 8d Ah 5s 2c", "8h 8s Ad 4s 3c"), Ordering::Greater);
}

#[test]
fn two_pair_compares_high_pair_then_low_then_kicker() {
    assert_eq!(cmp("Kc Kd 2h 2s 3c", "Qc Qd Jh Js Ac"), Ordering::Greater);
    assert_eq!(cmp("Kc Kd 5h 5s 3c", "Kh Ks 4h 4s Ac"), Ordering::Greater);
    assert_eq!(cmp("Kc Kd 5h 5s 3c", "Kh Ks 5c 5d 4c"), Ordering::Less);
}

#[test]
fn trips_and_quads_use_group_rank_then_kickers() {
    assert_eq!(cmp("4c 4d 4h 2s 3c", "3h 3d 3s Ac Kc"), Ordering::Greater);
    assert_eq!(cmp("9c 9d 9h 9s 2c", "8c 8d 8h 8s Ac"), Ordering::Greater);
    assert_eq!(
        cmp("Jc Jd Jh 9s 2c", "Jc Jd Jh 8s 7c"),
        Ordering::Greater
    );
}

#[test]
fn ranking_requires_exactly_five_cards() {
    let mut four = Hand::parse("2c 3d 4h 5s").unwrap();
    assert_eq!(
        four.rank(),
        Err(GameError::WrongHandSize {
            expected: 5,
            actual: 4
        })
    );
}

#[test]
fn comparing_unranked_hands_is_an_error() {
    let a = Hand::parse("2c 3d 4h 5s 7c").unwrap();
    let b = ranked("2d 3h 4s 5c 7d");
    assert_eq!(a.compare(&b), Err(GameError::UnrankedComparison));
}

#[test]
fn mutation_invalidates_cached_rank() {
    let mut h = ranked("2c 2d 9h Js Kc");
    assert!(h.category().is_some());
    h.remove_card(0).unwrap();
    assert!(h.category().is_none());
    h.add_card(Card::parse("Ks"));
    assert!(h.category().is_none());
    assert_eq!(h.rank().unwrap(), Category::OnePair);
    assert!(h.remove_card(9).is_err());
}

#[test]
fn hand_stays_sorted_and_hides_face_down_cards() {
    let mut h = Hand::new();
    h.add_card(Card::parse("Kc").face_down());
    h.add_card(Card::parse("2d"));
    h.add_card(Card::parse("7h"));
    h.add_card(Card::parse("3s").face_down());
    assert_eq!(h.to_string(), "[2d, 3s, 7h, Kc]");
    assert_eq!(h.to_hidden_string(), "[*, *, 2d, 7h]");
}
