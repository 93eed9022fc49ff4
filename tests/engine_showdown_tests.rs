//! Шоудаун и накопитель исходов.
//!
//! Здесь проверяем:
//! - вердикт героя против лучшей руки оппонентов (win / tie / loss);
//! - учёт исходов и разбивки по категориям;
//! - топ-n категорий (порядок при равных частотах);
//! - слияние частичных накопителей.

use poker_odds::domain::card::{Card, Rank, Suit};
use poker_odds::engine::showdown::{record_showdown, showdown_verdict};
use poker_odds::engine::{Outcome, OutcomeAccumulator};
use poker_odds::eval::{evaluate_best_hand, HandCategory};

use Rank::*;
use Suit::*;

fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Накопитель с заданными частотами категорий проигрышей.
fn lost_to_counts(counts: [u64; HandCategory::COUNT]) -> OutcomeAccumulator {
    let mut acc = OutcomeAccumulator::new();
    for (i, &n) in counts.iter().enumerate() {
        let category = HandCategory::from_index(i).unwrap();
        for _ in 0..n {
            acc.record(Outcome::Loss, HandCategory::HighCard, category);
        }
    }
    acc
}

//
// ============= Вердикт ============
//
#[test]
fn straight_flush_beats_four_of_a_kind() {
    // Борд: 9♣, T♣, J♣, Q♣, 2♦
    let board = [
        c(Nine, Clubs),
        c(Ten, Clubs),
        c(Jack, Clubs),
        c(Queen, Clubs),
        c(Two, Diamonds),
    ];

    let hero = evaluate_best_hand(&[c(Eight, Clubs), c(King, Clubs)], &board);
    let villain = evaluate_best_hand(&[c(Nine, Diamonds), c(Nine, Hearts)], &board);

    assert_eq!(hero.category(), HandCategory::StraightFlush);
    assert_eq!(showdown_verdict(hero, villain), Outcome::Win);
    assert_eq!(showdown_verdict(villain, hero), Outcome::Loss);
}

#[test]
fn board_plays_for_everyone_is_a_tie() {
    // Стрит на борде, карманные карты не улучшают.
    let board = [
        c(Six, Clubs),
        c(Seven, Diamonds),
        c(Eight, Hearts),
        c(Nine, Spades),
        c(Ten, Clubs),
    ];
    let hero = evaluate_best_hand(&[c(Two, Hearts), c(Three, Hearts)], &board);
    let villain = evaluate_best_hand(&[c(Two, Diamonds), c(Four, Spades)], &board);

    assert_eq!(showdown_verdict(hero, villain), Outcome::Tie);
}

#[test]
fn hero_must_beat_the_strongest_opponent() {
    let board = [
        c(King, Spades),
        c(Seven, Diamonds),
        c(Seven, Hearts),
        c(Two, Clubs),
        c(Nine, Spades),
    ];
    let hero = evaluate_best_hand(&[c(King, Hearts), c(Queen, Hearts)], &board);
    let weak = evaluate_best_hand(&[c(Three, Hearts), c(Four, Hearts)], &board);
    let strong = evaluate_best_hand(&[c(Seven, Clubs), c(Five, Clubs)], &board);

    let mut acc = OutcomeAccumulator::new();
    record_showdown(&mut acc, hero, [weak]);
    record_showdown(&mut acc, hero, [weak, strong]);
    record_showdown(&mut acc, hero, [hero, weak]);

    assert_eq!((acc.wins(), acc.losses(), acc.ties()), (1, 1, 1));
    assert_eq!(acc.won_with(HandCategory::TwoPair), 1);
    assert_eq!(acc.lost_to(HandCategory::ThreeOfAKind), 1);
    assert!(acc.is_consistent());
}

//
// ============= Накопитель ============
//
#[test]
fn empty_accumulator_has_zero_rates() {
    let acc = OutcomeAccumulator::new();
    assert_eq!(acc.total(), 0);
    assert_eq!(acc.win_rate(), 0.0);
    assert_eq!(acc.tie_rate(), 0.0);
    assert_eq!(acc.loss_rate(), 0.0);
    assert!(acc.top_won_with_categories(3).is_empty());
    assert!(acc.is_consistent());
}

#[test]
fn top_lost_to_picks_most_frequent() {
    let acc = lost_to_counts([0, 0, 5824, 2736, 324, 849, 1478, 135, 6]);

    let top = acc.top_lost_to_categories(3);
    let got: Vec<(HandCategory, u64)> = top.iter().map(|s| (s.category, s.count)).collect();
    assert_eq!(
        got,
        vec![
            (HandCategory::TwoPair, 5824),
            (HandCategory::ThreeOfAKind, 2736),
            (HandCategory::FullHouse, 1478),
        ]
    );

    let sum: u64 = 5824 + 2736 + 324 + 849 + 1478 + 135 + 6;
    assert!((top[0].share - 5824.0 / sum as f64).abs() < 1e-12);

    // Нулевые категории не попадают в список даже при большом n.
    assert_eq!(acc.top_lost_to_categories(100).len(), 7);
}

#[test]
fn equal_counts_prefer_stronger_category() {
    let acc = lost_to_counts([4, 0, 4, 0, 0, 4, 0, 0, 0]);
    let order: Vec<HandCategory> = acc
        .top_lost_to_categories(3)
        .iter()
        .map(|s| s.category)
        .collect();
    assert_eq!(
        order,
        vec![HandCategory::Flush, HandCategory::TwoPair, HandCategory::HighCard]
    );
}

#[test]
fn merge_is_field_wise_sum() {
    let mut a = OutcomeAccumulator::new();
    a.record(Outcome::Win, HandCategory::Flush, HandCategory::Straight);
    a.record(Outcome::Tie, HandCategory::OnePair, HandCategory::OnePair);

    let mut b = OutcomeAccumulator::new();
    b.record(Outcome::Win, HandCategory::Flush, HandCategory::HighCard);
    b.record(Outcome::Loss, HandCategory::OnePair, HandCategory::FullHouse);

    let merged = a.clone().merge(b.clone());
    assert_eq!(merged.total(), 4);
    assert_eq!(merged.wins(), 2);
    assert_eq!(merged.won_with(HandCategory::Flush), 2);
    assert_eq!(merged.lost_to(HandCategory::FullHouse), 1);
    assert_eq!(merged.win_rate(), 0.5);
    assert!(merged.is_consistent());

    // Порядок слияния не важен.
    assert_eq!(merged, b.merge(a));
}
