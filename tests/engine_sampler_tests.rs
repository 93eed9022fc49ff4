//! Монте-Карло: бюджеты, воспроизводимость, сходимость к точному перебору.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use poker_odds::config::SampleBudget;
use poker_odds::domain::{parse_cards_line, KnownCards};
use poker_odds::engine::{
    validate_known_cards, Estimate, Estimator, ExactEnumerator, OutcomeAccumulator, RandomSampler,
};
use poker_odds::eval::HandCategory;

fn known(line: &str) -> KnownCards {
    let cards = parse_cards_line(line).expect("валидная строка карт");
    validate_known_cards(&cards).expect("валидный набор карт")
}

fn counted(estimate: Estimate) -> OutcomeAccumulator {
    match estimate {
        Estimate::Counted(acc) => acc,
        Estimate::Tabulated(_) => panic!("сэмплер должен вернуть счётчики"),
    }
}

fn seeded(trials: u64, seed: u64) -> RandomSampler {
    RandomSampler::new(SampleBudget::trials_only(trials))
        .with_seed(seed)
        .with_workers(4)
}

#[test]
fn trial_budget_is_exact_upper_bound() {
    let acc = counted(seeded(10_001, 1).estimate(3, &known("Kh Qh 2c 7h 9d")).unwrap());
    assert_eq!(acc.total(), 10_001);
    assert!(acc.is_consistent());
}

#[test]
fn same_seed_same_result() {
    let hand = known("Jc Td 4s 5s 6h Ah");
    let a = counted(seeded(5_000, 99).estimate(2, &hand).unwrap());
    let b = counted(seeded(5_000, 99).estimate(2, &hand).unwrap());
    assert_eq!(a, b);

    let c = counted(seeded(5_000, 100).estimate(2, &hand).unwrap());
    assert_ne!(a, c);
}

#[test]
fn converges_to_exact_on_river() {
    let hand = known("9c 8d 9h 2s 5c Kd 3h");

    let exact = counted(ExactEnumerator.estimate(2, &hand).unwrap());
    let sampled = counted(seeded(60_000, 2024).estimate(2, &hand).unwrap());

    let diff = (exact.win_rate() - sampled.win_rate()).abs();
    assert!(
        diff < 0.015,
        "exact {} vs sampled {}",
        exact.win_rate(),
        sampled.win_rate()
    );
    assert!((exact.tie_rate() - sampled.tie_rate()).abs() < 0.015);
}

#[test]
fn river_full_house_wins_only_with_full_house() {
    let acc = counted(seeded(20_000, 5).estimate(5, &known("As 6c Ad 8s Ac 6d 9d")).unwrap());

    assert!(acc.win_rate() > 0.9);
    let won_with = acc.top_won_with_categories(100);
    assert_eq!(won_with.len(), 1);
    assert_eq!(won_with[0].category, HandCategory::FullHouse);
    assert_eq!(won_with[0].count, acc.wins());
    assert_eq!(won_with[0].share, 1.0);
}

#[test]
fn preflop_offsuit_ace_against_five() {
    let acc = counted(seeded(20_000, 8).estimate(5, &known("As 6c")).unwrap());
    assert!(acc.ties() < acc.wins());
    assert!(acc.wins() < acc.losses());
    assert!(acc.is_consistent());
}

#[test]
fn flop_category_breakdown_is_consistent() {
    let acc = counted(seeded(20_000, 13).estimate(5, &known("4h 4d 8c 4c Qd")).unwrap());
    assert!(acc.is_consistent());

    let won: u64 = acc.top_won_with_categories(HandCategory::COUNT).iter().map(|s| s.count).sum();
    let lost: u64 = acc.top_lost_to_categories(HandCategory::COUNT).iter().map(|s| s.count).sum();
    assert_eq!(won, acc.wins());
    assert_eq!(lost, acc.losses());
}

#[test]
fn time_budget_stops_sampling() {
    let sampler = RandomSampler::new(SampleBudget::new(u64::MAX, 50)).with_workers(2);

    let started = Instant::now();
    let acc = counted(sampler.estimate(9, &known("7c 2d")).unwrap());

    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(acc.total() > 0);
    assert!(acc.is_consistent());
}

#[test]
fn stop_flag_returns_partial_result() {
    let stop = Arc::new(AtomicBool::new(true));
    let sampler = seeded(1_000_000, 3).with_stop_flag(stop);

    let acc = counted(sampler.estimate(2, &known("As Kd")).unwrap());
    assert_eq!(acc.total(), 0);
    assert_eq!(acc.win_rate(), 0.0);
}
