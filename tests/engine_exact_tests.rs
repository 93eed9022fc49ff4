//! Точный перебор: тёрн и ривер.

use poker_odds::domain::{parse_cards_line, KnownCards};
use poker_odds::engine::{
    validate_known_cards, Estimate, Estimator, ExactEnumerator, OddsError, OutcomeAccumulator,
};
use poker_odds::eval::HandCategory;

fn known(line: &str) -> KnownCards {
    let cards = parse_cards_line(line).expect("валидная строка карт");
    validate_known_cards(&cards).expect("валидный набор карт")
}

fn counted(estimate: Estimate) -> OutcomeAccumulator {
    match estimate {
        Estimate::Counted(acc) => acc,
        Estimate::Tabulated(_) => panic!("перебор должен вернуть счётчики"),
    }
}

#[test]
fn river_full_house_heads_up() {
    let acc = counted(
        ExactEnumerator
            .estimate(1, &known("As 6c Ad 8s Ac 6d 9d"))
            .unwrap(),
    );

    // C(45, 2) рук оппонента, каждая ровно один раз.
    assert_eq!(acc.total(), 990);
    assert!(acc.win_rate() > 0.9, "win rate {}", acc.win_rate());
    assert!(acc.is_consistent());
    assert_eq!(acc.won_with(HandCategory::FullHouse), acc.wins());
}

#[test]
fn river_full_house_two_opponents() {
    let acc = counted(
        ExactEnumerator
            .estimate(2, &known("As 6c Ad 8s Ac 6d 9d"))
            .unwrap(),
    );

    // Неупорядоченные пары непересекающихся рук: C(45,2) * C(43,2) / 2.
    assert_eq!(acc.total(), 990 * 903 / 2);
    assert!(acc.win_rate() > 0.9);
    assert!(acc.is_consistent());
}

#[test]
fn turn_full_house_heads_up() {
    let acc = counted(
        ExactEnumerator
            .estimate(1, &known("As 6c Ad 8s Ac Jd"))
            .unwrap(),
    );

    // 46 вариантов ривера × C(45, 2) рук оппонента.
    assert_eq!(acc.total(), 46 * 990);
    assert!(acc.win_rate() > 0.9);
    assert!(acc.is_consistent());
}

#[test]
fn turn_bad_luck() {
    let acc = counted(
        ExactEnumerator
            .estimate(1, &known("2c 4d 8c Js Qd Qc"))
            .unwrap(),
    );

    assert!(acc.win_rate() < 0.2, "win rate {}", acc.win_rate());
    assert!(acc.is_consistent());
}

#[test]
fn royal_flush_on_board_is_always_a_tie() {
    let acc = counted(
        ExactEnumerator
            .estimate(2, &known("2c 3d As Ks Qs Js Ts"))
            .unwrap(),
    );

    assert_eq!(acc.ties(), acc.total());
    assert_eq!(acc.tie_rate(), 1.0);
    assert!(acc.top_won_with_categories(3).is_empty());
    assert!(acc.top_lost_to_categories(3).is_empty());
}

#[test]
fn hero_nuts_never_loses() {
    // Роял-флеш у героя.
    let acc = counted(
        ExactEnumerator
            .estimate(1, &known("As Ks Qs Js Ts 2d 7c"))
            .unwrap(),
    );
    assert_eq!(acc.win_rate(), 1.0);
    assert_eq!(acc.won_with(HandCategory::StraightFlush), acc.total());
}

#[test]
fn rejects_preflop_and_flop() {
    for line in ["As 6c", "As 6c Ad 8s Ac"] {
        let err = ExactEnumerator.estimate(1, &known(line)).unwrap_err();
        assert!(matches!(err, OddsError::UnsupportedStage { .. }), "{line}");
    }
}

#[test]
fn rejects_bad_opponent_count() {
    let err = ExactEnumerator
        .estimate(0, &known("As 6c Ad 8s Ac 6d 9d"))
        .unwrap_err();
    assert!(matches!(err, OddsError::Input(_)));
}
