//! Табличный префлоп.

use poker_odds::domain::{parse_cards_line, Card, KnownCards, Rank};
use poker_odds::engine::{
    validate_known_cards, Estimate, Estimator, HoleShape, OddsError, PreflopOdds, TableLookup,
};

fn known(line: &str) -> KnownCards {
    let cards = parse_cards_line(line).expect("валидная строка карт");
    validate_known_cards(&cards).expect("валидный набор карт")
}

fn tabulated(estimate: Estimate) -> PreflopOdds {
    match estimate {
        Estimate::Tabulated(odds) => odds,
        Estimate::Counted(_) => panic!("таблица не считает раздачи"),
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn reference_hands() {
    let cases = [("As 6c", 19.21), ("As 6s", 23.33), ("As Ad", 55.78)];
    for (line, win) in cases {
        let odds = tabulated(TableLookup.estimate(4, &known(line)).unwrap());
        assert!(close(odds.win_pct, win), "{line}: {}", odds.win_pct);
        assert!(close(odds.loss_pct, 100.0 - odds.win_pct - odds.tie_pct));
    }
}

#[test]
fn hole_order_does_not_matter() {
    let a = TableLookup.estimate(4, &known("As 6c")).unwrap();
    let b = TableLookup.estimate(4, &known("6c As")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn opponent_count_is_ignored() {
    let hand = known("Kd Qd");
    let two = TableLookup.estimate(2, &hand).unwrap();
    let nine = TableLookup.estimate(9, &hand).unwrap();
    assert_eq!(two, nine);
    assert!(two.accumulator().is_none());
    assert!(close(two.win_rate() + two.tie_rate() + two.loss_rate(), 1.0));
}

#[test]
fn only_preflop_is_supported() {
    let err = TableLookup.estimate(4, &known("As 6c Ad 8s Ac")).unwrap_err();
    assert_eq!(
        err,
        OddsError::UnsupportedStage {
            estimator: "look_up",
            known_cards: 5
        }
    );
}

#[test]
fn suited_beats_offsuit_and_pairs_rank_in_order() {
    let suited = TableLookup::odds_for(HoleShape::Suited {
        high: Rank::Ace,
        low: Rank::King,
    });
    let offsuit = TableLookup::odds_for(HoleShape::Offsuit {
        high: Rank::Ace,
        low: Rank::King,
    });
    assert!(suited.win_pct > offsuit.win_pct);

    let mut previous = f64::MAX;
    for rank in Rank::ALL.iter().rev() {
        let odds = TableLookup::odds_for(HoleShape::Pair(*rank));
        assert!(odds.win_pct < previous, "{rank}");
        previous = odds.win_pct;
    }
}

#[test]
fn hole_shape_basics() {
    let hole = |line: &str| -> [Card; 2] {
        let cards = parse_cards_line(line).unwrap();
        [cards[0], cards[1]]
    };

    let a6o = HoleShape::from_hole(hole("6c As"));
    assert_eq!(
        a6o,
        HoleShape::Offsuit {
            high: Rank::Ace,
            low: Rank::Six
        }
    );
    assert_eq!(a6o.to_string(), "A6o");
    assert_eq!(a6o.gap(), 7);

    let jts = HoleShape::from_hole(hole("Ts Js"));
    assert_eq!(jts.to_string(), "JTs");
    assert_eq!(jts.gap(), 0);

    let aa = HoleShape::from_hole(hole("Ah Ad"));
    assert_eq!(aa, HoleShape::Pair(Rank::Ace));
    assert_eq!(aa.to_string(), "AA");
}
