//! Точный перебор (brute force) на тёрне и ривере.
//!
//! Для каждого варианта добора борда:
//!   1. рука героя оценивается один раз;
//!   2. каждая возможная пара карманных карт оппонента оценивается один раз;
//!   3. перебираются все неупорядоченные наборы из `opponents` непересекающихся пар.
//!
//! Каждый набор рук учитывается ровно один раз, без перестановок между оппонентами.

use std::time::Instant;

use rayon::prelude::*;

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::{KnownCards, Stage};
use crate::engine::combinations::Combinations;
use crate::engine::errors::OddsError;
use crate::engine::outcome::OutcomeAccumulator;
use crate::engine::showdown::showdown_verdict;
use crate::engine::validation::validate_opponents;
use crate::engine::{Estimate, Estimator};
use crate::eval::{evaluate_best_hand, EvaluationResult};

/// Возможная рука оппонента на фиксированном борде.
#[derive(Clone, Copy, Debug)]
struct Holding {
    mask: u64,
    rank: EvaluationResult,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ExactEnumerator;

impl Estimator for ExactEnumerator {
    fn name(&self) -> &'static str {
        "brute_force"
    }

    fn estimate(&self, opponents: u8, known: &KnownCards) -> Result<Estimate, OddsError> {
        let opponents = validate_opponents(opponents)? as usize;
        let stage = known.stage();
        if !matches!(stage, Stage::Turn | Stage::River) {
            return Err(OddsError::UnsupportedStage {
                estimator: self.name(),
                known_cards: known.all().len(),
            });
        }

        let started = Instant::now();
        let hole = known.hole();
        let deck = Deck::remaining(known.all());

        let mut acc = OutcomeAccumulator::new();
        let mut board = Vec::with_capacity(5);

        for completion in Combinations::new(&deck.cards, stage.board_cards_missing()) {
            board.clear();
            board.extend_from_slice(known.board());
            board.extend_from_slice(&completion);

            let hero = evaluate_best_hand(&hole, &board);
            let completion_mask = completion.iter().fold(0u64, |m, c| m | c.bit());
            let holdings = opponent_holdings(&deck.cards, completion_mask, &board);

            acc.absorb(&enumerate_showdowns(hero, &holdings, opponents));
        }

        log::debug!(
            "brute_force: {} deals in {:?} (win {:.4}, tie {:.4})",
            acc.total(),
            started.elapsed(),
            acc.win_rate(),
            acc.tie_rate()
        );

        Ok(Estimate::Counted(acc))
    }
}

/// Все пары карт из несданной колоды (минус добор борда) с оценкой на этом борде.
fn opponent_holdings(deck: &[Card], used_mask: u64, board: &[Card]) -> Vec<Holding> {
    let stub: Vec<Card> = deck
        .iter()
        .copied()
        .filter(|c| c.bit() & used_mask == 0)
        .collect();

    Combinations::new(&stub, 2)
        .map(|pair| Holding {
            mask: pair[0].bit() | pair[1].bit(),
            rank: evaluate_best_hand(&pair, board),
        })
        .collect()
}

/// Перебор наборов рук оппонентов. Пространство делится по индексу
/// первой руки набора между задачами rayon; частичные накопители сливаются.
fn enumerate_showdowns(
    hero: EvaluationResult,
    holdings: &[Holding],
    opponents: usize,
) -> OutcomeAccumulator {
    (0..holdings.len())
        .into_par_iter()
        .map(|first| {
            let mut acc = OutcomeAccumulator::new();
            let h = holdings[first];
            enumerate_rest(hero, holdings, first + 1, opponents - 1, h.mask, h.rank, &mut acc);
            acc
        })
        .reduce(OutcomeAccumulator::new, OutcomeAccumulator::merge)
}

fn enumerate_rest(
    hero: EvaluationResult,
    holdings: &[Holding],
    start: usize,
    left: usize,
    used: u64,
    best: EvaluationResult,
    acc: &mut OutcomeAccumulator,
) {
    if left == 0 {
        acc.record(showdown_verdict(hero, best), hero.category(), best.category());
        return;
    }
    for (idx, h) in holdings.iter().enumerate().skip(start) {
        if h.mask & used == 0 {
            enumerate_rest(hero, holdings, idx + 1, left - 1, used | h.mask, best.max(h.rank), acc);
        }
    }
}
