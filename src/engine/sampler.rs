//! Монте-Карло оценщик: случайные независимые раздачи до исчерпания бюджета.
//!
//! Воркеры (rayon) работают каждый со своим RNG и своим накопителем,
//! в конце накопители суммируются. Блокировок во время сэмплирования нет.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use crate::config::{OddsConfig, SampleBudget};
use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::KnownCards;
use crate::engine::errors::OddsError;
use crate::engine::outcome::OutcomeAccumulator;
use crate::engine::showdown::record_showdown;
use crate::engine::validation::validate_opponents;
use crate::engine::{Estimate, Estimator, RandomSource};
use crate::eval::evaluate_best_hand;
use crate::infra::{DeterministicRng, SystemRng};

/// Как часто воркер сверяется с дедлайном и флагом остановки.
const CHECK_EVERY: u64 = 16;

#[derive(Clone, Debug)]
pub struct RandomSampler {
    budget: SampleBudget,
    seed: Option<u64>,
    workers: Option<usize>,
    stop: Option<Arc<AtomicBool>>,
}

/// Итог работы одного воркера.
struct WorkerRun {
    acc: OutcomeAccumulator,
    interrupted: bool,
}

impl RandomSampler {
    pub fn new(budget: SampleBudget) -> Self {
        Self {
            budget,
            seed: None,
            workers: None,
            stop: None,
        }
    }

    pub fn from_config(config: &OddsConfig) -> Self {
        let sampler = Self::new(config.budget);
        match config.seed {
            Some(seed) => sampler.with_seed(seed),
            None => sampler,
        }
    }

    /// Воспроизводимый прогон (при бюджете только по числу раздач).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Число воркеров (по умолчанию — размер пула rayon).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers.max(1));
        self
    }

    /// Флаг кооперативной отмены: выставленный флаг останавливает воркеры,
    /// уже накопленный результат возвращается как есть.
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn budget(&self) -> SampleBudget {
        self.budget
    }
}

impl Estimator for RandomSampler {
    fn name(&self) -> &'static str {
        "monte_carlo"
    }

    fn estimate(&self, opponents: u8, known: &KnownCards) -> Result<Estimate, OddsError> {
        let opponents = validate_opponents(opponents)? as usize;
        let started = Instant::now();
        // Слишком большой бюджет времени = без дедлайна.
        let deadline = started.checked_add(self.budget.max_duration());

        let deck = Deck::remaining(known.all());
        let workers = self.workers.unwrap_or_else(rayon::current_num_threads).max(1);
        let per_worker = self.budget.max_trials / workers as u64;
        let remainder = self.budget.max_trials % workers as u64;

        let job = SampleJob {
            hole: known.hole(),
            board: known.board(),
            deck: &deck.cards,
            opponents,
            deadline,
            stop: self.stop.as_deref(),
        };

        let run = (0..workers)
            .into_par_iter()
            .map(|w| {
                let quota = per_worker + u64::from((w as u64) < remainder);
                match self.seed {
                    Some(seed) => job.run(&mut DeterministicRng::for_worker(seed, w), quota),
                    None => job.run(&mut SystemRng::default(), quota),
                }
            })
            .reduce(
                || WorkerRun {
                    acc: OutcomeAccumulator::new(),
                    interrupted: false,
                },
                |a, b| WorkerRun {
                    acc: a.acc.merge(b.acc),
                    interrupted: a.interrupted || b.interrupted,
                },
            );

        if run.interrupted {
            log::warn!(
                "monte_carlo: stopped early after {} of {} trials",
                run.acc.total(),
                self.budget.max_trials
            );
        }
        log::debug!(
            "monte_carlo: {} trials on {} workers in {:?} (win {:.4})",
            run.acc.total(),
            workers,
            started.elapsed(),
            run.acc.win_rate()
        );

        Ok(Estimate::Counted(run.acc))
    }
}

/// Неизменяемые входные данные, общие для всех воркеров.
struct SampleJob<'a> {
    hole: [Card; 2],
    board: &'a [Card],
    deck: &'a [Card],
    opponents: usize,
    deadline: Option<Instant>,
    stop: Option<&'a AtomicBool>,
}

impl SampleJob<'_> {
    fn should_stop(&self) -> bool {
        self.deadline.map_or(false, |d| Instant::now() >= d)
            || self.stop.map_or(false, |s| s.load(Ordering::Relaxed))
    }

    /// Прогнать до `quota` раздач одним воркером.
    fn run<R: RandomSource>(&self, rng: &mut R, quota: u64) -> WorkerRun {
        let missing = 5 - self.board.len();
        let needed = missing + 2 * self.opponents;

        let mut pool = self.deck.to_vec();
        let mut board = [self.hole[0]; 5];
        board[..self.board.len()].copy_from_slice(self.board);

        let mut acc = OutcomeAccumulator::new();
        let mut interrupted = false;

        for trial in 0..quota {
            if trial % CHECK_EVERY == 0 && self.should_stop() {
                interrupted = true;
                break;
            }

            let dealt = deal(rng, &mut pool, needed);
            board[self.board.len()..].copy_from_slice(&dealt[..missing]);

            let hero = evaluate_best_hand(&self.hole, &board);
            let opponents = dealt[missing..]
                .chunks_exact(2)
                .map(|hole| evaluate_best_hand(hole, &board));

            record_showdown(&mut acc, hero, opponents);
        }

        log::trace!("monte_carlo worker: {} trials", acc.total());
        WorkerRun { acc, interrupted }
    }
}

/// Одна случайная раздача из несданной колоды: `needed` карт без возвращения.
///
/// Сначала добор борда, затем по две карты каждому оппоненту.
fn deal<'p, R: RandomSource>(rng: &mut R, pool: &'p mut [Card], needed: usize) -> &'p [Card] {
    rng.partial_shuffle(pool, needed)
}
