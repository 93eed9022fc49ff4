use serde::{Deserialize, Serialize};

use crate::config::{OddsConfig, DEFAULT_EXACT_CARD_LIMIT};
use crate::domain::hand::{KnownCards, Stage};
use crate::engine::errors::OddsError;
use crate::engine::{Estimate, Estimator, ExactEnumerator, RandomSampler, TableLookup};

/// Какой оценщик запускать. Набор закрытый.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EstimatorKind {
    TableLookup,
    ExactEnumerator,
    RandomSampler,
}

impl EstimatorKind {
    pub const fn name(self) -> &'static str {
        match self {
            EstimatorKind::TableLookup => "look_up",
            EstimatorKind::ExactEnumerator => "brute_force",
            EstimatorKind::RandomSampler => "monte_carlo",
        }
    }

    /// Запустить оценщик этого вида с параметрами из конфигурации.
    ///
    /// Можно вызывать и в обход selector'а: неподходящая улица
    /// вернёт `OddsError::UnsupportedStage`.
    pub fn run(
        self,
        opponents: u8,
        known: &KnownCards,
        config: &OddsConfig,
    ) -> Result<Estimate, OddsError> {
        match self {
            EstimatorKind::TableLookup => TableLookup.estimate(opponents, known),
            EstimatorKind::ExactEnumerator => ExactEnumerator.estimate(opponents, known),
            EstimatorKind::RandomSampler => {
                RandomSampler::from_config(config).estimate(opponents, known)
            }
        }
    }
}

/// Чистая функция выбора оценщика.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EstimatorSelector {
    /// Точный перебор, пока (карты борда к добору + 2 × оппоненты) ≤ этого порога.
    pub exact_card_limit: usize,
}

impl EstimatorSelector {
    pub const fn new(exact_card_limit: usize) -> Self {
        Self { exact_card_limit }
    }

    pub const fn from_config(config: &OddsConfig) -> Self {
        Self::new(config.exact_card_limit)
    }

    /// Правила (по приоритету):
    /// 1. 2 известные карты (префлоп) → TableLookup;
    /// 2. тёрн/ривер и перебор посилен → ExactEnumerator;
    /// 3. иначе → RandomSampler.
    pub fn select(&self, opponents: u8, known_card_count: usize) -> EstimatorKind {
        match Stage::from_known_count(known_card_count) {
            Some(Stage::Preflop) => EstimatorKind::TableLookup,
            Some(stage) if self.exact_is_feasible(stage, opponents) => {
                EstimatorKind::ExactEnumerator
            }
            _ => EstimatorKind::RandomSampler,
        }
    }

    /// Посилен ли точный перебор: только тёрн/ривер и в пределах порога.
    pub fn exact_is_feasible(&self, stage: Stage, opponents: u8) -> bool {
        matches!(stage, Stage::Turn | Stage::River)
            && cards_to_enumerate(stage, opponents) <= self.exact_card_limit
    }
}

impl Default for EstimatorSelector {
    fn default() -> Self {
        Self::new(DEFAULT_EXACT_CARD_LIMIT)
    }
}

/// Сколько неизвестных карт пришлось бы перебирать.
pub const fn cards_to_enumerate(stage: Stage, opponents: u8) -> usize {
    stage.board_cards_missing() + 2 * opponents as usize
}
