//! Конфигурация оценки шансов.
//!
//! `OddsConfig` передаётся вызывающим в selector и оценщики явно,
//! глобального состояния нет.

pub mod sample_budget;

pub use sample_budget::{BudgetProfile, SampleBudget};

use serde::{Deserialize, Serialize};

use crate::engine::errors::OddsError;
use crate::engine::validation::validate_opponents;

/// Порог перебора по умолчанию: точный перебор, пока
/// (карты борда к добору + 2 × оппоненты) ≤ 5.
pub const DEFAULT_EXACT_CARD_LIMIT: usize = 5;

/// Параметры одного запроса на оценку.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OddsConfig {
    /// Число оппонентов, если вызывающий его не указал.
    pub default_opponents: u8,
    /// Бюджет сэмплера.
    pub budget: SampleBudget,
    /// Порог "посильности" точного перебора для EstimatorSelector.
    pub exact_card_limit: usize,
    /// Фиксированный seed сэмплера (None — энтропия ОС).
    pub seed: Option<u64>,
}

impl OddsConfig {
    pub const fn new(default_opponents: u8, budget: SampleBudget) -> Self {
        Self {
            default_opponents,
            budget,
            exact_card_limit: DEFAULT_EXACT_CARD_LIMIT,
            seed: None,
        }
    }

    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub const fn with_exact_card_limit(mut self, limit: usize) -> Self {
        self.exact_card_limit = limit;
        self
    }

    pub const fn with_budget(mut self, budget: SampleBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Проверить согласованность значений.
    pub fn validate(&self) -> Result<(), OddsError> {
        validate_opponents(self.default_opponents)?;
        if self.budget.is_empty() {
            return Err(OddsError::InvalidConfig("пустой бюджет сэмплера"));
        }
        Ok(())
    }
}

impl Default for OddsConfig {
    fn default() -> Self {
        Self::new(4, SampleBudget::standard())
    }
}
