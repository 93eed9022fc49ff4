//! Бюджет сэмплирования: сколько раздач и сколько времени можно потратить.
//!
//! Здесь только "правила", без состояния конкретного прогона.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Готовые профили бюджета.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetProfile {
    /// Быстрая прикидка для интерактива.
    Quick,
    /// По умолчанию: 0.5 сек или 200k раздач.
    Standard,
    /// Долгий точный прогон.
    Thorough,
}

/// Бюджет одного прогона сэмплера. Что кончится раньше — то и останавливает.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SampleBudget {
    /// Максимум раздач (жёсткий верхний предел).
    pub max_trials: u64,
    /// Максимум wall-clock времени в миллисекундах.
    pub max_duration_ms: u64,
}

impl SampleBudget {
    /// Строгий конструктор.
    pub const fn new(max_trials: u64, max_duration_ms: u64) -> Self {
        Self {
            max_trials,
            max_duration_ms,
        }
    }

    pub const fn quick() -> Self {
        Self::new(20_000, 100)
    }

    pub const fn standard() -> Self {
        Self::new(200_000, 500)
    }

    pub const fn thorough() -> Self {
        Self::new(5_000_000, 10_000)
    }

    /// Бюджет только по числу раздач (время фактически не ограничено).
    pub const fn trials_only(max_trials: u64) -> Self {
        Self::new(max_trials, u64::MAX)
    }

    /// Получить бюджет по профилю.
    pub const fn from_profile(profile: BudgetProfile) -> Self {
        match profile {
            BudgetProfile::Quick => Self::quick(),
            BudgetProfile::Standard => Self::standard(),
            BudgetProfile::Thorough => Self::thorough(),
        }
    }

    pub fn max_duration(&self) -> Duration {
        Duration::from_millis(self.max_duration_ms)
    }

    pub const fn is_empty(&self) -> bool {
        self.max_trials == 0 || self.max_duration_ms == 0
    }
}

impl Default for SampleBudget {
    fn default() -> Self {
        Self::standard()
    }
}
