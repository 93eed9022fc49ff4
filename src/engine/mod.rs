//! Движок оценки шансов: семейство оценщиков, выбор оценщика, накопление исходов.
//!
//! Высокоуровневая операция: `estimate_odds`
//!   - `EstimatorSelector` выбирает оценщик по (улица, оппоненты, порог);
//!   - оценщик прогоняет `eval::classify` на достроенных раздачах;
//!   - исходы копятся в `OutcomeAccumulator`.

pub mod combinations;
pub mod errors;
pub mod exact;
pub mod hand_history;
pub mod lookup;
pub mod outcome;
pub mod preflop_table;
pub mod sampler;
pub mod selector;
pub mod showdown;
pub mod validation;

pub use errors::{InputError, OddsError};
pub use exact::ExactEnumerator;
pub use hand_history::{GameState, HistoryStack};
pub use lookup::{HoleShape, PreflopOdds, TableLookup};
pub use outcome::{CategoryShare, Outcome, OutcomeAccumulator};
pub use sampler::RandomSampler;
pub use selector::{EstimatorKind, EstimatorSelector};
pub use validation::{validate_hand, validate_known_cards, validate_opponents};

use serde::{Deserialize, Serialize};

use crate::config::OddsConfig;
use crate::domain::hand::KnownCards;

/// RNG интерфейс для сэмплера.
/// Реализации — в infra (обёртки над `rand::seq::SliceRandom`).
pub trait RandomSource {
    /// Случайная выборка `amount` элементов без возвращения.
    ///
    /// Возвращает выбранные элементы; остальные остаются в `slice`
    /// в неопределённом порядке.
    fn partial_shuffle<'a, T>(&mut self, slice: &'a mut [T], amount: usize) -> &'a mut [T];

    fn shuffle<T>(&mut self, slice: &mut [T]);
}

/// Результат оценки. Форма зависит от оценщика — вызывающий должен её различать.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Estimate {
    /// Перебор или сэмплирование: счётчики и разбивка по категориям.
    Counted(OutcomeAccumulator),
    /// Табличный префлоп: только проценты, без счётчиков и разбивки.
    Tabulated(PreflopOdds),
}

impl Estimate {
    pub fn win_rate(&self) -> f64 {
        match self {
            Estimate::Counted(acc) => acc.win_rate(),
            Estimate::Tabulated(odds) => odds.win_pct / 100.0,
        }
    }

    pub fn tie_rate(&self) -> f64 {
        match self {
            Estimate::Counted(acc) => acc.tie_rate(),
            Estimate::Tabulated(odds) => odds.tie_pct / 100.0,
        }
    }

    pub fn loss_rate(&self) -> f64 {
        match self {
            Estimate::Counted(acc) => acc.loss_rate(),
            Estimate::Tabulated(odds) => odds.loss_pct / 100.0,
        }
    }

    /// Накопитель, если оценщик считал раздачи.
    pub fn accumulator(&self) -> Option<&OutcomeAccumulator> {
        match self {
            Estimate::Counted(acc) => Some(acc),
            Estimate::Tabulated(_) => None,
        }
    }
}

/// Общий контракт всех оценщиков.
pub trait Estimator {
    /// Короткое имя для логов и вывода.
    fn name(&self) -> &'static str;

    /// Оценить шансы героя против `opponents` оппонентов.
    fn estimate(&self, opponents: u8, known: &KnownCards) -> Result<Estimate, OddsError>;
}

/// Выбрать оценщик по правилам selector'а и запустить его.
pub fn estimate_odds(
    known: &KnownCards,
    opponents: u8,
    config: &OddsConfig,
) -> Result<(EstimatorKind, Estimate), OddsError> {
    let opponents = validate_opponents(opponents)?;
    let kind = EstimatorSelector::from_config(config).select(opponents, known.all().len());
    log::debug!(
        "selected {} for {} known cards, {} opponents",
        kind.name(),
        known.all().len(),
        opponents
    );
    let estimate = kind.run(opponents, known, config)?;
    Ok((kind, estimate))
}
