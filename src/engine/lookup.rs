//! Табличный префлоп: шансы по "форме" карманных карт.
//!
//! Ограничение: таблица посчитана против фиксированного числа оппонентов
//! (`preflop_table::BASELINE_OPPONENTS`) и не зависит от `opponents` в запросе.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::hand::{KnownCards, Stage};
use crate::engine::errors::OddsError;
use crate::engine::preflop_table;
use crate::engine::validation::validate_opponents;
use crate::engine::{Estimate, Estimator};

/// Проценты (0..=100) без счётчиков раздач и без разбивки по категориям.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PreflopOdds {
    pub win_pct: f64,
    pub tie_pct: f64,
    pub loss_pct: f64,
}

/// Форма стартовой руки — ключ таблицы.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HoleShape {
    Pair(Rank),
    Suited { high: Rank, low: Rank },
    Offsuit { high: Rank, low: Rank },
}

impl HoleShape {
    pub fn from_hole(hole: [Card; 2]) -> Self {
        let (high, low) = if hole[0].rank >= hole[1].rank {
            (hole[0], hole[1])
        } else {
            (hole[1], hole[0])
        };

        if high.rank == low.rank {
            HoleShape::Pair(high.rank)
        } else if high.suit == low.suit {
            HoleShape::Suited {
                high: high.rank,
                low: low.rank,
            }
        } else {
            HoleShape::Offsuit {
                high: high.rank,
                low: low.rank,
            }
        }
    }

    /// Разрыв между рангами: 0 — коннекторы (пара тоже 0).
    pub fn gap(&self) -> u8 {
        match *self {
            HoleShape::Pair(_) => 0,
            HoleShape::Suited { high, low } | HoleShape::Offsuit { high, low } => {
                high.value() - low.value() - 1
            }
        }
    }
}

impl fmt::Display for HoleShape {
    /// Короткая запись: `AA`, `A6s`, `A6o`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoleShape::Pair(r) => write!(f, "{r}{r}"),
            HoleShape::Suited { high, low } => write!(f, "{high}{low}s"),
            HoleShape::Offsuit { high, low } => write!(f, "{high}{low}o"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TableLookup;

impl TableLookup {
    /// Прочитать шансы формы из таблицы.
    pub fn odds_for(shape: HoleShape) -> PreflopOdds {
        let (win_pct, tie_pct) = preflop_table::lookup(shape);
        PreflopOdds {
            win_pct,
            tie_pct,
            loss_pct: 100.0 - win_pct - tie_pct,
        }
    }
}

impl Estimator for TableLookup {
    fn name(&self) -> &'static str {
        "look_up"
    }

    fn estimate(&self, opponents: u8, known: &KnownCards) -> Result<Estimate, OddsError> {
        validate_opponents(opponents)?;
        if known.stage() != Stage::Preflop {
            return Err(OddsError::UnsupportedStage {
                estimator: self.name(),
                known_cards: known.all().len(),
            });
        }

        let shape = HoleShape::from_hole(known.hole());
        if opponents != preflop_table::BASELINE_OPPONENTS {
            log::debug!(
                "look_up: table is for {} opponents, asked for {}",
                preflop_table::BASELINE_OPPONENTS,
                opponents
            );
        }

        Ok(Estimate::Tabulated(Self::odds_for(shape)))
    }
}
