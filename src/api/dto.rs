use serde::{Deserialize, Serialize};

use crate::domain::hand::{KnownCards, Stage};
use crate::engine::{CategoryShare, Estimate, EstimatorKind};
use crate::eval::{classify, describe_hand, HandCategory};

/// Сколько категорий показывать в разбивке.
pub const TOP_CATEGORIES: usize = 3;

/// DTO строки разбивки по категориям.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryShareDto {
    pub category: HandCategory,
    pub count: u64,
    /// Доля в процентах.
    pub pct: f64,
}

impl From<&CategoryShare> for CategoryShareDto {
    fn from(s: &CategoryShare) -> Self {
        Self {
            category: s.category,
            count: s.count,
            pct: s.share * 100.0,
        }
    }
}

/// Текущая лучшая рука героя (когда известно ≥ 5 карт).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CurrentHandDto {
    pub category: HandCategory,
    pub ranks: Vec<String>,
    pub description: String,
}

/// Сводка одной оценки для слоя представления.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EstimateDto {
    pub estimator: String,
    pub stage: Stage,
    pub opponents: u8,
    pub win_pct: f64,
    pub tie_pct: f64,
    pub loss_pct: f64,
    /// Счётчики есть только у перебора и сэмплера.
    pub trials: Option<u64>,
    pub wins: Option<u64>,
    pub ties: Option<u64>,
    pub losses: Option<u64>,
    pub won_with: Vec<CategoryShareDto>,
    pub lost_to: Vec<CategoryShareDto>,
    pub current_hand: Option<CurrentHandDto>,
}

/// Собрать DTO из результата оценки.
pub fn build_estimate_dto(
    known: &KnownCards,
    opponents: u8,
    kind: EstimatorKind,
    estimate: &Estimate,
) -> EstimateDto {
    let acc = estimate.accumulator();

    let current_hand = (known.all().len() >= 5).then(|| {
        let result = classify(known.all());
        CurrentHandDto {
            category: result.category(),
            ranks: result.ranks().iter().map(|r| r.to_string()).collect(),
            description: describe_hand(&result),
        }
    });

    EstimateDto {
        estimator: kind.name().to_string(),
        stage: known.stage(),
        opponents,
        win_pct: estimate.win_rate() * 100.0,
        tie_pct: estimate.tie_rate() * 100.0,
        loss_pct: estimate.loss_rate() * 100.0,
        trials: acc.map(|a| a.total()),
        wins: acc.map(|a| a.wins()),
        ties: acc.map(|a| a.ties()),
        losses: acc.map(|a| a.losses()),
        won_with: acc
            .map(|a| share_dtos(&a.top_won_with_categories(TOP_CATEGORIES)))
            .unwrap_or_default(),
        lost_to: acc
            .map(|a| share_dtos(&a.top_lost_to_categories(TOP_CATEGORIES)))
            .unwrap_or_default(),
        current_hand,
    }
}

fn share_dtos(shares: &[CategoryShare]) -> Vec<CategoryShareDto> {
    shares.iter().map(CategoryShareDto::from).collect()
}
