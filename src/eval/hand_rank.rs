use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    /// Количество категорий.
    pub const COUNT: usize = 9;

    /// Все категории в порядке приоритета проверки (от сильнейшей к слабейшей).
    pub const BY_PRIORITY: [HandCategory; 9] = [
        HandCategory::StraightFlush,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::OnePair,
        HandCategory::HighCard,
    ];

    /// Индекс 0..9 (0 = HighCard) — для плотных массивов счётчиков.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::BY_PRIORITY
            .iter()
            .copied()
            .find(|c| c.index() == idx)
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "HIGH_CARD",
            HandCategory::OnePair => "ONE_PAIR",
            HandCategory::TwoPair => "TWO_PAIR",
            HandCategory::ThreeOfAKind => "THREE_OF_A_KIND",
            HandCategory::Straight => "STRAIGHT",
            HandCategory::Flush => "FLUSH",
            HandCategory::FullHouse => "FULL_HOUSE",
            HandCategory::FourOfAKind => "FOUR_OF_A_KIND",
            HandCategory::StraightFlush => "STRAIGHT_FLUSH",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Результат оценки руки: категория + ранги для тай-брейка.
///
/// Ранги: сначала определяющие категорию (ранг сета, пары и т.д.),
/// затем кикеры, всё по убыванию. Неиспользуемые слоты заполнены
/// `Rank::Two` и в сравнении не участвуют по существу: в рамках одной
/// категории их количество одинаково.
///
/// Порядок полей важен: derive(Ord) сравнивает сначала категорию, потом ранги.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EvaluationResult {
    category: HandCategory,
    ranks: [Rank; 5],
    len: u8,
}

impl EvaluationResult {
    /// Собрать результат из категории и значимых рангов (от старшего к младшему).
    pub fn new(category: HandCategory, significant: &[Rank]) -> Self {
        let mut ranks = [Rank::Two; 5];
        let len = significant.len().min(5);
        ranks[..len].copy_from_slice(&significant[..len]);
        Self {
            category,
            ranks,
            len: len as u8,
        }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Ранги тай-брейка по убыванию значимости.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for r in self.ranks() {
            write!(f, " {r}")?;
        }
        Ok(())
    }
}

/// Человеческое описание руки по категории.
pub fn describe_hand(result: &EvaluationResult) -> String {
    let ranks = result.ranks();
    match result.category() {
        HandCategory::HighCard => format!("High card {}", ranks[0]),
        HandCategory::OnePair => format!("One pair of {}", ranks[0]),
        HandCategory::TwoPair => format!("Two pair {} and {}", ranks[0], ranks[1]),
        HandCategory::ThreeOfAKind => format!("Three of a kind {}", ranks[0]),
        HandCategory::Straight => format!("Straight to {}", ranks[0]),
        HandCategory::Flush => format!("Flush, {} high", ranks[0]),
        HandCategory::FullHouse => format!("Full house {} over {}", ranks[0], ranks[1]),
        HandCategory::FourOfAKind => format!("Four of a kind {}", ranks[0]),
        HandCategory::StraightFlush => format!("Straight flush to {}", ranks[0]),
    }
}
