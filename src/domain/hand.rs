use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Улица раздачи. Определяется количеством открытых общих карт (0/3/4/5).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Stage {
    /// Улица по общему числу известных карт (карманные + борд).
    pub fn from_known_count(known: usize) -> Option<Self> {
        match known {
            2 => Some(Stage::Preflop),
            5 => Some(Stage::Flop),
            6 => Some(Stage::Turn),
            7 => Some(Stage::River),
            _ => None,
        }
    }

    /// Сколько карт борда ещё не открыто.
    pub const fn board_cards_missing(self) -> usize {
        match self {
            Stage::Preflop => 5,
            Stage::Flop => 2,
            Stage::Turn => 1,
            Stage::River => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Stage::Preflop => "preflop",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
            Stage::River => "river",
        }
    }
}

/// Известные герою карты: первые две — карманные, дальше — борд в порядке сдачи.
///
/// Создаётся только через `engine::validation`, поэтому внутри
/// гарантированно нет дублей и количество карт легально.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct KnownCards {
    cards: Vec<Card>,
}

impl KnownCards {
    pub(crate) fn new_unchecked(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn all(&self) -> &[Card] {
        &self.cards
    }

    pub fn hole(&self) -> [Card; 2] {
        [self.cards[0], self.cards[1]]
    }

    pub fn board(&self) -> &[Card] {
        &self.cards[2..]
    }

    pub fn stage(&self) -> Stage {
        // Количество проверено при валидации.
        Stage::from_known_count(self.cards.len()).unwrap_or(Stage::Preflop)
    }

    /// Маска всех известных карт.
    pub fn mask(&self) -> u64 {
        self.cards.iter().fold(0u64, |m, c| m | c.bit())
    }
}
