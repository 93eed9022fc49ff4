use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::Stage;

/// Видимое состояние раздачи на одной улице.
///
/// Неизменяемо после создания. На расчёт шансов не влияет — только для показа сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    cards: Vec<Card>,
    opponents: u8,
    pot: Option<f64>,
}

impl GameState {
    pub fn new(cards: Vec<Card>, opponents: u8, pot: Option<f64>) -> Self {
        Self {
            cards,
            opponents,
            pot,
        }
    }

    /// Известные карты: карманные, потом борд.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn opponents(&self) -> u8 {
        self.opponents
    }

    pub fn pot(&self) -> Option<f64> {
        self.pot
    }

    pub fn stage(&self) -> Option<Stage> {
        Stage::from_known_count(self.cards.len())
    }

    /// Текстовое представление карт, по которому сравниваются состояния ("As6cAd").
    fn cards_text(&self) -> String {
        self.cards.iter().map(|c| c.to_string()).collect()
    }

    /// Является ли `self` продолжением той же раздачи после `previous`.
    ///
    /// Условия: не совпадает с `previous`; карты — текстовое продолжение
    /// карт `previous`; банк не уменьшился; оппонентов не стало больше.
    /// Отсутствующий банк считается нулевым.
    pub fn is_successor(&self, previous: &GameState) -> bool {
        if self == previous {
            return false;
        }
        self.cards_text().starts_with(&previous.cards_text())
            && self.pot.unwrap_or(0.0) >= previous.pot.unwrap_or(0.0)
            && self.opponents <= previous.opponents
    }
}

/// Последовательность состояний одной раздачи (preflop → flop → turn → river).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoryStack {
    states: Vec<GameState>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Добавить состояние. Если оно не продолжает текущую вершину —
    /// стек сбрасывается и содержит только новое состояние.
    pub fn push(&mut self, state: GameState) {
        if let Some(top) = self.states.last() {
            if !state.is_successor(top) {
                self.states.clear();
            }
        }
        self.states.push(state);
    }

    pub fn top(&self) -> Option<&GameState> {
        self.states.last()
    }

    pub fn states(&self) -> &[GameState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
