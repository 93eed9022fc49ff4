use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт. В домене — просто упорядоченный список карт.
/// Случайные выборки делает engine (через RandomSource из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// "Несданная" колода: полная колода минус все известные карты.
    pub fn remaining(known: &[Card]) -> Self {
        let mut deck = Self::standard_52();
        deck.remove_cards(known);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Убрать из колоды уже известные карты.
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        let mask = to_remove.iter().fold(0u64, |m, c| m | c.bit());
        self.cards.retain(|c| c.bit() & mask == 0);
    }
}
