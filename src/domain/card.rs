use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::InputError;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
    Spades,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Юникод-символ масти.
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'c' | 'C' | '♣' => Some(Suit::Clubs),
            'd' | 'D' | '♦' => Some(Suit::Diamonds),
            'h' | 'H' | '♥' => Some(Suit::Hearts),
            's' | 'S' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Ранг карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Все ранги по возрастанию (2..A).
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Числовое значение ранга (2..14).
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Обратное к `value`. Вне диапазона 2..=14 → None.
    pub fn from_value(v: u8) -> Option<Self> {
        if (2..=14).contains(&v) {
            Some(Self::ALL[(v - 2) as usize])
        } else {
            None
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' | 't' => Some(Rank::Ten),
            'J' | 'j' => Some(Rank::Jack),
            'Q' | 'q' => Some(Rank::Queen),
            'K' | 'k' => Some(Rank::King),
            'A' | 'a' => Some(Rank::Ace),
            _ => None,
        }
    }
}

/// Обычная покерная карта (52-карточная колода).
///
/// Порядок: сначала по рангу, потом по масти (масть нужна только для
/// согласованности с `Eq`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Плотный индекс 0..52 — удобно для битовых масок колоды.
    pub const fn index(&self) -> u8 {
        (self.rank as u8 - 2) * 4 + self.suit as u8
    }

    /// Бит карты в 52-битной маске.
    pub const fn bit(&self) -> u64 {
        1u64 << self.index()
    }

    /// Формат с юникод-мастью: `A♠`, `T♦`.
    pub fn unicode(&self) -> String {
        format!("{}{}", self.rank, self.suit.symbol())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "Ah", "td", "7C" или "A♠" (регистр не важен).
impl FromStr for Card {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || InputError::BadCardToken(s.to_string());

        let mut chars = s.chars();
        let (r_ch, s_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => (r, su),
            _ => return Err(bad()),
        };

        let rank = Rank::from_char(r_ch).ok_or_else(bad)?;
        let suit = Suit::from_char(s_ch).ok_or_else(bad)?;

        Ok(Card { rank, suit })
    }
}

/// Разобрать группу склеенных токенов: "As6cAd" → [As, 6c, Ad].
///
/// Пустая строка — пустой список.
pub fn parse_cards(group: &str) -> Result<Vec<Card>, InputError> {
    let chars: Vec<char> = group.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(InputError::BadCardToken(group.to_string()));
    }

    chars
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>().parse())
        .collect()
}

/// Разобрать строку из токенов через пробел: "As 6c Ad 8s".
pub fn parse_cards_line(line: &str) -> Result<Vec<Card>, InputError> {
    let mut out = Vec::new();
    for token in line.split_whitespace() {
        out.extend(parse_cards(token)?);
    }
    Ok(out)
}
