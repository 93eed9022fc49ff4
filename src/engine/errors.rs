use crate::domain::card::Card;

use thiserror::Error;

/// Ошибки входных данных. Отсекаются до запуска любого оценщика.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Некорректный токен карты: '{0}'")]
    BadCardToken(String),

    #[error("Недопустимое количество известных карт: {0} (ожидается 2, 5, 6 или 7)")]
    WrongCardCount(usize),

    #[error("Карта {0} указана дважды")]
    DuplicateCard(Card),

    #[error("Количество оппонентов {0} вне диапазона 1..=9")]
    OpponentsOutOfRange(u8),

    #[error("Некорректная строка ввода: '{0}'")]
    MalformedLine(String),
}

/// Ошибки оценки шансов.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OddsError {
    #[error(transparent)]
    Input(#[from] InputError),

    /// Оценщик вызван не на своей улице (нарушение контракта selector ↔ estimator).
    #[error("Оценщик {estimator} не поддерживает {known_cards} известных карт")]
    UnsupportedStage {
        estimator: &'static str,
        known_cards: usize,
    },

    #[error("Некорректная конфигурация: {0}")]
    InvalidConfig(&'static str),
}
