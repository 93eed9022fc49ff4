//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основная функция:
//!   `classify(cards) -> EvaluationResult` для 5–7 карт.

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{classify, evaluate_5card_hand, evaluate_best_hand};
pub use hand_rank::{describe_hand, EvaluationResult, HandCategory};
