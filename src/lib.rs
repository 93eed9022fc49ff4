//! Оценка шансов в Texas Hold'em по неполной информации.
//!
//! По карманным картам героя, открытым общим картам и числу оппонентов
//! считаем распределение win/tie/loss и разбивку по категориям рук.
//!
//! Слои:
//! - `domain` — карты, колода, улицы;
//! - `eval` — классификация 5–7 карт;
//! - `engine` — оценщики (таблица, перебор, Монте-Карло), selector, накопитель;
//! - `config` — явная конфигурация запроса;
//! - `infra` — RNG;
//! - `api` — разбор ввода и DTO для слоя представления.

pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use config::{OddsConfig, SampleBudget};
pub use domain::{Card, KnownCards, Rank, Stage, Suit};
pub use engine::{estimate_odds, Estimate, EstimatorKind, OddsError, OutcomeAccumulator};
pub use eval::{classify, EvaluationResult, HandCategory};
