//! Внешний API движка для слоя представления.
//!
//! Здесь описываются:
//! - разбор строк ввода (commands.rs) — карты, оппоненты, банк, история;
//! - DTO (dto.rs) — сводка результата оценки;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;

pub use commands::*;
pub use dto::*;
pub use errors::*;
