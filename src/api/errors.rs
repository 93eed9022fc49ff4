use serde::{Deserialize, Serialize};

use crate::engine::{InputError, OddsError};

/// Ошибки внешнего API (то, что отдаём слою представления).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битый токен, дубль карты и т.п.).
    BadRequest(String),

    /// Ошибка движка оценки (нарушение контракта, конфигурация).
    EngineError(String),
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<OddsError> for ApiError {
    fn from(err: OddsError) -> Self {
        match err {
            OddsError::Input(input) => input.into(),
            other => ApiError::EngineError(other.to_string()),
        }
    }
}
