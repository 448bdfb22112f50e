use serde::{Deserialize, Serialize};

use crate::engine::RuleViolation;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON команды).
    BadRequest(String),

    /// Отклонённый ход — причина из движка.
    RuleViolation(String),

    /// Внутренняя ошибка.
    Internal(String),
}

impl From<RuleViolation> for ApiError {
    fn from(err: RuleViolation) -> Self {
        ApiError::RuleViolation(err.to_string())
    }
}
