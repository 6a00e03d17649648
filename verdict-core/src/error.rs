//! Error types for response validation and status interpretation
//!
//! Messages are user-facing: the runner relays them to the chat verbatim.

use thiserror::Error;

/// The review API response does not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The body is not a JSON object
    #[error("Ответ API должен быть словарем!")]
    NotAnObject,

    /// A required top-level key is absent
    #[error("В ответе API отсутствует ключ {0}!")]
    MissingKey(&'static str),

    /// `homeworks` is present but not an array
    #[error("По ключу homeworks должен быть список!")]
    NotAList,
}

/// A homework record could not be turned into a verdict
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescribeError {
    /// `homework_name` or `status` is absent
    #[error("Отсутствуют необходимые ключи в ответе API!")]
    MissingFields,

    /// The status is not one the bot knows
    #[error("Несуществующий статус домашней работы: {0}")]
    UnknownStatus(String),
}
