//! Verdict formatting
//!
//! Turns a homework record into the sentence sent to the chat.

use serde_json::Value;

use crate::domain::Homework;
use crate::error::DescribeError;

/// Describes a homework record's review status
///
/// # Errors
/// [`DescribeError::MissingFields`] if `homework_name` or `status` is absent,
/// [`DescribeError::UnknownStatus`] if the status is not recognized.
pub fn describe(homework: &Value) -> Result<String, DescribeError> {
    Homework::from_value(homework).map(|homework| message_for(&homework))
}

/// Formats the status-change message for a parsed homework
pub fn message_for(homework: &Homework) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.homework_name,
        homework.status.verdict()
    )
}
