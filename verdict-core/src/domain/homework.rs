//! Homework domain types

use serde_json::Value;
use std::str::FromStr;

use crate::error::DescribeError;

/// Review status of a submitted homework
///
/// The review API reports statuses as lowercase strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// All statuses the bot knows how to report
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Wire name of the status, as sent by the review API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict shown to the student
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = DescribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DescribeError::UnknownStatus(s.to_string()))
    }
}

/// A single submission as reported by the review API
///
/// Only the fields the bot reads are kept; the API sends more (ids,
/// reviewer comments, dates) which are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    pub homework_name: String,
    pub status: HomeworkStatus,
}

impl Homework {
    /// Builds a homework from a raw JSON record
    ///
    /// Fails with [`DescribeError::MissingFields`] when `homework_name` or
    /// `status` is absent (or not a string), and with
    /// [`DescribeError::UnknownStatus`] when the status is not in the table.
    pub fn from_value(value: &Value) -> Result<Self, DescribeError> {
        let name = value.get("homework_name").and_then(Value::as_str);
        let status = value.get("status").and_then(Value::as_str);

        let (Some(name), Some(status)) = (name, status) else {
            return Err(DescribeError::MissingFields);
        };

        Ok(Self {
            homework_name: name.to_string(),
            status: status.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_round_trips_through_wire_name() {
        for status in HomeworkStatus::ALL {
            assert_eq!(status.as_str().parse::<HomeworkStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = "unknown_value".parse::<HomeworkStatus>().unwrap_err();
        assert!(matches!(err, DescribeError::UnknownStatus(s) if s == "unknown_value"));
    }

    #[test]
    fn test_from_value_ignores_extra_fields() {
        let homework = Homework::from_value(&json!({
            "id": 124,
            "homework_name": "proj1",
            "status": "approved",
            "reviewer_comment": "Всё нравится",
        }))
        .unwrap();

        assert_eq!(homework.homework_name, "proj1");
        assert_eq!(homework.status, HomeworkStatus::Approved);
    }

    #[test]
    fn test_from_value_requires_both_fields() {
        for record in [
            json!({ "status": "approved" }),
            json!({ "homework_name": "proj1" }),
            json!({ "homework_name": 7, "status": "approved" }),
            json!([]),
        ] {
            assert!(matches!(
                Homework::from_value(&record),
                Err(DescribeError::MissingFields)
            ));
        }
    }
}
