//! Review API response validation
//!
//! The payload is checked strictly before anything reads it: a shape
//! deviation is an upstream contract violation and is reported, never
//! papered over with defaults.

use serde_json::Value;

use crate::error::ValidationError;

/// Key holding the ordered list of submissions (oldest first)
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Key holding the server-side cursor for the next poll
pub const CURRENT_DATE_KEY: &str = "current_date";

/// Validates the shape of a review API response
///
/// # Returns
/// `Ok(true)` when `homeworks` holds at least one record, `Ok(false)` when it
/// is empty (nothing to report).
///
/// # Errors
/// [`ValidationError`] when the body is not an object, a required key is
/// missing, or `homeworks` is not an array.
pub fn validate(response: &Value) -> Result<bool, ValidationError> {
    let object = response.as_object().ok_or(ValidationError::NotAnObject)?;

    let homeworks = object
        .get(HOMEWORKS_KEY)
        .ok_or(ValidationError::MissingKey(HOMEWORKS_KEY))?;

    if !object.contains_key(CURRENT_DATE_KEY) {
        return Err(ValidationError::MissingKey(CURRENT_DATE_KEY));
    }

    let homeworks = homeworks.as_array().ok_or(ValidationError::NotAList)?;

    Ok(!homeworks.is_empty())
}

/// Returns the most recent submission of a validated response
pub fn latest_homework(response: &Value) -> Option<&Value> {
    response
        .get(HOMEWORKS_KEY)
        .and_then(Value::as_array)
        .and_then(|homeworks| homeworks.last())
}

/// Returns the server cursor of a response, when it is an integer
pub fn current_date(response: &Value) -> Option<i64> {
    response.get(CURRENT_DATE_KEY).and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_empty_homeworks() {
        let response = json!({ "homeworks": [], "current_date": 1700000000 });
        assert_eq!(validate(&response), Ok(false));
    }

    #[test]
    fn test_validate_with_homeworks() {
        let response = json!({
            "homeworks": [{ "homework_name": "proj1", "status": "reviewing" }],
            "current_date": 1700000000,
        });
        assert_eq!(validate(&response), Ok(true));
    }

    #[test]
    fn test_validate_not_an_object() {
        assert_eq!(validate(&json!([])), Err(ValidationError::NotAnObject));
        assert_eq!(validate(&json!("ok")), Err(ValidationError::NotAnObject));
    }

    #[test]
    fn test_validate_missing_keys() {
        assert_eq!(
            validate(&json!({ "current_date": 1 })),
            Err(ValidationError::MissingKey("homeworks"))
        );
        assert_eq!(
            validate(&json!({ "homeworks": [] })),
            Err(ValidationError::MissingKey("current_date"))
        );
    }

    #[test]
    fn test_validate_homeworks_not_a_list() {
        let response = json!({ "homeworks": { "homework_name": "proj1" }, "current_date": 1 });
        assert_eq!(validate(&response), Err(ValidationError::NotAList));
    }

    #[test]
    fn test_latest_homework_is_last_element() {
        let response = json!({
            "homeworks": [
                { "homework_name": "old", "status": "approved" },
                { "homework_name": "new", "status": "reviewing" },
            ],
            "current_date": 1,
        });

        let latest = latest_homework(&response).unwrap();
        assert_eq!(latest["homework_name"], "new");
        assert!(latest_homework(&json!({ "homeworks": [] })).is_none());
    }

    #[test]
    fn test_current_date() {
        assert_eq!(current_date(&json!({ "current_date": 1700000000 })), Some(1700000000));
        assert_eq!(current_date(&json!({ "current_date": "soon" })), None);
    }
}
