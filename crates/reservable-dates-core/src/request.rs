use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A date field as it arrives from the boundary. Anything other than a
/// string is kept as-is so the validator can report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Text(String),
    Other(Value),
}

impl From<&str> for RawDate {
    fn from(value: &str) -> Self {
        RawDate::Text(value.to_string())
    }
}

impl From<String> for RawDate {
    fn from(value: String) -> Self {
        RawDate::Text(value)
    }
}

/// The due-date rule as it arrives from the boundary: a JSON number, a
/// numeric string, or any other JSON value the validator will reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRule {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl From<i64> for RawRule {
    fn from(value: i64) -> Self {
        RawRule::Integer(value)
    }
}

impl From<i32> for RawRule {
    fn from(value: i32) -> Self {
        RawRule::Integer(value.into())
    }
}

impl From<&str> for RawRule {
    fn from(value: &str) -> Self {
        RawRule::Text(value.to_string())
    }
}

/// Unvalidated request fields. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawShiftRequest {
    #[serde(default)]
    pub shift_start_date: Option<RawDate>,
    #[serde(default)]
    pub due_date: Option<RawDate>,
    #[serde(default)]
    pub due_date_rule: Option<RawRule>,
}

impl RawShiftRequest {
    pub fn new(
        shift_start_date: impl Into<RawDate>,
        due_date: impl Into<RawDate>,
        due_date_rule: impl Into<RawRule>,
    ) -> Self {
        Self {
            shift_start_date: Some(shift_start_date.into()),
            due_date: Some(due_date.into()),
            due_date_rule: Some(due_date_rule.into()),
        }
    }
}

/// A validated request: `due_date > shift_start_date` and `due_date_rule >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftRequest {
    pub shift_start_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Length of one shift cycle in days.
    pub due_date_rule: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_integer_rule() {
        let raw: RawShiftRequest = serde_json::from_str(
            r#"{"shift_start_date":"2025-10-17","due_date":"2025-11-14","due_date_rule":28}"#,
        )
        .unwrap();
        assert_eq!(raw, RawShiftRequest::new("2025-10-17", "2025-11-14", 28));
    }

    #[test]
    fn deserialize_string_rule() {
        let raw: RawShiftRequest =
            serde_json::from_str(r#"{"due_date_rule":"28"}"#).unwrap();
        assert_eq!(raw.due_date_rule, Some(RawRule::Text("28".into())));
        assert!(raw.shift_start_date.is_none());
        assert!(raw.due_date.is_none());
    }

    #[test]
    fn deserialize_float_rule() {
        let raw: RawShiftRequest = serde_json::from_str(r#"{"due_date_rule":7.5}"#).unwrap();
        assert_eq!(raw.due_date_rule, Some(RawRule::Float(7.5)));
    }

    #[test]
    fn deserialize_wrongly_typed_fields() {
        let raw: RawShiftRequest = serde_json::from_str(
            r#"{"shift_start_date":20251017,"due_date":["2025-11-14"],"due_date_rule":true}"#,
        )
        .unwrap();
        assert_eq!(
            raw.shift_start_date,
            Some(RawDate::Other(serde_json::json!(20251017)))
        );
        assert_eq!(
            raw.due_date,
            Some(RawDate::Other(serde_json::json!(["2025-11-14"])))
        );
        assert_eq!(raw.due_date_rule, Some(RawRule::Other(Value::Bool(true))));
    }

    #[test]
    fn deserialize_nulls_as_missing() {
        let raw: RawShiftRequest = serde_json::from_str(
            r#"{"shift_start_date":null,"due_date":null,"due_date_rule":null}"#,
        )
        .unwrap();
        assert_eq!(raw, RawShiftRequest::default());
    }
}
