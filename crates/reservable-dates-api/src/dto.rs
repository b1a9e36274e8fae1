use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Successful response: ascending weekday dates, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservableDatesResponse {
    pub dates: Vec<NaiveDate>,
}

/// Failure response: one message per violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
