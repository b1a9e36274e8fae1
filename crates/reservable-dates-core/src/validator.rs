use chrono::NaiveDate;

use serde_json::Value;

use crate::error::{Field, ValidationError, ValidationErrors};
use crate::request::{RawDate, RawRule, RawShiftRequest, ShiftRequest};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Longest accepted shift cycle, in days. Bounds the target window and so
/// the size of any result.
pub const MAX_DUE_DATE_RULE: i64 = 3650;

/// Toggles for rules that are not part of the base contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Reject a shift start date strictly before the evaluation date.
    pub reject_past_shift_start: bool,
}

/// Normalizes raw request fields into a [`ShiftRequest`].
///
/// Every rule is checked independently, so a single pass reports all
/// violations rather than the first one.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputValidator {
    options: ValidatorOptions,
}

impl InputValidator {
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ValidatorOptions {
        self.options
    }

    /// Validate `raw` as of `today`. `today` is only consulted when
    /// [`ValidatorOptions::reject_past_shift_start`] is set.
    pub fn validate(
        &self,
        raw: &RawShiftRequest,
        today: NaiveDate,
    ) -> Result<ShiftRequest, ValidationErrors> {
        let mut errors = Vec::new();

        let shift_start_date = collect(
            parse_date(Field::ShiftStartDate, raw.shift_start_date.as_ref()),
            &mut errors,
        );
        let due_date = collect(parse_date(Field::DueDate, raw.due_date.as_ref()), &mut errors);
        let due_date_rule = collect(
            parse_rule(Field::DueDateRule, raw.due_date_rule.as_ref()),
            &mut errors,
        );

        if let (Some(start), Some(due)) = (shift_start_date, due_date)
            && due <= start
        {
            errors.push(ValidationError::DueDateNotAfterShiftStart);
        }

        if self.options.reject_past_shift_start
            && let Some(start) = shift_start_date
            && start < today
        {
            errors.push(ValidationError::ShiftStartInPast);
        }

        // A field that failed to parse has always recorded an error.
        match (shift_start_date, due_date, due_date_rule) {
            (Some(shift_start_date), Some(due_date), Some(due_date_rule)) if errors.is_empty() => {
                Ok(ShiftRequest {
                    shift_start_date,
                    due_date,
                    due_date_rule,
                })
            }
            _ => Err(ValidationErrors::sorted(errors)),
        }
    }
}

fn collect<T>(result: Result<T, ValidationError>, errors: &mut Vec<ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

fn parse_date(field: Field, value: Option<&RawDate>) -> Result<NaiveDate, ValidationError> {
    let value = match value {
        None => return Err(ValidationError::Missing { field }),
        Some(RawDate::Other(other)) => {
            return Err(ValidationError::InvalidDate {
                field,
                value: other.to_string(),
            });
        }
        Some(RawDate::Text(s)) => s.trim(),
    };
    if value.is_empty() {
        return Err(ValidationError::Missing { field });
    }
    let invalid = || ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    };
    // `%Y` alone would accept signed and five-digit years.
    if !is_iso_date_shape(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Exactly `DDDD-DD-DD`.
fn is_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn parse_rule(field: Field, value: Option<&RawRule>) -> Result<i64, ValidationError> {
    let rule = match value {
        None => return Err(ValidationError::Missing { field }),
        Some(RawRule::Integer(n)) => *n,
        Some(RawRule::Float(f)) => integral(field, *f)?,
        Some(RawRule::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Err(ValidationError::Missing { field });
            }
            match s.parse::<i64>() {
                Ok(n) => n,
                Err(_) => {
                    let f = s.parse::<f64>().map_err(|_| ValidationError::NotANumber {
                        field,
                        value: s.to_string(),
                    })?;
                    integral(field, f)?
                }
            }
        }
        Some(RawRule::Other(Value::Null)) => return Err(ValidationError::Missing { field }),
        Some(RawRule::Other(other)) => {
            return Err(ValidationError::NotANumber {
                field,
                value: other.to_string(),
            });
        }
    };
    if rule <= 0 {
        return Err(ValidationError::NotPositive { field });
    }
    if rule > MAX_DUE_DATE_RULE {
        return Err(ValidationError::TooLarge {
            field,
            max: MAX_DUE_DATE_RULE,
        });
    }
    Ok(rule)
}

fn integral(field: Field, value: f64) -> Result<i64, ValidationError> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() >= i64::MAX as f64 {
        return Err(ValidationError::NotAnInteger { field });
    }
    Ok(value as i64)
}
