use std::fmt;

use thiserror::Error;

/// The three inbound fields of a reservable-dates request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    ShiftStartDate,
    DueDate,
    DueDateRule,
}

impl Field {
    /// Wire name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            Field::ShiftStartDate => "shift_start_date",
            Field::DueDate => "due_date",
            Field::DueDateRule => "due_date_rule",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::ShiftStartDate => "Shift start date",
            Field::DueDate => "Due date",
            Field::DueDateRule => "Due date rule",
        };
        f.write_str(label)
    }
}

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Missing,
    Format,
    Range,
    Ordering,
    Temporal,
}

/// A single violated input rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} can't be blank")]
    Missing { field: Field },

    #[error("{field} is not a valid date (expected YYYY-MM-DD): {value:?}")]
    InvalidDate { field: Field, value: String },

    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: Field, value: String },

    #[error("{field} must be an integer")]
    NotAnInteger { field: Field },

    #[error("{field} must be greater than 0")]
    NotPositive { field: Field },

    #[error("{field} must be less than or equal to {max}")]
    TooLarge { field: Field, max: i64 },

    #[error("{} must be after the shift start date", Field::DueDate)]
    DueDateNotAfterShiftStart,

    #[error("{} must be today or later", Field::ShiftStartDate)]
    ShiftStartInPast,
}

impl ValidationError {
    /// The field this error is attached to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing { field }
            | ValidationError::InvalidDate { field, .. }
            | ValidationError::NotANumber { field, .. }
            | ValidationError::NotAnInteger { field }
            | ValidationError::NotPositive { field }
            | ValidationError::TooLarge { field, .. } => *field,
            ValidationError::DueDateNotAfterShiftStart => Field::DueDate,
            ValidationError::ShiftStartInPast => Field::ShiftStartDate,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Missing { .. } => ErrorKind::Missing,
            ValidationError::InvalidDate { .. }
            | ValidationError::NotANumber { .. }
            | ValidationError::NotAnInteger { .. } => ErrorKind::Format,
            ValidationError::NotPositive { .. } | ValidationError::TooLarge { .. } => {
                ErrorKind::Range
            }
            ValidationError::DueDateNotAfterShiftStart => ErrorKind::Ordering,
            ValidationError::ShiftStartInPast => ErrorKind::Temporal,
        }
    }
}

/// Every rule a request violated, in field order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Returns `None` when there is nothing to report.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        Some(Self::sorted(errors))
    }

    pub(crate) fn sorted(mut errors: Vec<ValidationError>) -> Self {
        // Stable sort keeps rule order within a field.
        errors.sort_by_key(|e| e.field());
        Self(errors)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Human-readable messages, one per violated rule.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &ValidationError> {
        self.0.iter().filter(move |e| e.field() == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Invalid runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid reservation policy: {0}")]
    InvalidPolicy(String),
}
