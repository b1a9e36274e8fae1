use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::request::ShiftRequest;
use crate::window::DateWindow;

/// Days ahead of a stay date at which the partner booking system opens
/// reservations.
pub const DEFAULT_BOOKING_LEAD_DAYS: i64 = 44;

/// How many whole shift cycles past the current one the target cycle starts.
pub const DEFAULT_CYCLES_AHEAD: i64 = 2;

/// Offsets that shape the two windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationPolicy {
    pub booking_lead_days: i64,
    pub cycles_ahead: i64,
}

impl Default for ReservationPolicy {
    fn default() -> Self {
        Self {
            booking_lead_days: DEFAULT_BOOKING_LEAD_DAYS,
            cycles_ahead: DEFAULT_CYCLES_AHEAD,
        }
    }
}

impl ReservationPolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.booking_lead_days < 0 {
            return Err(ConfigError::InvalidPolicy(format!(
                "booking lead days must not be negative, got {}",
                self.booking_lead_days
            )));
        }
        if self.cycles_ahead < 1 {
            return Err(ConfigError::InvalidPolicy(format!(
                "cycles ahead must be at least 1, got {}",
                self.cycles_ahead
            )));
        }
        Ok(())
    }
}

/// Both derived windows alongside the dates they share.
///
/// A window is `None` when one of its bounds falls outside the representable
/// calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationPlan {
    pub reservable_window: Option<DateWindow>,
    pub target_shift_window: Option<DateWindow>,
    pub dates: Vec<NaiveDate>,
}

/// Intersects the partner's reservable window with the next bookable shift
/// cycle, keeping weekdays only.
///
/// Callers must pass a request that already went through
/// [`InputValidator`](crate::validator::InputValidator).
#[derive(Debug, Clone, Copy, Default)]
pub struct ReservationWindowCalculator {
    policy: ReservationPolicy,
}

impl ReservationWindowCalculator {
    pub fn new(policy: ReservationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ReservationPolicy {
        self.policy
    }

    /// Ascending weekdays inside both windows. Empty when they do not overlap.
    pub fn calculate(&self, request: &ShiftRequest, today: NaiveDate) -> Vec<NaiveDate> {
        self.plan(request, today).dates
    }

    pub fn plan(&self, request: &ShiftRequest, today: NaiveDate) -> ReservationPlan {
        let reservable_window = self.reservable_window(request, today);
        let target_shift_window = self.target_shift_window(request);

        // Intersecting the ranges before filtering gives the same dates as
        // intersecting the two weekday lists, without walking either window.
        let dates = match (&reservable_window, &target_shift_window) {
            (Some(reservable), Some(target)) => reservable
                .intersect(target)
                .map(|overlap| overlap.weekdays())
                .unwrap_or_default(),
            _ => Vec::new(),
        };

        debug!(
            reservable = ?reservable_window,
            target = ?target_shift_window,
            count = dates.len(),
            "computed reservation plan"
        );

        ReservationPlan {
            reservable_window,
            target_shift_window,
            dates,
        }
    }

    /// `[today + lead, due_date + lead]`
    pub fn reservable_window(&self, request: &ShiftRequest, today: NaiveDate) -> Option<DateWindow> {
        let lead = self.policy.booking_lead_days;
        Some(DateWindow::new(
            add_days(today, lead)?,
            add_days(request.due_date, lead)?,
        ))
    }

    /// The cycle starting `cycles_ahead` cycles after the current one, pulled
    /// one day earlier.
    pub fn target_shift_window(&self, request: &ShiftRequest) -> Option<DateWindow> {
        let rule = request.due_date_rule;
        let shift_end_date = add_days(request.shift_start_date, rule.checked_sub(1)?)?;
        let offset = self.policy.cycles_ahead.checked_mul(rule)?.checked_sub(1)?;
        Some(DateWindow::new(
            add_days(request.shift_start_date, offset)?,
            add_days(shift_end_date, offset)?,
        ))
    }
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}
