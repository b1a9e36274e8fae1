use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::calculator::{ReservationPlan, ReservationWindowCalculator};
use crate::clock::Clock;
use crate::error::ValidationErrors;
use crate::request::RawShiftRequest;
use crate::validator::InputValidator;

/// Validate-then-calculate pipeline.
///
/// The clock is read once per call, so the validator and the calculator
/// always agree on what "today" is.
#[derive(Clone)]
pub struct ReservableDatesService {
    validator: InputValidator,
    calculator: ReservationWindowCalculator,
    clock: Arc<dyn Clock>,
}

impl ReservableDatesService {
    pub fn new(
        validator: InputValidator,
        calculator: ReservationWindowCalculator,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            validator,
            calculator,
            clock,
        }
    }

    pub fn validator(&self) -> &InputValidator {
        &self.validator
    }

    pub fn calculator(&self) -> &ReservationWindowCalculator {
        &self.calculator
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Reservable weekdays as of the clock's current date.
    pub fn reservable_dates(
        &self,
        raw: &RawShiftRequest,
    ) -> Result<Vec<NaiveDate>, ValidationErrors> {
        self.reservable_dates_on(raw, self.clock.today())
    }

    pub fn reservable_dates_on(
        &self,
        raw: &RawShiftRequest,
        today: NaiveDate,
    ) -> Result<Vec<NaiveDate>, ValidationErrors> {
        self.plan_on(raw, today).map(|plan| plan.dates)
    }

    /// Like [`reservable_dates_on`](Self::reservable_dates_on) but keeps the
    /// derived windows.
    pub fn plan_on(
        &self,
        raw: &RawShiftRequest,
        today: NaiveDate,
    ) -> Result<ReservationPlan, ValidationErrors> {
        let request = self.validator.validate(raw, today).inspect_err(|errors| {
            debug!(count = errors.len(), "request failed validation");
        })?;
        Ok(self.calculator.plan(&request, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::{ErrorKind, Field};
    use crate::validator::ValidatorOptions;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service(options: ValidatorOptions) -> ReservableDatesService {
        ReservableDatesService::new(
            InputValidator::new(options),
            ReservationWindowCalculator::default(),
            Arc::new(FixedClock(date(2025, 10, 1))),
        )
    }

    #[test]
    fn valid_request_returns_weekdays() {
        let dates = service(ValidatorOptions::default())
            .reservable_dates(&RawShiftRequest::new("2025-10-17", "2025-11-14", 28))
            .unwrap();
        assert_eq!(dates.len(), 12);
        assert_eq!(dates.first(), Some(&date(2025, 12, 11)));
        assert_eq!(dates.last(), Some(&date(2025, 12, 26)));
    }

    #[test]
    fn empty_result_is_success() {
        let dates = service(ValidatorOptions::default())
            .reservable_dates_on(
                &RawShiftRequest::new("2025-01-10", "2025-01-12", 1),
                date(2025, 1, 1),
            )
            .unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn equal_dates_fail_before_calculation() {
        let errors = service(ValidatorOptions::default())
            .reservable_dates(&RawShiftRequest::new("2025-10-17", "2025-10-17", 28))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].kind(), ErrorKind::Ordering);
        assert_eq!(errors.errors()[0].field(), Field::DueDate);
    }

    #[test]
    fn zero_rule_fails() {
        let errors = service(ValidatorOptions::default())
            .reservable_dates(&RawShiftRequest::new("2025-10-17", "2025-11-14", 0))
            .unwrap_err();
        assert_eq!(errors.messages(), vec!["Due date rule must be greater than 0"]);
    }

    #[test]
    fn past_rule_uses_injected_date() {
        let svc = service(ValidatorOptions {
            reject_past_shift_start: true,
        });
        let raw = RawShiftRequest::new("2025-10-17", "2025-11-14", 28);
        assert!(svc.reservable_dates_on(&raw, date(2025, 10, 17)).is_ok());
        let errors = svc.reservable_dates_on(&raw, date(2025, 10, 18)).unwrap_err();
        assert_eq!(errors.errors()[0].kind(), ErrorKind::Temporal);
    }

    #[test]
    fn plan_keeps_windows() {
        let plan = service(ValidatorOptions::default())
            .plan_on(
                &RawShiftRequest::new("2025-10-17", "2025-11-14", "28"),
                date(2025, 10, 1),
            )
            .unwrap();
        assert!(plan.reservable_window.is_some());
        assert!(plan.target_shift_window.is_some());
        assert_eq!(plan.dates.len(), 12);
    }
}
