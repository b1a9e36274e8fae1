use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;

/// A closed date range `[start, end]`. Empty when `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Both endpoints are inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Overlap of two windows, or `None` if they share no day.
    pub fn intersect(&self, other: &DateWindow) -> Option<DateWindow> {
        let overlap = DateWindow::new(self.start.max(other.start), self.end.min(other.end));
        (!overlap.is_empty()).then_some(overlap)
    }

    /// Weekdays (Mon-Fri) inside the window, ascending.
    pub fn weekdays(&self) -> Vec<NaiveDate> {
        calendar::weekdays(self.start, self.end)
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn intersect_overlapping() {
        let reservable = DateWindow::new(date(2025, 11, 14), date(2025, 12, 28));
        let target = DateWindow::new(date(2025, 12, 11), date(2026, 1, 7));
        assert_eq!(
            reservable.intersect(&target),
            Some(DateWindow::new(date(2025, 12, 11), date(2025, 12, 28)))
        );
        assert_eq!(reservable.intersect(&target), target.intersect(&reservable));
    }

    #[test]
    fn intersect_disjoint() {
        let reservable = DateWindow::new(date(2025, 2, 14), date(2025, 2, 25));
        let target = DateWindow::new(date(2025, 1, 11), date(2025, 1, 11));
        assert_eq!(reservable.intersect(&target), None);
    }

    #[test]
    fn intersect_touching_endpoints() {
        let a = DateWindow::new(date(2025, 3, 1), date(2025, 3, 10));
        let b = DateWindow::new(date(2025, 3, 10), date(2025, 3, 20));
        assert_eq!(
            a.intersect(&b),
            Some(DateWindow::new(date(2025, 3, 10), date(2025, 3, 10)))
        );
    }

    #[test]
    fn inverted_window_is_empty() {
        let w = DateWindow::new(date(2025, 3, 10), date(2025, 3, 1));
        assert!(w.is_empty());
        assert!(w.weekdays().is_empty());
        assert_eq!(w.intersect(&DateWindow::new(date(2025, 1, 1), date(2025, 12, 31))), None);
    }

    #[test]
    fn contains_is_inclusive() {
        let w = DateWindow::new(date(2025, 3, 1), date(2025, 3, 10));
        assert!(w.contains(date(2025, 3, 1)));
        assert!(w.contains(date(2025, 3, 10)));
        assert!(!w.contains(date(2025, 3, 11)));
    }

    #[test]
    fn display_format() {
        let w = DateWindow::new(date(2025, 11, 14), date(2025, 12, 28));
        assert_eq!(w.to_string(), "[2025-11-14, 2025-12-28]");
    }
}
