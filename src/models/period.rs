//! Reporting period representation
//!
//! Transactions are grouped by calendar month. A `MonthPeriod` orders by
//! year then month, so a `BTreeMap` keyed by it iterates chronologically.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// A calendar month (e.g., "2025-07")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthPeriod {
    pub year: i32,
    pub month: u32,
}

impl MonthPeriod {
    /// Create a monthly period
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing the given timestamp
    pub fn from_datetime(timestamp: NaiveDateTime) -> Self {
        Self::from_date(timestamp.date())
    }

    /// Lower-case English month name ("july")
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }
}

/// Lower-case English name for a 1-based month number
///
/// Out-of-range numbers yield an empty string.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        let period = MonthPeriod::from_date(date);
        assert_eq!(period, MonthPeriod::new(2025, 7));
    }

    #[test]
    fn test_display_and_name() {
        let period = MonthPeriod::new(2025, 7);
        assert_eq!(period.to_string(), "2025-07");
        assert_eq!(period.month_name(), "july");
        assert_eq!(MonthPeriod::new(2026, 12).month_name(), "december");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut periods = vec![
            MonthPeriod::new(2026, 1),
            MonthPeriod::new(2025, 12),
            MonthPeriod::new(2025, 2),
        ];
        periods.sort();
        assert_eq!(
            periods,
            vec![
                MonthPeriod::new(2025, 2),
                MonthPeriod::new(2025, 12),
                MonthPeriod::new(2026, 1),
            ]
        );
    }
}
