//! Calendar month used to narrow the expense list before analysis
//!
//! Budgets are monthly allocations, so the usual view is "this month's
//! expenses against the budgets". The filter is applied by the caller; the
//! alert engine sees whatever list it is handed.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month, e.g. `2025-01`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month, returning `None` when `month` is outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Parse `YYYY-MM`
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let invalid = || MonthParseError(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).ok_or_else(invalid)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error returned for strings that are not `YYYY-MM`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthParseError(String);

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month '{}': expected YYYY-MM", self.0)
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let month = Month::parse("2025-01").unwrap();
        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 1);
        assert_eq!(month.to_string(), "2025-01");
        assert_eq!("2024-12".parse::<Month>().unwrap().month(), 12);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Month::parse("2025-13").is_err());
        assert!(Month::parse("2025-00").is_err());
        assert!(Month::parse("25-01").is_err());
        assert!(Month::parse("January").is_err());
        assert!(Month::parse("2025-001").is_err());
    }

    #[test]
    fn test_contains() {
        let month = Month::parse("2025-02").unwrap();
        assert!(month.contains(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
        assert!(month.contains(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()));
    }
}
