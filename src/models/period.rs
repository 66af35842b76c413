//! Calendar date and month selectors
//!
//! Dates are accepted only in the fixed `YYYY-MM-DD` shape and months only
//! as `YYYY-MM`. chrono alone is more lenient (it takes single-digit months
//! and days), so the shape is checked before parsing.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Canonical date format for stored expenses
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check that `s` consists of ASCII digits at every position except the
/// given hyphen positions.
fn has_shape(s: &str, len: usize, hyphens: &[usize]) -> bool {
    s.len() == len
        && s.bytes().enumerate().all(|(i, b)| {
            if hyphens.contains(&i) {
                b == b'-'
            } else {
                b.is_ascii_digit()
            }
        })
}

/// Parse a strict `YYYY-MM-DD` calendar date
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let s = s.trim();
    if !has_shape(s, 10, &[4, 7]) {
        return Err(ValidationError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// A calendar month of a specific year (e.g., "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a month selector, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if (1..=12).contains(&month) && (0..=9999).contains(&year) {
            Ok(Self { year, month })
        } else {
            Err(ValidationError::InvalidMonth(format!("{:04}-{:02}", year, month)))
        }
    }

    /// The month containing the given date
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
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

    /// Parse a strict `YYYY-MM` month
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        let invalid = || ValidationError::InvalidMonth(s.to_string());
        if !has_shape(s, 7, &[4]) {
            return Err(invalid());
        }
        let year: i32 = s[..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[5..].parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_impossible_dates() {
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn test_parse_date_rejects_loose_shapes() {
        assert!(parse_date("2024-3-05").is_err());
        assert!(parse_date("24-03-05").is_err());
        assert!(parse_date("2024/03/05").is_err());
        assert!(parse_date("").is_err());
        assert_eq!(
            parse_date("yesterday"),
            Err(ValidationError::InvalidDate("yesterday".into()))
        );
    }

    #[test]
    fn test_year_month_parse_and_display() {
        let ym = YearMonth::parse("2024-03").unwrap();
        assert_eq!(ym.year(), 2024);
        assert_eq!(ym.month(), 3);
        assert_eq!(ym.to_string(), "2024-03");
        assert!(YearMonth::parse("2024-13").is_err());
        assert!(YearMonth::parse("2024-00").is_err());
        assert!(YearMonth::parse("2024-3").is_err());
    }

    #[test]
    fn test_year_month_contains() {
        let ym: YearMonth = "2024-03".parse().unwrap();
        assert!(ym.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(!ym.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
        assert!(!ym.contains(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()));
    }

    #[test]
    fn test_year_month_ordering() {
        let a = YearMonth::new(2023, 12).unwrap();
        let b = YearMonth::new(2024, 1).unwrap();
        assert!(a < b);
    }
}
