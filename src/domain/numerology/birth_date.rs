//! Validated birth date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// A querent's birth date: a real calendar day in or after 1900.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Builds a birth date from its components.
    ///
    /// Month must be 1-12, day 1-31 and a real day of that month, and the
    /// year at least [`MIN_BIRTH_YEAR`].
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range("month", 1, 12, i64::from(month)));
        }
        if !(1..=31).contains(&day) {
            return Err(ValidationError::out_of_range("day", 1, 31, i64::from(day)));
        }
        if year < MIN_BIRTH_YEAR {
            return Err(ValidationError::out_of_range(
                "year",
                i64::from(MIN_BIRTH_YEAR),
                9999,
                i64::from(year),
            ));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "birth_date",
                    format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
                )
            })
    }

    /// Parses a `YYYY-MM-DD` string.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("birth_date"));
        }
        let malformed = || ValidationError::invalid_format("birth_date", "expected YYYY-MM-DD");

        let mut parts = trimmed.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if y.len() != 4 || !all_digits(y) || !all_digits(m) || !all_digits(d) {
            return Err(malformed());
        }
        let year: i32 = y.parse().map_err(|_| malformed())?;
        let month: u32 = m.parse().map_err(|_| malformed())?;
        let day: u32 = d.parse().map_err(|_| malformed())?;
        Self::new(year, month, day)
    }

    /// Wraps an existing calendar date, applying the same range checks.
    pub fn from_naive(date: NaiveDate) -> Result<Self, ValidationError> {
        Self::new(date.year(), date.month(), date.day())
    }

    pub fn year(&self) -> u32 {
        // Validated to be >= 1900.
        self.0.year().unsigned_abs()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Whole years elapsed between this date and `on`. Negative when the
    /// birth date lies after `on`.
    pub fn age_on(&self, on: NaiveDate) -> i32 {
        let mut age = on.year() - self.0.year();
        if (on.month(), on.day()) < (self.0.month(), self.0.day()) {
            age -= 1;
        }
        age
    }
}

impl TryFrom<String> for BirthDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        BirthDate::parse(&value)
    }
}

impl From<BirthDate> for String {
    fn from(date: BirthDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        let bd = BirthDate::parse("1990-01-15").unwrap();
        assert_eq!((bd.year(), bd.month(), bd.day()), (1990, 1, 15));
        assert_eq!(bd.to_string(), "1990-01-15");
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(matches!(
            BirthDate::new(1990, 13, 1),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            BirthDate::new(1990, 1, 32),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            BirthDate::new(1899, 12, 31),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            BirthDate::new(1990, 0, 10),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_impossible_calendar_days() {
        assert!(matches!(
            BirthDate::new(2023, 2, 29),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(BirthDate::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn rejects_malformed_strings() {
        for input in ["", "1990/01/15", "15-01-1990", "1990-1", "abcd-01-15", "1990-01-15x"] {
            assert!(BirthDate::parse(input).is_err(), "{:?} should fail", input);
        }
    }

    #[test]
    fn accepts_unpadded_month_and_day() {
        let bd = BirthDate::parse("1985-7-4").unwrap();
        assert_eq!((bd.month(), bd.day()), (7, 4));
    }

    #[test]
    fn age_counts_whole_years() {
        let bd = BirthDate::new(2000, 6, 15).unwrap();
        assert_eq!(bd.age_on(date(2018, 6, 14)), 17);
        assert_eq!(bd.age_on(date(2018, 6, 15)), 18);
        assert_eq!(bd.age_on(date(2000, 6, 15)), 0);
    }

    #[test]
    fn age_is_negative_for_future_birth_dates() {
        let bd = BirthDate::new(2030, 1, 1).unwrap();
        assert!(bd.age_on(date(2029, 12, 31)) < 0);
        let same_year = BirthDate::new(2026, 12, 1).unwrap();
        assert!(same_year.age_on(date(2026, 10, 19)) < 0);
    }

    #[test]
    fn serde_uses_iso_string() {
        let bd: BirthDate = serde_json::from_str("\"1977-05-25\"").unwrap();
        assert_eq!(serde_json::to_string(&bd).unwrap(), "\"1977-05-25\"");
        assert!(serde_json::from_str::<BirthDate>("\"1977-02-30\"").is_err());
    }
}
