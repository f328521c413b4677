//! Wall-clock and calendar-day primitives.
//!
//! Error sources are intentionally discarded during parsing (`map_err_ignore`)
//! since the surrounding context is restated in the error message.
#![expect(
    clippy::map_err_ignore,
    reason = "Parsers discard integer-parse sources and restate the full input instead"
)]

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{CoreError, CoreResult};

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// A wall-clock time of day with minute precision.
///
/// Ordered chronologically; convertible to minutes since midnight (0–1439).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a time of day from known-good components.
    ///
    /// ## Panics
    ///
    /// Panics if hour > 23 or minute > 59. Use [`TimeOfDay::parse`] for
    /// untrusted input.
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Self {
        assert!(hour <= 23 && minute <= 59);
        Self { hour, minute }
    }

    /// ## Summary
    /// Parses a "HH:MM" 24-hour time string.
    ///
    /// Both fields must be exactly two digits; out-of-range values are
    /// rejected rather than wrapped.
    ///
    /// ## Errors
    /// Returns `ParseError` on anything other than a valid "HH:MM" string.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let Some((h, m)) = s.split_once(':') else {
            return Err(CoreError::ParseError(format!("expected HH:MM, got {s:?}")));
        };

        if h.len() != 2 || m.len() != 2 {
            return Err(CoreError::ParseError(format!("expected HH:MM, got {s:?}")));
        }

        let hour = h
            .parse::<u8>()
            .map_err(|_| CoreError::ParseError(format!("invalid hour in {s:?}")))?;
        let minute = m
            .parse::<u8>()
            .map_err(|_| CoreError::ParseError(format!("invalid minute in {s:?}")))?;

        if hour > 23 || minute > 59 {
            return Err(CoreError::ParseError(format!("time out of range: {s:?}")));
        }

        Ok(Self { hour, minute })
    }

    /// Hour component (0–23).
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute component (0–59).
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes since midnight (0–1439).
    #[must_use]
    pub fn minutes(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Day of the week, Sunday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns the lowercase English name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }

    /// Parses a weekday from its full English name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "sunday" => Self::Sunday,
            "monday" => Self::Monday,
            "tuesday" => Self::Tuesday,
            "wednesday" => Self::Wednesday,
            "thursday" => Self::Thursday,
            "friday" => Self::Friday,
            "saturday" => Self::Saturday,
            _ => return None,
        })
    }

    /// Sunday-first index: Sunday = 0 through Saturday = 6.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The weekday a calendar date falls on.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }

    /// Returns all weekdays in order (Sunday through Saturday).
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Sunday,
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
        ]
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ## Summary
/// Number of days in a month, leap years included.
///
/// Computed as the predecessor of the first day of the following month
/// rather than a lookup table, so February resolves to 29 in leap years.
///
/// Returns `None` only for a month outside 1–12.
#[must_use]
pub fn days_in_month(month: u32, year: i32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some(first_of_next.pred_opt()?.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        assert_eq!(TimeOfDay::parse("00:00").unwrap(), TimeOfDay::new(0, 0));
        assert_eq!(TimeOfDay::parse("09:30").unwrap(), TimeOfDay::new(9, 30));
        assert_eq!(TimeOfDay::parse("23:59").unwrap(), TimeOfDay::new(23, 59));
    }

    #[test]
    fn parse_rejects_malformed() {
        for input in ["", "12", "1230", "9:30", "12:5", "ab:cd", "12-30", "24:00", "12:60"] {
            assert!(TimeOfDay::parse(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn display_parse_round_trip() {
        for time in [TimeOfDay::new(0, 0), TimeOfDay::new(9, 5), TimeOfDay::new(23, 30)] {
            assert_eq!(TimeOfDay::parse(&time.to_string()).unwrap(), time);
        }
    }

    #[test]
    fn chronological_ordering() {
        assert!(TimeOfDay::new(9, 59) < TimeOfDay::new(10, 0));
        assert!(TimeOfDay::new(10, 0) < TimeOfDay::new(10, 1));
    }

    #[test]
    fn minutes_since_midnight() {
        assert_eq!(TimeOfDay::new(0, 0).minutes(), 0);
        assert_eq!(TimeOfDay::new(10, 0).minutes(), 600);
        assert_eq!(TimeOfDay::new(23, 59).minutes(), 1439);
    }

    #[test]
    fn weekday_of_known_dates() {
        // 2024-01-07 was a Sunday, 2024-01-08 a Monday.
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(Weekday::of(sunday), Weekday::Sunday);
        assert_eq!(Weekday::of(monday), Weekday::Monday);
        assert_eq!(Weekday::of(sunday).index(), 0);
        assert_eq!(Weekday::of(monday).index(), 1);
    }

    #[test]
    fn weekday_parse_names() {
        assert_eq!(Weekday::parse("Friday"), Some(Weekday::Friday));
        assert_eq!(Weekday::parse("SATURDAY"), Some(Weekday::Saturday));
        assert_eq!(Weekday::parse("fri"), None);
        assert_eq!(Weekday::parse("Freitag"), None);
    }

    #[test]
    fn days_in_month_leap_years() {
        assert_eq!(days_in_month(2, 2024), Some(29));
        assert_eq!(days_in_month(2, 2023), Some(28));
        assert_eq!(days_in_month(2, 2000), Some(29));
        assert_eq!(days_in_month(2, 1900), Some(28));
    }

    #[test]
    fn days_in_month_regular() {
        assert_eq!(days_in_month(1, 2024), Some(31));
        assert_eq!(days_in_month(4, 2024), Some(30));
        assert_eq!(days_in_month(12, 2023), Some(31));
    }

    #[test]
    fn days_in_month_invalid() {
        assert_eq!(days_in_month(0, 2024), None);
        assert_eq!(days_in_month(13, 2024), None);
    }
}
