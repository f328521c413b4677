//! Recurrence patterns for repeating non-booking events (maintenance,
//! training, private hire) and their expansion into concrete dates.

mod expand;

pub use expand::{Expansion, MAX_ITERATIONS, RangeExpansion, expand_in_range, next_due, next_occurrences};

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use tavolo_core::time::Weekday;

use crate::error::{ScheduleError, ScheduleResult};

/// Recurrence frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Custom,
}

impl Frequency {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Custom => "custom",
        }
    }

    /// Parses a frequency from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            "yearly" => Self::Yearly,
            "custom" => Self::Custom,
            _ => return None,
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recurrence pattern for a repeating event.
///
/// Exactly one selector is meaningful per frequency: `days_of_week` for
/// weekly, `day_of_month` for monthly, `custom_days` for custom. The others
/// are ignored. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrencePattern {
    /// How the pattern repeats.
    pub frequency: Frequency,

    /// Repeat every `interval` frequency units (default 1, must be >= 1).
    pub interval: u32,

    /// Weekdays the pattern fires on (weekly only).
    pub days_of_week: Vec<Weekday>,

    /// Day of month the pattern fires on (monthly only).
    pub day_of_month: Option<u32>,

    /// Last date the pattern may fire on (inclusive).
    pub end_date: Option<NaiveDate>,

    /// Total number of occurrences across the pattern's lifetime.
    pub max_occurrences: Option<u32>,

    /// Weekdays the pattern fires on (custom only); empty falls back to a
    /// plain one-week advance.
    pub custom_days: Vec<Weekday>,
}

impl RecurrencePattern {
    fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: 1,
            days_of_week: Vec::new(),
            day_of_month: None,
            end_date: None,
            max_occurrences: None,
            custom_days: Vec::new(),
        }
    }

    /// Creates a daily pattern.
    #[must_use]
    pub fn daily() -> Self {
        Self::new(Frequency::Daily)
    }

    /// Creates a weekly pattern.
    #[must_use]
    pub fn weekly() -> Self {
        Self::new(Frequency::Weekly)
    }

    /// Creates a monthly pattern.
    #[must_use]
    pub fn monthly() -> Self {
        Self::new(Frequency::Monthly)
    }

    /// Creates a yearly pattern.
    #[must_use]
    pub fn yearly() -> Self {
        Self::new(Frequency::Yearly)
    }

    /// Creates a custom-weekday pattern.
    #[must_use]
    pub fn custom() -> Self {
        Self::new(Frequency::Custom)
    }

    /// Sets the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the weekly weekday selector.
    #[must_use]
    pub fn with_days(mut self, days: Vec<Weekday>) -> Self {
        self.days_of_week = days;
        self
    }

    /// Sets the monthly day-of-month selector.
    #[must_use]
    pub fn with_day_of_month(mut self, day: u32) -> Self {
        self.day_of_month = Some(day);
        self
    }

    /// Sets the last date the pattern may fire on.
    #[must_use]
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the lifetime occurrence limit.
    #[must_use]
    pub fn with_max_occurrences(mut self, max: u32) -> Self {
        self.max_occurrences = Some(max);
        self
    }

    /// Sets the custom weekday selector.
    #[must_use]
    pub fn with_custom_days(mut self, days: Vec<Weekday>) -> Self {
        self.custom_days = days;
        self
    }

    /// ## Summary
    /// Sets the custom weekday selector from caller-supplied day names.
    ///
    /// ## Errors
    /// Rejects unrecognized names here, at construction, instead of letting
    /// them silently never match during expansion.
    pub fn with_custom_day_names(self, names: &[&str]) -> ScheduleResult<Self> {
        let days = names
            .iter()
            .map(|name| {
                Weekday::parse(name).ok_or_else(|| {
                    ScheduleError::InvalidPattern(format!("unknown weekday name: {name:?}"))
                })
            })
            .collect::<ScheduleResult<Vec<_>>>()?;

        Ok(self.with_custom_days(days))
    }

    /// ## Summary
    /// Validates structural invariants before expansion.
    ///
    /// ## Errors
    /// Rejects a zero interval and an out-of-range day-of-month.
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.interval == 0 {
            return Err(ScheduleError::InvalidPattern(
                "interval must be at least 1".into(),
            ));
        }

        if let Some(day) = self.day_of_month
            && !(1..=31).contains(&day)
        {
            return Err(ScheduleError::InvalidPattern(format!(
                "day of month out of range: {day}"
            )));
        }

        Ok(())
    }
}

/// One concrete date produced by expanding a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub date: NaiveDate,

    /// 1-based position within the pattern's lifetime.
    pub number: u32,

    /// Whether this is the pattern's final occurrence (its occurrence limit
    /// or end date was reached).
    pub is_last: bool,
}
