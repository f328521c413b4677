//! Venue opening hours and open/closed membership tests.

use std::fmt;

use chrono::NaiveDate;
use tavolo_core::config::HoursConfig;
use tavolo_core::time::{MINUTES_PER_DAY, TimeOfDay, Weekday};

use crate::error::{ScheduleError, ScheduleResult};

/// A single opening slot.
///
/// `close` may be numerically earlier than `open` for slots that extend past
/// midnight (e.g. 23:00–01:00). A close of exactly 00:00 always means end of
/// the current day (24:00), never midnight at slot start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenInterval {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl OpenInterval {
    /// Creates an opening slot.
    #[must_use]
    pub const fn new(open: TimeOfDay, close: TimeOfDay) -> Self {
        Self { open, close }
    }

    /// ## Summary
    /// Parses an "HH:MM-HH:MM" slot string.
    ///
    /// ## Errors
    /// Returns an error if the separator is missing or either bound is not a
    /// valid "HH:MM" time.
    pub fn parse(s: &str) -> ScheduleResult<Self> {
        let Some((open, close)) = s.split_once('-') else {
            return Err(ScheduleError::InvalidHours(format!(
                "expected HH:MM-HH:MM, got {s:?}"
            )));
        };

        Ok(Self {
            open: TimeOfDay::parse(open.trim())?,
            close: TimeOfDay::parse(close.trim())?,
        })
    }

    fn open_minutes(self) -> u16 {
        self.open.minutes()
    }

    /// Close bound in minutes, with 00:00 normalized to end of day.
    fn close_minutes(self) -> u16 {
        let close = self.close.minutes();
        if close == 0 { MINUTES_PER_DAY } else { close }
    }

    /// Whether this slot extends past midnight into the next day.
    #[must_use]
    pub fn crosses_midnight(self) -> bool {
        self.close_minutes() <= self.open_minutes()
    }

    /// ## Summary
    /// Tests whether a time (minutes since midnight) falls inside this slot.
    ///
    /// A midnight-crossing slot matches both the late stretch on the opening
    /// day and the small-hours stretch after it.
    #[must_use]
    pub fn contains(self, minutes: u16) -> bool {
        let open = self.open_minutes();
        let close = self.close_minutes();

        if close <= open {
            // Crossing: close is next-day minutes.
            minutes >= open || minutes < close % MINUTES_PER_DAY
        } else {
            minutes >= open && minutes < close
        }
    }
}

impl fmt::Display for OpenInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.open, self.close)
    }
}

/// Per-weekday opening slots, Sunday-first.
///
/// Constructed once from configuration and read-only thereafter; a day with
/// no slots is closed all day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyHours {
    days: [Vec<OpenInterval>; 7],
}

impl WeeklyHours {
    /// Builds weekly hours from per-day slot lists, Sunday-first.
    #[must_use]
    pub fn new(days: [Vec<OpenInterval>; 7]) -> Self {
        Self { days }
    }

    /// ## Summary
    /// Builds validated weekly hours from raw configuration strings.
    ///
    /// ## Errors
    /// Rejects malformed "HH:MM" bounds, and a configuration with no slots on
    /// any day at all, so callers can fall back to [`WeeklyHours::default`]
    /// instead of propagating a half-built schedule.
    pub fn from_config(config: &HoursConfig) -> ScheduleResult<Self> {
        let mut days: [Vec<OpenInterval>; 7] = std::array::from_fn(|_| Vec::new());

        for weekday in Weekday::all() {
            let slots = &mut days[usize::from(weekday.index())];
            for slot in config.day(weekday) {
                let open = TimeOfDay::parse(&slot.open)?;
                let close = TimeOfDay::parse(&slot.close)?;
                slots.push(OpenInterval::new(open, close));
            }
        }

        if days.iter().all(Vec::is_empty) {
            return Err(ScheduleError::InvalidHours(
                "no opening slots configured for any day".into(),
            ));
        }

        Ok(Self { days })
    }

    /// ## Summary
    /// Builds weekly hours from configuration, substituting the default
    /// schedule when the configuration is missing or malformed.
    #[must_use]
    pub fn from_config_or_default(config: &HoursConfig) -> Self {
        match Self::from_config(config) {
            Ok(hours) => hours,
            Err(error) => {
                tracing::warn!(%error, "invalid opening hours configuration, using default schedule");
                Self::default()
            }
        }
    }

    /// Opening slots for the given weekday.
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> &[OpenInterval] {
        &self.days[usize::from(weekday.index())]
    }

    /// ## Summary
    /// Whether the venue is open at the given date and time.
    ///
    /// Resolves the date's weekday and tests the time against that day's
    /// slots; a day with no slots is closed. Any matching slot makes the
    /// venue open.
    #[must_use]
    pub fn is_open(&self, date: NaiveDate, time: TimeOfDay) -> bool {
        let minutes = time.minutes();
        self.day(Weekday::of(date))
            .iter()
            .any(|slot| slot.contains(minutes))
    }
}

impl Default for WeeklyHours {
    /// The documented fallback schedule: Monday–Thursday 11:00–23:00,
    /// Friday/Saturday 11:00–00:30 (closing after midnight), Sunday closed.
    fn default() -> Self {
        let weekday = vec![OpenInterval::new(
            TimeOfDay::new(11, 0),
            TimeOfDay::new(23, 0),
        )];
        let late = vec![OpenInterval::new(
            TimeOfDay::new(11, 0),
            TimeOfDay::new(0, 30),
        )];

        Self {
            days: [
                Vec::new(),
                weekday.clone(),
                weekday.clone(),
                weekday.clone(),
                weekday,
                late.clone(),
                late,
            ],
        }
    }
}
