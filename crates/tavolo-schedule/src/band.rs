//! Fixed daily time bands for grouping and capping bookings.

use std::fmt;

use serde::Serialize;

/// Morning band bounds in minutes since midnight (10:00–14:30, inclusive).
const MORNING: (u16, u16) = (600, 870);
/// Afternoon band bounds (14:31–18:30, inclusive).
const AFTERNOON: (u16, u16) = (871, 1110);
/// Evening band bounds (18:31–23:30, inclusive).
const EVENING: (u16, u16) = (1111, 1410);

/// One of the three fixed daily service bands.
///
/// The bands are non-overlapping and cover the business day; instants before
/// the morning start or after the evening end belong to no band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBand {
    Morning,
    Afternoon,
    Evening,
}

impl TimeBand {
    /// All bands in chronological order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }

    /// First minute of the band (inclusive).
    #[must_use]
    pub const fn start_minutes(self) -> u16 {
        match self {
            Self::Morning => MORNING.0,
            Self::Afternoon => AFTERNOON.0,
            Self::Evening => EVENING.0,
        }
    }

    /// Last minute of the band (inclusive).
    #[must_use]
    pub const fn end_minutes(self) -> u16 {
        match self {
            Self::Morning => MORNING.1,
            Self::Afternoon => AFTERNOON.1,
            Self::Evening => EVENING.1,
        }
    }

    /// Whether the band's display range contains the given minute.
    #[must_use]
    pub const fn contains(self, minutes: u16) -> bool {
        self.start_minutes() <= minutes && minutes <= self.end_minutes()
    }

    /// ## Summary
    /// Classifies a start time into the band containing it.
    ///
    /// This is the display assignment: a booking is shown only in the band
    /// its start time falls in, never duplicated across bands. Capacity
    /// accounting uses full-interval overlap instead
    /// ([`crate::capacity::BookingInterval::occupies`]); the two must not be
    /// conflated.
    ///
    /// Returns `None` for a start time outside all bands rather than coercing
    /// it into the nearest one.
    #[must_use]
    pub fn of_start(start_minutes: u16) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|band| band.contains(start_minutes))
    }
}

impl fmt::Display for TimeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_band_boundaries() {
        assert_eq!(TimeBand::of_start(600), Some(TimeBand::Morning));
        assert_eq!(TimeBand::of_start(870), Some(TimeBand::Morning));
        assert_eq!(TimeBand::of_start(871), Some(TimeBand::Afternoon));
        assert_eq!(TimeBand::of_start(1110), Some(TimeBand::Afternoon));
        assert_eq!(TimeBand::of_start(1111), Some(TimeBand::Evening));
        assert_eq!(TimeBand::of_start(1410), Some(TimeBand::Evening));
    }

    #[test]
    fn times_outside_bands_are_unclassified() {
        assert_eq!(TimeBand::of_start(0), None);
        assert_eq!(TimeBand::of_start(599), None);
        assert_eq!(TimeBand::of_start(1411), None);
        assert_eq!(TimeBand::of_start(1439), None);
    }

    #[test]
    fn bands_cover_the_day_without_overlap() {
        for minutes in 600..=1410u16 {
            let matching = TimeBand::ALL
                .iter()
                .filter(|band| band.contains(minutes))
                .count();
            assert_eq!(matching, 1, "minute {minutes} matched {matching} bands");
        }
    }
}
