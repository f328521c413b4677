//! Per-band occupancy accounting over a day's bookings.

use chrono::NaiveDate;
use serde::Serialize;
use tavolo_core::config::{CapacityConfig, CountBy};

use crate::band::TimeBand;
use crate::error::{ScheduleError, ScheduleResult};

/// One reservation's occupied time on a given date.
///
/// `end_minutes` is exclusive. Zero-length bookings are permitted and occupy
/// only their start band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingInterval {
    pub start_minutes: u16,
    pub end_minutes: u16,
    pub party_size: u32,
}

impl BookingInterval {
    /// ## Summary
    /// Creates a booking interval.
    ///
    /// ## Errors
    /// Rejects intervals that end before they start.
    pub fn new(start_minutes: u16, end_minutes: u16, party_size: u32) -> ScheduleResult<Self> {
        if end_minutes < start_minutes {
            return Err(ScheduleError::InvalidBooking(format!(
                "end {end_minutes} before start {start_minutes}"
            )));
        }

        Ok(Self {
            start_minutes,
            end_minutes,
            party_size,
        })
    }

    /// ## Summary
    /// Band the booking is displayed in: the one containing its start time,
    /// or `None` when the start falls outside all bands.
    #[must_use]
    pub fn display_band(&self) -> Option<TimeBand> {
        TimeBand::of_start(self.start_minutes)
    }

    /// ## Summary
    /// Whether the booking consumes seats in the given band.
    ///
    /// Occupancy is overlap-based: the `[start, end)` interval is charged to
    /// every band it intersects, unlike [`BookingInterval::display_band`]
    /// which uses the start band alone. A booking spanning the afternoon
    /// boundary into the evening therefore occupies both bands while being
    /// displayed once. Zero-length bookings count only in their start band.
    #[must_use]
    pub fn occupies(&self, band: TimeBand) -> bool {
        if self.start_minutes == self.end_minutes {
            return self.display_band() == Some(band);
        }

        self.start_minutes <= band.end_minutes() && self.end_minutes > band.start_minutes()
    }

    fn charge(&self, count_by: CountBy) -> u32 {
        match count_by {
            CountBy::Seats => self.party_size,
            CountBy::Bookings => 1,
        }
    }
}

/// Per-band seating limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandLimits {
    pub morning: u32,
    pub afternoon: u32,
    pub evening: u32,
}

impl BandLimits {
    /// Seat limit for the given band.
    #[must_use]
    pub const fn limit_for(self, band: TimeBand) -> u32 {
        match band {
            TimeBand::Morning => self.morning,
            TimeBand::Afternoon => self.afternoon,
            TimeBand::Evening => self.evening,
        }
    }
}

impl From<&CapacityConfig> for BandLimits {
    fn from(config: &CapacityConfig) -> Self {
        Self {
            morning: config.morning,
            afternoon: config.afternoon,
            evening: config.evening,
        }
    }
}

/// Occupancy snapshot for one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapacityResult {
    pub band: TimeBand,
    pub limit: u32,
    pub occupied: u32,
    pub available: u32,
}

/// ## Summary
/// Computes per-band occupancy for one day's bookings.
///
/// Each band is charged every booking whose interval overlaps it, summing
/// party sizes or counting bookings per `count_by`. `available` floors at
/// zero; a booking set exceeding a limit is reported as fully occupied, not
/// rejected. Accept/reject policy belongs to the calling layer.
///
/// Recomputed from the supplied snapshot on every call; nothing is cached,
/// since the booking set mutates outside this engine.
#[must_use]
pub fn compute_capacity(
    date: NaiveDate,
    bookings: &[BookingInterval],
    limits: BandLimits,
    count_by: CountBy,
) -> [CapacityResult; 3] {
    tracing::debug!(%date, bookings = bookings.len(), "computing band capacity");

    TimeBand::ALL.map(|band| {
        let occupied: u32 = bookings
            .iter()
            .filter(|booking| booking.occupies(band))
            .map(|booking| booking.charge(count_by))
            .sum();
        let limit = limits.limit_for(band);

        CapacityResult {
            band,
            limit,
            occupied,
            available: limit.saturating_sub(occupied),
        }
    })
}
