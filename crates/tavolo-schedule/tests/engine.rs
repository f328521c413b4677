//! End-to-end engine tests: configuration through availability, capacity,
//! and recurrence, the way the booking and admin surfaces drive them.

use chrono::NaiveDate;
use tavolo_core::config::{CountBy, VenueConfig};
use tavolo_core::time::TimeOfDay;
use tavolo_schedule::band::TimeBand;
use tavolo_schedule::capacity::{BandLimits, BookingInterval, compute_capacity};
use tavolo_schedule::hours::WeeklyHours;
use tavolo_schedule::recur::{RecurrencePattern, expand_in_range, next_occurrences};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn venue() -> VenueConfig {
    VenueConfig::from_json(
        r#"{
            "hours": {
                "monday": [{"open": "11:00", "close": "23:00"}],
                "tuesday": [{"open": "11:00", "close": "23:00"}],
                "wednesday": [{"open": "11:00", "close": "23:00"}],
                "thursday": [{"open": "11:00", "close": "23:00"}],
                "friday": [{"open": "11:00", "close": "00:30"}],
                "saturday": [{"open": "11:00", "close": "00:30"}]
            },
            "capacity": {"morning": 24, "afternoon": 32, "evening": 40, "count_by": "seats"}
        }"#,
    )
    .expect("valid venue document")
}

#[test_log::test]
fn booking_request_flow_checks_hours_then_capacity() {
    let venue = venue();
    let hours = WeeklyHours::from_config_or_default(&venue.hours);
    let friday = date(2024, 1, 12);

    // The request form first asks whether the venue is open at all.
    assert!(hours.is_open(friday, TimeOfDay::new(19, 0)));
    assert!(hours.is_open(friday, TimeOfDay::new(0, 15)));
    assert!(!hours.is_open(date(2024, 1, 14), TimeOfDay::new(19, 0)));

    // Then the admin surface renders per-band occupancy badges.
    let bookings = [
        BookingInterval::new(1020, 1170, 6).expect("valid booking"), // 17:00–19:30
        BookingInterval::new(1140, 1260, 4).expect("valid booking"), // 19:00–21:00
    ];
    let results = compute_capacity(
        friday,
        &bookings,
        BandLimits::from(&venue.capacity),
        venue.capacity.count_by,
    );

    // The spanning booking charges afternoon and evening; both evening
    // bookings stack there.
    assert_eq!(results[1].band, TimeBand::Afternoon);
    assert_eq!(results[1].occupied, 6);
    assert_eq!(results[2].band, TimeBand::Evening);
    assert_eq!(results[2].occupied, 10);
    assert_eq!(results[2].available, 30);

    // Display assignment stays single-banded regardless.
    assert_eq!(bookings[0].display_band(), Some(TimeBand::Afternoon));
    assert_eq!(bookings[1].display_band(), Some(TimeBand::Evening));
}

#[test_log::test]
fn malformed_hours_fall_back_to_default_schedule() {
    let venue = VenueConfig::from_json(
        r#"{
            "hours": {"monday": [{"open": "11:00", "close": "24:30"}]},
            "capacity": {"morning": 24, "afternoon": 32, "evening": 40, "count_by": "seats"}
        }"#,
    )
    .expect("valid venue document");

    let hours = WeeklyHours::from_config_or_default(&venue.hours);

    assert_eq!(hours, WeeklyHours::default());
    assert!(!hours.is_open(date(2024, 1, 7), TimeOfDay::new(12, 0)));
}

#[test_log::test]
fn maintenance_schedule_expands_onto_the_calendar() {
    // Deep clean every Monday and Thursday until the end of January.
    let pattern = RecurrencePattern::custom()
        .with_custom_day_names(&["monday", "thursday"])
        .expect("known weekday names")
        .with_end_date(date(2024, 1, 31));

    let upcoming = next_occurrences(date(2024, 1, 1), &pattern, 4).expect("valid pattern");
    assert_eq!(
        upcoming
            .occurrences
            .iter()
            .map(|o| o.date)
            .collect::<Vec<_>>(),
        vec![
            date(2024, 1, 1),
            date(2024, 1, 4),
            date(2024, 1, 8),
            date(2024, 1, 11),
        ]
    );

    // The calendar view asks for one week's worth.
    let week = expand_in_range(
        date(2024, 1, 1),
        &pattern,
        date(2024, 1, 8),
        date(2024, 1, 14),
    )
    .expect("valid pattern");
    assert_eq!(week.dates, vec![date(2024, 1, 8), date(2024, 1, 11)]);
    assert!(!week.truncated);
}

#[test_log::test]
fn badge_rendering_counts_bookings_when_configured() {
    let friday = date(2024, 1, 12);
    let bookings = [
        BookingInterval::new(660, 750, 8).expect("valid booking"),
        BookingInterval::new(700, 790, 2).expect("valid booking"),
    ];
    let limits = BandLimits {
        morning: 10,
        afternoon: 10,
        evening: 10,
    };

    let by_seats = compute_capacity(friday, &bookings, limits, CountBy::Seats);
    let by_bookings = compute_capacity(friday, &bookings, limits, CountBy::Bookings);

    assert_eq!(by_seats[0].occupied, 10);
    assert_eq!(by_bookings[0].occupied, 2);
}
