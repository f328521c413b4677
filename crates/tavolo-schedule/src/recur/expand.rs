//! Recurrence expansion: walking a pattern forward into concrete dates.

use chrono::{Datelike, Days, Months, NaiveDate};
use tavolo_core::time::Weekday;

use super::{Frequency, Occurrence, RecurrencePattern};
use crate::error::ScheduleResult;

/// Hard iteration cap guaranteeing termination on pathological patterns
/// (e.g. a weekly pattern with no weekdays and no end condition).
pub const MAX_ITERATIONS: u32 = 1000;

/// Result of a count-bounded expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Collected occurrences, in strictly increasing date order.
    pub occurrences: Vec<Occurrence>,

    /// True when the walk hit [`MAX_ITERATIONS`] before finishing; the
    /// occurrences are then a partial prefix of the pattern.
    pub truncated: bool,
}

/// Result of a range-bounded expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeExpansion {
    /// Matching dates inside the requested range, in increasing order.
    pub dates: Vec<NaiveDate>,

    /// True when the walk hit [`MAX_ITERATIONS`] before finishing.
    pub truncated: bool,
}

/// Forward walk over a pattern's candidate dates.
///
/// Day-stepped frequencies advance from the previous candidate; month- and
/// year-stepped frequencies are recomputed from the anchor so the anchor's
/// day-of-month survives clamping in short months (Jan 31 → Feb 29 → Mar 31).
struct Walk<'a> {
    pattern: &'a RecurrencePattern,
    anchor: NaiveDate,
    current: NaiveDate,
    steps: u32,
}

impl<'a> Walk<'a> {
    fn new(pattern: &'a RecurrencePattern, anchor: NaiveDate) -> Self {
        Self {
            pattern,
            anchor,
            current: anchor,
            steps: 0,
        }
    }

    /// Whether a candidate date satisfies the pattern's selector. Stepped
    /// frequencies (daily, plain monthly, yearly) match every candidate,
    /// since their stepping already encodes the selection.
    fn matches(&self, date: NaiveDate) -> bool {
        match self.pattern.frequency {
            Frequency::Daily | Frequency::Yearly => true,
            Frequency::Weekly => self.pattern.days_of_week.contains(&Weekday::of(date)),
            Frequency::Monthly => self
                .pattern
                .day_of_month
                .is_none_or(|day| date.day() == day),
            Frequency::Custom => {
                self.pattern.custom_days.is_empty()
                    || self.pattern.custom_days.contains(&Weekday::of(date))
            }
        }
    }

    /// Advances to the next candidate date, or `None` once calendar
    /// arithmetic overflows.
    fn advance(&mut self) -> Option<NaiveDate> {
        self.steps = self.steps.checked_add(1)?;

        let next = match self.pattern.frequency {
            Frequency::Daily => self.anchor.checked_add_days(Days::new(
                u64::from(self.steps) * u64::from(self.pattern.interval),
            )),
            Frequency::Weekly => self.current.checked_add_days(Days::new(1)),
            Frequency::Monthly => match self.pattern.day_of_month {
                // Variable month lengths: test every day for the target one.
                Some(_) => self.current.checked_add_days(Days::new(1)),
                None => self
                    .anchor
                    .checked_add_months(Months::new(self.steps.checked_mul(self.pattern.interval)?)),
            },
            Frequency::Yearly => self.anchor.checked_add_months(Months::new(
                self.steps
                    .checked_mul(self.pattern.interval)?
                    .checked_mul(12)?,
            )),
            Frequency::Custom => {
                let step = if self.pattern.custom_days.is_empty() { 7 } else { 1 };
                self.current.checked_add_days(Days::new(step))
            }
        }?;

        self.current = next;
        Some(next)
    }
}

/// ## Summary
/// Collects the next `count` occurrences of a pattern from an anchor date.
///
/// The anchor is always occurrence #1, accepted even when it fails the
/// pattern's selector; the booking product has always numbered occurrences
/// this way and callers rely on it. The walk stops early once `max_occurrences` or
/// `end_date` is reached, marking the final collected occurrence `is_last`;
/// stopping only because `count` was satisfied leaves `is_last` unset, since
/// the pattern itself continues.
///
/// ## Errors
/// Returns an error if the pattern fails [`RecurrencePattern::validate`].
pub fn next_occurrences(
    start: NaiveDate,
    pattern: &RecurrencePattern,
    count: usize,
) -> ScheduleResult<Expansion> {
    pattern.validate()?;

    let mut walk = Walk::new(pattern, start);
    let mut occurrences: Vec<Occurrence> = Vec::new();
    let mut truncated = false;
    let mut matched: u32 = 0;
    let mut date = start;
    let mut is_anchor = true;
    let mut iterations: u32 = 0;

    while occurrences.len() < count {
        if let Some(end) = pattern.end_date
            && date > end
        {
            // The pattern ran out: the previous match closes it.
            if let Some(last) = occurrences.last_mut() {
                last.is_last = true;
            }
            break;
        }

        if is_anchor || walk.matches(date) {
            if pattern.max_occurrences.is_some_and(|max| matched >= max) {
                break;
            }
            matched += 1;
            let is_last = pattern.max_occurrences.is_some_and(|max| matched == max);
            occurrences.push(Occurrence {
                date,
                number: matched,
                is_last,
            });
            if is_last {
                break;
            }
        }
        is_anchor = false;

        iterations += 1;
        if iterations >= MAX_ITERATIONS {
            truncated = true;
            tracing::warn!(
                %start,
                frequency = %pattern.frequency,
                collected = occurrences.len(),
                "recurrence walk hit the iteration cap, returning a partial result"
            );
            break;
        }

        match walk.advance() {
            Some(next) => date = next,
            None => break,
        }
    }

    Ok(Expansion {
        occurrences,
        truncated,
    })
}

/// ## Summary
/// Collects every occurrence of a pattern falling within
/// `[range_start, range_end]` (both inclusive).
///
/// Runs the same walk as [`next_occurrences`] from the anchor, so
/// `max_occurrences` bounds matches counted from the pattern's start: with a
/// limit of 3, no range, however wide, yields more than 3 dates, and a range
/// entirely past the limit yields none.
///
/// ## Errors
/// Returns an error if the pattern fails [`RecurrencePattern::validate`].
pub fn expand_in_range(
    start: NaiveDate,
    pattern: &RecurrencePattern,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> ScheduleResult<RangeExpansion> {
    pattern.validate()?;

    let mut walk = Walk::new(pattern, start);
    let mut dates = Vec::new();
    let mut truncated = false;
    let mut matched: u32 = 0;
    let mut date = start;
    let mut is_anchor = true;
    let mut iterations: u32 = 0;

    loop {
        if date > range_end {
            break;
        }
        if let Some(end) = pattern.end_date
            && date > end
        {
            break;
        }

        if is_anchor || walk.matches(date) {
            if pattern.max_occurrences.is_some_and(|max| matched >= max) {
                break;
            }
            matched += 1;
            if date >= range_start {
                dates.push(date);
            }
        }
        is_anchor = false;

        iterations += 1;
        if iterations >= MAX_ITERATIONS {
            truncated = true;
            tracing::warn!(
                %start,
                %range_end,
                frequency = %pattern.frequency,
                collected = dates.len(),
                "recurrence walk hit the iteration cap, returning a partial result"
            );
            break;
        }

        match walk.advance() {
            Some(next) => date = next,
            None => break,
        }
    }

    Ok(RangeExpansion { dates, truncated })
}

/// ## Summary
/// Next due date for a simple recurring task, without windowing.
///
/// Custom frequencies scan up to 14 days ahead for the next configured
/// weekday and default to one week out when none matches (including when no
/// custom days are configured at all).
#[must_use]
pub fn next_due(current: NaiveDate, frequency: Frequency, custom_days: &[Weekday]) -> NaiveDate {
    match frequency {
        Frequency::Daily => current.checked_add_days(Days::new(1)),
        Frequency::Weekly => current.checked_add_days(Days::new(7)),
        Frequency::Monthly => current.checked_add_months(Months::new(1)),
        Frequency::Yearly => current.checked_add_months(Months::new(12)),
        Frequency::Custom => {
            let mut found = None;
            for offset in 1..=14 {
                if let Some(next) = current.checked_add_days(Days::new(offset))
                    && custom_days.contains(&Weekday::of(next))
                {
                    found = Some(next);
                    break;
                }
            }
            found.or_else(|| current.checked_add_days(Days::new(7)))
        }
    }
    .unwrap_or(current)
}
