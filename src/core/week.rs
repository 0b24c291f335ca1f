//! Week clock - derives the raffle's week number from a wall-clock instant.
//!
//! This is a simple non-ISO scheme in which week 1 always contains January
//! 1st: fractional days elapsed since the start of the year, plus the weekday
//! index of January 1st (0 = Sunday), plus one, divided by 7, rounded up.
//! The fraction means the time of day participates in the ceiling, which the
//! sign-in and drawing flows both rely on for consistency with historically
//! recorded week numbers.

use chrono::{DateTime, Datelike, Timelike, Utc};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Computes the 1-based week-of-year number for the given instant.
///
/// Pure function of its argument; [`current_week`] is the real-time wrapper,
/// and tests pass fixed instants here instead of stubbing a clock.
#[must_use]
pub fn week_number_at(now: DateTime<Utc>) -> i32 {
    let date = now.date_naive();
    // Ordinal 1 is valid in every year chrono can represent.
    #[allow(clippy::expect_used)]
    let start_of_year = date.with_ordinal(1).expect("January 1st exists");

    let elapsed_days =
        f64::from(date.ordinal0()) + f64::from(now.num_seconds_from_midnight()) / SECONDS_PER_DAY;
    let offset = f64::from(start_of_year.weekday().num_days_from_sunday());

    // Cast safety: the quotient stays below 55 for any representable date.
    #[allow(clippy::cast_possible_truncation)]
    let week = ((elapsed_days + offset + 1.0) / 7.0).ceil() as i32;
    week
}

/// Returns the week number of the current instant.
#[must_use]
pub fn current_week() -> i32 {
    week_number_at(Utc::now())
}
