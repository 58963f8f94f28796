//! Night window classification and overlap.
//!
//! This module decides which parts of a work interval fall inside the
//! configured night window, including windows that wrap past midnight.

use chrono::{Duration, NaiveTime};
use rust_decimal::Decimal;

use crate::config::NightWindow;
use crate::models::WorkInterval;

/// Checks whether a time of day falls inside the night window.
///
/// The window is half-open: its start is night, its end is not. A window
/// whose end is at or before its start wraps past midnight.
///
/// # Example
///
/// ```
/// use accshift_engine::calculation::is_night_time;
/// use accshift_engine::config::NightWindow;
/// use chrono::NaiveTime;
///
/// let window = NightWindow::from_hhmm("22:00", "05:00").unwrap();
/// assert!(is_night_time(NaiveTime::from_hms_opt(23, 30, 0).unwrap(), &window));
/// assert!(is_night_time(NaiveTime::from_hms_opt(2, 0, 0).unwrap(), &window));
/// assert!(!is_night_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap(), &window));
/// ```
pub fn is_night_time(time: NaiveTime, window: &NightWindow) -> bool {
    window.contains(time)
}

/// Returns the hours of an interval that fall inside the night window.
///
/// The interval may span several days; each calendar night it touches is
/// intersected separately and the overlaps are summed. Hours are exact to
/// the minute, matching [`WorkInterval::hours`].
///
/// # Example
///
/// ```
/// use accshift_engine::calculation::night_hours;
/// use accshift_engine::config::NightWindow;
/// use accshift_engine::models::WorkInterval;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let window = NightWindow::from_hhmm("22:00", "06:00").unwrap();
/// let interval = WorkInterval::new(
///     NaiveDateTime::parse_from_str("2026-01-15 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2026-01-16 04:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// ).unwrap();
///
/// // 22:00-04:00 of the 20:00-04:00 interval is night
/// assert_eq!(night_hours(&interval, &window), Decimal::new(60, 1));
/// ```
pub fn night_hours(interval: &WorkInterval, window: &NightWindow) -> Decimal {
    let mut night_minutes: i64 = 0;

    // A wrapping window that started the previous evening can still cover
    // the first hours of the interval, so start one day early.
    let mut day = interval.start.date() - Duration::days(1);
    let last_day = interval.end.date();

    while day <= last_day {
        let window_start = day.and_time(window.start);
        let window_end = if window.wraps_midnight() {
            (day + Duration::days(1)).and_time(window.end)
        } else {
            day.and_time(window.end)
        };

        let overlap_start = interval.start.max(window_start);
        let overlap_end = interval.end.min(window_end);
        if overlap_end > overlap_start {
            night_minutes += (overlap_end - overlap_start).num_minutes();
        }

        day = day + Duration::days(1);
    }

    Decimal::new(night_minutes, 0) / Decimal::new(60, 0)
}

/// Checks whether any part of the interval falls inside the night window.
///
/// This is the derived `is_night` attribute of a work interval.
pub fn overlaps_night(interval: &WorkInterval, window: &NightWindow) -> bool {
    night_hours(interval, window) > Decimal::ZERO
}
