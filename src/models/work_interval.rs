//! Work interval model.
//!
//! This module defines the [`WorkInterval`] struct representing a contiguous
//! stretch of worked time, as recorded by the attendance screens.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a contiguous interval of worked time.
///
/// Whether the interval counts as night work is not stored; it is derived
/// against the configured night window by
/// [`calculation::overlaps_night`](crate::calculation::overlaps_night).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// The start of the interval.
    pub start: NaiveDateTime,
    /// The end of the interval (always after `start`).
    pub end: NaiveDateTime,
}

impl WorkInterval {
    /// Creates a new interval, rejecting one whose end is not after its start.
    ///
    /// # Examples
    ///
    /// ```
    /// use accshift_engine::models::WorkInterval;
    /// use chrono::NaiveDateTime;
    ///
    /// let start = NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let end = NaiveDateTime::parse_from_str("2026-01-15 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    ///
    /// let interval = WorkInterval::new(start, end).unwrap();
    /// assert_eq!(interval.hours().to_string(), "9");
    ///
    /// assert!(WorkInterval::new(end, start).is_err());
    /// ```
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Self> {
        if end <= start {
            return Err(EngineError::InvalidInterval {
                message: format!("end time {} is not after start time {}", end, start),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns the duration of the interval in hours.
    ///
    /// Computed from whole minutes, so quarter-hour attendance records come
    /// out exact.
    pub fn hours(&self) -> Decimal {
        let duration_minutes = (self.end - self.start).num_minutes();
        Decimal::new(duration_minutes, 0) / Decimal::new(60, 0)
    }
}
