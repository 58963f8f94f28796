//! Holiday calendar and day classification.
//!
//! This module contains the [`Holiday`] and [`HolidayCalendar`] types that
//! supply the day-type classification consumed by the rate resolver.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::DayType;

/// Represents a public holiday known to the app.
///
/// # Example
///
/// ```
/// use accshift_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday.
    pub name: String,
}

/// The set of public holidays relevant to a calculation.
///
/// Classifying a date requires knowing which dates the user has marked as
/// holidays; the surrounding app maintains that list and passes it in as an
/// explicit value.
///
/// # Example
///
/// ```
/// use accshift_engine::models::{DayType, Holiday, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar {
///     holidays: vec![Holiday {
///         date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///         name: "New Year's Day".to_string(),
///     }],
/// };
///
/// // 2026-01-01 is a Thursday, but the holiday wins.
/// let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert_eq!(calendar.day_type_for(date), DayType::Holiday);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    /// The public holidays, in no particular order.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Checks whether a given date is a public holiday.
    ///
    /// # Example
    ///
    /// ```
    /// use accshift_engine::models::{Holiday, HolidayCalendar};
    /// use chrono::NaiveDate;
    ///
    /// let calendar = HolidayCalendar {
    ///     holidays: vec![Holiday {
    ///         date: NaiveDate::from_ymd_opt(2026, 5, 5).unwrap(),
    ///         name: "Children's Day".to_string(),
    ///     }],
    /// };
    ///
    /// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 5, 5).unwrap()));
    /// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 5, 6).unwrap()));
    /// ```
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }

    /// Classifies a date into exactly one [`DayType`].
    ///
    /// Holidays take precedence over the weekend classification, so a
    /// holiday falling on a Sunday is [`DayType::Holiday`].
    pub fn day_type_for(&self, date: NaiveDate) -> DayType {
        if self.is_holiday(date) {
            return DayType::Holiday;
        }
        match date.weekday() {
            Weekday::Sat => DayType::Saturday,
            Weekday::Sun => DayType::Sunday,
            _ => DayType::Weekday,
        }
    }
}
