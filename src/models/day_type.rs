//! Day classification for rate table lookup.

use serde::{Deserialize, Serialize};

/// Represents the type of day a shift falls on.
///
/// Every calendar date maps to exactly one `DayType`, which selects the
/// applicable row of the overtime rate table. Public holidays take
/// precedence over the weekend classification.
///
/// # Example
///
/// ```
/// use accshift_engine::models::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
    /// A configured public holiday, regardless of weekday.
    Holiday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}
