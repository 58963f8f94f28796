//! Typed rate configuration structures.
//!
//! This module contains the strongly-typed configuration that the settings
//! screens edit and the rate resolver consumes. The configuration is always
//! passed to the resolver as an explicit value; the engine holds no global
//! state.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::DayType;

use super::settings::keys;

/// The rule for combining the base overtime rate with the night premium.
///
/// When overtime hours fall inside the night window, the base overtime
/// percentage `B` and the night premium `N` are combined according to this
/// rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NightOtRule {
    /// The night premium is ignored; the base rate applies unchanged.
    Base,
    /// `B + N`.
    Sum,
    /// `B * (1 + N/100)`.
    Multiply,
    /// A flatly configured percentage per day type, ignoring both `B` and `N`.
    Fixed,
}

impl NightOtRule {
    /// Parses the rule from its persisted settings value.
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value {
            "base" => Some(NightOtRule::Base),
            "sum" => Some(NightOtRule::Sum),
            "multiply" => Some(NightOtRule::Multiply),
            "fixed" => Some(NightOtRule::Fixed),
            _ => None,
        }
    }

    /// Returns the persisted settings value for the rule.
    pub(crate) fn as_setting(&self) -> &'static str {
        match self {
            NightOtRule::Base => "base",
            NightOtRule::Sum => "sum",
            NightOtRule::Multiply => "multiply",
            NightOtRule::Fixed => "fixed",
        }
    }
}

/// The daily window during which hours count as night work.
///
/// Stored as "HH:MM" strings. A window whose end is at or before its start
/// wraps past midnight, so "22:00"–"05:00" covers late evening and the early
/// morning of the next day.
///
/// # Example
///
/// ```
/// use accshift_engine::config::NightWindow;
/// use chrono::NaiveTime;
///
/// let window = NightWindow::from_hhmm("22:00", "05:00").unwrap();
/// assert!(window.contains(NaiveTime::from_hms_opt(23, 30, 0).unwrap()));
/// assert!(window.contains(NaiveTime::from_hms_opt(2, 0, 0).unwrap()));
/// assert!(!window.contains(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightWindow {
    /// The start of the night window (inclusive).
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// The end of the night window (exclusive).
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl NightWindow {
    /// Creates a window from "HH:MM" strings.
    ///
    /// Returns `None` if either string does not parse as a time of day.
    pub fn from_hhmm(start: &str, end: &str) -> Option<Self> {
        let start = parse_hhmm(start)?;
        let end = parse_hhmm(end)?;
        Some(Self { start, end })
    }

    /// Returns true if the window wraps past midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.end <= self.start
    }

    /// Checks whether a time of day falls inside the window.
    ///
    /// The window is half-open: the start is included, the end is not.
    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.wraps_midnight() {
            time >= self.start || time < self.end
        } else {
            time >= self.start && time < self.end
        }
    }

    /// Formats the window start as its persisted "HH:MM" value.
    pub fn start_hhmm(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    /// Formats the window end as its persisted "HH:MM" value.
    pub fn end_hhmm(&self) -> String {
        self.end.format("%H:%M").to_string()
    }
}

/// Parses an "HH:MM" time-of-day string.
pub(crate) fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Serde adapter storing a [`NaiveTime`] as "HH:MM".
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&value, "%H:%M").map_err(serde::de::Error::custom)
    }
}

/// The overtime percentages for one day type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRate {
    /// The percentage applied to overtime hours up to the threshold.
    pub base: Decimal,
    /// The percentage applied to overtime hours beyond the threshold.
    pub tier2: Decimal,
}

/// The overtime rate table, one row per day type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRates {
    /// Rates for Monday through Friday.
    pub weekday: OvertimeRate,
    /// Rates for Saturday.
    pub saturday: OvertimeRate,
    /// Rates for Sunday.
    pub sunday: OvertimeRate,
    /// Rates for public holidays.
    pub holiday: OvertimeRate,
}

impl OvertimeRates {
    /// Returns the rate table row for a day type.
    pub fn rate_for(&self, day_type: DayType) -> &OvertimeRate {
        match day_type {
            DayType::Weekday => &self.weekday,
            DayType::Saturday => &self.saturday,
            DayType::Sunday => &self.sunday,
            DayType::Holiday => &self.holiday,
        }
    }
}

/// The flat night percentages used when the rule is [`NightOtRule::Fixed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedNightRates {
    /// Regular (non-overtime) hours inside the night window.
    pub standard: Decimal,
    /// Weekday overtime inside the night window.
    pub ot_weekday: Decimal,
    /// Saturday overtime inside the night window.
    pub ot_saturday: Decimal,
    /// Sunday overtime inside the night window.
    pub ot_sunday: Decimal,
    /// Public-holiday overtime inside the night window.
    pub ot_holiday: Decimal,
}

impl FixedNightRates {
    /// Returns the fixed overtime-night percentage for a day type.
    pub fn ot_rate_for(&self, day_type: DayType) -> Decimal {
        match day_type {
            DayType::Weekday => self.ot_weekday,
            DayType::Saturday => self.ot_saturday,
            DayType::Sunday => self.ot_sunday,
            DayType::Holiday => self.ot_holiday,
        }
    }
}

/// The complete rate configuration edited by the settings screens.
///
/// The configuration is created with [`Default`] values on first run and
/// thereafter mutated only through the settings UI, which persists it via
/// [`store_rate_config`](super::store_rate_config).
///
/// # Example
///
/// ```
/// use accshift_engine::config::RateConfig;
///
/// let config = RateConfig::default();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Whether the overtime threshold (and with it the tier-2 table) is active.
    pub ot_threshold_enabled: bool,
    /// The number of overtime hours paid at the base rate before tier 2 applies.
    pub ot_threshold_hours: Decimal,
    /// The overtime rate table.
    pub ot_rates: OvertimeRates,
    /// Whether night-work premiums are active.
    pub night_work_enabled: bool,
    /// The daily night window.
    pub night_window: NightWindow,
    /// The night premium percentage `N`.
    pub night_work_rate: Decimal,
    /// The rule for combining the base overtime rate with the night premium.
    pub night_ot_rule: NightOtRule,
    /// Flat night percentages used when the rule is [`NightOtRule::Fixed`].
    pub fixed_night_rates: FixedNightRates,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            ot_threshold_enabled: false,
            ot_threshold_hours: Decimal::new(8, 0),
            ot_rates: OvertimeRates {
                weekday: OvertimeRate {
                    base: Decimal::new(150, 0),
                    tier2: Decimal::new(200, 0),
                },
                saturday: OvertimeRate {
                    base: Decimal::new(150, 0),
                    tier2: Decimal::new(200, 0),
                },
                sunday: OvertimeRate {
                    base: Decimal::new(200, 0),
                    tier2: Decimal::new(250, 0),
                },
                holiday: OvertimeRate {
                    base: Decimal::new(200, 0),
                    tier2: Decimal::new(250, 0),
                },
            },
            night_work_enabled: false,
            night_window: NightWindow {
                start: NaiveTime::from_hms_opt(22, 0, 0).expect("valid time"),
                end: NaiveTime::from_hms_opt(6, 0, 0).expect("valid time"),
            },
            night_work_rate: Decimal::new(50, 0),
            night_ot_rule: NightOtRule::Sum,
            fixed_night_rates: FixedNightRates {
                standard: Decimal::new(150, 0),
                ot_weekday: Decimal::new(200, 0),
                ot_saturday: Decimal::new(200, 0),
                ot_sunday: Decimal::new(250, 0),
                ot_holiday: Decimal::new(250, 0),
            },
        }
    }
}

impl RateConfig {
    /// Validates the configuration invariants.
    ///
    /// Called after every settings load; the resolver assumes a validated
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] naming the offending
    /// settings key when:
    /// - the threshold is enabled but not positive;
    /// - any rate-table or fixed-night percentage is not positive;
    /// - the night premium is negative;
    /// - the night window start equals its end.
    pub fn validate(&self) -> EngineResult<()> {
        if self.ot_threshold_enabled && self.ot_threshold_hours <= Decimal::ZERO {
            return Err(invalid(
                keys::OT_THRESHOLD_HOURS,
                self.ot_threshold_hours,
                "must be positive when the threshold is enabled",
            ));
        }

        let rate_fields = [
            (keys::OT_RATE_WEEKDAY, self.ot_rates.weekday.base),
            (keys::OT_RATE_WEEKDAY_TIER2, self.ot_rates.weekday.tier2),
            (keys::OT_RATE_SATURDAY, self.ot_rates.saturday.base),
            (keys::OT_RATE_SATURDAY_TIER2, self.ot_rates.saturday.tier2),
            (keys::OT_RATE_SUNDAY, self.ot_rates.sunday.base),
            (keys::OT_RATE_SUNDAY_TIER2, self.ot_rates.sunday.tier2),
            (keys::OT_RATE_HOLIDAY, self.ot_rates.holiday.base),
            (keys::OT_RATE_HOLIDAY_TIER2, self.ot_rates.holiday.tier2),
            (keys::FIXED_RATE_STANDARD_NIGHT, self.fixed_night_rates.standard),
            (keys::FIXED_RATE_OT_WEEKDAY_NIGHT, self.fixed_night_rates.ot_weekday),
            (keys::FIXED_RATE_OT_SATURDAY_NIGHT, self.fixed_night_rates.ot_saturday),
            (keys::FIXED_RATE_OT_SUNDAY_NIGHT, self.fixed_night_rates.ot_sunday),
            (keys::FIXED_RATE_OT_HOLIDAY_NIGHT, self.fixed_night_rates.ot_holiday),
        ];
        for (key, value) in rate_fields {
            if value <= Decimal::ZERO {
                return Err(invalid(key, value, "must be positive"));
            }
        }

        if self.night_work_rate < Decimal::ZERO {
            return Err(invalid(
                keys::NIGHT_WORK_RATE,
                self.night_work_rate,
                "must not be negative",
            ));
        }

        if self.night_window.start == self.night_window.end {
            return Err(EngineError::InvalidConfiguration {
                key: keys::NIGHT_END_TIME.to_string(),
                value: self.night_window.end_hhmm(),
                message: "night window must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn invalid(key: &str, value: Decimal, message: &str) -> EngineError {
    EngineError::InvalidConfiguration {
        key: key.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}
