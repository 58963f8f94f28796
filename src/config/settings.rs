//! Codec between [`RateConfig`] and the app's key-value settings store.
//!
//! The app persists the rate configuration as flat string scalars. This
//! module parses that map into a validated [`RateConfig`] and serializes a
//! configuration back, with an exact numeric round-trip.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

use super::types::{parse_hhmm, NightOtRule, RateConfig};

/// The settings keys under which the rate configuration is persisted.
pub mod keys {
    /// Whether the overtime threshold is active.
    pub const OT_THRESHOLD_ENABLED: &str = "ot_threshold_enabled";
    /// The overtime threshold in hours.
    pub const OT_THRESHOLD_HOURS: &str = "ot_threshold_hours";
    /// Weekday overtime percentage.
    pub const OT_RATE_WEEKDAY: &str = "ot_rate_weekday";
    /// Saturday overtime percentage.
    pub const OT_RATE_SATURDAY: &str = "ot_rate_saturday";
    /// Sunday overtime percentage.
    pub const OT_RATE_SUNDAY: &str = "ot_rate_sunday";
    /// Public-holiday overtime percentage.
    pub const OT_RATE_HOLIDAY: &str = "ot_rate_holiday";
    /// Weekday overtime percentage beyond the threshold.
    pub const OT_RATE_WEEKDAY_TIER2: &str = "ot_rate_weekday_tier2";
    /// Saturday overtime percentage beyond the threshold.
    pub const OT_RATE_SATURDAY_TIER2: &str = "ot_rate_saturday_tier2";
    /// Sunday overtime percentage beyond the threshold.
    pub const OT_RATE_SUNDAY_TIER2: &str = "ot_rate_sunday_tier2";
    /// Public-holiday overtime percentage beyond the threshold.
    pub const OT_RATE_HOLIDAY_TIER2: &str = "ot_rate_holiday_tier2";
    /// Whether night-work premiums are active.
    pub const NIGHT_WORK_ENABLED: &str = "night_work_enabled";
    /// Night window start, "HH:MM".
    pub const NIGHT_START_TIME: &str = "night_start_time";
    /// Night window end, "HH:MM".
    pub const NIGHT_END_TIME: &str = "night_end_time";
    /// Night premium percentage.
    pub const NIGHT_WORK_RATE: &str = "night_work_rate";
    /// The base/sum/multiply/fixed combination rule.
    pub const NIGHT_OT_CALCULATION_RULE: &str = "night_ot_calculation_rule";
    /// Fixed percentage for regular night hours.
    pub const FIXED_RATE_STANDARD_NIGHT: &str = "fixed_rate_standard_night";
    /// Fixed percentage for weekday overtime night hours.
    pub const FIXED_RATE_OT_WEEKDAY_NIGHT: &str = "fixed_rate_ot_weekday_night";
    /// Fixed percentage for Saturday overtime night hours.
    pub const FIXED_RATE_OT_SATURDAY_NIGHT: &str = "fixed_rate_ot_saturday_night";
    /// Fixed percentage for Sunday overtime night hours.
    pub const FIXED_RATE_OT_SUNDAY_NIGHT: &str = "fixed_rate_ot_sunday_night";
    /// Fixed percentage for public-holiday overtime night hours.
    pub const FIXED_RATE_OT_HOLIDAY_NIGHT: &str = "fixed_rate_ot_holiday_night";
}

/// Every key this codec reads or writes.
const KNOWN_KEYS: [&str; 20] = [
    keys::OT_THRESHOLD_ENABLED,
    keys::OT_THRESHOLD_HOURS,
    keys::OT_RATE_WEEKDAY,
    keys::OT_RATE_SATURDAY,
    keys::OT_RATE_SUNDAY,
    keys::OT_RATE_HOLIDAY,
    keys::OT_RATE_WEEKDAY_TIER2,
    keys::OT_RATE_SATURDAY_TIER2,
    keys::OT_RATE_SUNDAY_TIER2,
    keys::OT_RATE_HOLIDAY_TIER2,
    keys::NIGHT_WORK_ENABLED,
    keys::NIGHT_START_TIME,
    keys::NIGHT_END_TIME,
    keys::NIGHT_WORK_RATE,
    keys::NIGHT_OT_CALCULATION_RULE,
    keys::FIXED_RATE_STANDARD_NIGHT,
    keys::FIXED_RATE_OT_WEEKDAY_NIGHT,
    keys::FIXED_RATE_OT_SATURDAY_NIGHT,
    keys::FIXED_RATE_OT_SUNDAY_NIGHT,
    keys::FIXED_RATE_OT_HOLIDAY_NIGHT,
];

/// Loads a [`RateConfig`] from the flat settings map.
///
/// Keys the app has never written fall back to the field's default, matching
/// the first-run behavior where the configuration is seeded with defaults. A
/// key that is present but unparseable fails with
/// [`EngineError::InvalidConfiguration`] so the settings UI can surface the
/// offending field; a bad value is never silently coerced. Keys the codec
/// does not recognize are logged and ignored.
///
/// The returned configuration has been validated.
///
/// # Example
///
/// ```
/// use accshift_engine::config::{keys, load_rate_config};
/// use std::collections::HashMap;
///
/// let mut settings = HashMap::new();
/// settings.insert(keys::OT_RATE_WEEKDAY.to_string(), "160".to_string());
///
/// let config = load_rate_config(&settings).unwrap();
/// assert_eq!(config.ot_rates.weekday.base.to_string(), "160");
/// ```
pub fn load_rate_config(settings: &HashMap<String, String>) -> EngineResult<RateConfig> {
    for key in settings.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn!(key = %key, "ignoring unknown settings key");
        }
    }

    let mut config = RateConfig::default();

    if let Some(value) = settings.get(keys::OT_THRESHOLD_ENABLED) {
        config.ot_threshold_enabled = parse_bool(keys::OT_THRESHOLD_ENABLED, value)?;
    }
    if let Some(value) = settings.get(keys::OT_THRESHOLD_HOURS) {
        config.ot_threshold_hours = parse_decimal(keys::OT_THRESHOLD_HOURS, value)?;
    }

    let rate_slots: [(&str, &mut Decimal); 14] = [
        (keys::OT_RATE_WEEKDAY, &mut config.ot_rates.weekday.base),
        (keys::OT_RATE_SATURDAY, &mut config.ot_rates.saturday.base),
        (keys::OT_RATE_SUNDAY, &mut config.ot_rates.sunday.base),
        (keys::OT_RATE_HOLIDAY, &mut config.ot_rates.holiday.base),
        (keys::OT_RATE_WEEKDAY_TIER2, &mut config.ot_rates.weekday.tier2),
        (keys::OT_RATE_SATURDAY_TIER2, &mut config.ot_rates.saturday.tier2),
        (keys::OT_RATE_SUNDAY_TIER2, &mut config.ot_rates.sunday.tier2),
        (keys::OT_RATE_HOLIDAY_TIER2, &mut config.ot_rates.holiday.tier2),
        (keys::NIGHT_WORK_RATE, &mut config.night_work_rate),
        (
            keys::FIXED_RATE_STANDARD_NIGHT,
            &mut config.fixed_night_rates.standard,
        ),
        (
            keys::FIXED_RATE_OT_WEEKDAY_NIGHT,
            &mut config.fixed_night_rates.ot_weekday,
        ),
        (
            keys::FIXED_RATE_OT_SATURDAY_NIGHT,
            &mut config.fixed_night_rates.ot_saturday,
        ),
        (
            keys::FIXED_RATE_OT_SUNDAY_NIGHT,
            &mut config.fixed_night_rates.ot_sunday,
        ),
        (
            keys::FIXED_RATE_OT_HOLIDAY_NIGHT,
            &mut config.fixed_night_rates.ot_holiday,
        ),
    ];
    for (key, slot) in rate_slots {
        if let Some(value) = settings.get(key) {
            *slot = parse_decimal(key, value)?;
        }
    }

    if let Some(value) = settings.get(keys::NIGHT_WORK_ENABLED) {
        config.night_work_enabled = parse_bool(keys::NIGHT_WORK_ENABLED, value)?;
    }
    if let Some(value) = settings.get(keys::NIGHT_START_TIME) {
        config.night_window.start = parse_time(keys::NIGHT_START_TIME, value)?;
    }
    if let Some(value) = settings.get(keys::NIGHT_END_TIME) {
        config.night_window.end = parse_time(keys::NIGHT_END_TIME, value)?;
    }
    if let Some(value) = settings.get(keys::NIGHT_OT_CALCULATION_RULE) {
        config.night_ot_rule = NightOtRule::parse(value).ok_or_else(|| {
            EngineError::InvalidConfiguration {
                key: keys::NIGHT_OT_CALCULATION_RULE.to_string(),
                value: value.clone(),
                message: "expected one of base, sum, multiply, fixed".to_string(),
            }
        })?;
    }

    config.validate()?;
    debug!(
        threshold_enabled = config.ot_threshold_enabled,
        night_enabled = config.night_work_enabled,
        rule = config.night_ot_rule.as_setting(),
        "loaded rate configuration"
    );
    Ok(config)
}

/// Serializes a [`RateConfig`] into the flat settings map.
///
/// Every numeric value is written with its exact decimal representation, so
/// loading the result back yields an identical configuration.
pub fn store_rate_config(config: &RateConfig) -> HashMap<String, String> {
    let mut settings = HashMap::new();
    let mut put = |key: &str, value: String| {
        settings.insert(key.to_string(), value);
    };

    put(
        keys::OT_THRESHOLD_ENABLED,
        config.ot_threshold_enabled.to_string(),
    );
    put(
        keys::OT_THRESHOLD_HOURS,
        config.ot_threshold_hours.to_string(),
    );
    put(keys::OT_RATE_WEEKDAY, config.ot_rates.weekday.base.to_string());
    put(
        keys::OT_RATE_SATURDAY,
        config.ot_rates.saturday.base.to_string(),
    );
    put(keys::OT_RATE_SUNDAY, config.ot_rates.sunday.base.to_string());
    put(keys::OT_RATE_HOLIDAY, config.ot_rates.holiday.base.to_string());
    put(
        keys::OT_RATE_WEEKDAY_TIER2,
        config.ot_rates.weekday.tier2.to_string(),
    );
    put(
        keys::OT_RATE_SATURDAY_TIER2,
        config.ot_rates.saturday.tier2.to_string(),
    );
    put(
        keys::OT_RATE_SUNDAY_TIER2,
        config.ot_rates.sunday.tier2.to_string(),
    );
    put(
        keys::OT_RATE_HOLIDAY_TIER2,
        config.ot_rates.holiday.tier2.to_string(),
    );
    put(
        keys::NIGHT_WORK_ENABLED,
        config.night_work_enabled.to_string(),
    );
    put(keys::NIGHT_START_TIME, config.night_window.start_hhmm());
    put(keys::NIGHT_END_TIME, config.night_window.end_hhmm());
    put(keys::NIGHT_WORK_RATE, config.night_work_rate.to_string());
    put(
        keys::NIGHT_OT_CALCULATION_RULE,
        config.night_ot_rule.as_setting().to_string(),
    );
    put(
        keys::FIXED_RATE_STANDARD_NIGHT,
        config.fixed_night_rates.standard.to_string(),
    );
    put(
        keys::FIXED_RATE_OT_WEEKDAY_NIGHT,
        config.fixed_night_rates.ot_weekday.to_string(),
    );
    put(
        keys::FIXED_RATE_OT_SATURDAY_NIGHT,
        config.fixed_night_rates.ot_saturday.to_string(),
    );
    put(
        keys::FIXED_RATE_OT_SUNDAY_NIGHT,
        config.fixed_night_rates.ot_sunday.to_string(),
    );
    put(
        keys::FIXED_RATE_OT_HOLIDAY_NIGHT,
        config.fixed_night_rates.ot_holiday.to_string(),
    );

    settings
}

/// Parses a persisted decimal scalar, rejecting negatives.
fn parse_decimal(key: &str, value: &str) -> EngineResult<Decimal> {
    let parsed =
        Decimal::from_str(value.trim()).map_err(|_| EngineError::InvalidConfiguration {
            key: key.to_string(),
            value: value.to_string(),
            message: "not a number".to_string(),
        })?;
    if parsed < Decimal::ZERO {
        return Err(EngineError::InvalidConfiguration {
            key: key.to_string(),
            value: value.to_string(),
            message: "must not be negative".to_string(),
        });
    }
    Ok(parsed)
}

/// Parses a persisted boolean scalar.
fn parse_bool(key: &str, value: &str) -> EngineResult<bool> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(EngineError::InvalidConfiguration {
            key: key.to_string(),
            value: value.to_string(),
            message: "expected true or false".to_string(),
        }),
    }
}

/// Parses a persisted "HH:MM" scalar.
fn parse_time(key: &str, value: &str) -> EngineResult<chrono::NaiveTime> {
    parse_hhmm(value.trim()).ok_or_else(|| EngineError::InvalidConfiguration {
        key: key.to_string(),
        value: value.to_string(),
        message: "expected a time in HH:MM format".to_string(),
    })
}
