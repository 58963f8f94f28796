//! Night premium combination.
//!
//! This module applies the configured combination rule to a base overtime
//! percentage when the hours fall inside the night window.

use rust_decimal::Decimal;

use crate::config::{NightOtRule, RateConfig};
use crate::models::DayType;

/// Combines a base percentage with the night premium per the configured rule.
///
/// With base rate `B` and premium `N = night_work_rate`:
///
/// - [`NightOtRule::Base`]: `B`, the premium is ignored;
/// - [`NightOtRule::Sum`]: `B + N`;
/// - [`NightOtRule::Multiply`]: `B * (1 + N/100)`;
/// - [`NightOtRule::Fixed`]: the flatly configured percentage for the day
///   type (the standard-night rate when `overtime` is false), ignoring both
///   `B` and `N`.
///
/// The caller is responsible for deciding that the hours are night hours;
/// this function only performs the combination.
///
/// # Examples
///
/// ```
/// use accshift_engine::calculation::combine_night_rate;
/// use accshift_engine::config::{NightOtRule, RateConfig};
/// use accshift_engine::models::DayType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut config = RateConfig::default();
/// config.night_work_rate = Decimal::from_str("30").unwrap();
/// config.night_ot_rule = NightOtRule::Sum;
///
/// let combined = combine_night_rate(
///     Decimal::from_str("150").unwrap(),
///     DayType::Weekday,
///     true,
///     &config,
/// );
/// assert_eq!(combined, Decimal::from_str("180").unwrap());
/// ```
pub fn combine_night_rate(
    base: Decimal,
    day_type: DayType,
    overtime: bool,
    config: &RateConfig,
) -> Decimal {
    match config.night_ot_rule {
        NightOtRule::Base => base,
        NightOtRule::Sum => base + config.night_work_rate,
        NightOtRule::Multiply => {
            base * (Decimal::ONE + config.night_work_rate / Decimal::ONE_HUNDRED)
        }
        NightOtRule::Fixed => {
            if overtime {
                config.fixed_night_rates.ot_rate_for(day_type)
            } else {
                config.fixed_night_rates.standard
            }
        }
    }
}
