//! The top-level rate resolver.
//!
//! Given a day type, the overtime hours worked, whether those hours fall in
//! the night window, and the rate configuration, the resolver produces the
//! effective percentage for each tranche of hours. It is a pure function
//! invoked once per day when a payroll report is built.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RateConfig;
use crate::models::DayType;

use super::night_rate::combine_night_rate;
use super::ot_tiers::split_overtime_hours;

/// Identifies which side of the overtime threshold a tranche falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeTier {
    /// Hours up to the threshold (or all hours when the threshold is off).
    Tier1,
    /// Hours beyond the threshold.
    Tier2,
}

/// A tranche of overtime hours sharing a single effective percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTranche {
    /// The number of hours in this tranche.
    pub hours: Decimal,
    /// The percentage to multiply against the pay base for each hour.
    pub percent: Decimal,
    /// The threshold tier this tranche belongs to.
    pub tier: OvertimeTier,
}

/// The result of resolving the overtime rate for one day.
///
/// Contains at most two tranches (tier 1 and tier 2), in threshold order.
/// Consumers multiply each tranche's hours by its percentage against the
/// pay base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateResolution {
    /// The resolved tranches, tier 1 first.
    pub tranches: Vec<RateTranche>,
}

impl RateResolution {
    /// Returns the total hours across all tranches.
    pub fn total_hours(&self) -> Decimal {
        self.tranches.iter().map(|t| t.hours).sum()
    }

    /// Returns the pay units for the resolution: Σ hours × percent / 100.
    ///
    /// Multiplying this by the hourly pay base gives the amount owed.
    pub fn pay_units(&self) -> Decimal {
        self.tranches
            .iter()
            .map(|t| t.hours * t.percent / Decimal::ONE_HUNDRED)
            .sum()
    }

    /// Returns true if no hours were resolved.
    pub fn is_empty(&self) -> bool {
        self.tranches.is_empty()
    }
}

/// Resolves the effective overtime percentage(s) for one day.
///
/// The overtime hours are split at the configured threshold; each tranche
/// looks up its rate in the day-type row of the rate table, and, when night
/// work is enabled and the hours are night hours, the rate is passed through
/// the configured combination rule. With the fixed rule the flat night
/// percentage replaces the tier rate in every tranche while the tranche
/// hour split is preserved.
///
/// The function is total over its domain: non-positive hours yield an empty
/// resolution, and a validated configuration cannot make it fail.
///
/// # Examples
///
/// ```
/// use accshift_engine::calculation::resolve_overtime_rate;
/// use accshift_engine::config::RateConfig;
/// use accshift_engine::models::DayType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = RateConfig::default();
/// let resolution = resolve_overtime_rate(
///     DayType::Weekday,
///     Decimal::from_str("3").unwrap(),
///     false,
///     &config,
/// );
///
/// assert_eq!(resolution.tranches.len(), 1);
/// assert_eq!(resolution.tranches[0].percent, Decimal::from_str("150").unwrap());
/// ```
pub fn resolve_overtime_rate(
    day_type: DayType,
    ot_hours: Decimal,
    is_night: bool,
    config: &RateConfig,
) -> RateResolution {
    let split = split_overtime_hours(ot_hours, config);
    let rate = config.ot_rates.rate_for(day_type);
    let night = config.night_work_enabled && is_night;

    let mut tranches = Vec::new();

    if split.tier1_hours > Decimal::ZERO {
        let percent = if night {
            combine_night_rate(rate.base, day_type, true, config)
        } else {
            rate.base
        };
        tranches.push(RateTranche {
            hours: split.tier1_hours,
            percent,
            tier: OvertimeTier::Tier1,
        });
    }

    if split.tier2_hours > Decimal::ZERO {
        let percent = if night {
            combine_night_rate(rate.tier2, day_type, true, config)
        } else {
            rate.tier2
        };
        tranches.push(RateTranche {
            hours: split.tier2_hours,
            percent,
            tier: OvertimeTier::Tier2,
        });
    }

    RateResolution { tranches }
}

/// Resolves the percentage for regular (non-overtime) hours in the night
/// window.
///
/// Regular hours pay 100% of the base; when night work is enabled the
/// premium is applied per the configured rule, with the fixed rule using
/// the standard-night percentage.
///
/// # Example
///
/// ```
/// use accshift_engine::calculation::resolve_standard_night_rate;
/// use accshift_engine::config::RateConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut config = RateConfig::default();
/// config.night_work_enabled = true;
///
/// // Default rule is sum with a 50% premium
/// assert_eq!(
///     resolve_standard_night_rate(&config),
///     Decimal::from_str("150").unwrap()
/// );
/// ```
pub fn resolve_standard_night_rate(config: &RateConfig) -> Decimal {
    if !config.night_work_enabled {
        return Decimal::ONE_HUNDRED;
    }
    combine_night_rate(Decimal::ONE_HUNDRED, DayType::Weekday, false, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NightOtRule;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn night_config(rule: NightOtRule) -> RateConfig {
        let mut config = RateConfig::default();
        config.night_work_enabled = true;
        config.night_ot_rule = rule;
        config.night_work_rate = dec("30");
        config
    }

    // ==========================================================================
    // RES-001: day hours, threshold off - single tranche at the base rate
    // ==========================================================================
    #[test]
    fn test_res_001_day_hours_single_tranche() {
        let config = RateConfig::default();

        let resolution = resolve_overtime_rate(DayType::Weekday, dec("3"), false, &config);

        assert_eq!(resolution.tranches.len(), 1);
        assert_eq!(resolution.tranches[0].hours, dec("3"));
        assert_eq!(resolution.tranches[0].percent, dec("150"));
        assert_eq!(resolution.tranches[0].tier, OvertimeTier::Tier1);
    }

    // ==========================================================================
    // RES-002: zero hours - empty resolution
    // ==========================================================================
    #[test]
    fn test_res_002_zero_hours_empty() {
        let config = RateConfig::default();

        let resolution = resolve_overtime_rate(DayType::Sunday, dec("0"), true, &config);

        assert!(resolution.is_empty());
        assert_eq!(resolution.total_hours(), dec("0"));
    }

    // ==========================================================================
    // RES-003: threshold split carries both tier rates
    // ==========================================================================
    #[test]
    fn test_res_003_threshold_split_rates() {
        let mut config = RateConfig::default();
        config.ot_threshold_enabled = true;
        config.ot_threshold_hours = dec("8");

        let resolution = resolve_overtime_rate(DayType::Weekday, dec("10"), false, &config);

        assert_eq!(resolution.tranches.len(), 2);
        assert_eq!(resolution.tranches[0].hours, dec("8"));
        assert_eq!(resolution.tranches[0].percent, dec("150"));
        assert_eq!(resolution.tranches[1].hours, dec("2"));
        assert_eq!(resolution.tranches[1].percent, dec("200"));
        assert_eq!(resolution.tranches[1].tier, OvertimeTier::Tier2);
    }

    // ==========================================================================
    // RES-004: hours exactly at threshold stay tier 1
    // ==========================================================================
    #[test]
    fn test_res_004_exactly_at_threshold() {
        let mut config = RateConfig::default();
        config.ot_threshold_enabled = true;
        config.ot_threshold_hours = dec("8");

        let resolution = resolve_overtime_rate(DayType::Weekday, dec("8"), false, &config);

        assert_eq!(resolution.tranches.len(), 1);
        assert_eq!(resolution.tranches[0].tier, OvertimeTier::Tier1);
    }

    // ==========================================================================
    // RES-005: night disabled - is_night has no effect
    // ==========================================================================
    #[test]
    fn test_res_005_night_disabled_ignores_flag() {
        let mut config = RateConfig::default();
        config.night_work_enabled = false;
        config.night_work_rate = dec("30");

        let resolution = resolve_overtime_rate(DayType::Weekday, dec("2"), true, &config);

        assert_eq!(resolution.tranches[0].percent, dec("150"));
    }

    // ==========================================================================
    // RES-006: day hours under night rule - base rate unmodified
    // ==========================================================================
    #[test]
    fn test_res_006_day_hours_unmodified() {
        let config = night_config(NightOtRule::Sum);

        let resolution = resolve_overtime_rate(DayType::Weekday, dec("2"), false, &config);

        assert_eq!(resolution.tranches[0].percent, dec("150"));
    }

    // ==========================================================================
    // RES-007: sum rule night overtime - 150 + 30 = 180
    // ==========================================================================
    #[test]
    fn test_res_007_sum_rule_night() {
        let config = night_config(NightOtRule::Sum);

        let resolution = resolve_overtime_rate(DayType::Weekday, dec("2"), true, &config);

        assert_eq!(resolution.tranches[0].percent, dec("180"));
    }

    // ==========================================================================
    // RES-008: multiply rule night overtime - 150 * 1.30 = 195
    // ==========================================================================
    #[test]
    fn test_res_008_multiply_rule_night() {
        let config = night_config(NightOtRule::Multiply);

        let resolution = resolve_overtime_rate(DayType::Weekday, dec("2"), true, &config);

        assert_eq!(resolution.tranches[0].percent, dec("195"));
    }

    // ==========================================================================
    // RES-009: base rule night overtime - premium ignored
    // ==========================================================================
    #[test]
    fn test_res_009_base_rule_night() {
        let config = night_config(NightOtRule::Base);

        let resolution = resolve_overtime_rate(DayType::Weekday, dec("2"), true, &config);

        assert_eq!(resolution.tranches[0].percent, dec("150"));
    }

    // ==========================================================================
    // RES-010: fixed rule night overtime - flat rate per day type
    // ==========================================================================
    #[test]
    fn test_res_010_fixed_rule_night() {
        let mut config = night_config(NightOtRule::Fixed);
        config.fixed_night_rates.ot_sunday = dec("260");

        let resolution = resolve_overtime_rate(DayType::Sunday, dec("2"), true, &config);

        assert_eq!(resolution.tranches[0].percent, dec("260"));
    }

    // ==========================================================================
    // RES-011: fixed rule with threshold - flat rate in both tranches,
    // hour split preserved
    // ==========================================================================
    #[test]
    fn test_res_011_fixed_rule_with_threshold() {
        let mut config = night_config(NightOtRule::Fixed);
        config.ot_threshold_enabled = true;
        config.ot_threshold_hours = dec("8");
        config.fixed_night_rates.ot_weekday = dec("210");

        let resolution = resolve_overtime_rate(DayType::Weekday, dec("10"), true, &config);

        assert_eq!(resolution.tranches.len(), 2);
        assert_eq!(resolution.tranches[0].hours, dec("8"));
        assert_eq!(resolution.tranches[0].percent, dec("210"));
        assert_eq!(resolution.tranches[1].hours, dec("2"));
        assert_eq!(resolution.tranches[1].percent, dec("210"));
    }

    // ==========================================================================
    // RES-012: sum rule applies to both tiers of a night split
    // ==========================================================================
    #[test]
    fn test_res_012_sum_rule_both_tiers() {
        let mut config = night_config(NightOtRule::Sum);
        config.ot_threshold_enabled = true;
        config.ot_threshold_hours = dec("8");

        let resolution = resolve_overtime_rate(DayType::Weekday, dec("10"), true, &config);

        assert_eq!(resolution.tranches[0].percent, dec("180")); // 150 + 30
        assert_eq!(resolution.tranches[1].percent, dec("230")); // 200 + 30
    }

    // ==========================================================================
    // RES-013: day type selects the rate table row
    // ==========================================================================
    #[test]
    fn test_res_013_day_type_row_selection() {
        let config = RateConfig::default();

        let weekday = resolve_overtime_rate(DayType::Weekday, dec("1"), false, &config);
        let sunday = resolve_overtime_rate(DayType::Sunday, dec("1"), false, &config);
        let holiday = resolve_overtime_rate(DayType::Holiday, dec("1"), false, &config);

        assert_eq!(weekday.tranches[0].percent, dec("150"));
        assert_eq!(sunday.tranches[0].percent, dec("200"));
        assert_eq!(holiday.tranches[0].percent, dec("200"));
    }

    // ==========================================================================
    // RES-014: negative hours treated as empty
    // ==========================================================================
    #[test]
    fn test_res_014_negative_hours_empty() {
        let config = RateConfig::default();

        let resolution = resolve_overtime_rate(DayType::Weekday, dec("-1"), false, &config);

        assert!(resolution.is_empty());
    }

    #[test]
    fn test_total_hours_and_pay_units() {
        let mut config = RateConfig::default();
        config.ot_threshold_enabled = true;
        config.ot_threshold_hours = dec("8");

        let resolution = resolve_overtime_rate(DayType::Weekday, dec("10"), false, &config);

        assert_eq!(resolution.total_hours(), dec("10"));
        // 8h at 150% + 2h at 200% = 12 + 4 = 16 pay units
        assert_eq!(resolution.pay_units(), dec("16"));
    }

    #[test]
    fn test_standard_night_rate_disabled() {
        let mut config = RateConfig::default();
        config.night_work_enabled = false;

        assert_eq!(resolve_standard_night_rate(&config), dec("100"));
    }

    #[test]
    fn test_standard_night_rate_sum() {
        let config = night_config(NightOtRule::Sum);

        assert_eq!(resolve_standard_night_rate(&config), dec("130"));
    }

    #[test]
    fn test_standard_night_rate_multiply() {
        let config = night_config(NightOtRule::Multiply);

        assert_eq!(resolve_standard_night_rate(&config), dec("130"));
    }

    #[test]
    fn test_standard_night_rate_base() {
        let config = night_config(NightOtRule::Base);

        assert_eq!(resolve_standard_night_rate(&config), dec("100"));
    }

    #[test]
    fn test_standard_night_rate_fixed() {
        let mut config = night_config(NightOtRule::Fixed);
        config.fixed_night_rates.standard = dec("155");

        assert_eq!(resolve_standard_night_rate(&config), dec("155"));
    }

    #[test]
    fn test_resolution_serialization() {
        let config = RateConfig::default();
        let resolution = resolve_overtime_rate(DayType::Saturday, dec("2"), false, &config);

        let json = serde_json::to_string(&resolution).unwrap();
        assert!(json.contains("\"tier\":\"tier1\""));

        let deserialized: RateResolution = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, resolution);
    }
}
