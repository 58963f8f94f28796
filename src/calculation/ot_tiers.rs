//! Overtime threshold splitting.
//!
//! This module provides the function that splits a day's overtime hours into
//! the tranche paid at the base overtime rate and the tranche paid at the
//! tier-2 rate once the configured threshold is exceeded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RateConfig;

/// The result of splitting overtime hours at the threshold.
///
/// # Example
///
/// ```
/// use accshift_engine::calculation::OvertimeSplit;
/// use rust_decimal::Decimal;
///
/// let split = OvertimeSplit {
///     tier1_hours: Decimal::new(80, 1), // 8.0
///     tier2_hours: Decimal::new(20, 1), // 2.0
/// };
/// assert_eq!(split.tier1_hours + split.tier2_hours, Decimal::new(100, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Overtime hours paid at the base rate (up to the threshold).
    pub tier1_hours: Decimal,
    /// Overtime hours paid at the tier-2 rate (beyond the threshold).
    pub tier2_hours: Decimal,
}

/// Splits overtime hours into tier-1 and tier-2 tranches.
///
/// When the threshold is disabled every hour is tier 1 and the tier-2 rate
/// table is never consulted. Hours exactly at the threshold stay entirely in
/// tier 1; only the excess beyond the threshold moves to tier 2. Non-positive
/// input yields an empty split.
///
/// # Examples
///
/// ```
/// use accshift_engine::calculation::split_overtime_hours;
/// use accshift_engine::config::RateConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut config = RateConfig::default();
/// config.ot_threshold_enabled = true;
/// config.ot_threshold_hours = Decimal::from_str("8").unwrap();
///
/// let split = split_overtime_hours(Decimal::from_str("10").unwrap(), &config);
/// assert_eq!(split.tier1_hours, Decimal::from_str("8").unwrap());
/// assert_eq!(split.tier2_hours, Decimal::from_str("2").unwrap());
/// ```
pub fn split_overtime_hours(ot_hours: Decimal, config: &RateConfig) -> OvertimeSplit {
    if ot_hours <= Decimal::ZERO {
        return OvertimeSplit {
            tier1_hours: Decimal::ZERO,
            tier2_hours: Decimal::ZERO,
        };
    }

    if !config.ot_threshold_enabled || ot_hours <= config.ot_threshold_hours {
        return OvertimeSplit {
            tier1_hours: ot_hours,
            tier2_hours: Decimal::ZERO,
        };
    }

    OvertimeSplit {
        tier1_hours: config.ot_threshold_hours,
        tier2_hours: ot_hours - config.ot_threshold_hours,
    }
}
