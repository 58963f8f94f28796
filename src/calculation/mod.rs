//! Calculation logic for the AccShift rate engine.
//!
//! This module contains the pure resolution functions: splitting overtime
//! hours at the configured threshold, classifying hours against the night
//! window, combining base rates with the night premium, and the top-level
//! rate resolver.
//!
//! Everything here is stateless and side-effect-free; the configuration is
//! threaded in as an explicit parameter.

mod night_overlap;
mod night_rate;
mod ot_tiers;
mod resolver;

pub use night_overlap::{is_night_time, night_hours, overlaps_night};
pub use night_rate::combine_night_rate;
pub use ot_tiers::{OvertimeSplit, split_overtime_hours};
pub use resolver::{
    OvertimeTier, RateResolution, RateTranche, resolve_overtime_rate, resolve_standard_night_rate,
};
