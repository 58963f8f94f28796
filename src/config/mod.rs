//! Rate configuration for the AccShift rate engine.
//!
//! This module contains the strongly-typed rate configuration and the codec
//! that maps it to the flat string scalars the app's key-value store
//! persists.

mod settings;
mod types;

pub use settings::{keys, load_rate_config, store_rate_config};
pub use types::{FixedNightRates, NightOtRule, NightWindow, OvertimeRate, OvertimeRates, RateConfig};
