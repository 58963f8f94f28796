//! Core data models for the AccShift rate engine.
//!
//! This module contains the domain models used throughout the engine.

mod calendar;
mod day_type;
mod work_interval;

pub use calendar::{Holiday, HolidayCalendar};
pub use day_type::DayType;
pub use work_interval::WorkInterval;
