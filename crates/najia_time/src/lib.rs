//! Calendar inputs for Na-Jia divination.
//!
//! This crate provides:
//! - Civil date → day stem/branch, day element and month branch
//! - `YYYY-MM-DD` parsing and a "today" helper with optional UTC offset
//! - Day pillar → the two void (旬空) branches

pub mod calendar;
pub mod error;
pub mod void;

pub use calendar::{
    DATE_FORMAT, DayInfo, REFERENCE_BRANCH, REFERENCE_DAYS_FROM_CE, REFERENCE_STEM,
    days_from_reference, parse_date, resolve_day, today,
};
pub use error::TimeError;
pub use void::{VOID_TABLE, resolve_void, week_start};
