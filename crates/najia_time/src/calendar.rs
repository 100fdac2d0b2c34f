//! Civil date → sexagenary day pillar and month branch.
//!
//! Day pillars advance by one step of the 60-cycle per civil day. Counting
//! starts from a fixed reference date of known pillar, so any date on either
//! side resolves with Euclidean remainders.

use chrono::{Datelike, FixedOffset, Local, NaiveDate, Utc};
use najia_tables::{Branch, Element, Stem, month_branch_from_month0};
use serde::Serialize;

use crate::error::TimeError;

/// Days from 0001-01-01 (CE day 1) to the reference date 2000-01-01.
pub const REFERENCE_DAYS_FROM_CE: i32 = 730_120;

/// Day stem on the reference date (戊).
pub const REFERENCE_STEM: Stem = Stem::Wu;

/// Day branch on the reference date (午).
pub const REFERENCE_BRANCH: Branch = Branch::Wu;

/// Date format accepted by [`parse_date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sexagenary data for one civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayInfo {
    /// The civil date resolved.
    pub date: NaiveDate,
    /// Day stem (日干).
    pub stem: Stem,
    /// Day branch (日支).
    pub branch: Branch,
    /// Element of the day stem.
    pub day_element: Element,
    /// Month branch (月建) by sectional solar term.
    pub month_branch: Branch,
}

impl DayInfo {
    /// Element of the month branch.
    pub const fn month_element(&self) -> Element {
        self.month_branch.element()
    }

    /// Day pillar as two characters, e.g. "戊午".
    pub fn pillar(&self) -> String {
        format!("{}{}", self.stem, self.branch)
    }
}

/// Signed day count from the reference date to `date`.
pub fn days_from_reference(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - i64::from(REFERENCE_DAYS_FROM_CE)
}

/// Resolve the day pillar, day element and month branch of a date.
pub fn resolve_day(date: NaiveDate) -> DayInfo {
    let delta = days_from_reference(date);
    let stem = Stem::from_index((i64::from(REFERENCE_STEM.index()) + delta).rem_euclid(10) as u8);
    let branch =
        Branch::from_index((i64::from(REFERENCE_BRANCH.index()) + delta).rem_euclid(12) as u8);
    let month_branch = month_branch_from_month0(date.month0(), date.day());

    tracing::debug!(%date, %stem, %branch, %month_branch, "resolved day");

    DayInfo {
        date,
        stem,
        branch,
        day_element: stem.element(),
        month_branch,
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| TimeError::InvalidDate {
        input: input.to_string(),
    })
}

/// Today's civil date, in local time or at a fixed UTC offset in hours.
pub fn today(utc_offset_hours: Option<i32>) -> Result<NaiveDate, TimeError> {
    match utc_offset_hours {
        None => Ok(Local::now().date_naive()),
        Some(hours) => {
            let offset = (-12..=14)
                .contains(&hours)
                .then(|| FixedOffset::east_opt(hours * 3600))
                .flatten()
                .ok_or(TimeError::InvalidOffset { hours })?;
            Ok(Utc::now().with_timezone(&offset).date_naive())
        }
    }
}
