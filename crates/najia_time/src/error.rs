//! Error types for calendar and void resolution.

use najia_tables::{Branch, Stem};

/// Errors from date parsing or sexagenary lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input was not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },
    /// Stem and branch differ in parity and never occur together.
    #[error("{stem}{branch} is not a sexagenary pair")]
    NotSexagenary { stem: Stem, branch: Branch },
    /// UTC offset outside -12..=14 hours.
    #[error("UTC offset {hours}h out of range -12..=14")]
    InvalidOffset { hours: i32 },
}
