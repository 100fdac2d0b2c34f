//! Error types for hexagram resolution and analysis.

use najia_tables::LabelError;
use najia_time::TimeError;

/// Errors from the rule engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum NajiaError {
    /// Caller input is malformed (line values, moving positions, labels).
    #[error("input format: {0}")]
    InputFormat(String),
    /// A hexagram name or structure is not in the reference tables.
    #[error("unknown hexagram: {0}")]
    Lookup(String),
    /// The reference tables contradict each other.
    #[error("reference data: {0}")]
    ReferenceData(String),
    /// Date or sexagenary failure.
    #[error(transparent)]
    Time(#[from] TimeError),
}

impl From<LabelError> for NajiaError {
    fn from(e: LabelError) -> Self {
        Self::InputFormat(e.to_string())
    }
}
