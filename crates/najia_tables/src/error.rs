//! Error type for parsing table labels.

use thiserror::Error;

/// A text label that names no entry of a reference table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} label '{label}'")]
pub struct LabelError {
    /// Which table was searched ("stem", "branch", "trigram", ...).
    pub kind: &'static str,
    /// The rejected input.
    pub label: String,
}

impl LabelError {
    pub fn new(kind: &'static str, label: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
        }
    }
}
