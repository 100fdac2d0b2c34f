//! General CLI settings.

use najia_core::Topic;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Allowed UTC offsets in whole hours.
pub const UTC_OFFSET_RANGE: std::ops::RangeInclusive<i32> = -12..=14;

/// How reports are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format when `--format` is not given.
    #[serde(default)]
    pub output: OutputFormat,

    /// Fixed UTC offset for "today"; local time when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_hours: Option<i32>,

    /// Topic used when `--topic` is not given ("事業", "wealth", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_topic: Option<String>,
}

impl GeneralConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(hours) = self.utc_offset_hours {
            if !UTC_OFFSET_RANGE.contains(&hours) {
                return Err(ConfigError::InvalidValue {
                    field: "general.utc_offset_hours".into(),
                    reason: format!("{hours} outside -12..=14"),
                });
            }
        }
        self.topic().map(|_| ())
    }

    /// The default topic, parsed.
    pub fn topic(&self) -> Result<Option<Topic>, ConfigError> {
        self.default_topic
            .as_deref()
            .map(|s| {
                s.parse::<Topic>().map_err(|e| ConfigError::InvalidValue {
                    field: "general.default_topic".into(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }
}
