//! Tracker Configuration
//!
//! Host pages may override any field with a JSON object; missing fields keep
//! their defaults.

use log::LevelFilter;
use serde::Deserialize;

use crate::error::LedgerResult;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// localStorage key holding the serialized list
    pub storage_key: String,
    pub currency_symbol: String,
    /// Legend text of the chart series
    pub chart_label: String,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: "expenses".to_string(),
            currency_symbol: "$".to_string(),
            chart_label: "Expenses".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Parse a JSON override; an empty string yields the defaults
    pub fn from_json(raw: &str) -> LedgerResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Unknown level names fall back to `info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = TrackerConfig::from_json(r#"{"currency_symbol":"€","log_level":"debug"}"#).unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.storage_key, "expenses");
        assert_eq!(config.chart_label, "Expenses");
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_empty_is_default() {
        assert_eq!(TrackerConfig::from_json("  ").unwrap(), TrackerConfig::default());
    }

    #[test]
    fn test_malformed_is_error() {
        assert!(matches!(
            TrackerConfig::from_json("{not json"),
            Err(LedgerError::Serialization(_))
        ));
    }

    #[test]
    fn test_unknown_level() {
        let config = TrackerConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
