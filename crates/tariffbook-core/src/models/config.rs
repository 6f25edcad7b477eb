//! Configuration for schedule cleaning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for cleaning a raw schedule dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Expected width of a raw table row in cells.
    ///
    /// The observed Schedule 1 Part 1 layout has 12 columns. Rows with
    /// fewer cells are right-padded with empty strings; rows with more are
    /// rejected, since every positional field would silently misalign.
    pub expected_columns: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            expected_columns: 12,
        }
    }
}

impl ScheduleConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_column_count() {
        assert_eq!(ScheduleConfig::default().expected_columns, 12);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ScheduleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.expected_columns, 12);

        let config: ScheduleConfig =
            serde_json::from_str(r#"{"expected_columns": 11}"#).unwrap();
        assert_eq!(config.expected_columns, 11);
    }
}
