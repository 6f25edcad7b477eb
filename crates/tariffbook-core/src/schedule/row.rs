//! Named-field view over raw table rows.
//!
//! The raw dump is positional: a cell's meaning is determined solely by
//! its index. Shaping turns that into named fields once, so the rest of
//! the pipeline never reads cells by number.
//!
//! Observed column layout of the extracted table:
//! 0 heading, 1 check digit, 2 description indent, 3 description text,
//! 4 unit, 5-10 the six rate-of-duty columns, 11 spare.

use crate::error::ScheduleError;
use crate::models::config::ScheduleConfig;

/// One raw row with cells trimmed and addressed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFields {
    pub heading: String,
    pub cd: String,
    pub desc_indent: String,
    pub desc_text: String,
    pub unit: String,
    pub general: String,
    pub eu_uk: String,
    pub efta: String,
    pub sadc: String,
    pub mercosur: String,
    pub afcfta: String,
    text_lower: String,
}

impl RowFields {
    /// True when every cell is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.text_lower.is_empty()
    }

    /// Lower-cased concatenation of every cell, for header-boilerplate
    /// detection.
    pub fn text_lower(&self) -> &str {
        &self.text_lower
    }

    /// The two description cells joined with a single space and trimmed.
    /// The extractor splits the indent prefix and the text body into
    /// separate cells.
    pub fn merged_description(&self) -> String {
        format!("{} {}", self.desc_indent, self.desc_text)
            .trim()
            .to_string()
    }
}

/// Shape one raw row: pad missing trailing cells with empty strings, or
/// reject rows wider than the configured table width.
pub fn shape_row(
    cells: &[String],
    row: usize,
    config: &ScheduleConfig,
) -> Result<RowFields, ScheduleError> {
    if cells.len() > config.expected_columns {
        return Err(ScheduleError::RowWidth {
            row,
            found: cells.len(),
            expected: config.expected_columns,
        });
    }

    let cell = |index: usize| {
        cells
            .get(index)
            .map(|c| c.trim().to_string())
            .unwrap_or_default()
    };

    Ok(RowFields {
        heading: cell(0),
        cd: cell(1),
        desc_indent: cell(2),
        desc_text: cell(3),
        unit: cell(4),
        general: cell(5),
        eu_uk: cell(6),
        efta: cell(7),
        sadc: cell(8),
        mercosur: cell(9),
        afcfta: cell(10),
        text_lower: cells
            .iter()
            .map(|c| c.trim())
            .collect::<String>()
            .to_lowercase(),
    })
}
