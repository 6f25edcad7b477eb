//! Scans cleaned records for compound duty-rate phrasing.
//!
//! Purely diagnostic: the scanner reads finalized records and reports
//! which rate cells carry compound ad-valorem/specific duties or
//! conditional phrasing. Nothing is mutated.

use std::fmt;

use crate::models::record::{Regime, TariffRecord};

use super::patterns::{PERCENT_OR_SPECIFIC, PERCENT_PLUS_SPECIFIC};

/// Literal phrases that mark conditional compound duties.
const PHRASES: [&str; 3] = [
    "with a maximum of",
    "whichever is the greater",
    "whichever is the lower",
];

/// A rate cell that matched one of the compound-duty patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateMatch {
    /// Which rate column matched.
    pub regime: Regime,
    /// The full rate text of the matching cell.
    pub rate_text: String,
    /// Heading of the record the cell belongs to.
    pub heading: String,
}

impl fmt::Display for RateMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MATCH [{}]: {} (Heading: {})",
            self.regime, self.rate_text, self.heading
        )
    }
}

/// Scan one record's rate cells in column order.
///
/// Each (cell, pattern) hit produces its own match, so a cell combining
/// two phrasings is reported twice. Empty cells are never tested.
pub fn scan_record(record: &TariffRecord) -> Vec<RateMatch> {
    let mut matches = Vec::new();

    for (regime, text) in record.rates.iter() {
        if text.is_empty() {
            continue;
        }

        let lower = text.to_lowercase();
        let mut report = |hit: bool| {
            if hit {
                matches.push(RateMatch {
                    regime,
                    rate_text: text.to_string(),
                    heading: record.heading.clone(),
                });
            }
        };

        report(PERCENT_OR_SPECIFIC.is_match(text));
        report(PERCENT_PLUS_SPECIFIC.is_match(text));
        for phrase in PHRASES {
            report(lower.contains(phrase));
        }
    }

    matches
}

/// Scan all records, preserving record order then column order.
pub fn scan_records(records: &[TariffRecord]) -> Vec<RateMatch> {
    records.iter().flat_map(scan_record).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::models::record::RateTable;

    use super::*;

    fn record(heading: &str, rates: RateTable) -> TariffRecord {
        TariffRecord {
            heading: heading.to_string(),
            rates,
            ..Default::default()
        }
    }

    #[test]
    fn test_compound_or_rate_is_reported() {
        let records = vec![record(
            "0207.14",
            RateTable {
                general: "37% or 75c/kg".to_string(),
                ..Default::default()
            },
        )];

        let matches = scan_records(&records);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].regime, Regime::General);
        assert_eq!(matches[0].rate_text, "37% or 75c/kg");
        assert_eq!(matches[0].heading, "0207.14");
    }

    #[test]
    fn test_plain_percentage_never_matches() {
        let records = vec![record(
            "01.01",
            RateTable {
                general: "10%".to_string(),
                eu_uk: "free".to_string(),
                ..Default::default()
            },
        )];

        assert!(scan_records(&records).is_empty());
    }

    #[test]
    fn test_conditional_phrases_match_case_insensitively() {
        let rates = RateTable {
            sadc: "25% With a Maximum of 30%".to_string(),
            afcfta: "500c/kg whichever is the greater".to_string(),
            ..Default::default()
        };

        let matches = scan_record(&record("2204.10", rates));
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].regime, Regime::Sadc);
        assert_eq!(matches[1].regime, Regime::Afcfta);
    }

    #[test]
    fn test_cell_matching_two_patterns_is_reported_twice() {
        let rates = RateTable {
            general: "25% or 40c/kg with a maximum of 30%".to_string(),
            ..Default::default()
        };

        let matches = scan_record(&record("0406.10", rates));
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].rate_text, matches[1].rate_text);
    }

    #[test]
    fn test_column_order_is_stable() {
        let rates = RateTable {
            general: "10% plus 50c/kg".to_string(),
            mercosur: "5% plus 25c/kg".to_string(),
            ..Default::default()
        };

        let matches = scan_record(&record("1701.13", rates));
        let regimes: Vec<Regime> = matches.iter().map(|m| m.regime).collect();
        assert_eq!(regimes, vec![Regime::General, Regime::Mercosur]);
    }

    #[test]
    fn test_display_format() {
        let m = RateMatch {
            regime: Regime::EuUk,
            rate_text: "12% or 30c/kg".to_string(),
            heading: "0402.21".to_string(),
        };

        assert_eq!(
            m.to_string(),
            "MATCH [eu_uk]: 12% or 30c/kg (Heading: 0402.21)"
        );
    }
}
