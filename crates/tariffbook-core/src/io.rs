//! JSON file I/O for raw row dumps and cleaned records.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::models::record::TariffRecord;

/// Raw table rows as dumped by the upstream PDF table extractor.
pub type RawRows = Vec<Vec<String>>;

/// Read a raw array-of-arrays row dump.
pub fn read_raw_rows(path: &Path) -> Result<RawRows> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read previously cleaned records.
pub fn read_records(path: &Path) -> Result<Vec<TariffRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Render records as pretty JSON with 4-space indentation.
///
/// The default pretty printer indents with 2 spaces; the cleaned-file
/// format is fixed at 4.
pub fn records_to_json(records: &[TariffRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf).expect("serde_json output is UTF-8"))
}

/// Write cleaned records to `path`.
pub fn write_records(path: &Path, records: &[TariffRecord]) -> Result<()> {
    fs::write(path, records_to_json(records)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_records_use_four_space_indent() {
        let records = vec![TariffRecord {
            heading: "01.01".to_string(),
            ..Default::default()
        }];

        let json = records_to_json(&records).unwrap();
        assert!(json.contains("\n    {"));
        assert!(json.contains("\n        \"heading\": \"01.01\""));
        assert!(json.contains("\n        \"rates\": {"));
        assert!(json.contains("\n            \"general\": \"\""));
    }

    #[test]
    fn test_round_trip() {
        let records = vec![TariffRecord {
            heading: "0101.21".to_string(),
            cd: "6".to_string(),
            description: "Pure-bred breeding animals".to_string(),
            unit: "u".to_string(),
            ..Default::default()
        }];

        let json = records_to_json(&records).unwrap();
        let parsed: Vec<TariffRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }
}
