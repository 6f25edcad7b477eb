//! Row classification: record start, continuation, boilerplate, or noise.

use crate::models::record::{RateTable, TariffRecord};

use super::patterns::COMMODITY_CODE;
use super::row::RowFields;

/// Header lines the PDF reprints on every page, detected by word pairs in
/// the concatenated row text.
const HEADER_MARKERS: [(&str, &str); 3] = [
    ("heading", "article description"),
    ("subheading", "unit"),
    ("statistical", "rate of duty"),
];

/// Classification of a single raw table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowClass {
    /// Page-header boilerplate, a note line, or an entirely blank row.
    Skip,
    /// Starts a new record; carries the seed built from the row's cells.
    NewRecord(TariffRecord),
    /// Wrapped remainder of the previous row's description.
    Continuation(String),
    /// Neither a record start nor usable continuation text.
    Ignore,
}

/// Classify one shaped row.
///
/// Pure function over the row's cells: all layout reasoning happens
/// upstream, so classification is string and regex tests only.
pub fn classify(row: &RowFields) -> RowClass {
    if row.is_blank() {
        return RowClass::Skip;
    }

    let text = row.text_lower();
    if HEADER_MARKERS
        .iter()
        .any(|(a, b)| text.contains(a) && text.contains(b))
    {
        return RowClass::Skip;
    }

    if row.heading.to_lowercase().starts_with("note:") {
        return RowClass::Skip;
    }

    let description = row.merged_description();

    if !row.heading.is_empty() {
        if COMMODITY_CODE.is_match(&row.heading) {
            return RowClass::NewRecord(TariffRecord {
                heading: row.heading.clone(),
                cd: row.cd.clone(),
                description,
                unit: row.unit.clone(),
                rates: RateTable {
                    general: row.general.clone(),
                    eu_uk: row.eu_uk.clone(),
                    efta: row.efta.clone(),
                    sadc: row.sadc.clone(),
                    mercosur: row.mercosur.clone(),
                    afcfta: row.afcfta.clone(),
                },
            });
        }
        // Chapter titles and other non-code headings carry no product data.
        return RowClass::Ignore;
    }

    if description.is_empty() {
        return RowClass::Ignore;
    }

    RowClass::Continuation(description)
}
