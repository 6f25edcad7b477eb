//! Row reconstruction for the extracted tariff-schedule table.
//!
//! The PDF table extractor splits one logical tariff line across several
//! physical rows and reprints the column headers on every page. This
//! module classifies each raw row, folds wrapped description lines into
//! the record they belong to, and scans finished records for compound
//! duty-rate phrasing.

pub mod assembler;
pub mod classifier;
pub mod patterns;
pub mod row;
pub mod scanner;

pub use assembler::{RecordAssembler, assemble, normalize_whitespace};
pub use classifier::{RowClass, classify};
pub use row::{RowFields, shape_row};
pub use scanner::{RateMatch, scan_record, scan_records};
