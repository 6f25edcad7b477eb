//! Regex patterns for row classification and rate scanning.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Commodity-code shape anchored at the start of the heading cell:
    /// "01.01" (chapter.heading) or "0101.2" / "0101.21" (subheading).
    /// Trailing subdivision digits after the match are allowed.
    pub static ref COMMODITY_CODE: Regex = Regex::new(
        r"^(\d{2}\.\d{2}|\d{4}\.\d{1,2})"
    ).unwrap();

    /// Compound duty, ad valorem or specific: "37% or 75c/kg".
    pub static ref PERCENT_OR_SPECIFIC: Regex = Regex::new(
        r"(?i)(\d+(\.\d+)?)%\s+or\s+(\d+(\.\d+)?)c/kg"
    ).unwrap();

    /// Compound duty, ad valorem plus specific: "10% plus 50c/kg".
    pub static ref PERCENT_PLUS_SPECIFIC: Regex = Regex::new(
        r"(?i)(\d+(\.\d+)?)%\s+plus\s+(\d+(\.\d+)?)c/kg"
    ).unwrap();

    /// Runs of whitespace, collapsed to single spaces at finalization.
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}
