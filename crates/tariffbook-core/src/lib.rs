//! Core library for cleaning and scanning SARS tariff-schedule tables.
//!
//! This crate provides:
//! - Row classification for raw table dumps (page headers, notes, blanks)
//! - Record assembly that folds wrapped description lines back into the
//!   tariff line they belong to
//! - Pattern scanning for compound duty-rate phrasing
//! - JSON I/O for the raw and cleaned formats

pub mod error;
pub mod io;
pub mod models;
pub mod schedule;

pub use error::{Result, ScheduleError, TariffError};
pub use models::config::ScheduleConfig;
pub use models::record::{RateTable, Regime, TariffRecord};
pub use schedule::assembler::{RecordAssembler, assemble, normalize_whitespace};
pub use schedule::classifier::{RowClass, classify};
pub use schedule::row::{RowFields, shape_row};
pub use schedule::scanner::{RateMatch, scan_record, scan_records};
