//! Folds classified rows into finalized tariff records.

use tracing::{debug, info};

use crate::error::Result;
use crate::models::config::ScheduleConfig;
use crate::models::record::TariffRecord;

use super::classifier::{RowClass, classify};
use super::patterns::WHITESPACE_RUN;
use super::row::{RowFields, shape_row};

/// Stateful accumulator that folds raw rows into finalized records.
///
/// At most one record is open at a time. It is finalized when the next
/// record-starting row arrives or when [`RecordAssembler::finish`] is
/// called, and records come out in the order their starting rows came in.
#[derive(Debug, Default)]
pub struct RecordAssembler {
    current: Option<TariffRecord>,
    records: Vec<TariffRecord>,
    dropped_continuations: usize,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one shaped row and fold it into the accumulator.
    pub fn push(&mut self, row: &RowFields) {
        match classify(row) {
            RowClass::Skip | RowClass::Ignore => {}
            RowClass::NewRecord(seed) => {
                if let Some(record) = self.current.take() {
                    self.emit(record);
                }
                self.current = Some(seed);
            }
            RowClass::Continuation(text) => match self.current.as_mut() {
                Some(record) => {
                    record.description.push(' ');
                    record.description.push_str(&text);
                }
                None => {
                    // Wrapped text with no record to attach to; the parent
                    // row was lost upstream. Dropped, never buffered.
                    debug!("dropping orphaned continuation: {:?}", text);
                    self.dropped_continuations += 1;
                }
            },
        }
    }

    /// Finalize any open record and return the records in input order.
    pub fn finish(mut self) -> Vec<TariffRecord> {
        if let Some(record) = self.current.take() {
            self.emit(record);
        }
        if self.dropped_continuations > 0 {
            debug!(
                "{} orphaned continuation rows dropped",
                self.dropped_continuations
            );
        }
        self.records
    }

    fn emit(&mut self, mut record: TariffRecord) {
        // Normalization happens exactly once, at emission. Intermediate
        // appends may carry doubled spaces until then.
        record.description = normalize_whitespace(&record.description);
        self.records.push(record);
    }
}

/// Collapse whitespace runs to single spaces and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Shape, classify, and fold a full sequence of raw rows.
pub fn assemble(rows: &[Vec<String>], config: &ScheduleConfig) -> Result<Vec<TariffRecord>> {
    let mut assembler = RecordAssembler::new();

    for (index, cells) in rows.iter().enumerate() {
        let row = shape_row(cells, index, config)?;
        assembler.push(&row);
    }

    let records = assembler.finish();
    info!(
        "assembled {} records from {} raw rows",
        records.len(),
        rows.len()
    );

    Ok(records)
}
