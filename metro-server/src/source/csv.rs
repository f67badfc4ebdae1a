//! Station table in CSV form.
//!
//! The first row is a header. Each following row starts with the station
//! name and its line; any further columns are ignored. Fields may be
//! quoted, so names can contain commas. The station's index is its data row
//! number, which keeps rows in file order along each line.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::StationRecord;

use super::StationSource;
use super::error::SourceError;

/// Station data read from a CSV file.
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StationSource for CsvFile {
    fn load(&self) -> Result<Vec<StationRecord>, SourceError> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| SourceError::io(&self.path, e))?;
        Ok(parse_rows(&contents))
    }

    fn describe(&self) -> String {
        format!("CSV file {}", self.path.display())
    }
}

/// Parse CSV text into records, skipping the header and unusable rows.
fn parse_rows(contents: &str) -> Vec<StationRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    reader
        .records()
        .enumerate()
        .filter_map(|(row, result)| match result {
            Ok(fields) => {
                let record = parse_row(&fields, row as u32);
                if record.is_none() {
                    debug!(row, fields = ?fields, "Skipping CSV row");
                }
                record
            }
            Err(e) => {
                debug!(row, error = %e, "Skipping unreadable CSV row");
                None
            }
        })
        .collect()
}

fn parse_row(fields: &csv::StringRecord, index: u32) -> Option<StationRecord> {
    let name = fields.get(0)?;
    let line = fields.get(1)?;

    if name.is_empty() || line.is_empty() {
        return None;
    }

    Some(StationRecord::new(name, line, index))
}
