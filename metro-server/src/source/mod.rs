//! Station data sources.
//!
//! Each source produces the raw `(name, line, index)` records that the
//! station catalog is built from.

mod csv;
mod embedded;
mod error;
mod lines;

pub use self::csv::CsvFile;
pub use embedded::EmbeddedDataset;
pub use error::SourceError;
pub use lines::LineDirectory;

use crate::config::SourceConfig;
use crate::domain::StationRecord;

/// Somewhere station records can be loaded from.
pub trait StationSource: Send + Sync {
    /// Load every station record the source holds.
    fn load(&self) -> Result<Vec<StationRecord>, SourceError>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// Build the source selected by configuration.
pub fn from_config(config: &SourceConfig) -> Box<dyn StationSource> {
    match config {
        SourceConfig::Lines(dir) => Box::new(LineDirectory::new(dir)),
        SourceConfig::Csv(path) => Box::new(CsvFile::new(path)),
        SourceConfig::Embedded => Box::new(EmbeddedDataset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_source_from_config() {
        let source = from_config(&SourceConfig::Csv("/data/metro.csv".into()));
        assert_eq!(source.describe(), "CSV file /data/metro.csv");

        let source = from_config(&SourceConfig::Lines("/data/lines".into()));
        assert_eq!(source.describe(), "line directory /data/lines");

        let source = from_config(&SourceConfig::Embedded);
        assert!(!source.load().unwrap().is_empty());
    }
}
