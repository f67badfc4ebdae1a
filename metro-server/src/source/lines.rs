//! Per-line JSON files.
//!
//! A directory holds one `{line}.json` file per line. Each file is an array
//! of station objects whose field names vary between files, so the station
//! name is taken to be the first textual, non-numeric value of each object.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::StationRecord;

use super::StationSource;
use super::error::SourceError;

/// Files with this prefix hold station metadata, not a line.
const SKIPPED_PREFIX: &str = "station_entity";

/// Station data read from a directory of per-line JSON files.
#[derive(Debug, Clone)]
pub struct LineDirectory {
    dir: PathBuf,
}

impl LineDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl StationSource for LineDirectory {
    /// Read every line file in the directory.
    ///
    /// Files that cannot be read or parsed are logged and skipped. Lines
    /// are read in file-name order.
    fn load(&self) -> Result<Vec<StationRecord>, SourceError> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| SourceError::io(&self.dir, e))?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_line_file(path))
            .collect();
        files.sort();

        let mut records = Vec::new();
        for path in files {
            let Some(line) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match read_line_file(&path) {
                Ok(names) => {
                    debug!(line, stations = names.len(), "Read line file");
                    for (index, name) in names.into_iter().enumerate() {
                        match name {
                            Some(name) => {
                                records.push(StationRecord::new(name, line, index as u32));
                            }
                            None => debug!(line, index, "Skipping entry without a name"),
                        }
                    }
                }
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping line file"),
            }
        }

        Ok(records)
    }

    fn describe(&self) -> String {
        format!("line directory {}", self.dir.display())
    }
}

fn is_line_file(path: &Path) -> bool {
    let is_json = path.extension().and_then(|s| s.to_str()) == Some("json");
    let skipped = path
        .file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|name| name.starts_with(SKIPPED_PREFIX));
    path.is_file() && is_json && !skipped
}

/// Read one line file into station names, `None` where an entry has none.
fn read_line_file(path: &Path) -> Result<Vec<Option<String>>, SourceError> {
    let contents = std::fs::read_to_string(path).map_err(|e| SourceError::io(path, e))?;
    let entries: Vec<Value> = serde_json::from_str(&contents).map_err(|e| SourceError::Json {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(entries.iter().map(station_name).collect())
}

/// The first string field that is neither blank nor purely digits.
fn station_name(entry: &Value) -> Option<String> {
    let usable = |s: &str| {
        let s = s.trim();
        !s.is_empty() && !s.chars().all(|c| c.is_ascii_digit())
    };

    match entry {
        Value::String(s) if usable(s.as_str()) => Some(s.trim().to_string()),
        Value::Object(fields) => fields.values().find_map(|v| match v {
            Value::String(s) if usable(s.as_str()) => Some(s.trim().to_string()),
            _ => None,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn station_name_takes_first_text_field() {
        let entry = json!({ "id": "17", "Station Name": " Rajiv Chowk ", "code": "RCK" });
        assert_eq!(station_name(&entry), Some("Rajiv Chowk".to_string()));
    }

    #[test]
    fn station_name_skips_digits_and_blanks() {
        assert_eq!(station_name(&json!({ "id": "12", "name": "  " })), None);
        assert_eq!(station_name(&json!({ "id": 12 })), None);
        assert_eq!(station_name(&json!(42)), None);
        assert_eq!(station_name(&json!("Saket")), Some("Saket".to_string()));
    }

    #[test]
    fn loads_lines_from_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("Yellow.json"),
            r#"[{"name": "Samaypur Badli"}, {"name": "123"}, {"name": "Jahangirpuri"}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("Blue.json"),
            r#"[{"Station": "Dwarka Sector 21"}, {"Station": "Dwarka Sector 8"}]"#,
        )
        .unwrap();

        let records = LineDirectory::new(dir.path()).load().unwrap();

        assert_eq!(
            records,
            vec![
                StationRecord::new("Dwarka Sector 21", "Blue", 0),
                StationRecord::new("Dwarka Sector 8", "Blue", 1),
                StationRecord::new("Samaypur Badli", "Yellow", 0),
                StationRecord::new("Jahangirpuri", "Yellow", 2),
            ]
        );
    }

    #[test]
    fn skips_metadata_and_other_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("station_entity.json"), r#"[{"name": "Ghost"}]"#).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a line").unwrap();
        std::fs::write(dir.path().join("Red.json"), r#"[{"name": "Rithala"}]"#).unwrap();

        let records = LineDirectory::new(dir.path()).load().unwrap();

        assert_eq!(records, vec![StationRecord::new("Rithala", "Red", 0)]);
    }

    #[test]
    fn skips_unparsable_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("Broken.json"), "{ not json").unwrap();
        std::fs::write(dir.path().join("Green.json"), r#"[{"name": "Inderlok"}]"#).unwrap();

        let records = LineDirectory::new(dir.path()).load().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line, "Green");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let source = LineDirectory::new("/nonexistent/metro/lines");
        assert!(matches!(source.load(), Err(SourceError::Io { .. })));
    }
}
