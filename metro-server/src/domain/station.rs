//! Station types.

use std::fmt;

/// Error returned when a record cannot become a station.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// A raw `(name, line, index)` triple as yielded by a data source.
///
/// Records are untrusted: names may carry whitespace or be blank. The
/// catalog turns them into [`Station`]s and drops the ones that fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationRecord {
    pub name: String,
    pub line: String,
    pub index: u32,
}

impl StationRecord {
    /// Create a new record.
    pub fn new(name: impl Into<String>, line: impl Into<String>, index: u32) -> Self {
        Self {
            name: name.into(),
            line: line.into(),
            index,
        }
    }
}

/// A station on one line.
///
/// Identity is the full `(name, line, index)` triple: the same named
/// station on two lines is two distinct stations. Name and line are
/// trimmed and never blank.
///
/// # Examples
///
/// ```
/// use metro_server::domain::Station;
///
/// let s = Station::new("  Rajiv Chowk ", "Yellow", 15).unwrap();
/// assert_eq!(s.name(), "Rajiv Chowk");
///
/// // Blank names are rejected
/// assert!(Station::new("   ", "Yellow", 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station {
    name: String,
    line: String,
    index: u32,
}

impl Station {
    /// Create a station, trimming the name and line.
    pub fn new(name: &str, line: &str, index: u32) -> Result<Self, InvalidStation> {
        let name = name.trim();
        let line = line.trim();

        if name.is_empty() {
            return Err(InvalidStation {
                reason: "name must not be blank",
            });
        }
        if line.is_empty() {
            return Err(InvalidStation {
                reason: "line must not be blank",
            });
        }

        Ok(Self {
            name: name.to_string(),
            line: line.to_string(),
            index,
        })
    }

    /// Create a station from a raw record.
    pub fn from_record(record: &StationRecord) -> Result<Self, InvalidStation> {
        Self::new(&record.name, &record.line, record.index)
    }

    /// The station name, as displayed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The line this station belongs to.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Position of the station along its line.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The lookup key for this station's name.
    pub fn key(&self) -> String {
        normalize(&self.name)
    }

    /// True if both stations carry the same name, ignoring case.
    pub fn same_name(&self, other: &Station) -> bool {
        self.key() == other.key()
    }

    /// True if moving between the two stations changes line.
    pub fn changes_line(&self, other: &Station) -> bool {
        self.line != other.line
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.line)
    }
}

/// Position of a station in its catalog's station table.
///
/// Only meaningful for the catalog that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub usize);

/// Normalize free text for name comparison: trimmed and lower-cased.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
