//! Station data source error types.

/// Errors that can occur when reading station data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// File or directory could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not the expected JSON shape
    #[error("JSON parse error in {path}: {message}")]
    Json { path: String, message: String },
}

impl SourceError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        SourceError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
