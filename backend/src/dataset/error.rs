//! Error types for dataset loading.

use std::path::PathBuf;

/// Result type for dataset loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Failure to build a [`Dataset`](super::Dataset) from its CSV source.
///
/// Every variant is fatal at startup: the server never runs on a partial table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file is missing or unreadable.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required header is absent.
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// A data row could not be turned into a launch record.
    /// `row` is the 1-based data row (the header is not counted).
    #[error("Malformed row {row}: {message}")]
    Malformed { row: usize, message: String },

    /// The file holds a header but no records.
    #[error("Dataset contains no launch records")]
    Empty,
}

impl LoadError {
    pub fn malformed(row: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            row,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LoadError::MissingColumn("class".to_string());
        assert_eq!(err.to_string(), "Missing required column 'class'");

        let err = LoadError::malformed(3, "bad payload");
        assert_eq!(err.to_string(), "Malformed row 3: bad payload");

        let err = LoadError::Io {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.csv"));
    }
}
