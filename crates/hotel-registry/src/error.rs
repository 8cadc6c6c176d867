//! Error types for the registry loaders.

use std::path::PathBuf;

use hotel_model::RecordError;

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors produced while loading registry data from disk.
///
/// Every variant carries the path of the offending file so a failure deep
/// inside a bulk load still names its source.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer could not produce a record at all. These are fatal in
    /// every load mode; only well-formed records reach per-record handling.
    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// A well-formed CSV record failed room validation. Row numbers are
    /// 1-based and count data rows, not the header.
    #[error("invalid room record in {path} (row {row}): {source}")]
    Record {
        path: PathBuf,
        row: usize,
        #[source]
        source: RecordError,
    },
}

impl RegistryError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_file_and_row() {
        let err = RegistryError::Record {
            path: PathBuf::from("rooms.csv"),
            row: 3,
            source: RecordError::FieldCount {
                expected: 4,
                found: 2,
            },
        };
        assert_eq!(
            err.to_string(),
            "invalid room record in rooms.csv (row 3): invalid record: expected 4 fields, found 2"
        );

        let err = RegistryError::Csv {
            path: PathBuf::from("rooms.csv"),
            message: "unequal lengths".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse CSV rooms.csv: unequal lengths");
    }
}
