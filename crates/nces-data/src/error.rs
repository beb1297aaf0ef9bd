//! Error types for dataset loading and row access.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or reading a dataset.
#[derive(Debug, Error)]
pub enum DataError {
    // === File System Errors ===
    /// Source file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the source.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Decoding Errors ===
    /// Encoding label not recognized.
    #[error("unknown encoding label '{label}'")]
    UnknownEncoding { label: String },

    /// Bytes are not valid under the declared encoding.
    #[error("{path} is not valid {encoding}")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse a CSV record.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Source has no header record.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header names a column twice.
    #[error("duplicate column '{column}'")]
    DuplicateColumn { column: String },

    // === Dataset Errors ===
    /// Column not present in the dataset.
    #[error("column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Row index past the end of a column.
    #[error("row {index} out of range for column '{column}' ({len} values)")]
    RowOutOfRange {
        index: usize,
        column: String,
        len: usize,
    },

    /// Inserted column does not match the dataset height.
    #[error("column '{column}' has {actual} values, dataset has {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::FileNotFound {
            path: PathBuf::from("/data/school_data.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /data/school_data.csv");
    }

    #[test]
    fn test_row_out_of_range_display() {
        let err = DataError::RowOutOfRange {
            index: 7,
            column: "LSTATE05".to_string(),
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "row 7 out of range for column 'LSTATE05' (5 values)"
        );
    }
}
