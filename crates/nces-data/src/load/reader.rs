//! CSV file reading into column storage.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::dataset::{Column, Dataset};
use crate::error::{DataError, Result};

use super::encoding::decode;
use super::options::LoadOptions;

/// Reads a delimited file whose first record is the header row.
pub fn read_dataset(path: &Path, options: &LoadOptions) -> Result<Dataset> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DataError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DataError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    parse_dataset(path, &bytes, options)
}

/// Reads a dataset from any byte source; `name` only labels errors and logs.
pub fn read_dataset_from_reader<R: Read>(
    name: &Path,
    mut reader: R,
    options: &LoadOptions,
) -> Result<Dataset> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| DataError::FileRead {
            path: name.to_path_buf(),
            source: e,
        })?;
    parse_dataset(name, &bytes, options)
}

fn parse_dataset(path: &Path, bytes: &[u8], options: &LoadOptions) -> Result<Dataset> {
    let text = decode(bytes, options.encoding, path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(text.as_bytes());
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record.map_err(|e| csv_error(path, &e))?,
        None => {
            return Err(DataError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
    };
    let mut columns: Vec<Column> = header
        .iter()
        .map(|name| Column::new(name, Vec::new()))
        .collect();

    let mut short_rows = 0usize;
    let mut long_rows = 0usize;
    for record in records {
        let record = record.map_err(|e| csv_error(path, &e))?;
        if record.len() < columns.len() {
            short_rows += 1;
        } else if record.len() > columns.len() {
            long_rows += 1;
        }
        // Positional zip: fields past the header are dropped, and headers past
        // the record get no cell unless padding is on.
        for (idx, column) in columns.iter_mut().enumerate() {
            match record.get(idx) {
                Some(value) => column.values.push(value.to_string()),
                None if options.pad_short_rows => column.values.push(String::new()),
                None => {}
            }
        }
    }

    if short_rows > 0 {
        tracing::warn!(
            path = %path.display(),
            short_rows,
            padded = options.pad_short_rows,
            "Records shorter than the header"
        );
    }
    if long_rows > 0 {
        tracing::debug!(
            path = %path.display(),
            long_rows,
            "Dropped fields past the last header"
        );
    }

    let dataset = Dataset::from_columns(columns)?;
    tracing::info!(
        path = %path.display(),
        encoding = options.encoding.name(),
        rows = dataset.height(),
        columns = dataset.width(),
        "Loaded dataset"
    );
    Ok(dataset)
}

fn csv_error(path: &Path, err: &csv::Error) -> DataError {
    DataError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1252;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_dataset_columns() {
        let file = create_temp_csv(b"NCESSCH,SCHNAM05,LSTATE05\n1,Foley High School,AL\n2,Camps,AL\n");
        let dataset = read_dataset(file.path(), &LoadOptions::default()).unwrap();

        assert_eq!(
            dataset.headers().collect::<Vec<_>>(),
            vec!["NCESSCH", "SCHNAM05", "LSTATE05"]
        );
        assert_eq!(dataset.height(), 2);
        assert_eq!(dataset.column("SCHNAM05").unwrap().get(0), Some("Foley High School"));
    }

    #[test]
    fn test_read_dataset_quoted_fields() {
        let file = create_temp_csv(b"NAME,CITY\n\"Smith, John Elem\",\"Austin\"\n");
        let dataset = read_dataset(file.path(), &LoadOptions::default()).unwrap();

        assert_eq!(dataset.row(0).unwrap().get("NAME"), Some("Smith, John Elem"));
    }

    #[test]
    fn test_read_dataset_cp1252() {
        let file = create_temp_csv(b"SCHNAM05,LCITY05\nPe\xf1asco Elementary,Pe\xf1asco\n");
        let options = LoadOptions::default().with_encoding(WINDOWS_1252);
        let dataset = read_dataset(file.path(), &options).unwrap();

        assert_eq!(dataset.row(0).unwrap().get("LCITY05"), Some("Peñasco"));
    }

    #[test]
    fn test_read_dataset_cp1252_undefined_byte() {
        let options = LoadOptions::default().with_encoding_label("cp1252").unwrap();
        let result = read_dataset_from_reader(
            Path::new("schools.csv"),
            &b"SCHNAM05\nA\x81B\n"[..],
            &options,
        );

        assert!(matches!(result, Err(DataError::Decode { .. })));
    }

    #[test]
    fn test_read_dataset_invalid_utf8() {
        let file = create_temp_csv(b"SCHNAM05\nPe\xf1asco\n");
        let result = read_dataset(file.path(), &LoadOptions::default());

        assert!(matches!(result, Err(DataError::Decode { .. })));
    }

    #[test]
    fn test_read_dataset_missing_file() {
        let result = read_dataset(Path::new("/nonexistent/school_data.csv"), &LoadOptions::default());
        assert!(matches!(result, Err(DataError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_dataset_empty_file() {
        let file = create_temp_csv(b"");
        let result = read_dataset(file.path(), &LoadOptions::default());
        assert!(matches!(result, Err(DataError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_dataset_header_only() {
        let file = create_temp_csv(b"SCHNAM05,LCITY05,LSTATE05\n");
        let dataset = read_dataset(file.path(), &LoadOptions::default()).unwrap();

        assert_eq!(dataset.width(), 3);
        assert_eq!(dataset.height(), 0);
    }

    #[test]
    fn test_short_record_truncates_trailing_columns() {
        let file = create_temp_csv(b"A,B,C\n1,2,3\n4,5\n6,7,8\n");
        let dataset = read_dataset(file.path(), &LoadOptions::default()).unwrap();

        assert_eq!(dataset.column("A").unwrap().len(), 3);
        assert_eq!(dataset.column("C").unwrap().len(), 2);
        // The short record's C cell was never written, so row 2 reads past it.
        assert_eq!(dataset.column("C").unwrap().get(1), Some("8"));
        assert!(matches!(
            dataset.row(2),
            Err(DataError::RowOutOfRange { ref column, .. }) if column == "C"
        ));
    }

    #[test]
    fn test_short_record_padded() {
        let file = create_temp_csv(b"A,B,C\n1,2,3\n4,5\n");
        let options = LoadOptions::default().with_pad_short_rows(true);
        let dataset = read_dataset(file.path(), &options).unwrap();

        assert!(dataset.validate_shape().is_ok());
        assert_eq!(dataset.row_at(1).unwrap().0, vec!["4", "5", ""]);
    }

    #[test]
    fn test_long_record_drops_extra_fields() {
        let file = create_temp_csv(b"A,B\n1,2,3\n");
        let dataset = read_dataset(file.path(), &LoadOptions::default()).unwrap();

        assert_eq!(dataset.row_at(0).unwrap().0, vec!["1", "2"]);
    }

    #[test]
    fn test_duplicate_header() {
        let file = create_temp_csv(b"A,A\n1,2\n");
        let result = read_dataset(file.path(), &LoadOptions::default());
        assert!(matches!(result, Err(DataError::DuplicateColumn { .. })));
    }

    #[test]
    fn test_custom_delimiter() {
        let file = create_temp_csv(b"A;B\n1;2\n");
        let options = LoadOptions::default().with_delimiter(b';');
        let dataset = read_dataset(file.path(), &options).unwrap();

        assert_eq!(dataset.row(0).unwrap().get("B"), Some("2"));
    }

    #[test]
    fn test_read_from_reader() {
        let source: &[u8] = b"SCHNAM05\nCamps\n";
        let dataset =
            read_dataset_from_reader(Path::new("inline"), source, &LoadOptions::default()).unwrap();

        assert_eq!(dataset.height(), 1);
    }
}
