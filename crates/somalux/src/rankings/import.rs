//! Loads stat rows exported from the backing store as JSON or CSV.

use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read stat row export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid stat row CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid stat row JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected an array of records or an object with a `records` array")]
    Shape,
}

/// Reads a JSON export: an array of rows, `{"records": [...]}`, or `null`.
pub fn read_json_records<R: Read>(reader: R) -> Result<Vec<Value>, ImportError> {
    let document: Value = serde_json::from_reader(reader)?;
    records_from_document(document)
}

pub(crate) fn records_from_document(document: Value) -> Result<Vec<Value>, ImportError> {
    match document {
        Value::Array(records) => Ok(records),
        Value::Null => Ok(Vec::new()),
        Value::Object(mut object) => match object.remove("records") {
            Some(Value::Array(records)) => Ok(records),
            Some(Value::Null) | None if object.is_empty() => Ok(Vec::new()),
            _ => Err(ImportError::Shape),
        },
        _ => Err(ImportError::Shape),
    }
}

/// Reads a headered CSV export into one JSON object per row.
///
/// Cells keep their text; numeric columns are decoded leniently when the rows
/// are ranked. Empty cells are left out so they read as absent.
pub fn read_csv_records<R: Read>(reader: R) -> Result<Vec<Value>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let mut object = Map::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            if header.is_empty() || cell.is_empty() {
                continue;
            }
            object.insert(header.clone(), Value::String(cell.to_string()));
        }
        records.push(Value::Object(object));
    }

    Ok(records)
}

/// Picks the reader by file extension: `.csv` is CSV, anything else JSON.
pub fn read_records_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Value>, ImportError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let is_csv = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        read_csv_records(file)
    } else {
        read_json_records(file)
    }
}
