//! JSON dataset reader.
//!
//! The published dataset is a single object whose first key (the name of the
//! export query) holds the array of records. A bare top-level array is also
//! accepted.

use std::fs;
use std::path::Path;

use longcare_model::{LongcareError, RawRecord, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::dataset::{DatasetFormat, RawDataset};

/// Reads a JSON dataset from disk.
pub fn read_json_dataset(path: &Path) -> Result<RawDataset> {
    let text = fs::read_to_string(path).map_err(|source| LongcareError::io(path, source))?;
    parse_json_dataset(&text, path)
}

/// Parses JSON dataset text. `path` is only used for error reporting.
pub fn parse_json_dataset(text: &str, path: &Path) -> Result<RawDataset> {
    let text = text.trim_start_matches('\u{feff}');
    let root: Value = serde_json::from_str(text).map_err(|error| LongcareError::Json {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    let (collection, rows) = match root {
        Value::Array(rows) => (None, rows),
        Value::Object(map) => {
            if map.len() > 1 {
                warn!(
                    key_count = map.len(),
                    "dataset has several top-level keys; only the first is read"
                );
            }
            match map.into_iter().next() {
                Some((key, Value::Array(rows))) => (Some(key), rows),
                Some((key, _)) => {
                    return Err(LongcareError::InvalidDataset {
                        path: path.to_path_buf(),
                        message: format!("top-level key {key:?} does not hold an array"),
                    });
                }
                None => (None, Vec::new()),
            }
        }
        _ => {
            return Err(LongcareError::InvalidDataset {
                path: path.to_path_buf(),
                message: "expected a top-level object or array".to_string(),
            });
        }
    };

    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let record = RawRecord::deserialize(row).map_err(|error| LongcareError::InvalidDataset {
            path: path.to_path_buf(),
            message: format!("record {}: {error}", index + 1),
        })?;
        records.push(record);
    }
    debug!(record_count = records.len(), "parsed json records");
    Ok(RawDataset {
        path: path.to_path_buf(),
        format: DatasetFormat::Json,
        collection,
        records,
    })
}
