//! CSV dataset reader.
//!
//! The header row carries the same column keys as the JSON export. Columns
//! are matched by name, so their order does not matter and unknown columns
//! are ignored.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;
use longcare_model::raw::columns;
use longcare_model::{LongcareError, RawRecord, Result};
use tracing::debug;

use crate::dataset::{DatasetFormat, RawDataset};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

pub fn read_csv_dataset(path: &Path) -> Result<RawDataset> {
    let csv_error = |error: csv::Error| LongcareError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();

    let unknown: Vec<&str> = headers
        .iter()
        .map(String::as_str)
        .filter(|header| !columns::ALL.contains(header))
        .collect();
    if !unknown.is_empty() {
        debug!(columns = ?unknown, "ignoring unknown csv columns");
    }

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            if let Some(header) = headers.get(idx) {
                row.insert(header.as_str(), value);
            }
        }
        records.push(RawRecord::from_cells(|key| row.get(key).copied()));
    }
    debug!(record_count = records.len(), "parsed csv records");
    Ok(RawDataset {
        path: path.to_path_buf(),
        format: DatasetFormat::Csv,
        collection: None,
        records,
    })
}
