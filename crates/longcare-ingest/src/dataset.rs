//! Dataset loading entry point.
//!
//! The dataset is read once, in file order, and handed to the query layer as
//! an immutable list of raw records.

use std::path::{Path, PathBuf};
use std::time::Instant;

use longcare_model::{LongcareError, RawRecord, Result};
use tracing::{info, info_span};

use crate::csv_table::read_csv_dataset;
use crate::json_table::read_json_dataset;

/// Supported on-disk dataset encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Csv,
}

impl DatasetFormat {
    /// Infers the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(DatasetFormat::Json),
            "csv" => Some(DatasetFormat::Csv),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetFormat::Json => "json",
            DatasetFormat::Csv => "csv",
        }
    }
}

/// Raw records together with where they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDataset {
    pub path: PathBuf,
    pub format: DatasetFormat,
    /// Key of the top-level collection the records were read from (JSON only).
    pub collection: Option<String>,
    pub records: Vec<RawRecord>,
}

impl RawDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Loads a dataset file, choosing the reader from its extension.
///
/// # Errors
///
/// Returns an error if the extension is not `.json` or `.csv`, the file
/// cannot be read, or its structure is not a record collection.
pub fn load_dataset(path: &Path) -> Result<RawDataset> {
    let format = DatasetFormat::from_path(path).ok_or_else(|| LongcareError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let span = info_span!("load_dataset", path = %path.display(), format = format.as_str());
    let _guard = span.enter();
    let start = Instant::now();
    let dataset = match format {
        DatasetFormat::Json => read_json_dataset(path)?,
        DatasetFormat::Csv => read_csv_dataset(path)?,
    };
    info!(
        record_count = dataset.len(),
        collection = dataset.collection.as_deref().unwrap_or("-"),
        duration_ms = start.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(dataset)
}
