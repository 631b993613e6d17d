pub mod csv_table;
pub mod dataset;
pub mod json_table;

pub use csv_table::read_csv_dataset;
pub use dataset::{DatasetFormat, RawDataset, load_dataset};
pub use json_table::{parse_json_dataset, read_json_dataset};
