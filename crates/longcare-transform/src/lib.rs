//! Long-term-care record normalization.
//!
//! This crate turns raw dataset rows into canonical [`Facility`] values:
//!
//! - **date**: 8-digit `YYYYMMDD` integers to `YYYY-MM-DD` strings
//! - **fields**: explicit defaulting of missing text and coordinates
//! - **description**: the synthesized one-sentence facility summary
//! - **region**: heuristic region label from a free-text address
//! - **normalize**: the record-by-record transform
//!
//! [`Facility`]: longcare_model::Facility

pub mod date;
pub mod description;
pub mod fields;
pub mod normalize;
pub mod region;

pub use date::format_date;
pub use description::describe;
pub use fields::{coordinate_or_zero, location_from, text_or_empty};
pub use normalize::{NormalizeStats, normalize, normalize_record, normalize_with_stats};
pub use region::extract_region;
