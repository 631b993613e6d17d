//! Query layer over the normalized facility collection.
//!
//! - **directory**: [`FacilityDirectory`], the lazily normalized, cached collection
//! - **filters**: per-facility predicates and the combined AND filter
//! - **catalog**: distinct types, services and regions in first-seen order
//! - **proximity**: straight-line distance ranking around a user location

pub mod catalog;
pub mod directory;
pub mod filters;
pub mod proximity;

pub use catalog::{distinct_regions, distinct_services, distinct_type_codes, distinct_type_labels};
pub use directory::{DirectoryStats, FacilityDirectory};
pub use filters::{filter_facilities, matches_query, matches_region, matches_service, matches_type};
pub use proximity::{distance_km, estimate_travel_minutes, haversine_km, nearby};
