//! The facility directory: the normalized collection and its read operations.
//!
//! The directory owns the raw records and normalizes them on first read. The
//! normalized list is stored in a [`OnceLock`], so it is computed exactly once
//! even when several threads race on the first read, and every later read
//! returns the same slice without locking.

use std::sync::OnceLock;
use std::time::Instant;

use longcare_model::{Facility, FacilityQuery, RawRecord};
use longcare_transform::normalize_with_stats;
use tracing::info;

use crate::catalog::{distinct_regions, distinct_services, distinct_type_codes, distinct_type_labels};
use crate::filters::{filter_facilities, matches_region, matches_service, matches_type};

/// Read-only facility repository built once from the raw dataset.
#[derive(Debug, Default)]
pub struct FacilityDirectory {
    records: Vec<RawRecord>,
    facilities: OnceLock<Vec<Facility>>,
}

/// Headline counts over the whole directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total: usize,
    pub with_location: usize,
    pub with_services: usize,
    pub types: usize,
    pub services: usize,
    pub regions: usize,
}

impl FacilityDirectory {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self {
            records,
            facilities: OnceLock::new(),
        }
    }

    pub fn raw_records(&self) -> &[RawRecord] {
        &self.records
    }

    /// Returns true once the collection has been normalized.
    pub fn is_normalized(&self) -> bool {
        self.facilities.get().is_some()
    }

    /// All facilities in source order. Normalizes on the first call.
    pub fn all(&self) -> &[Facility] {
        self.facilities.get_or_init(|| {
            let start = Instant::now();
            let (facilities, stats) = normalize_with_stats(&self.records);
            info!(
                facility_count = facilities.len(),
                without_service = stats.without_service,
                without_location = stats.without_location,
                malformed_dates = stats.malformed_dates,
                duration_ms = start.elapsed().as_millis(),
                "facility directory normalized"
            );
            facilities
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn by_id(&self, id: &str) -> Option<&Facility> {
        self.all().iter().find(|facility| facility.id == id)
    }

    /// Facilities with exactly this type code; an empty code returns all.
    pub fn by_type(&self, kind: &str) -> Vec<&Facility> {
        self.select(|facility| matches_type(facility, kind))
    }

    /// Facilities whose address contains `region`; an empty region returns all.
    pub fn by_region(&self, region: &str) -> Vec<&Facility> {
        self.select(|facility| matches_region(facility, region))
    }

    /// Facilities offering `service_name`; an empty name returns all.
    pub fn by_service(&self, service_name: &str) -> Vec<&Facility> {
        self.select(|facility| matches_service(facility, service_name))
    }

    /// Facilities matching every active criterion of `query`.
    pub fn filter(&self, query: &FacilityQuery) -> Vec<&Facility> {
        filter_facilities(self.all(), query)
    }

    /// Distinct type labels in first-seen order.
    pub fn all_types(&self) -> Vec<String> {
        distinct_type_labels(self.all())
    }

    /// Distinct type codes in first-seen order.
    pub fn type_codes(&self) -> Vec<String> {
        distinct_type_codes(self.all())
    }

    /// Distinct service names in first-seen order.
    pub fn all_services(&self) -> Vec<String> {
        distinct_services(self.all())
    }

    /// Distinct region labels in first-seen order.
    pub fn all_regions(&self) -> Vec<String> {
        distinct_regions(self.all())
    }

    pub fn stats(&self) -> DirectoryStats {
        let facilities = self.all();
        DirectoryStats {
            total: facilities.len(),
            with_location: facilities.iter().filter(|f| f.has_location()).count(),
            with_services: facilities.iter().filter(|f| !f.services.is_empty()).count(),
            types: self.type_codes().len(),
            services: self.all_services().len(),
            regions: self.all_regions().len(),
        }
    }

    fn select<F>(&self, predicate: F) -> Vec<&Facility>
    where
        F: Fn(&Facility) -> bool,
    {
        self.all().iter().filter(|facility| predicate(*facility)).collect()
    }
}

impl From<Vec<RawRecord>> for FacilityDirectory {
    fn from(records: Vec<RawRecord>) -> Self {
        Self::new(records)
    }
}
