//! Distinct categorical values for populating filter choices.
//!
//! Nothing is sorted: every list keeps the order in which values first appear
//! in the collection.

use std::collections::HashSet;

use longcare_model::{Facility, label_for_code};
use longcare_transform::extract_region;

fn distinct_in_order<I>(values: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        let value = value.as_ref();
        if seen.insert(value.to_string()) {
            out.push(value.to_string());
        }
    }
    out
}

/// Distinct raw type codes.
pub fn distinct_type_codes(facilities: &[Facility]) -> Vec<String> {
    distinct_in_order(facilities.iter().map(|facility| facility.kind.as_str()))
}

/// Distinct type labels. Codes sharing a label (every unknown code maps to
/// the generic label) collapse into one entry.
pub fn distinct_type_labels(facilities: &[Facility]) -> Vec<String> {
    distinct_in_order(
        facilities
            .iter()
            .map(|facility| label_for_code(&facility.kind)),
    )
}

/// Distinct service names across all facilities.
pub fn distinct_services(facilities: &[Facility]) -> Vec<String> {
    distinct_in_order(facilities.iter().flat_map(Facility::service_names))
}

/// Distinct region labels derived from addresses. Empty addresses are skipped.
pub fn distinct_regions(facilities: &[Facility]) -> Vec<String> {
    distinct_in_order(
        facilities
            .iter()
            .filter_map(|facility| extract_region(&facility.address)),
    )
}
