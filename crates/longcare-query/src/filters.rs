//! Facility predicates.
//!
//! Each predicate treats an empty criterion as "match everything", so callers
//! can pass user input straight through.

use longcare_model::{Facility, FacilityQuery, FacilityType, GENERIC_TYPE_LABEL};

/// Exact match on the type code.
///
/// The generic label selects the facilities it is displayed for: those whose
/// code has no entry in the type table.
pub fn matches_type(facility: &Facility, kind: &str) -> bool {
    if kind == GENERIC_TYPE_LABEL {
        return FacilityType::from_code(&facility.kind).is_none();
    }
    kind.is_empty() || facility.kind == kind
}

/// Case-sensitive substring match on the address.
pub fn matches_region(facility: &Facility, region: &str) -> bool {
    region.is_empty() || facility.address.contains(region)
}

/// Matches when any contracted service has exactly this name.
pub fn matches_service(facility: &Facility, service_name: &str) -> bool {
    service_name.is_empty() || facility.offers(service_name)
}

/// Logical AND of the active criteria in `query`.
pub fn matches_query(facility: &Facility, query: &FacilityQuery) -> bool {
    query
        .type_criterion()
        .is_none_or(|kind| matches_type(facility, kind))
        && query
            .region_criterion()
            .is_none_or(|region| matches_region(facility, region))
        && query
            .service_criterion()
            .is_none_or(|service| matches_service(facility, service))
}

/// Returns the facilities matching `query`, preserving input order.
pub fn filter_facilities<'a>(facilities: &'a [Facility], query: &FacilityQuery) -> Vec<&'a Facility> {
    facilities
        .iter()
        .filter(|facility| matches_query(facility, query))
        .collect()
}
