//! Raw record to [`Facility`] transform.

use longcare_model::{Facility, RawRecord, Service};
use tracing::debug;

use crate::date::format_date;
use crate::description::describe;
use crate::fields::{location_from, text_or_empty};

/// Counts of records that were degraded during normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub records: usize,
    pub without_service: usize,
    pub without_location: usize,
    /// Dates that were present but not eight digits long.
    pub malformed_dates: usize,
}

/// Normalizes records in input order. Ids are 1-based positions.
pub fn normalize(records: &[RawRecord]) -> Vec<Facility> {
    normalize_with_stats(records).0
}

/// Same as [`normalize`], also reporting how many records were degraded.
pub fn normalize_with_stats(records: &[RawRecord]) -> (Vec<Facility>, NormalizeStats) {
    let mut stats = NormalizeStats {
        records: records.len(),
        ..NormalizeStats::default()
    };
    let facilities: Vec<Facility> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let facility = normalize_record(index, record);
            if facility.services.is_empty() {
                stats.without_service += 1;
            }
            if !facility.location.is_set() {
                stats.without_location += 1;
            }
            stats.malformed_dates += [record.contract_start, record.contract_end]
                .into_iter()
                .zip([&facility.contract_start_date, &facility.contract_end_date])
                .filter(|(raw, formatted)| {
                    raw.is_some_and(|value| value != 0) && formatted.is_empty()
                })
                .count();
            facility
        })
        .collect();
    debug!(
        record_count = stats.records,
        without_service = stats.without_service,
        without_location = stats.without_location,
        malformed_dates = stats.malformed_dates,
        "normalized records"
    );
    (facilities, stats)
}

/// Normalizes one record found at `index` (0-based) in the source.
pub fn normalize_record(index: usize, record: &RawRecord) -> Facility {
    let name = text_or_empty(record.name.as_deref());
    let kind = text_or_empty(record.kind.as_deref());
    let address = text_or_empty(record.address.as_deref());
    let service_name = text_or_empty(record.service_name.as_deref());
    let contract_start_date = format_date(record.contract_start);
    let contract_end_date = format_date(record.contract_end);

    let services = if service_name.is_empty() {
        Vec::new()
    } else {
        vec![Service {
            name: service_name.clone(),
            start_date: contract_start_date.clone(),
            end_date: contract_end_date.clone(),
        }]
    };
    let description = describe(&name, &address, &kind, &service_name);

    Facility {
        id: (index + 1).to_string(),
        code: text_or_empty(record.code.as_deref()),
        name,
        kind,
        address,
        phone: text_or_empty(record.phone.as_deref()),
        email: text_or_empty(record.email.as_deref()),
        manager: text_or_empty(record.manager.as_deref()),
        services,
        contract_start_date,
        contract_end_date,
        description,
        location: location_from(record.latitude, record.longitude),
        facilities: None,
        images: None,
        distance: None,
    }
}
