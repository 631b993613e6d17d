use serde::{Deserialize, Serialize};

use crate::facility_type::label_for_code;

/// A contracted service with its contract window.
///
/// Dates are `YYYY-MM-DD` strings, or empty when the source date was missing
/// or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

/// A WGS84 coordinate.
///
/// `{0, 0}` (null island) is the "no location" marker produced for records
/// without coordinates. Use [`Location::is_set`] before plotting or measuring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const UNSET: Location = Location { lat: 0.0, lng: 0.0 };

    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true when both coordinates are present and non-zero.
    pub fn is_set(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite() && self.lat != 0.0 && self.lng != 0.0
    }
}

/// Canonical, normalized long-term-care facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    /// 1-based position in the source dataset.
    pub id: String,
    pub code: String,
    pub name: String,
    /// Type code such as `A1`; see [`Facility::type_label`] for display.
    #[serde(rename = "type")]
    pub kind: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub manager: String,
    pub services: Vec<Service>,
    pub contract_start_date: String,
    pub contract_end_date: String,
    pub description: String,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facilities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Straight-line distance in kilometres, set only on proximity results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl Facility {
    pub fn type_label(&self) -> &'static str {
        label_for_code(&self.kind)
    }

    pub fn has_location(&self) -> bool {
        self.location.is_set()
    }

    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|service| service.name.as_str())
    }

    /// Returns true if any contracted service has exactly this name.
    pub fn offers(&self, service_name: &str) -> bool {
        self.service_names().any(|name| name == service_name)
    }
}
