//! Defaulting rules for missing raw fields.

use longcare_model::Location;

/// Missing text becomes the empty string.
pub fn text_or_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Missing or non-finite coordinates become `0.0`.
pub fn coordinate_or_zero(value: Option<f64>) -> f64 {
    value.filter(|value| value.is_finite()).unwrap_or(0.0)
}

/// Builds a location, defaulting each axis independently.
pub fn location_from(latitude: Option<f64>, longitude: Option<f64>) -> Location {
    Location {
        lat: coordinate_or_zero(latitude),
        lng: coordinate_or_zero(longitude),
    }
}
