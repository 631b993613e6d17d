//! Straight-line proximity around a user location.
//!
//! Road routing and geocoding belong to external services. This module only
//! provides the great-circle approximation used to rank and filter facilities
//! and the fixed-speed travel estimate shown when no route is available.
//! Facilities without a location (null island) are never measured.

use longcare_model::{Facility, Location};

/// Mean Earth radius (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Average speed assumed for the fallback travel estimate.
pub const FALLBACK_SPEED_KMH: f64 = 40.0;

/// Haversine distance between two coordinates in kilometres.
pub fn haversine_km(from: Location, to: Location) -> f64 {
    let (lat1, lat2) = (from.lat.to_radians(), to.lat.to_radians());
    let d_lat = lat2 - lat1;
    let d_lng = (to.lng - from.lng).to_radians();
    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// Distance from `origin` to the facility, or `None` if either has no location.
pub fn distance_km(origin: Location, facility: &Facility) -> Option<f64> {
    if !origin.is_set() || !facility.has_location() {
        return None;
    }
    Some(haversine_km(origin, facility.location))
}

/// Facilities within `radius_km` of `origin`, nearest first.
///
/// Each returned facility is a copy with `distance` set to the kilometres
/// rounded to one decimal; the radius applies to that rounded value. Ties keep
/// their input order.
pub fn nearby<'a, I>(facilities: I, origin: Location, radius_km: f64) -> Vec<Facility>
where
    I: IntoIterator<Item = &'a Facility>,
{
    let mut ranked: Vec<Facility> = facilities
        .into_iter()
        .filter_map(|facility| {
            let km = round_tenth(distance_km(origin, facility)?);
            (km <= radius_km).then(|| Facility {
                distance: Some(km),
                ..facility.clone()
            })
        })
        .collect();
    ranked.sort_by(|left, right| {
        let left = left.distance.unwrap_or(f64::INFINITY);
        let right = right.distance.unwrap_or(f64::INFINITY);
        left.total_cmp(&right)
    });
    ranked
}

/// Driving time at [`FALLBACK_SPEED_KMH`], rounded to whole minutes.
pub fn estimate_travel_minutes(km: f64) -> u32 {
    let minutes = (km.max(0.0) / FALLBACK_SPEED_KMH * 60.0).round();
    if minutes.is_finite() {
        minutes as u32
    } else {
        u32::MAX
    }
}

fn round_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}
