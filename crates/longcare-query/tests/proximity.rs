//! Proximity ranking and the unset-location guard.

use longcare_model::{Location, RawRecord};
use longcare_query::{FacilityDirectory, distance_km, haversine_km, nearby};

fn located(name: &str, lat: Option<f64>, lng: Option<f64>) -> RawRecord {
    RawRecord {
        name: Some(name.to_string()),
        latitude: lat,
        longitude: lng,
        ..RawRecord::default()
    }
}

// Taipei Main Station.
const ORIGIN: Location = Location {
    lat: 25.0478,
    lng: 121.5170,
};

fn directory() -> FacilityDirectory {
    FacilityDirectory::new(vec![
        located("far", Some(25.0330), Some(121.5654)),
        located("unset", None, None),
        located("near", Some(25.0500), Some(121.5200)),
        located("zero", Some(0.0), Some(0.0)),
        located("kaohsiung", Some(22.6273), Some(120.3014)),
    ])
}

#[test]
fn haversine_matches_known_distance() {
    let taipei = Location::new(25.0478, 121.5170);
    let kaohsiung = Location::new(22.6273, 120.3014);
    let km = haversine_km(taipei, kaohsiung);
    assert!((km - 296.0).abs() < 5.0, "got {km}");
}

#[test]
fn unset_locations_are_never_measured() {
    let directory = directory();
    let unset = directory.by_id("2").expect("facility 2");
    assert_eq!(unset.location, Location { lat: 0.0, lng: 0.0 });
    assert!(!unset.has_location());
    assert_eq!(distance_km(ORIGIN, unset), None);
    let zero = directory.by_id("4").expect("facility 4");
    assert_eq!(distance_km(ORIGIN, zero), None);
}

#[test]
fn nearby_sorts_and_limits_by_radius() {
    let directory = directory();
    let results = nearby(directory.all(), ORIGIN, 10.0);
    let names: Vec<&str> = results.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["near", "far"]);
    assert!(results.iter().all(|f| f.distance.is_some_and(|km| km <= 10.0)));
    assert!(results[0].distance <= results[1].distance);

    let everything = nearby(directory.all(), ORIGIN, 1000.0);
    let names: Vec<&str> = everything.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["near", "far", "kaohsiung"]);
}

#[test]
fn nearby_leaves_the_cache_untouched() {
    let directory = directory();
    let _ = nearby(directory.all(), ORIGIN, 1000.0);
    assert!(directory.all().iter().all(|f| f.distance.is_none()));
}

#[test]
fn null_island_origin_finds_nothing() {
    let directory = directory();
    assert!(nearby(directory.all(), Location::UNSET, 20_000.0).is_empty());
}
