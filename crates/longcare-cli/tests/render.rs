//! Rendering of facilities for the terminal.

use longcare_cli::render::{
    catalog_table, facility_card, facility_table, location_text, nearby_table, stats_table,
};
use longcare_model::{Location, RawRecord};
use longcare_query::{FacilityDirectory, nearby};

fn directory() -> FacilityDirectory {
    FacilityDirectory::new(vec![
        RawRecord {
            name: Some("康寧居家長照機構".to_string()),
            code: Some("1131010011".to_string()),
            kind: Some("A1".to_string()),
            address: Some("台北市中山區中山北路一段1號".to_string()),
            phone: Some("02-2345-6789".to_string()),
            manager: Some("王小明".to_string()),
            service_name: Some("居家服務".to_string()),
            contract_start: Some(20220101),
            contract_end: Some(20221231),
            latitude: Some(25.05),
            longitude: Some(121.52),
            ..RawRecord::default()
        },
        RawRecord {
            name: Some("安心護理之家".to_string()),
            kind: Some("A3".to_string()),
            ..RawRecord::default()
        },
    ])
}

#[test]
fn card_lists_every_field() {
    let directory = directory();
    let facility = directory.by_id("1").expect("facility 1");
    insta::assert_snapshot!(facility_card(facility), @r"
    [1] 康寧居家長照機構
      Type:     老人養護中心 (A1)
      Code:     1131010011
      Address:  台北市中山區中山北路一段1號
      Phone:    02-2345-6789
      Email:    -
      Manager:  王小明
      Contract: 2022-01-01 ~ 2022-12-31
      Location: 25.0500, 121.5200
      康寧居家長照機構是一家位於台北市中山區中山北路一段1號的老人養護中心，提供居家服務等服務。
    ");
}

#[test]
fn card_marks_missing_location() {
    let directory = directory();
    let facility = directory.by_id("2").expect("facility 2");
    let card = facility_card(facility);
    assert!(card.contains("Location: no location"));
    assert!(card.contains("Contract: -"));
    assert!(card.contains("Address:  -"));
}

#[test]
fn location_text_hides_null_island() {
    insta::assert_snapshot!(location_text(&Location::new(25.05, 121.52)), @"25.0500, 121.5200");
    insta::assert_snapshot!(location_text(&Location::UNSET), @"no location");
}

#[test]
fn facility_table_shows_labels_and_services() {
    let directory = directory();
    let facilities: Vec<_> = directory.all().iter().collect();
    let rendered = facility_table(&facilities).to_string();
    assert!(rendered.contains("老人養護中心"));
    assert!(rendered.contains("護理之家"));
    assert!(rendered.contains("居家服務"));
    assert!(!rendered.contains("A1"));
}

#[test]
fn nearby_table_shows_distance_and_drive_time() {
    let directory = directory();
    let ranked = nearby(directory.all(), Location::new(25.05, 121.52), 5.0);
    assert_eq!(ranked.len(), 1);
    let rendered = nearby_table(&ranked).to_string();
    assert!(rendered.contains("0.0"));
    assert!(rendered.contains("~0"));
    assert!(!rendered.contains("安心護理之家"));
}

#[test]
fn catalog_and_stats_tables() {
    let directory = directory();
    let rendered = catalog_table("Region", &directory.all_regions()).to_string();
    assert!(rendered.contains("台北市"));
    let rendered = stats_table(&directory.stats()).to_string();
    assert!(rendered.contains("With location"));
}
