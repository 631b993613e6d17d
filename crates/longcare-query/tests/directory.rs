//! Directory read operations over a small fixed dataset.

use longcare_model::{FacilityQuery, RawRecord};
use longcare_query::FacilityDirectory;

fn record(kind: &str, address: &str, service: Option<&str>) -> RawRecord {
    RawRecord {
        name: Some(format!("{address}機構")),
        kind: Some(kind.to_string()),
        address: Some(address.to_string()),
        service_name: service.map(str::to_string),
        contract_start: Some(20220101),
        contract_end: Some(20221231),
        ..RawRecord::default()
    }
}

fn directory() -> FacilityDirectory {
    FacilityDirectory::new(vec![
        record("A1", "台北市中山區中山北路一段1號", Some("居家服務")),
        record("B2", "新北市板橋區文化路一段2號", Some("日間照顧")),
        record("A1", "台北市大安區復興南路3號", None),
        record("B1", "宜蘭縣羅東鎮中正路4號", Some("居家服務")),
        record("ZZ", "中正路5號", Some("專業服務")),
        record("", "", None),
    ])
}

fn ids(facilities: &[&longcare_model::Facility]) -> Vec<String> {
    facilities.iter().map(|facility| facility.id.clone()).collect()
}

#[test]
fn all_returns_the_same_cached_slice() {
    let directory = directory();
    let first = directory.all();
    let second = directory.all();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.len(), 6);
}

#[test]
fn first_reads_from_many_threads_share_one_collection() {
    let directory = directory();
    let addresses: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| directory.all().as_ptr() as usize))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("reader thread"))
            .collect()
    });
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn ids_are_one_based_positions() {
    let directory = directory();
    let all: Vec<&str> = directory.all().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(all, vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn by_id_finds_exact_match() {
    let directory = directory();
    let facility = directory.by_id("2").expect("facility 2");
    assert_eq!(facility.kind, "B2");
    assert!(directory.by_id("7").is_none());
    assert!(directory.by_id("").is_none());
    assert!(directory.by_id("02").is_none());
}

#[test]
fn single_predicate_lookups() {
    let directory = directory();
    assert_eq!(ids(&directory.by_type("A1")), vec!["1", "3"]);
    assert_eq!(ids(&directory.by_region("台北市")), vec!["1", "3"]);
    assert_eq!(ids(&directory.by_region("中正路")), vec!["4", "5"]);
    assert_eq!(ids(&directory.by_service("居家服務")), vec!["1", "4"]);
    assert!(directory.by_type("a1").is_empty());
    assert!(directory.by_service("居家").is_empty());
}

#[test]
fn generic_label_selects_codes_outside_the_table() {
    let directory = directory();
    assert!(directory.all_types().contains(&"長照機構".to_string()));
    assert_eq!(ids(&directory.by_type("長照機構")), vec!["5", "6"]);
    let query = FacilityQuery::new().with_type("長照機構").with_service("專業服務");
    let kinds: Vec<&str> = directory
        .filter(&query)
        .iter()
        .map(|facility| facility.kind.as_str())
        .collect();
    assert_eq!(kinds, vec!["ZZ"]);
}

#[test]
fn empty_criteria_pass_everything_through() {
    let directory = directory();
    let everything: Vec<String> = directory.all().iter().map(|f| f.id.clone()).collect();
    assert_eq!(ids(&directory.by_type("")), everything);
    assert_eq!(ids(&directory.by_region("")), everything);
    assert_eq!(ids(&directory.by_service("")), everything);
    assert_eq!(ids(&directory.filter(&FacilityQuery::default())), everything);
    let blank = FacilityQuery::new()
        .with_type("")
        .with_region("")
        .with_service("");
    assert_eq!(ids(&directory.filter(&blank)), everything);
}

#[test]
fn filter_combines_criteria_with_and() {
    let directory = directory();
    let query = FacilityQuery::new()
        .with_type("A1")
        .with_region("台北市")
        .with_service("居家服務");
    assert_eq!(ids(&directory.filter(&query)), vec!["1"]);

    let query = FacilityQuery::new().with_service("居家服務").with_region("宜蘭縣");
    assert_eq!(ids(&directory.filter(&query)), vec!["4"]);

    let query = FacilityQuery::new().with_type("B2").with_service("居家服務");
    assert!(directory.filter(&query).is_empty());
}

#[test]
fn types_are_labels_in_first_seen_order() {
    let directory = directory();
    assert_eq!(
        directory.all_types(),
        vec!["老人養護中心", "醫院或診所", "居家護理所", "長照機構"]
    );
    assert_eq!(directory.type_codes(), vec!["A1", "B2", "B1", "ZZ", ""]);
}

#[test]
fn type_order_follows_first_occurrence() {
    let directory = FacilityDirectory::new(vec![
        record("A1", "台北市", None),
        record("B2", "台北市", None),
        record("A1", "台北市", None),
        record("B1", "台北市", None),
    ]);
    assert_eq!(
        directory.all_types(),
        vec!["老人養護中心", "醫院或診所", "居家護理所"]
    );
}

#[test]
fn services_are_distinct_in_first_seen_order() {
    let directory = directory();
    assert_eq!(
        directory.all_services(),
        vec!["居家服務", "日間照顧", "專業服務"]
    );
}

#[test]
fn regions_use_marker_prefix_or_two_characters() {
    let directory = directory();
    assert_eq!(
        directory.all_regions(),
        vec!["台北市", "新北市", "宜蘭縣", "中正"]
    );
}

#[test]
fn service_scenario_from_two_records() {
    let directory = FacilityDirectory::new(vec![
        RawRecord {
            service_name: Some("居家服務".to_string()),
            contract_start: Some(20220101),
            contract_end: Some(20221231),
            ..RawRecord::default()
        },
        RawRecord::default(),
    ]);
    let all = directory.all();
    assert_eq!(all[0].services.len(), 1);
    assert_eq!(all[0].services[0].name, "居家服務");
    assert_eq!(all[0].services[0].start_date, "2022-01-01");
    assert_eq!(all[0].services[0].end_date, "2022-12-31");
    assert!(all[1].services.is_empty());
    assert_eq!(directory.all_services(), vec!["居家服務"]);
}

#[test]
fn stats_summarize_the_collection() {
    let stats = directory().stats();
    assert_eq!(stats.total, 6);
    assert_eq!(stats.with_location, 0);
    assert_eq!(stats.with_services, 4);
    assert_eq!(stats.types, 5);
    assert_eq!(stats.services, 3);
    assert_eq!(stats.regions, 4);
}

#[test]
fn empty_directory() {
    let directory = FacilityDirectory::default();
    assert!(directory.is_empty());
    assert!(directory.all().is_empty());
    assert!(directory.all_types().is_empty());
    assert!(directory.all_regions().is_empty());
}
