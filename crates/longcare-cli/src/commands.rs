use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::json;
use tracing::{debug, info_span};

use longcare_cli::config::resolve_data_path;
use longcare_cli::query_args::build_query;
use longcare_cli::render::{
    catalog_table, facility_card, facility_table, nearby_table, service_table, stats_table,
    type_table,
};
use longcare_ingest::load_dataset;
use longcare_model::{Location, label_for_code};
use longcare_query::{FacilityDirectory, nearby};

use crate::cli::{FilterArgs, NearbyArgs, ShowArgs};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Table,
    Json,
}

pub fn load_directory(data: Option<&Path>) -> Result<FacilityDirectory> {
    let path = resolve_data_path(data)?;
    let dataset =
        load_dataset(&path).with_context(|| format!("load dataset {}", path.display()))?;
    Ok(FacilityDirectory::new(dataset.records))
}

pub fn run_list(directory: &FacilityDirectory, args: &FilterArgs, output: Output) -> Result<()> {
    let query = build_query(
        args.kind.as_deref(),
        args.region.as_deref(),
        args.service.as_deref(),
    );
    let _span = info_span!("list", query = ?query).entered();
    let facilities = directory.filter(&query);
    debug!(match_count = facilities.len(), "filter applied");
    match output {
        Output::Json => print_json(&facilities),
        Output::Table if facilities.is_empty() => {
            println!("No facilities match the given filters.");
            Ok(())
        }
        Output::Table => {
            println!("{}", facility_table(&facilities));
            println!("{} of {} facilities", facilities.len(), directory.len());
            Ok(())
        }
    }
}

pub fn run_show(directory: &FacilityDirectory, args: &ShowArgs, output: Output) -> Result<()> {
    let Some(facility) = directory.by_id(&args.id) else {
        bail!("facility not found: {}", args.id);
    };
    match output {
        Output::Json => print_json(facility),
        Output::Table => {
            println!("{}", facility_card(facility));
            if !facility.services.is_empty() {
                println!("{}", service_table(&facility.services));
            }
            Ok(())
        }
    }
}

pub fn run_types(directory: &FacilityDirectory, output: Output) -> Result<()> {
    let codes = directory.type_codes();
    match output {
        Output::Json => {
            let entries: Vec<_> = codes
                .iter()
                .map(|code| json!({ "code": code, "label": label_for_code(code) }))
                .collect();
            print_json(&entries)
        }
        Output::Table => {
            println!("{}", type_table(&codes));
            Ok(())
        }
    }
}

pub fn run_services(directory: &FacilityDirectory, output: Output) -> Result<()> {
    print_catalog("Service", &directory.all_services(), output)
}

pub fn run_regions(directory: &FacilityDirectory, output: Output) -> Result<()> {
    print_catalog("Region", &directory.all_regions(), output)
}

pub fn run_nearby(directory: &FacilityDirectory, args: &NearbyArgs, output: Output) -> Result<()> {
    let origin = Location::new(args.lat, args.lng);
    if !origin.is_set() {
        bail!("{}, {} is not a usable location", args.lat, args.lng);
    }
    if !args.radius.is_finite() || args.radius < 0.0 {
        bail!("radius must be a non-negative number of kilometres");
    }
    let query = build_query(args.kind.as_deref(), None, args.service.as_deref());
    let _span = info_span!("nearby", lat = args.lat, lng = args.lng, radius_km = args.radius)
        .entered();
    let candidates = directory.filter(&query);
    let candidate_count = candidates.len();
    let ranked = nearby(candidates, origin, args.radius);
    debug!(
        candidate_count,
        match_count = ranked.len(),
        "proximity ranking applied"
    );
    match output {
        Output::Json => print_json(&ranked),
        Output::Table if ranked.is_empty() => {
            println!("No facilities within {:.1} km.", args.radius);
            Ok(())
        }
        Output::Table => {
            println!("{}", nearby_table(&ranked));
            println!("Distances are straight-line; drive times assume 40 km/h.");
            Ok(())
        }
    }
}

pub fn run_stats(directory: &FacilityDirectory, output: Output) -> Result<()> {
    let stats = directory.stats();
    match output {
        Output::Json => print_json(&json!({
            "total": stats.total,
            "withLocation": stats.with_location,
            "withServices": stats.with_services,
            "types": stats.types,
            "services": stats.services,
            "regions": stats.regions,
        })),
        Output::Table => {
            println!("{}", stats_table(&stats));
            Ok(())
        }
    }
}

fn print_catalog(header: &str, values: &[String], output: Output) -> Result<()> {
    match output {
        Output::Json => print_json(values),
        Output::Table => {
            println!("{}", catalog_table(header, values));
            Ok(())
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}
