//! Terminal rendering of query results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use longcare_model::{Facility, Location, Service};
use longcare_query::{DirectoryStats, estimate_travel_minutes};

/// Placeholder shown for empty fields.
const EMPTY: &str = "-";

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// One row per facility: id, name, type, address, phone, services.
pub fn facility_table(facilities: &[&Facility]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Type"),
        header_cell("Address"),
        header_cell("Phone"),
        header_cell("Services"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for facility in facilities {
        table.add_row(vec![
            Cell::new(&facility.id),
            Cell::new(&facility.name).add_attribute(Attribute::Bold),
            Cell::new(facility.type_label()),
            text_cell(&facility.address),
            text_cell(&facility.phone),
            text_cell(&service_list(facility)),
        ]);
    }
    table
}

/// Proximity results with straight-line distance and drive estimate.
pub fn nearby_table(facilities: &[Facility]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Type"),
        header_cell("Address"),
        header_cell("Distance (km)"),
        header_cell("Drive (min)"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for facility in facilities {
        let (distance, minutes) = match facility.distance {
            Some(km) => (
                Cell::new(format!("{km:.1}")),
                Cell::new(format!("~{}", estimate_travel_minutes(km))),
            ),
            None => (dim_cell(EMPTY), dim_cell(EMPTY)),
        };
        table.add_row(vec![
            Cell::new(&facility.id),
            Cell::new(&facility.name).add_attribute(Attribute::Bold),
            Cell::new(facility.type_label()),
            text_cell(&facility.address),
            distance,
            minutes,
        ]);
    }
    table
}

pub fn service_table(services: &[Service]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Service"),
        header_cell("Start"),
        header_cell("End"),
    ]);
    apply_table_style(&mut table);
    for service in services {
        table.add_row(vec![
            Cell::new(&service.name),
            text_cell(&service.start_date),
            text_cell(&service.end_date),
        ]);
    }
    table
}

/// Numbered listing of catalog values.
pub fn catalog_table(header: &str, values: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell(header)]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, value) in values.iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), text_cell(value)]);
    }
    table
}

/// Type codes alongside their display labels.
pub fn type_table(codes: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Label")]);
    apply_table_style(&mut table);
    for code in codes {
        table.add_row(vec![
            text_cell(code).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(longcare_model::label_for_code(code)),
        ]);
    }
    table
}

pub fn stats_table(stats: &DirectoryStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Facilities", stats.total),
        ("With location", stats.with_location),
        ("With services", stats.with_services),
        ("Type codes", stats.types),
        ("Services", stats.services),
        ("Regions", stats.regions),
    ];
    for (metric, count) in rows {
        table.add_row(vec![Cell::new(metric), Cell::new(count)]);
    }
    table
}

/// Plain-text detail card for a single facility.
pub fn facility_card(facility: &Facility) -> String {
    let contract = if facility.contract_start_date.is_empty() && facility.contract_end_date.is_empty()
    {
        EMPTY.to_string()
    } else {
        format!(
            "{} ~ {}",
            or_placeholder(&facility.contract_start_date),
            or_placeholder(&facility.contract_end_date)
        )
    };
    let lines = [
        format!("[{}] {}", facility.id, or_placeholder(&facility.name)),
        format!("  Type:     {} ({})", facility.type_label(), or_placeholder(&facility.kind)),
        format!("  Code:     {}", or_placeholder(&facility.code)),
        format!("  Address:  {}", or_placeholder(&facility.address)),
        format!("  Phone:    {}", or_placeholder(&facility.phone)),
        format!("  Email:    {}", or_placeholder(&facility.email)),
        format!("  Manager:  {}", or_placeholder(&facility.manager)),
        format!("  Contract: {contract}"),
        format!("  Location: {}", location_text(&facility.location)),
        format!("  {}", facility.description),
    ];
    lines.join("\n")
}

/// Coordinates for display, or `no location` for null island.
pub fn location_text(location: &Location) -> String {
    if location.is_set() {
        format!("{:.4}, {:.4}", location.lat, location.lng)
    } else {
        "no location".to_string()
    }
}

fn service_list(facility: &Facility) -> String {
    facility.service_names().collect::<Vec<_>>().join("、")
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() { EMPTY } else { value }
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell(EMPTY)
    } else {
        Cell::new(value)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
