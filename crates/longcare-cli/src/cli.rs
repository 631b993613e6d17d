//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "longcare",
    version,
    about = "Search a directory of long-term-care facilities",
    long_about = "Search a directory of long-term-care facilities.\n\n\
                  Loads a contract dataset (.json or .csv), then filters it by\n\
                  facility type, region and contracted service, or ranks\n\
                  facilities by straight-line distance from a location."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Dataset file (.json or .csv). Defaults to $LONGCARE_DATA.
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Print results as JSON instead of tables.
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List facilities, optionally filtered.
    List(FilterArgs),

    /// Show one facility in detail.
    Show(ShowArgs),

    /// List facility types present in the dataset.
    Types,

    /// List contracted services present in the dataset.
    Services,

    /// List regions derived from facility addresses.
    Regions,

    /// Rank facilities by straight-line distance from a location.
    Nearby(NearbyArgs),

    /// Print dataset counts.
    Stats,
}

#[derive(Args, Default)]
pub struct FilterArgs {
    /// Facility type code (e.g. A1) or label (e.g. 老人養護中心).
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Text the address must contain (e.g. 台北市).
    #[arg(long = "region")]
    pub region: Option<String>,

    /// Exact contracted service name.
    #[arg(long = "service")]
    pub service: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Facility id (1-based position in the dataset).
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Args)]
pub struct NearbyArgs {
    /// Latitude of the starting point.
    #[arg(long = "lat", allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the starting point.
    #[arg(long = "lng", allow_negative_numbers = true)]
    pub lng: f64,

    /// Search radius in kilometres.
    #[arg(long = "radius", default_value_t = 5.0)]
    pub radius: f64,

    /// Facility type code or label.
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Exact contracted service name.
    #[arg(long = "service")]
    pub service: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
