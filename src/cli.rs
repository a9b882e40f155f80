use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Aura air quality reporting service.
#[derive(Parser)]
#[command(
    name = "aura",
    version,
    about = "Air quality index reports from the DEFRA UK measurements table"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List monitoring sites.
    Sites(SitesArgs),
    /// Emit the status-card snapshot for one site.
    Report(ReportArgs),
    /// Emit the AQI trend series for one site.
    Trend(TrendArgs),
}

/// Arguments for the `sites` subcommand.
#[derive(clap::Args)]
pub struct SitesArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override database path from config.
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Arguments for the `report` subcommand.
#[derive(clap::Args)]
pub struct ReportArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override database path from config.
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Monitoring site name.
    #[arg(short, long)]
    pub site: String,

    /// Path for JSON output (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `trend` subcommand.
#[derive(clap::Args)]
pub struct TrendArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override database path from config.
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Monitoring site name.
    #[arg(short, long)]
    pub site: String,

    /// Time range for the series.
    #[arg(short, long, value_enum, default_value = "24h")]
    pub window: WindowArg,

    /// Path for JSON output (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Time-range choices exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WindowArg {
    /// Last 24 hours.
    #[value(name = "24h")]
    H24,
    /// Last 7 days.
    #[value(name = "7d")]
    D7,
    /// Last 30 days.
    #[value(name = "30d")]
    D30,
}
