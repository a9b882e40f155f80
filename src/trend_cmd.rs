//! Trend command: AQI series for one site over a time window.

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use tracing::{info, info_span};

use aura_index::BreakpointTable;
use aura_series::aqi_trend;

use crate::cli::TrendArgs;
use crate::{config, convert};

/// Trend document consumed by the presentation layer.
#[derive(Debug, Serialize)]
struct TrendOutput {
    site: String,
    window: &'static str,
    points: Vec<PointOutput>,
}

/// One trend point.
#[derive(Debug, Serialize)]
struct PointOutput {
    timestamp: String,
    aqi: u16,
    pm25: f64,
}

/// Run the trend pipeline.
pub fn run(args: TrendArgs) -> Result<()> {
    let _cmd = info_span!("trend").entered();

    let config = config::load(args.config.as_deref())?;
    let store = convert::open_store(&config, args.db).context("failed to open measurements store")?;

    let window = convert::to_window(args.window);
    let now = Local::now().naive_local();
    let cutoff = window.cutoff(now);

    let readings = store
        .history(&args.site, cutoff)
        .with_context(|| format!("failed to load history for site {}", args.site))?;
    info!(
        site = %args.site,
        window = window.label(),
        n_readings = readings.len(),
        "history loaded"
    );

    let table = BreakpointTable::pm25();
    let points = aqi_trend(&readings, &table, window, now)
        .with_context(|| format!("trend derivation failed for site {}", args.site))?;

    let output = TrendOutput {
        site: args.site,
        window: window.label(),
        points: points
            .into_iter()
            .map(|p| PointOutput {
                timestamp: p.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                aqi: p.aqi,
                pm25: p.pm25,
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&output).context("failed to serialize trend")?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("failed to write trend: {}", path.display()))?;
            info!(path = %path.display(), "trend written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
