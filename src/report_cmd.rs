//! Report command: status-card snapshot for one site.

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use tracing::{info, info_span};

use aura_index::BreakpointTable;
use aura_series::{SiteSnapshot, pollutant_levels};

use crate::cli::ReportArgs;
use crate::{config, convert};

/// Status-card document consumed by the presentation layer.
#[derive(Debug, Serialize)]
struct ReportOutput {
    site: String,
    last_updated: String,
    aqi: u16,
    status: &'static str,
    emoji: &'static str,
    color: &'static str,
    background: &'static str,
    pollutants: Vec<PollutantOutput>,
    weather: WeatherOutput,
    location: LocationOutput,
}

/// One labeled pollutant concentration.
#[derive(Debug, Serialize)]
struct PollutantOutput {
    name: &'static str,
    concentration: f64,
}

/// Weather values shown beside the card.
#[derive(Debug, Serialize)]
struct WeatherOutput {
    temperature: f64,
    humidity: f64,
}

/// Site coordinates for the map marker.
#[derive(Debug, Serialize)]
struct LocationOutput {
    latitude: f64,
    longitude: f64,
}

/// Run the report pipeline.
pub fn run(args: ReportArgs) -> Result<()> {
    let _cmd = info_span!("report").entered();

    let config = config::load(args.config.as_deref())?;
    let store = convert::open_store(&config, args.db).context("failed to open measurements store")?;

    let latest = store
        .latest_by_site()
        .context("failed to load latest readings")?;
    info!(n_sites = latest.len(), "latest readings loaded");

    let reading = latest
        .iter()
        .find(|r| r.site == args.site)
        .ok_or_else(|| {
            let available: Vec<&str> = latest.iter().map(|r| r.site.as_str()).collect();
            anyhow!(
                "site '{}' not found in latest readings (available: {:?})",
                args.site,
                available
            )
        })?;

    let table = BreakpointTable::pm25();
    let snapshot = SiteSnapshot::from_reading(reading, &table)
        .with_context(|| format!("index computation failed for site {}", args.site))?;
    info!(
        site = %snapshot.site,
        aqi = snapshot.aqi,
        status = snapshot.band.label(),
        "snapshot computed"
    );

    let output = ReportOutput {
        site: snapshot.site.clone(),
        last_updated: snapshot.last_updated.format("%d %b %H:%M").to_string(),
        aqi: snapshot.aqi,
        status: snapshot.band.label(),
        emoji: snapshot.band.emoji(),
        color: snapshot.band.color(),
        background: snapshot.band.background(),
        pollutants: pollutant_levels(reading)
            .into_iter()
            .map(|(p, v)| PollutantOutput {
                name: p.label(),
                concentration: v,
            })
            .collect(),
        weather: WeatherOutput {
            temperature: snapshot.temperature,
            humidity: snapshot.humidity,
        },
        location: LocationOutput {
            latitude: snapshot.latitude,
            longitude: snapshot.longitude,
        },
    };

    let json = serde_json::to_string_pretty(&output).context("failed to serialize report")?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
