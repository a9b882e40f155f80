//! Sites command: list monitoring sites.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use crate::cli::SitesArgs;
use crate::{config, convert};

/// Site-list document consumed by the presentation layer.
#[derive(Debug, Serialize)]
struct SitesOutput {
    sites: Vec<String>,
}

/// Run the site listing.
pub fn run(args: SitesArgs) -> Result<()> {
    let _cmd = info_span!("sites").entered();

    let config = config::load(args.config.as_deref())?;
    let store = convert::open_store(&config, args.db).context("failed to open measurements store")?;

    let sites = store.sites().context("failed to list sites")?;
    info!(n_sites = sites.len(), "sites listed");

    let output = SitesOutput { sites };
    let json = serde_json::to_string_pretty(&output).context("failed to serialize site list")?;
    println!("{json}");

    Ok(())
}
