//! Pure conversion functions: CLI/TOML inputs -> crate API types.

use std::path::PathBuf;

use aura_series::TimeWindow;
use aura_store::AirStore;

use crate::cli::WindowArg;
use crate::config::AuraConfig;

/// Maps a CLI time-range choice to the series window type.
pub fn to_window(arg: WindowArg) -> TimeWindow {
    match arg {
        WindowArg::H24 => TimeWindow::Last24Hours,
        WindowArg::D7 => TimeWindow::Last7Days,
        WindowArg::D30 => TimeWindow::Last30Days,
    }
}

/// Resolves the database path, preferring the CLI override.
pub fn resolve_db_path(config: &AuraConfig, db_override: Option<PathBuf>) -> PathBuf {
    db_override.unwrap_or_else(|| config.store.path.clone())
}

/// Opens the measurements store from config plus optional CLI override.
pub fn open_store(
    config: &AuraConfig,
    db_override: Option<PathBuf>,
) -> Result<AirStore, aura_store::StoreError> {
    let path = resolve_db_path(config, db_override);
    AirStore::open(path, &config.store.table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_mapping() {
        assert_eq!(to_window(WindowArg::H24), TimeWindow::Last24Hours);
        assert_eq!(to_window(WindowArg::D7), TimeWindow::Last7Days);
        assert_eq!(to_window(WindowArg::D30), TimeWindow::Last30Days);
    }

    #[test]
    fn db_override_wins() {
        let config = AuraConfig::default();
        assert_eq!(
            resolve_db_path(&config, Some(PathBuf::from("elsewhere.sqlite"))),
            PathBuf::from("elsewhere.sqlite")
        );
        assert_eq!(
            resolve_db_path(&config, None),
            PathBuf::from("air_quality.sqlite")
        );
    }
}
