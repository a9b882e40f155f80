//! Error types for the aura-store crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the aura-store crate.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Returned when the database file does not exist.
    ///
    /// Opening a missing path would silently create an empty database,
    /// so the path is checked up front.
    #[error("database file not found: {}", path.display())]
    MissingDatabase {
        /// The path that was checked.
        path: PathBuf,
    },

    /// Returned when the measurements table is absent from the database.
    #[error("table not found in database: {table}")]
    MissingTable {
        /// The table name that was looked up.
        table: String,
    },

    /// Returned when a site has no readings at all.
    #[error("unknown site: {site}")]
    UnknownSite {
        /// The site name that was queried.
        site: String,
    },

    /// Any underlying SQLite failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_missing_database() {
        let e = StoreError::MissingDatabase {
            path: PathBuf::from("/tmp/nope.sqlite"),
        };
        assert_eq!(e.to_string(), "database file not found: /tmp/nope.sqlite");
    }

    #[test]
    fn error_missing_table() {
        let e = StoreError::MissingTable {
            table: "defra_uk_air_quality".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "table not found in database: defra_uk_air_quality"
        );
    }

    #[test]
    fn error_unknown_site() {
        let e = StoreError::UnknownSite {
            site: "Atlantis".to_string(),
        };
        assert_eq!(e.to_string(), "unknown site: Atlantis");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<StoreError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<StoreError>();
    }
}
