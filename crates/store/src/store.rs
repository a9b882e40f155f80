//! SQLite connection wrapper and measurement queries.
//!
//! The measurements table is produced by an external ingest pipeline;
//! this layer only reads it. Rows with a NULL PM2.5 value are excluded
//! at the SQL level so downstream index computation never sees them.

use std::path::Path;
use std::time::Duration;

use chrono::NaiveDateTime;
use rusqlite::{Connection, params};
use tracing::debug;

use crate::error::StoreError;
use crate::reading::Reading;

/// Read-only handle to a measurements database.
pub struct AirStore {
    conn: Connection,
    table: String,
}

impl AirStore {
    /// Opens a database file and verifies the measurements table exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingDatabase`] if `path` does not exist and
    /// [`StoreError::MissingTable`] if `table` is absent from the database.
    pub fn open(path: impl AsRef<Path>, table: &str) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StoreError::MissingDatabase {
                path: path.to_path_buf(),
            });
        }
        let conn = Connection::open(path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        debug!(path = %path.display(), table, "opened measurements database");
        Self::from_connection(conn, table)
    }

    /// Wraps an already-open connection after verifying the table exists.
    ///
    /// Used by tests with in-memory databases; the caller is responsible
    /// for having created and seeded the table.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingTable`] if `table` is absent.
    pub fn from_connection(conn: Connection, table: &str) -> Result<Self, StoreError> {
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
            params![table],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(StoreError::MissingTable {
                table: table.to_string(),
            });
        }
        Ok(Self {
            conn,
            table: table.to_string(),
        })
    }

    /// Returns the configured table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the sorted list of distinct site names.
    pub fn sites(&self) -> Result<Vec<String>, StoreError> {
        let sql = format!(
            r#"SELECT DISTINCT site FROM "{}" ORDER BY site"#,
            self.table
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        let sites = rows.collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(sites)
    }

    /// Returns the newest reading for every site, ordered by site name.
    pub fn latest_by_site(&self) -> Result<Vec<Reading>, StoreError> {
        let sql = format!(
            r#"SELECT {cols}
               FROM "{table}" r
               JOIN (SELECT site, MAX(datetime) AS latest
                     FROM "{table}"
                     WHERE pm25 IS NOT NULL
                     GROUP BY site) q
                 ON r.site = q.site AND r.datetime = q.latest
               WHERE r.pm25 IS NOT NULL
               ORDER BY r.site"#,
            cols = Reading::COLUMNS,
            table = self.table,
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], Reading::from_row)?;
        let readings = rows.collect::<rusqlite::Result<Vec<Reading>>>()?;
        debug!(n_sites = readings.len(), "loaded latest readings");
        Ok(readings)
    }

    /// Returns all readings for one site at or after `since`, ascending
    /// by timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownSite`] if the site has no rows at all
    /// (an empty result for a known site is not an error).
    pub fn history(
        &self,
        site: &str,
        since: NaiveDateTime,
    ) -> Result<Vec<Reading>, StoreError> {
        let exists_sql = format!(
            r#"SELECT EXISTS(SELECT 1 FROM "{}" WHERE site = ?1)"#,
            self.table
        );
        let exists: bool = self
            .conn
            .query_row(&exists_sql, params![site], |row| row.get(0))?;
        if !exists {
            return Err(StoreError::UnknownSite {
                site: site.to_string(),
            });
        }

        let sql = format!(
            r#"SELECT {cols}
               FROM "{table}"
               WHERE site = ?1 AND pm25 IS NOT NULL AND datetime >= ?2
               ORDER BY datetime"#,
            cols = Reading::COLUMNS,
            table = self.table,
        );
        // The ingest pipeline stores timestamps as space-separated TEXT
        // ("YYYY-MM-DD HH:MM:SS"). The cutoff must be bound in the same
        // format for the lexicographic comparison to hold.
        let since = since.format("%Y-%m-%d %H:%M:%S%.f").to_string();
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![site, since], Reading::from_row)?;
        let readings = rows.collect::<rusqlite::Result<Vec<Reading>>>()?;
        debug!(site, n_readings = readings.len(), "loaded site history");
        Ok(readings)
    }
}
