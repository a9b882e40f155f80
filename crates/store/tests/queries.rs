use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, params};

use aura_store::{AirStore, StoreError};

const TABLE: &str = "defra_uk_air_quality";

fn dt(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn create_table(conn: &Connection) {
    conn.execute_batch(&format!(
        r#"CREATE TABLE "{TABLE}" (
               site TEXT NOT NULL,
               datetime TEXT NOT NULL,
               pm25 REAL,
               pm10 REAL,
               no2 REAL,
               o3 REAL,
               temperature REAL,
               humidity REAL,
               latitude REAL,
               longitude REAL
           );"#
    ))
    .unwrap();
}

fn insert(conn: &Connection, site: &str, when: NaiveDateTime, pm25: Option<f64>) {
    conn.execute(
        &format!(
            r#"INSERT INTO "{TABLE}"
               (site, datetime, pm25, pm10, no2, o3, temperature, humidity, latitude, longitude)
               VALUES (?1, ?2, ?3, 18.0, 24.5, 41.0, 16.2, 71.0, 51.5, -0.1)"#
        ),
        params![
            site,
            when.format("%Y-%m-%d %H:%M:%S").to_string(),
            pm25,
        ],
    )
    .unwrap();
}

fn seeded_store() -> AirStore {
    let conn = Connection::open_in_memory().unwrap();
    create_table(&conn);
    // London: three readings across two days.
    insert(&conn, "London", dt(1, 8), Some(10.0));
    insert(&conn, "London", dt(1, 20), Some(14.0));
    insert(&conn, "London", dt(2, 8), Some(22.0));
    // Leeds: newest row has no PM2.5 value.
    insert(&conn, "Leeds", dt(1, 9), Some(31.0));
    insert(&conn, "Leeds", dt(2, 9), None);
    // Cardiff: single reading.
    insert(&conn, "Cardiff", dt(2, 7), Some(55.0));
    AirStore::from_connection(conn, TABLE).unwrap()
}

#[test]
fn sites_sorted() {
    let store = seeded_store();
    assert_eq!(store.sites().unwrap(), vec!["Cardiff", "Leeds", "London"]);
}

#[test]
fn latest_by_site_picks_newest() {
    let store = seeded_store();
    let latest = store.latest_by_site().unwrap();
    assert_eq!(latest.len(), 3);

    // Ordered by site name.
    assert_eq!(latest[0].site, "Cardiff");
    assert_eq!(latest[1].site, "Leeds");
    assert_eq!(latest[2].site, "London");

    assert_eq!(latest[2].timestamp, dt(2, 8));
    assert_eq!(latest[2].pm25, 22.0);
}

#[test]
fn latest_skips_null_pm25() {
    let store = seeded_store();
    let latest = store.latest_by_site().unwrap();
    // Leeds' newest row has NULL pm25, so the previous reading wins.
    assert_eq!(latest[1].timestamp, dt(1, 9));
    assert_eq!(latest[1].pm25, 31.0);
}

#[test]
fn history_filters_and_orders() {
    let store = seeded_store();
    let readings = store.history("London", dt(1, 20)).unwrap();
    // Cutoff is inclusive.
    assert_eq!(readings.len(), 2);
    assert_eq!(readings[0].timestamp, dt(1, 20));
    assert_eq!(readings[1].timestamp, dt(2, 8));
}

#[test]
fn history_full_range() {
    let store = seeded_store();
    let readings = store.history("London", dt(1, 0)).unwrap();
    assert_eq!(readings.len(), 3);
    assert!(readings.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

#[test]
fn history_empty_window_is_ok() {
    let store = seeded_store();
    let readings = store.history("Cardiff", dt(2, 23)).unwrap();
    assert!(readings.is_empty());
}

#[test]
fn history_unknown_site() {
    let store = seeded_store();
    let result = store.history("Atlantis", dt(1, 0));
    assert!(matches!(result, Err(StoreError::UnknownSite { .. })));
}

#[test]
fn reading_fields_round_trip() {
    let store = seeded_store();
    let latest = store.latest_by_site().unwrap();
    let cardiff = &latest[0];
    assert_eq!(cardiff.pm10, 18.0);
    assert_eq!(cardiff.no2, 24.5);
    assert_eq!(cardiff.o3, 41.0);
    assert_eq!(cardiff.temperature, 16.2);
    assert_eq!(cardiff.humidity, 71.0);
    assert_eq!(cardiff.latitude, 51.5);
    assert_eq!(cardiff.longitude, -0.1);
}

#[test]
fn open_missing_database() {
    let dir = tempfile::tempdir().unwrap();
    let result = AirStore::open(dir.path().join("absent.sqlite"), TABLE);
    assert!(matches!(result, Err(StoreError::MissingDatabase { .. })));
}

#[test]
fn open_missing_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.sqlite");
    // Create a database file with no tables. The pragma write forces
    // SQLite to materialise the file on disk.
    let conn = Connection::open(&path).unwrap();
    conn.pragma_update(None, "user_version", 1).unwrap();
    drop(conn);
    let result = AirStore::open(&path, TABLE);
    assert!(matches!(result, Err(StoreError::MissingTable { .. })));
}

#[test]
fn open_file_backed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("air_quality.sqlite");
    let conn = Connection::open(&path).unwrap();
    create_table(&conn);
    insert(&conn, "London", dt(1, 8), Some(10.0));
    drop(conn);

    let store = AirStore::open(&path, TABLE).unwrap();
    assert_eq!(store.table(), TABLE);
    assert_eq!(store.sites().unwrap(), vec!["London"]);
}
