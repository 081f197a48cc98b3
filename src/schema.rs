/// Layout the externally provisioned dataset file is expected to have.
/// The service never runs this DDL against the live store; it only checks
/// that the tables exist. Tests use it to build fixtures.
pub const SCHEMA: &'static str = r#"

CREATE TABLE IF NOT EXISTS station (
    id INTEGER PRIMARY KEY,
    station_id TEXT NOT NULL,
    name TEXT NOT NULL,
    latitude REAL,
    longitude REAL,
    elevation REAL
);

CREATE TABLE IF NOT EXISTS measurement (
    id INTEGER PRIMARY KEY,
    station_id TEXT NOT NULL,
    date TEXT NOT NULL,
    precipitation REAL,
    temperature REAL NOT NULL
);

"#;

pub const REQUIRED_TABLES: [&str; 2] = ["measurement", "station"];
