#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wt() -> Command {
    cargo_bin_cmd!("worktimer")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worktimer.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Seed the test database with raw (timestamp, working) rows through the
/// library store, so the schema is created the same way the CLI creates it.
pub fn seed_events(db_path: &str, rows: &[(&str, bool)]) {
    let store = worktimer::db::store::EventStore::open(
        std::path::Path::new(db_path),
        worktimer::utils::date::today(),
    )
    .expect("failed to open test db");

    for (ts, working) in rows {
        let ts = chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S")
            .expect("bad test timestamp");
        store.append(ts, *working).expect("failed to seed event");
    }

    store.close().expect("failed to close test db");
}

/// Dump every event row as (timestamp text, working flag), oldest first.
pub fn all_events(db_path: &str) -> Vec<(String, i64)> {
    let conn = rusqlite::Connection::open(db_path).expect("failed to open test db");
    let mut stmt = conn
        .prepare("SELECT timestamp, working FROM event ORDER BY timestamp ASC, event_id ASC")
        .unwrap();
    let rows = stmt
        .query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, i64>(1)?)))
        .unwrap();
    rows.map(|r| r.unwrap()).collect()
}
