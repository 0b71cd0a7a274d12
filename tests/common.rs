#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rworklogger::clock::FixedClock;
use rworklogger::core::Worklog;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwl() -> Command {
    cargo_bin_cmd!("rworklogger")
}

/// Create a unique test store path inside the system temp dir and remove any
/// leftovers (store, journal, temp file) from a previous run
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklogger.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    fs::remove_file(path.with_extension("journal")).ok();
    fs::remove_file(path.with_extension("json.tmp")).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklogger_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn write_store(path: &str, json: &str) {
    fs::write(path, json).expect("write store");
}

pub fn read_store(path: &str) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("read store");
    serde_json::from_str(&content).expect("parse store")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("datetime")
}

/// Open the store at `path` with the clock pinned to `now` ("YYYY-MM-DD HH:MM")
pub fn worklog_at(path: &str, now: &str) -> Worklog {
    Worklog::open(path, Box::new(FixedClock(at(now)))).expect("open worklog")
}
