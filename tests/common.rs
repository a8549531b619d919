#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gcl() -> Command {
    cargo_bin_cmd!("geoclock")
}

/// A fix inside the default work zone (center 37.7749, -122.4194, r=2 km).
pub const INSIDE: (&str, &str) = ("37.7750", "-122.4195");

/// A fix ~2.79 km north of the default center, outside the 2 km radius.
pub const OUTSIDE: (&str, &str) = ("37.8000", "-122.4194");

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_geoclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema for a test database
pub fn init_db(db_path: &str) {
    gcl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Clock in from inside the default work zone
pub fn clock_in_inside(db_path: &str) {
    gcl()
        .args(["--db", db_path, "in", "--lat", INSIDE.0, "--lon", INSIDE.1])
        .assert()
        .success();
}

/// Clock out (containment not required; use the outside fix on purpose)
pub fn clock_out_outside(db_path: &str) {
    gcl()
        .args(["--db", db_path, "out", "--lat", OUTSIDE.0, "--lon", OUTSIDE.1])
        .assert()
        .success();
}
