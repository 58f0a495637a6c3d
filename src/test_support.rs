//! Fixture helpers shared by unit tests.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `contents` to `dir/name` and return the full path.
pub fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// `count` well-formed rows with non-constant values in every feature column.
pub fn sample_rows(count: usize) -> String {
    let mut out = String::new();
    for i in 0..count {
        write!(out, "{i},grab").unwrap();
        for k in 0..12 {
            let value = ((i as f64) * 0.05 + k as f64).sin() * (k + 1) as f64;
            write!(out, ",{value}").unwrap();
        }
        out.push('\n');
    }
    out
}
