// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use resto::domain::{Amount, UserMap};
use tempfile::TempDir;

/// Build a user map from literal entries.
pub fn user_map(entries: &[(&str, Amount)]) -> UserMap {
    entries.iter().map(|(u, a)| (u.to_string(), *a)).collect()
}

/// Standard limits fixture: user1 294, user2 630.
pub fn sample_limits() -> UserMap {
    user_map(&[("user1", 294.0), ("user2", 630.0)])
}

/// Standard spends fixture: user1 132.95, user2 326.47.
pub fn sample_spends() -> UserMap {
    user_map(&[("user1", 132.95), ("user2", 326.47)])
}

/// Write `contents` to a file with the given name inside the temp dir.
pub fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}
