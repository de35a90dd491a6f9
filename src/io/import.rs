use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::{Amount, UserMap};

/// File format for per-user amount tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    /// Pick the format from the file extension. Anything that is not
    /// `.csv` is treated as JSON.
    pub fn from_path(path: &str) -> Self {
        match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ImportFormat::Csv,
            _ => ImportFormat::Json,
        }
    }
}

/// One `user,amount` row in a CSV input file.
#[derive(Debug, Deserialize)]
struct UserAmountRecord {
    user: String,
    amount: Amount,
}

/// Read a user -> amount table from a JSON object like
/// `{"user1": 294, "user2": 630}`.
pub fn read_user_map_json<R: Read>(reader: R) -> Result<UserMap> {
    let map: UserMap = serde_json::from_reader(reader).context("Invalid JSON user map")?;
    Ok(map)
}

/// Read a user -> amount table from CSV with `user,amount` columns.
/// Duplicate users are rejected.
pub fn read_user_map_csv<R: Read>(reader: R) -> Result<UserMap> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut map = UserMap::new();

    for (line_num, result) in csv_reader.deserialize().enumerate() {
        let line = line_num + 2; // +2 for header and 0-indexing
        let record: UserAmountRecord =
            result.with_context(|| format!("CSV parse error at line {}", line))?;

        if map.insert(record.user.clone(), record.amount).is_some() {
            anyhow::bail!("Duplicate user '{}' at line {}", record.user, line);
        }
    }

    Ok(map)
}

/// Load a user -> amount table from a file, picking the format from the
/// extension.
pub fn load_user_map(path: &str) -> Result<UserMap> {
    let file = File::open(path).with_context(|| format!("Failed to open input file: {}", path))?;

    match ImportFormat::from_path(path) {
        ImportFormat::Json => read_user_map_json(file),
        ImportFormat::Csv => read_user_map_csv(file),
    }
    .with_context(|| format!("Failed to read user map from {}", path))
}
