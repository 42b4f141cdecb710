//! Dataset loading for the command-line front end.
//!
//! A dataset is a JSON-lines file where each non-blank line is an object
//! `{"key": "<string>", "value": <any JSON>}`. Lines are inserted in file
//! order, so the first value seen for a key wins under the default ledger.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::data_structures::prefix_index::{PrefixIndex, PrefixIndexConfig, PrefixIndexError};
use crate::error::{AppError, AppResult};

/// One `(key, value)` pair read from a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetEntry {
    /// Searchable key
    pub key: String,

    /// Associated payload
    pub value: Value,
}

/// Summary of a dataset load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Entries read (blank lines excluded)
    pub entries: usize,

    /// Entries stored in the index
    pub inserted: usize,

    /// Entries the index rejected as duplicates or with an empty key
    pub duplicates: usize,

    /// Entries skipped because their key cannot be indexed
    pub skipped: usize,
}

/// Inserts every entry read from `reader` into `index`.
///
/// # Errors
///
/// Fails on I/O errors and on lines that are not valid entries. Keys with
/// characters outside the alphabet, or longer than the index allows, are
/// skipped with a warning and counted in [`LoadReport::skipped`].
pub fn load_into<R: BufRead>(reader: R, index: &mut PrefixIndex<Value>) -> AppResult<LoadReport> {
    let mut report = LoadReport::default();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let entry: DatasetEntry = serde_json::from_str(&line).map_err(|e| AppError::Dataset {
            line: number + 1,
            message: e.to_string(),
        })?;
        report.entries += 1;

        match index.add(&entry.key, entry.value) {
            Ok(true) => report.inserted += 1,
            Ok(false) => report.duplicates += 1,
            Err(
                e @ (PrefixIndexError::InvalidCharacter { .. } | PrefixIndexError::KeyTooLong { .. }),
            ) => {
                warn!(line = number + 1, key = %entry.key, error = %e, "Skipping dataset entry");
                report.skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(report)
}

/// Builds an index from the dataset file at `path`.
pub fn load_file(
    path: &Path,
    config: PrefixIndexConfig,
) -> AppResult<(PrefixIndex<Value>, LoadReport)> {
    let file = File::open(path)?;
    let mut index = PrefixIndex::with_config(config);
    let report = load_into(BufReader::new(file), &mut index)?;

    info!(
        path = %path.display(),
        entries = report.entries,
        inserted = report.inserted,
        duplicates = report.duplicates,
        skipped = report.skipped,
        "Dataset loaded"
    );
    Ok((index, report))
}
