//! CSV deal loading.
//!
//! Expects a header row. Column order is free; `sector` may be omitted.
//!
//! ```text
//! name,ebitda,entry_multiple,exit_multiple,revenue_growth,margin,leverage,interest_rate,sector
//! TargetCo_1,10000000,8,9,0.1,0.2,0.5,0.07,Tech
//! ```

use crate::error::{DeskError, Result};
use lbo_core::types::Deal;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Columns every deal file must carry.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "name",
    "ebitda",
    "entry_multiple",
    "exit_multiple",
    "revenue_growth",
    "margin",
    "leverage",
    "interest_rate",
];

/// Loads deals from a `.csv` file.
///
/// # Errors
///
/// - `DeskError::FileNotFound` if `path` does not exist
/// - `DeskError::UnsupportedFormat` for any extension other than `csv`
/// - `DeskError::MissingColumns` listing every absent required column
/// - `DeskError::Csv` for malformed rows
pub fn load_deals(path: &Path) -> Result<Vec<Deal>> {
    if !path.exists() {
        return Err(DeskError::FileNotFound(path.display().to_string()));
    }
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if extension != "csv" {
        return Err(DeskError::UnsupportedFormat(path.display().to_string()));
    }

    let deals = read_deals(std::fs::File::open(path)?)?;
    info!(path = %path.display(), n_deals = deals.len(), "deals loaded");
    Ok(deals)
}

/// Reads deals from CSV text.
///
/// # Errors
///
/// See [`load_deals`].
pub fn read_deals<R: Read>(reader: R) -> Result<Vec<Deal>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = reader.headers()?;
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DeskError::MissingColumns(missing));
    }
    debug!(columns = ?headers, "deal file headers");

    let mut deals = Vec::new();
    for record in reader.deserialize() {
        let deal: Deal = record?;
        deals.push(deal);
    }
    Ok(deals)
}
