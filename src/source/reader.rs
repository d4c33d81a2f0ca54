use super::rows::RawMatchRow;
use crate::error::{Result, ViewError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns a match export must carry. `tournament_type` is nullable and may
/// be absent entirely.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "date",
    "tournament",
    "country",
    "team_one_players",
    "team_two_players",
    "team_one_total_points",
    "team_two_total_points",
    "nb_sets",
    "winner",
];

/// Read raw match rows from CSV content, preserving file order
pub fn read_matches<R: Read>(input: R) -> Result<Vec<RawMatchRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ViewError::MissingColumn(column.to_string()));
        }
    }

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: RawMatchRow = result?;
        rows.push(row);
    }

    log::info!("Read {} match rows", rows.len());
    Ok(rows)
}

/// Read raw match rows from a CSV file
pub fn read_matches_csv(path: &Path) -> Result<Vec<RawMatchRow>> {
    log::debug!("Opening match file {}", path.display());
    let file = File::open(path)?;
    read_matches(file)
}
