//! The immutable, loaded collection of match records

use crate::error::{Result, ViewError};
use crate::model::MatchRecord;
use crate::source::{self, RawMatchRow, REQUIRED_COLUMNS};
use std::collections::BTreeSet;
use std::path::Path;

/// Loaded match records plus the global player catalogue.
///
/// Records keep file order and are never mutated after load. The catalogue
/// is built once here; loading again is the only way to refresh it.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<MatchRecord>,
    players: BTreeSet<String>,
}

impl RecordStore {
    /// Coerce raw rows into a store.
    ///
    /// Fails if a required column is empty on every row or a numeric value
    /// cannot be coerced. Unparseable dates only null the record's year.
    pub fn load(rows: &[RawMatchRow]) -> Result<Self> {
        if !rows.is_empty() {
            for column in REQUIRED_COLUMNS {
                if rows.iter().all(|r| r.field(column).is_none()) {
                    return Err(ViewError::MissingColumn(column.to_string()));
                }
            }
        }

        let records = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| row.to_record(idx + 1))
            .collect::<Result<Vec<_>>>()?;

        let undated = records.iter().filter(|r| r.date.is_none()).count();
        if undated > 0 {
            log::warn!(
                "{} of {} records have an unparseable date and will never match a year range",
                undated,
                records.len()
            );
        }

        let store = Self::from_records(records);
        log::info!(
            "Loaded {} matches, {} known players",
            store.len(),
            store.players.len()
        );
        Ok(store)
    }

    /// Read and load a CSV match export
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let rows = source::read_matches_csv(path)?;
        Self::load(&rows)
    }

    /// Build a store from already typed records
    pub fn from_records(records: Vec<MatchRecord>) -> Self {
        let players = build_player_catalogue(&records);
        Self { records, players }
    }

    pub fn all(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&MatchRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchRecord> {
        self.records.iter()
    }

    /// Every player identifier in the store, sorted, independent of any filter
    pub fn known_players(&self) -> &BTreeSet<String> {
        &self.players
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a MatchRecord;
    type IntoIter = std::slice::Iter<'a, MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn build_player_catalogue(records: &[MatchRecord]) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(|r| [&r.team_one_players, &r.team_two_players])
        .flatten()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, one: &str, two: &str) -> RawMatchRow {
        RawMatchRow {
            date: Some(date.to_string()),
            tournament: Some("Japan Open 2019".to_string()),
            tournament_type: Some("HSBC World Tour Super 750".to_string()),
            country: Some("Japan".to_string()),
            team_one_players: Some(one.to_string()),
            team_two_players: Some(two.to_string()),
            team_one_total_points: Some("42".to_string()),
            team_two_total_points: Some("35".to_string()),
            nb_sets: Some("2".to_string()),
            winner: Some("1".to_string()),
        }
    }

    #[test]
    fn test_load_preserves_order() {
        let rows = vec![
            raw("2019-07-24", "Kento MOMOTA", "Kanta TSUNEYAMA"),
            raw("2019-07-23", "CHEN Long", "NG Ka Long Angus"),
            raw("2019-07-25", "Kento MOMOTA", "CHEN Long"),
        ];
        let store = RecordStore::load(&rows).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.all()[0].team_two_players.as_deref(), Some("Kanta TSUNEYAMA"));
        assert_eq!(store.all()[1].team_one_players.as_deref(), Some("CHEN Long"));
        assert_eq!(store.get(2).unwrap().team_two_players.as_deref(), Some("CHEN Long"));
        assert!(store.get(3).is_none());
    }

    #[test]
    fn test_load_tolerates_bad_dates() {
        let rows = vec![
            raw("2019-07-24", "Kento MOMOTA", "Kanta TSUNEYAMA"),
            raw("unknown", "CHEN Long", "NG Ka Long Angus"),
        ];
        let store = RecordStore::load(&rows).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].year(), Some(2019));
        assert_eq!(store.all()[1].year(), None);
    }

    #[test]
    fn test_load_column_absent_from_every_row() {
        let mut rows = vec![
            raw("2019-07-24", "Kento MOMOTA", "Kanta TSUNEYAMA"),
            raw("2019-07-25", "CHEN Long", "NG Ka Long Angus"),
        ];
        for row in &mut rows {
            row.country = None;
        }
        match RecordStore::load(&rows) {
            Err(ViewError::MissingColumn(column)) => assert_eq!(column, "country"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_load_single_missing_string_is_null() {
        let mut rows = vec![
            raw("2019-07-24", "Kento MOMOTA", "Kanta TSUNEYAMA"),
            raw("2019-07-25", "CHEN Long", "NG Ka Long Angus"),
        ];
        rows[1].country = None;
        let store = RecordStore::load(&rows).unwrap();
        assert_eq!(store.all()[1].country, None);
    }

    #[test]
    fn test_load_rejects_uncoercible_points() {
        let mut rows = vec![raw("2019-07-24", "Kento MOMOTA", "Kanta TSUNEYAMA")];
        rows[0].team_one_total_points = Some("twenty-one".to_string());
        let err = RecordStore::load(&rows).unwrap_err();
        assert!(err.is_data_format());
    }

    #[test]
    fn test_load_empty() {
        let store = RecordStore::load(&[]).unwrap();
        assert!(store.is_empty());
        assert!(store.known_players().is_empty());
    }

    #[test]
    fn test_known_players_catalogue() {
        let mut rows = vec![
            raw("2019-07-24", "Kento MOMOTA", "Kanta TSUNEYAMA"),
            raw("2019-07-25", "CHEN Long", "Kento MOMOTA"),
        ];
        rows.push(RawMatchRow {
            team_two_players: None,
            ..raw("2019-07-26", "Anders ANTONSEN", "")
        });
        let store = RecordStore::load(&rows).unwrap();
        let players: Vec<&str> = store.known_players().iter().map(String::as_str).collect();
        assert_eq!(
            players,
            vec!["Anders ANTONSEN", "CHEN Long", "Kanta TSUNEYAMA", "Kento MOMOTA"]
        );
    }
}
