use crate::error::{Result, ViewError};
use crate::model::MatchRecord;
use chrono::NaiveDate;
use serde::Deserialize;

/// One row of the BWF match export, as read from the file.
///
/// Every field is kept as text; coercion happens in [`RawMatchRow::to_record`].
/// Columns missing from the file deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMatchRow {
    pub date: Option<String>,
    pub tournament: Option<String>,
    pub tournament_type: Option<String>,
    pub country: Option<String>,
    pub team_one_players: Option<String>,
    pub team_two_players: Option<String>,
    pub team_one_total_points: Option<String>,
    pub team_two_total_points: Option<String>,
    pub nb_sets: Option<String>,
    pub winner: Option<String>,
}

/// Date layouts seen in BWF exports
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%Y/%m/%d"];

/// Parse a match date, ignoring any time-of-day suffix.
/// Returns `None` for anything unrecognised.
pub fn parse_match_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // "2019-07-14T10:30:00" or "2019-07-14 10:30:00"
    let day_part = s.split(['T', ' ']).next().unwrap_or(s);

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(day_part, fmt).ok())
}

/// Parse a whole number, accepting integral floats such as "21.0"
fn parse_count(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 => Some(f as i64),
        _ => None,
    }
}

/// Identifier cells are kept verbatim; only an empty cell is null
fn non_empty(field: &Option<String>) -> Option<String> {
    field.as_deref().filter(|s| !s.is_empty()).map(String::from)
}

fn invalid(row: usize, column: &str, value: Option<&str>) -> ViewError {
    ViewError::InvalidValue {
        row,
        column: column.to_string(),
        value: value.unwrap_or("").to_string(),
    }
}

fn points_field(row: usize, column: &str, value: &Option<String>) -> Result<i32> {
    let raw = value.as_deref();
    raw.and_then(parse_count)
        .filter(|n| (0..=i32::MAX as i64).contains(n))
        .map(|n| n as i32)
        .ok_or_else(|| invalid(row, column, raw))
}

fn sets_field(row: usize, value: &Option<String>) -> Result<u8> {
    let raw = value.as_deref();
    raw.and_then(parse_count)
        .filter(|n| (1..=u8::MAX as i64).contains(n))
        .map(|n| n as u8)
        .ok_or_else(|| invalid(row, "nb_sets", raw))
}

impl RawMatchRow {
    /// Look up a field by its column name
    pub fn field(&self, column: &str) -> Option<&str> {
        let value = match column {
            "date" => &self.date,
            "tournament" => &self.tournament,
            "tournament_type" => &self.tournament_type,
            "country" => &self.country,
            "team_one_players" => &self.team_one_players,
            "team_two_players" => &self.team_two_players,
            "team_one_total_points" => &self.team_one_total_points,
            "team_two_total_points" => &self.team_two_total_points,
            "nb_sets" => &self.nb_sets,
            "winner" => &self.winner,
            _ => return None,
        };
        value.as_deref().filter(|s| !s.is_empty())
    }

    /// Coerce into a typed record. `row` is the 1-based data row number
    /// used in error messages.
    ///
    /// An unparseable date degrades to `None`; numeric failures are errors.
    pub fn to_record(&self, row: usize) -> Result<MatchRecord> {
        let date = self.date.as_deref().and_then(parse_match_date);
        if date.is_none() {
            log::debug!(
                "Row {}: unparseable date '{}'",
                row,
                self.date.as_deref().unwrap_or("")
            );
        }

        Ok(MatchRecord {
            date,
            tournament: non_empty(&self.tournament),
            tournament_type: non_empty(&self.tournament_type),
            country: non_empty(&self.country),
            team_one_players: non_empty(&self.team_one_players),
            team_two_players: non_empty(&self.team_two_players),
            team_one_total_points: points_field(
                row,
                "team_one_total_points",
                &self.team_one_total_points,
            )?,
            team_two_total_points: points_field(
                row,
                "team_two_total_points",
                &self.team_two_total_points,
            )?,
            nb_sets: sets_field(row, &self.nb_sets)?,
            winner: non_empty(&self.winner),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RawMatchRow {
        RawMatchRow {
            date: Some("14-07-2019".to_string()),
            tournament: Some("Singapore Open 2019".to_string()),
            tournament_type: Some("HSBC World Tour Super 500".to_string()),
            country: Some("Singapore".to_string()),
            team_one_players: Some("Kento MOMOTA".to_string()),
            team_two_players: Some("Anthony Sinisuka GINTING".to_string()),
            team_one_total_points: Some("42".to_string()),
            team_two_total_points: Some("31".to_string()),
            nb_sets: Some("2".to_string()),
            winner: Some("1".to_string()),
        }
    }

    #[test]
    fn test_parse_match_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2019, 7, 14);
        assert_eq!(parse_match_date("2019-07-14"), expected);
        assert_eq!(parse_match_date("14-07-2019"), expected);
        assert_eq!(parse_match_date("14/07/2019"), expected);
        assert_eq!(parse_match_date("2019/07/14"), expected);
        assert_eq!(parse_match_date("2019-07-14T10:30:00"), expected);
        assert_eq!(parse_match_date("2019-07-14 10:30:00"), expected);
        assert_eq!(parse_match_date(""), None);
        assert_eq!(parse_match_date("not a date"), None);
        assert_eq!(parse_match_date("31-02-2019"), None);
    }

    #[test]
    fn test_to_record() {
        let record = row().to_record(1).unwrap();
        assert_eq!(record.year(), Some(2019));
        assert_eq!(record.tournament.as_deref(), Some("Singapore Open 2019"));
        assert_eq!(record.team_one_total_points, 42);
        assert_eq!(record.team_two_total_points, 31);
        assert_eq!(record.nb_sets, 2);
        assert_eq!(record.winner.as_deref(), Some("1"));
    }

    #[test]
    fn test_to_record_degrades_bad_date() {
        let mut raw = row();
        raw.date = Some("TBD".to_string());
        let record = raw.to_record(3).unwrap();
        assert_eq!(record.date, None);
        assert_eq!(record.year(), None);
    }

    #[test]
    fn test_to_record_accepts_float_counts() {
        let mut raw = row();
        raw.team_one_total_points = Some("42.0".to_string());
        raw.nb_sets = Some(" 3.0 ".to_string());
        let record = raw.to_record(1).unwrap();
        assert_eq!(record.team_one_total_points, 42);
        assert_eq!(record.nb_sets, 3);
    }

    #[test]
    fn test_to_record_rejects_bad_numbers() {
        let mut raw = row();
        raw.team_two_total_points = Some("-4".to_string());
        match raw.to_record(7) {
            Err(ViewError::InvalidValue { row, column, value }) => {
                assert_eq!(row, 7);
                assert_eq!(column, "team_two_total_points");
                assert_eq!(value, "-4");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }

        let mut raw = row();
        raw.nb_sets = Some("0".to_string());
        assert!(raw.to_record(1).is_err());

        let mut raw = row();
        raw.team_one_total_points = None;
        assert!(raw.to_record(1).unwrap_err().is_data_format());

        let mut raw = row();
        raw.team_one_total_points = Some("21.5".to_string());
        assert!(raw.to_record(1).is_err());
    }

    #[test]
    fn test_string_cells_kept_verbatim() {
        let mut raw = row();
        raw.team_one_players = Some("Kento MOMOTA ".to_string());
        raw.tournament_type = Some("   ".to_string());
        raw.country = Some(String::new());
        let record = raw.to_record(1).unwrap();
        assert_eq!(record.team_one_players.as_deref(), Some("Kento MOMOTA "));
        assert_eq!(record.tournament_type.as_deref(), Some("   "));
        assert_eq!(record.country, None);
    }
}
