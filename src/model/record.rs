use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// One of the two competing sides of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    TeamOne,
    TeamTwo,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::TeamOne => Side::TeamTwo,
            Side::TeamTwo => Side::TeamOne,
        }
    }

    /// Parse the BWF winner encoding ("1" / "2")
    pub fn from_winner_code(s: &str) -> Option<Self> {
        match s.trim() {
            "1" | "1.0" => Some(Side::TeamOne),
            "2" | "2.0" => Some(Side::TeamTwo),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::TeamOne => write!(f, "Team One"),
            Side::TeamTwo => write!(f, "Team Two"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchRecord {
    // Identification
    pub date: Option<NaiveDate>,
    pub tournament: Option<String>,
    pub tournament_type: Option<String>,
    pub country: Option<String>,

    // Competitors
    pub team_one_players: Option<String>,
    pub team_two_players: Option<String>,

    // Result
    pub team_one_total_points: i32,
    pub team_two_total_points: i32,
    pub nb_sets: u8,
    pub winner: Option<String>,
}

impl MatchRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the date to the first of January of `year`
    pub fn with_year(self, year: i32) -> Self {
        match NaiveDate::from_ymd_opt(year, 1, 1) {
            Some(date) => self.with_date(date),
            None => self,
        }
    }

    pub fn with_tournament(mut self, tournament: &str) -> Self {
        self.tournament = Some(tournament.to_string());
        self
    }

    pub fn with_tournament_type(mut self, tournament_type: &str) -> Self {
        self.tournament_type = Some(tournament_type.to_string());
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn with_players(mut self, team_one: &str, team_two: &str) -> Self {
        self.team_one_players = Some(team_one.to_string());
        self.team_two_players = Some(team_two.to_string());
        self
    }

    pub fn with_points(mut self, team_one: i32, team_two: i32) -> Self {
        self.team_one_total_points = team_one;
        self.team_two_total_points = team_two;
        self
    }

    pub fn with_sets(mut self, nb_sets: u8) -> Self {
        self.nb_sets = nb_sets;
        self
    }

    pub fn with_winner(mut self, winner: &str) -> Self {
        self.winner = Some(winner.to_string());
        self
    }

    /// Year of play, derived from `date`
    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }

    pub fn players(&self, side: Side) -> Option<&str> {
        match side {
            Side::TeamOne => self.team_one_players.as_deref(),
            Side::TeamTwo => self.team_two_players.as_deref(),
        }
    }

    pub fn points(&self, side: Side) -> i32 {
        match side {
            Side::TeamOne => self.team_one_total_points,
            Side::TeamTwo => self.team_two_total_points,
        }
    }

    /// Which side `player_id` played on, by exact string equality
    pub fn side_of(&self, player_id: &str) -> Option<Side> {
        if self.team_one_players.as_deref() == Some(player_id) {
            Some(Side::TeamOne)
        } else if self.team_two_players.as_deref() == Some(player_id) {
            Some(Side::TeamTwo)
        } else {
            None
        }
    }

    pub fn involves(&self, player_id: &str) -> bool {
        self.side_of(player_id).is_some()
    }

    /// Resolve `winner` to a side. Accepts the "1"/"2" encoding or the
    /// winning team's player string.
    pub fn winning_side(&self) -> Option<Side> {
        let winner = self.winner.as_deref()?;
        Side::from_winner_code(winner).or_else(|| self.side_of(winner))
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "????-??-??".to_string());
        write!(
            f,
            "{} {}: {} vs {} ({}-{}, {} sets)",
            date,
            self.tournament.as_deref().unwrap_or("-"),
            self.team_one_players.as_deref().unwrap_or("-"),
            self.team_two_players.as_deref().unwrap_or("-"),
            self.team_one_total_points,
            self.team_two_total_points,
            self.nb_sets
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_follows_date() {
        let record = MatchRecord::new().with_date(NaiveDate::from_ymd_opt(2019, 7, 14).unwrap());
        assert_eq!(record.year(), Some(2019));

        let undated = MatchRecord::new();
        assert_eq!(undated.year(), None);
    }

    #[test]
    fn test_side_of_is_exact() {
        let record = MatchRecord::new().with_players("Kento MOMOTA", "Viktor AXELSEN");
        assert_eq!(record.side_of("Kento MOMOTA"), Some(Side::TeamOne));
        assert_eq!(record.side_of("Viktor AXELSEN"), Some(Side::TeamTwo));
        assert_eq!(record.side_of("kento momota"), None);
        assert_eq!(record.side_of("Kento"), None);
    }

    #[test]
    fn test_winning_side() {
        let record = MatchRecord::new()
            .with_players("LEE Chong Wei", "LIN Dan")
            .with_winner("2");
        assert_eq!(record.winning_side(), Some(Side::TeamTwo));

        let by_name = record.clone().with_winner("LEE Chong Wei");
        assert_eq!(by_name.winning_side(), Some(Side::TeamOne));

        let unknown = record.with_winner("draw");
        assert_eq!(unknown.winning_side(), None);
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::TeamOne.opposite(), Side::TeamTwo);
        assert_eq!(Side::TeamTwo.opposite(), Side::TeamOne);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::TeamOne.to_string(), "Team One");
        assert_eq!(Side::TeamTwo.to_string(), "Team Two");
    }
}
