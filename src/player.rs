//! Per-player lookups over a view.
//!
//! Player identifiers are compared by exact string equality; no case or
//! whitespace folding is applied.

use crate::filter::FilteredView;
use crate::model::{MatchRecord, Side};
use crate::store::RecordStore;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Won,
    Lost,
    Unknown,
}

/// One match seen from a single player's side
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerMatchRow {
    pub date: Option<NaiveDate>,
    pub tournament: Option<String>,
    pub tournament_type: Option<String>,
    pub country: Option<String>,
    pub side: Side,
    pub opponent: Option<String>,
    pub outcome: Outcome,
    pub points_for: i32,
    pub points_against: i32,
    pub nb_sets: u8,
}

/// Win/loss record and point totals for a player
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub matches: usize,
    pub wins: usize,
    pub losses: usize,
    /// Matches whose winner could not be resolved to a side
    pub unresolved: usize,
    pub points_for: i64,
    pub points_against: i64,
}

impl PlayerSummary {
    /// Share of decided matches won, 0.0 when none were decided
    pub fn win_rate(&self) -> f64 {
        let decided = self.wins + self.losses;
        if decided == 0 {
            0.0
        } else {
            self.wins as f64 / decided as f64
        }
    }
}

/// Matches in `view` where `player_id` played on either side
pub fn matches_for<'a>(view: &FilteredView<'a>, player_id: &str) -> Vec<&'a MatchRecord> {
    view.iter().filter(|r| r.involves(player_id)).collect()
}

/// The global player catalogue, unaffected by any selection
pub fn known_players(store: &RecordStore) -> &BTreeSet<String> {
    store.known_players()
}

fn detail_row(record: &MatchRecord, side: Side) -> PlayerMatchRow {
    let outcome = match record.winning_side() {
        Some(winner) if winner == side => Outcome::Won,
        Some(_) => Outcome::Lost,
        None => Outcome::Unknown,
    };

    PlayerMatchRow {
        date: record.date,
        tournament: record.tournament.clone(),
        tournament_type: record.tournament_type.clone(),
        country: record.country.clone(),
        side,
        opponent: record.players(side.opposite()).map(String::from),
        outcome,
        points_for: record.points(side),
        points_against: record.points(side.opposite()),
        nb_sets: record.nb_sets,
    }
}

/// Detail rows for each of the player's matches, in view order
pub fn match_details(view: &FilteredView, player_id: &str) -> Vec<PlayerMatchRow> {
    view.iter()
        .filter_map(|r| r.side_of(player_id).map(|side| detail_row(r, side)))
        .collect()
}

pub fn player_summary(view: &FilteredView, player_id: &str) -> PlayerSummary {
    let mut summary = PlayerSummary::default();

    for row in match_details(view, player_id) {
        summary.matches += 1;
        summary.points_for += row.points_for as i64;
        summary.points_against += row.points_against as i64;
        match row.outcome {
            Outcome::Won => summary.wins += 1,
            Outcome::Lost => summary.losses += 1,
            Outcome::Unknown => summary.unresolved += 1,
        }
    }

    summary
}
