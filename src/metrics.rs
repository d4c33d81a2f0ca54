use crate::filter::FilteredView;
use serde::Serialize;
use std::collections::HashSet;

/// Headline counts for a view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub match_count: usize,
    pub tournament_count: usize,
    pub country_count: usize,
}

pub fn summarize(view: &FilteredView) -> Summary {
    let mut tournaments = HashSet::new();
    let mut countries = HashSet::new();

    for record in view.iter() {
        if let Some(t) = record.tournament.as_deref() {
            tournaments.insert(t);
        }
        if let Some(c) = record.country.as_deref() {
            countries.insert(c);
        }
    }

    Summary {
        match_count: view.len(),
        tournament_count: tournaments.len(),
        country_count: countries.len(),
    }
}
