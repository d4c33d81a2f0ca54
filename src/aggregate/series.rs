use crate::filter::FilteredView;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Match counts per year, ascending by year
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct YearSeries {
    pub entries: Vec<(i32, usize)>,
}

impl YearSeries {
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.iter().map(|(year, _)| *year)
    }

    pub fn count(&self, year: i32) -> usize {
        self.entries
            .binary_search_by_key(&year, |(y, _)| *y)
            .map(|idx| self.entries[idx].1)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counts per category, largest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub entries: Vec<(String, usize)>,
}

impl CategoryTally {
    pub fn count(&self, category: &str) -> usize {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Number of matches for each year that appears in the view
pub fn matches_per_year(view: &FilteredView) -> YearSeries {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for year in view.iter().filter_map(|r| r.year()) {
        *counts.entry(year).or_default() += 1;
    }

    YearSeries {
        entries: counts.into_iter().collect(),
    }
}

/// Number of matches per tournament type, by descending count.
/// Equal counts keep the order in which the types first appear in the view.
pub fn matches_by_type(view: &FilteredView) -> CategoryTally {
    let mut entries: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for t in view.iter().filter_map(|r| r.tournament_type.as_deref()) {
        match index.get(t) {
            Some(&idx) => entries[idx].1 += 1,
            None => {
                index.insert(t, entries.len());
                entries.push((t.to_string(), 1));
            }
        }
    }

    // Stable sort keeps first-seen order among ties
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    CategoryTally { entries }
}
