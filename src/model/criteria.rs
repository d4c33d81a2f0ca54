use super::record::MatchRecord;
use std::collections::BTreeSet;

/// The year range and tournament types a view is restricted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCriteria {
    pub year_min: i32,
    pub year_max: i32,
    pub allowed_tournament_types: BTreeSet<String>,
}

impl SelectionCriteria {
    pub fn new<I, S>(year_min: i32, year_max: i32, allowed_tournament_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            year_min,
            year_max,
            allowed_tournament_types: allowed_tournament_types
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }

    /// Criteria covering every year and tournament type present in `records`.
    /// Returns `None` when no record carries a year.
    pub fn spanning<'a, I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a MatchRecord>,
    {
        let mut years: Option<(i32, i32)> = None;
        let mut types = BTreeSet::new();

        for record in records {
            if let Some(year) = record.year() {
                years = Some(match years {
                    Some((lo, hi)) => (lo.min(year), hi.max(year)),
                    None => (year, year),
                });
            }
            if let Some(t) = &record.tournament_type {
                types.insert(t.clone());
            }
        }

        years.map(|(year_min, year_max)| Self {
            year_min,
            year_max,
            allowed_tournament_types: types,
        })
    }

    /// Criteria from optional user input. Omitted bounds come from the years
    /// present in `records`, and an empty `types` means every type present.
    /// Returns `None` only when a bound is omitted and no record has a year.
    pub fn with_defaults(
        records: &[MatchRecord],
        year_min: Option<i32>,
        year_max: Option<i32>,
        types: &[String],
    ) -> Option<Self> {
        let (year_min, year_max) = match (year_min, year_max) {
            (Some(lo), Some(hi)) => (lo, hi),
            (lo, hi) => {
                let span = Self::spanning(records)?;
                (lo.unwrap_or(span.year_min), hi.unwrap_or(span.year_max))
            }
        };

        let allowed_tournament_types = if types.is_empty() {
            records
                .iter()
                .filter_map(|r| r.tournament_type.clone())
                .collect()
        } else {
            types.iter().cloned().collect()
        };

        Some(Self {
            year_min,
            year_max,
            allowed_tournament_types,
        })
    }

    /// Whether `record` falls inside this selection.
    ///
    /// A record without a year or a tournament type never matches, and an
    /// empty type set matches nothing.
    pub fn matches(&self, record: &MatchRecord) -> bool {
        let in_range = record
            .year()
            .is_some_and(|y| self.year_min <= y && y <= self.year_max);

        in_range
            && record
                .tournament_type
                .as_ref()
                .is_some_and(|t| self.allowed_tournament_types.contains(t))
    }
}
