use crate::model::{MatchRecord, SelectionCriteria};
use crate::store::RecordStore;
use std::ops::Index;

/// Records from a store that satisfy one selection, in store order
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    records: Vec<&'a MatchRecord>,
}

impl<'a> FilteredView<'a> {
    /// A view over `records` as given, without filtering
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a MatchRecord>,
    {
        Self {
            records: records.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a MatchRecord> + '_ {
        self.records.iter().copied()
    }
}

impl<'a> Index<usize> for FilteredView<'a> {
    type Output = MatchRecord;

    fn index(&self, index: usize) -> &MatchRecord {
        self.records[index]
    }
}

/// Select the records of `store` that satisfy `criteria`
pub fn apply<'a>(store: &'a RecordStore, criteria: &SelectionCriteria) -> FilteredView<'a> {
    let view = FilteredView::from_records(store.iter().filter(|r| criteria.matches(r)));
    log::debug!(
        "Filter {}..={} over {} types kept {} of {} matches",
        criteria.year_min,
        criteria.year_max,
        criteria.allowed_tournament_types.len(),
        view.len(),
        store.len()
    );
    view
}
