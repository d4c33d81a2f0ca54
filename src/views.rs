use crate::aggregate::{
    country_year_pivot, matches_by_type, matches_per_year, score_distribution_groups,
    CategoryTally, PivotTable, YearSeries,
};
use crate::error::Result;
use crate::filter::{self, FilteredView};
use crate::metrics::{summarize, Summary};
use crate::model::SelectionCriteria;
use crate::store::RecordStore;
use serde::Serialize;
use std::collections::BTreeMap;

/// Every projection the dashboard shows for one selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViews {
    pub summary: Summary,
    pub per_year: YearSeries,
    pub by_type: CategoryTally,
    pub country_year: PivotTable,
    pub score_groups: BTreeMap<u8, Vec<u32>>,
}

impl DashboardViews {
    /// Compute all projections of `view`. The aggregations are independent
    /// and run on the rayon pool.
    pub fn compute(view: &FilteredView) -> Result<Self> {
        let ((summary, per_year), ((by_type, country_year), score_groups)) = rayon::join(
            || (summarize(view), matches_per_year(view)),
            || {
                rayon::join(
                    || (matches_by_type(view), country_year_pivot(view)),
                    || score_distribution_groups(view),
                )
            },
        );

        Ok(Self {
            summary,
            per_year,
            by_type,
            country_year,
            score_groups: score_groups?,
        })
    }

    /// Filter `store` by `criteria` and compute every projection
    pub fn for_selection(store: &RecordStore, criteria: &SelectionCriteria) -> Result<Self> {
        let view = filter::apply(store, criteria);
        Self::compute(&view)
    }
}
