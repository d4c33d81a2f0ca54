pub mod pivot;
pub mod scores;
pub mod series;

pub use pivot::{country_year_pivot, PivotTable};
pub use scores::score_distribution_groups;
pub use series::{matches_by_type, matches_per_year, CategoryTally, YearSeries};
