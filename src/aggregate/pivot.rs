use crate::filter::FilteredView;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Dense country × year grid of match counts.
///
/// Every (row, column) combination has a cell; combinations with no
/// matches hold zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PivotTable {
    rows: Vec<String>,
    columns: Vec<i32>,
    cells: Vec<Vec<usize>>,
}

impl PivotTable {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn columns(&self) -> &[i32] {
        &self.columns
    }

    /// Cells in row-major order, aligned with `rows()` and `columns()`
    pub fn cells(&self) -> &[Vec<usize>] {
        &self.cells
    }

    /// Count for a (row, column) pair, `None` if either key is not in the grid
    pub fn get(&self, row: &str, column: i32) -> Option<usize> {
        let r = self.rows.binary_search_by(|k| k.as_str().cmp(row)).ok()?;
        let c = self.columns.binary_search(&column).ok()?;
        Some(self.cells[r][c])
    }

    pub fn row_total(&self, row: &str) -> Option<usize> {
        let r = self.rows.binary_search_by(|k| k.as_str().cmp(row)).ok()?;
        Some(self.cells[r].iter().sum())
    }

    pub fn column_total(&self, column: i32) -> Option<usize> {
        let c = self.columns.binary_search(&column).ok()?;
        Some(self.cells.iter().map(|row| row[c]).sum())
    }

    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Matches per host country and year.
///
/// First pass collects the distinct countries and years, second pass fills
/// a zeroed grid. Records lacking either key are left out.
pub fn country_year_pivot(view: &FilteredView) -> PivotTable {
    let mut countries: BTreeSet<&str> = BTreeSet::new();
    let mut years: BTreeSet<i32> = BTreeSet::new();

    for record in view.iter() {
        if let (Some(country), Some(year)) = (record.country.as_deref(), record.year()) {
            countries.insert(country);
            years.insert(year);
        }
    }

    let row_index: BTreeMap<&str, usize> =
        countries.iter().enumerate().map(|(i, c)| (*c, i)).collect();
    let column_index: BTreeMap<i32, usize> =
        years.iter().enumerate().map(|(i, y)| (*y, i)).collect();

    let mut cells = vec![vec![0usize; years.len()]; countries.len()];
    for record in view.iter() {
        if let (Some(country), Some(year)) = (record.country.as_deref(), record.year()) {
            cells[row_index[country]][column_index[&year]] += 1;
        }
    }

    PivotTable {
        rows: countries.into_iter().map(String::from).collect(),
        columns: years.into_iter().collect(),
        cells,
    }
}
