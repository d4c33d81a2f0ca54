//! CSV writers for aggregation results

use crate::aggregate::{CategoryTally, PivotTable, YearSeries};
use crate::error::Result;
use crate::player::{Outcome, PlayerMatchRow};
use csv::Writer;
use std::io::Write;

/// Write the pivot as a grid: a `country` column followed by one column per year
pub fn write_pivot<W: Write>(pivot: &PivotTable, out: W) -> Result<()> {
    let mut writer = Writer::from_writer(out);

    let mut header = vec!["country".to_string()];
    header.extend(pivot.columns().iter().map(|y| y.to_string()));
    writer.write_record(&header)?;

    for (country, counts) in pivot.rows().iter().zip(pivot.cells()) {
        let mut record = vec![country.clone()];
        record.extend(counts.iter().map(|n| n.to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_year_series<W: Write>(series: &YearSeries, out: W) -> Result<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(["year", "matches"])?;
    for (year, count) in &series.entries {
        writer.write_record(&[year.to_string(), count.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_category_tally<W: Write>(tally: &CategoryTally, out: W) -> Result<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(["tournament_type", "matches"])?;
    for (category, count) in &tally.entries {
        writer.write_record(&[category.clone(), count.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_player_matches<W: Write>(rows: &[PlayerMatchRow], out: W) -> Result<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record([
        "date",
        "tournament",
        "tournament_type",
        "country",
        "opponent",
        "result",
        "points_for",
        "points_against",
        "nb_sets",
    ])?;

    for row in rows {
        let result = match row.outcome {
            Outcome::Won => "W",
            Outcome::Lost => "L",
            Outcome::Unknown => "",
        };
        writer.write_record(&[
            row.date.map(|d| d.to_string()).unwrap_or_default(),
            row.tournament.clone().unwrap_or_default(),
            row.tournament_type.clone().unwrap_or_default(),
            row.country.clone().unwrap_or_default(),
            row.opponent.clone().unwrap_or_default(),
            result.to_string(),
            row.points_for.to_string(),
            row.points_against.to_string(),
            row.nb_sets.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
