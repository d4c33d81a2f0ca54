//! Derived per-match point figures

use super::record::MatchRecord;
use crate::error::{Result, ViewError};

/// Combined points scored by both sides
pub fn total_points(record: &MatchRecord) -> Result<u32> {
    let one = record.team_one_total_points;
    let two = record.team_two_total_points;
    if one < 0 || two < 0 {
        return Err(ViewError::InvalidRecord(format!(
            "negative point total ({}, {}) in {}",
            one, two, record
        )));
    }
    Ok(one as u32 + two as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_points() {
        let record = MatchRecord::new().with_points(21, 15);
        assert_eq!(total_points(&record).unwrap(), 36);
    }

    #[test]
    fn test_total_points_rejects_negative() {
        let record = MatchRecord::new().with_points(-1, 10);
        let err = total_points(&record).unwrap_err();
        assert!(matches!(err, ViewError::InvalidRecord(_)));
        assert!(!err.is_data_format());

        let record = MatchRecord::new().with_points(10, -3);
        assert!(total_points(&record).is_err());
    }
}
