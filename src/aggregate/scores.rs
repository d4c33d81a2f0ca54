use crate::error::Result;
use crate::filter::FilteredView;
use crate::model::total_points;
use std::collections::BTreeMap;

/// Combined match points grouped by number of sets played, in view order
pub fn score_distribution_groups(view: &FilteredView) -> Result<BTreeMap<u8, Vec<u32>>> {
    let mut groups: BTreeMap<u8, Vec<u32>> = BTreeMap::new();
    for record in view.iter() {
        groups
            .entry(record.nb_sets)
            .or_default()
            .push(total_points(record)?);
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViewError;
    use crate::model::MatchRecord;

    #[test]
    fn test_score_distribution_groups() {
        let records = vec![
            MatchRecord::new().with_sets(2).with_points(42, 30),
            MatchRecord::new().with_sets(3).with_points(59, 61),
            MatchRecord::new().with_sets(2).with_points(21, 42),
        ];
        let groups = score_distribution_groups(&FilteredView::from_records(&records)).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&2], vec![72, 63]);
        assert_eq!(groups[&3], vec![120]);
    }

    #[test]
    fn test_score_distribution_invalid_record() {
        let records = vec![
            MatchRecord::new().with_sets(2).with_points(42, 30),
            MatchRecord::new().with_sets(2).with_points(-1, 10),
        ];
        let err = score_distribution_groups(&FilteredView::from_records(&records)).unwrap_err();
        assert!(matches!(err, ViewError::InvalidRecord(_)));
    }

    #[test]
    fn test_score_distribution_empty() {
        let groups = score_distribution_groups(&FilteredView::default()).unwrap();
        assert!(groups.is_empty());
    }
}
