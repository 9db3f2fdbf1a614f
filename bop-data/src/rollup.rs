use crate::group::sum_descending;
use bop_anp::dataset::ProductionDataset;
use bop_anp::record::ProductionRecord;
use bop_anp::selector::BasinFilter;
use serde::Serialize;
use std::fmt;

/// Summary values for one basin selection: total production plus the top
/// field and the top well under that field.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BasinRollup {
    /// Total production in m³ over the filtered records.
    pub total_volume: f64,
    /// The field with the highest summed production.
    pub top_field: String,
    pub top_field_volume: f64,
    /// The most productive well within the top field.
    pub top_well: String,
    pub top_well_volume: f64,
}

/// Errors related to rollup computation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RollupError {
    /// The basin filter matched no records.
    NoMatchingRecords,
}

impl fmt::Display for RollupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollupError::NoMatchingRecords => write!(f, "no records match the basin filter"),
        }
    }
}

impl std::error::Error for RollupError {}

/// Compute the summary rollup for a basin selection.
///
/// Pure function of (dataset, filter): groups the filtered records by field
/// to find the top producer, then by well within that field. Fields with
/// equal sums rank in first-appearance order (stable sort). An empty
/// filtered set is reported as [`RollupError::NoMatchingRecords`] rather
/// than a panic on first-element indexing.
pub fn compute_rollup(
    dataset: &ProductionDataset,
    filter: &BasinFilter,
) -> Result<BasinRollup, RollupError> {
    let records = dataset.filter_by_basin(filter);
    if records.is_empty() {
        return Err(RollupError::NoMatchingRecords);
    }
    let total_volume: f64 = records.iter().map(|record| record.volume).sum();

    let by_field = sum_descending(&records, |record| record.field.as_str());
    let (top_field, top_field_volume) = (by_field[0].0.to_string(), by_field[0].1);

    let field_records: Vec<&ProductionRecord> = records
        .iter()
        .copied()
        .filter(|record| record.field == top_field)
        .collect();
    let by_well = sum_descending(&field_records, |record| record.well.as_str());
    let (top_well, top_well_volume) = (by_well[0].0.to_string(), by_well[0].1);

    log::info!(
        "rollup: {} matched {} records, total {:.0} m³",
        filter,
        records.len(),
        total_volume
    );
    Ok(BasinRollup {
        total_volume,
        top_field,
        top_field_volume,
        top_well,
        top_well_volume,
    })
}

#[cfg(test)]
mod tests {
    use super::{compute_rollup, RollupError};
    use bop_anp::dataset::ProductionDataset;
    use bop_anp::record::ProductionRecord;
    use bop_anp::selector::BasinFilter;

    fn record(basin: &str, field: &str, well: &str, year: i32, volume: f64) -> ProductionRecord {
        ProductionRecord {
            basin: basin.to_string(),
            field: field.to_string(),
            well: well.to_string(),
            year,
            volume,
        }
    }

    fn three_basin_dataset() -> ProductionDataset {
        ProductionDataset::from_records(vec![
            record("A", "ALPHA", "A-1", 2018, 100.0),
            record("B", "BRAVO", "B-1", 2018, 200.0),
            record("B", "BRAVO", "B-2", 2019, 50.0),
            record("B", "DELTA", "D-1", 2018, 120.0),
            record("C", "CHARLIE", "C-1", 2018, 300.0),
        ])
    }

    #[test]
    fn test_rollup_matches_hand_computed_fixture() {
        let dataset = three_basin_dataset();
        let rollup =
            compute_rollup(&dataset, &BasinFilter::Basin("B".to_string())).unwrap();
        // hand sum over basin B rows: 200 + 50 + 120
        assert!((rollup.total_volume - 370.0).abs() < f64::EPSILON);
        assert_eq!(rollup.top_field, "BRAVO");
        assert!((rollup.top_field_volume - 250.0).abs() < f64::EPSILON);
        assert_eq!(rollup.top_well, "B-1");
        assert!((rollup.top_well_volume - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rollup_all_basins() {
        let dataset = three_basin_dataset();
        let rollup = compute_rollup(&dataset, &BasinFilter::All).unwrap();
        assert!((rollup.total_volume - 770.0).abs() < f64::EPSILON);
        assert_eq!(rollup.top_field, "CHARLIE");
    }

    #[test]
    fn test_rollup_is_deterministic() {
        let dataset = ProductionDataset::sample();
        let filter = BasinFilter::Basin("Santos".to_string());
        let first = compute_rollup(&dataset, &filter).unwrap();
        let second = compute_rollup(&dataset, &filter).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rollup_empty_filter_is_explicit_error() {
        let dataset = three_basin_dataset();
        let result = compute_rollup(&dataset, &BasinFilter::Basin("Z".to_string()));
        assert_eq!(result, Err(RollupError::NoMatchingRecords));
    }

    #[test]
    fn test_rollup_tie_keeps_first_appearance_order() {
        let dataset = ProductionDataset::from_records(vec![
            record("A", "FIRST", "F-1", 2018, 100.0),
            record("A", "SECOND", "S-1", 2018, 100.0),
        ]);
        let rollup = compute_rollup(&dataset, &BasinFilter::All).unwrap();
        assert_eq!(rollup.top_field, "FIRST");
    }
}
