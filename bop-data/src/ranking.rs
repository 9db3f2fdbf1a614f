use crate::group::sum_descending;
use bop_anp::dataset::ProductionDataset;
use bop_anp::selector::BasinFilter;
use bop_utils::volume::format_volume;
use serde::Serialize;

/// Number of ranked fields shown on the bar chart.
pub const TOP_FIELD_COUNT: usize = 10;

/// One bar of the top-field ranking.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedField {
    pub field: String,
    pub basin: String,
    /// Summed production in m³ under the current filter.
    pub volume: f64,
    /// Display label, e.g. "TUPI (Santos)".
    pub label: String,
    /// Formatted volume, e.g. "9.865.331 m³".
    pub volume_text: String,
}

/// Compute the top-[`TOP_FIELD_COUNT`] field ranking for a basin selection.
///
/// Groups filtered records by (basin, field), sums volume, and sorts
/// descending; equal sums keep first-appearance order. An empty filtered
/// set yields an empty ranking, which the chart renders as zero bars.
pub fn compute_ranking(dataset: &ProductionDataset, filter: &BasinFilter) -> Vec<RankedField> {
    let records = dataset.filter_by_basin(filter);
    let by_basin_field = sum_descending(&records, |record| {
        (record.basin.as_str(), record.field.as_str())
    });
    let ranking: Vec<RankedField> = by_basin_field
        .into_iter()
        .take(TOP_FIELD_COUNT)
        .map(|((basin, field), volume)| RankedField {
            label: format!("{field} ({basin})"),
            volume_text: format_volume(volume),
            field: field.to_string(),
            basin: basin.to_string(),
            volume,
        })
        .collect();
    log::info!("ranking: {} fields ranked for {}", ranking.len(), filter);
    ranking
}

/// The ranked field names, in ranking order.
///
/// This is the whitelist [`crate::series::compute_series`] requires so the
/// evolution lines cover exactly the fields shown on the bar chart.
pub fn field_whitelist(ranking: &[RankedField]) -> Vec<String> {
    ranking.iter().map(|entry| entry.field.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::{compute_ranking, field_whitelist, TOP_FIELD_COUNT};
    use crate::rollup::compute_rollup;
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

    #[test]
    fn test_ranking_order_and_labels() {
        let dataset = ProductionDataset::sample();
        let ranking = compute_ranking(&dataset, &BasinFilter::All);
        assert!(!ranking.is_empty());
        assert!(ranking.len() <= TOP_FIELD_COUNT);
        // descending by volume
        for pair in ranking.windows(2) {
            assert!(pair[0].volume >= pair[1].volume);
        }
        // TUPI accumulates its aliased rows and tops the sample
        assert_eq!(ranking[0].field, "TUPI");
        assert_eq!(ranking[0].label, "TUPI (Santos)");
        assert!(ranking[0].volume_text.ends_with(" m³"));
    }

    #[test]
    fn test_ranking_tie_preserves_input_order() {
        let dataset = ProductionDataset::from_records(vec![
            record("A", "FIRST", "F-1", 2018, 100.0),
            record("A", "SECOND", "S-1", 2018, 100.0),
            record("A", "THIRD", "T-1", 2018, 50.0),
        ]);
        let ranking = compute_ranking(&dataset, &BasinFilter::All);
        let fields: Vec<&str> = ranking.iter().map(|entry| entry.field.as_str()).collect();
        assert_eq!(fields, ["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_ranking_truncates_to_top_ten() {
        let records: Vec<ProductionRecord> = (0..15)
            .map(|i| record("A", &format!("FIELD{i}"), "W-1", 2018, 100.0 + i as f64))
            .collect();
        let dataset = ProductionDataset::from_records(records);
        let ranking = compute_ranking(&dataset, &BasinFilter::All);
        assert_eq!(ranking.len(), TOP_FIELD_COUNT);
        assert_eq!(ranking[0].field, "FIELD14");
    }

    #[test]
    fn test_ranking_sum_bounded_by_rollup_total() {
        let dataset = ProductionDataset::sample();
        for filter in [
            BasinFilter::All,
            BasinFilter::Basin("Campos".to_string()),
            BasinFilter::Basin("Santos".to_string()),
        ] {
            let ranking = compute_ranking(&dataset, &filter);
            let ranked_sum: f64 = ranking.iter().map(|entry| entry.volume).sum();
            let total = compute_rollup(&dataset, &filter).unwrap().total_volume;
            assert!(ranked_sum <= total + 1e-6);
            // the sample has at most 10 distinct fields per filter
            assert!((ranked_sum - total).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ranking_empty_filter_is_empty() {
        let dataset = ProductionDataset::sample();
        let ranking = compute_ranking(&dataset, &BasinFilter::Basin("Potiguar".to_string()));
        assert!(ranking.is_empty());
    }

    #[test]
    fn test_field_whitelist() {
        let dataset = ProductionDataset::sample();
        let ranking = compute_ranking(&dataset, &BasinFilter::Basin("Santos".to_string()));
        let whitelist = field_whitelist(&ranking);
        assert_eq!(whitelist.len(), ranking.len());
        assert_eq!(whitelist[0], ranking[0].field);
    }
}
