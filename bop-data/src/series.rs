use crate::group::sum_by;
use bop_anp::dataset::ProductionDataset;
use bop_anp::selector::BasinFilter;
use serde::Serialize;

/// One (basin, year, field) production total, a single point of the
/// evolution chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesPoint {
    pub basin: String,
    pub year: i32,
    pub field: String,
    pub volume: f64,
}

/// One line of the evolution chart: a field's per-year totals, tagged with
/// its basin.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldSeries {
    pub field: String,
    pub basin: String,
    /// (year, volume) points ordered by year ascending.
    pub points: Vec<(i32, f64)>,
}

/// Compute per-year production for the whitelisted fields, ordered by
/// (field, year) ascending.
///
/// The whitelist must be the one [`crate::ranking::compute_ranking`]
/// produced under the same filter; passing anything else would draw lines
/// for fields the bar chart does not show. The coupling is deliberate and
/// is why the whitelist is a required argument.
pub fn compute_series(
    dataset: &ProductionDataset,
    filter: &BasinFilter,
    whitelist: &[String],
) -> Vec<SeriesPoint> {
    let records = dataset.filter_by_basin(filter);
    let mut sums = sum_by(&records, |record| {
        (record.basin.as_str(), record.year, record.field.as_str())
    });
    sums.sort_by(|a, b| (a.0 .2, a.0 .1).cmp(&(b.0 .2, b.0 .1)));
    let points: Vec<SeriesPoint> = sums
        .into_iter()
        .filter(|((_, _, field), _)| whitelist.iter().any(|name| name == field))
        .map(|((basin, year, field), volume)| SeriesPoint {
            basin: basin.to_string(),
            year,
            field: field.to_string(),
            volume,
        })
        .collect();
    log::info!("series: {} points for {}", points.len(), filter);
    points
}

/// Fold flat series points into one entry per field for the line payload.
pub fn group_series_by_field(points: &[SeriesPoint]) -> Vec<FieldSeries> {
    let mut series: Vec<FieldSeries> = Vec::new();
    for point in points {
        match series
            .iter_mut()
            .find(|line| line.field == point.field && line.basin == point.basin)
        {
            Some(line) => line.points.push((point.year, point.volume)),
            None => series.push(FieldSeries {
                field: point.field.clone(),
                basin: point.basin.clone(),
                points: vec![(point.year, point.volume)],
            }),
        }
    }
    series
}
