use crate::dataset::ProductionDataset;
use serde::Serialize;
use std::fmt;

/// Basin selection applied to every aggregation call.
///
/// The enumeration is closed over the basins actually present in the
/// dataset plus `All`; [`parse`](BasinFilter::parse) rejects anything else
/// at the boundary, before the engine runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BasinFilter {
    /// No filtering (labelled "Total" in the dashboard).
    All,
    Basin(String),
}

impl BasinFilter {
    /// Parse a user-supplied basin name, validated against the dataset.
    ///
    /// "all" and "total" (any case) select [`BasinFilter::All`]; basin names
    /// match case-insensitively against the dataset's basins.
    pub fn parse(input: &str, dataset: &ProductionDataset) -> Result<Self, SelectorError> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case("total") {
            return Ok(BasinFilter::All);
        }
        for basin in dataset.basins() {
            if basin.eq_ignore_ascii_case(trimmed) {
                return Ok(BasinFilter::Basin(basin.clone()));
            }
        }
        Err(SelectorError::UnknownBasin(trimmed.to_string()))
    }
}

impl fmt::Display for BasinFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasinFilter::All => write!(f, "Total"),
            BasinFilter::Basin(name) => write!(f, "{name}"),
        }
    }
}

/// Which derived view the chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricSelector {
    /// Top-10 field totals as bars.
    TotalVolume,
    /// Per-field yearly production lines.
    YearlyEvolution,
}

impl MetricSelector {
    /// Parse a metric name. Accepted spellings: "total", "total-volume",
    /// "evolution", "yearly-evolution".
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "total" | "total-volume" => Ok(MetricSelector::TotalVolume),
            "evolution" | "yearly-evolution" => Ok(MetricSelector::YearlyEvolution),
            other => Err(SelectorError::UnknownMetric(other.to_string())),
        }
    }
}

impl fmt::Display for MetricSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricSelector::TotalVolume => write!(f, "total-volume"),
            MetricSelector::YearlyEvolution => write!(f, "yearly-evolution"),
        }
    }
}

/// A filter or metric value outside the closed enumerations.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SelectorError {
    UnknownBasin(String),
    UnknownMetric(String),
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorError::UnknownBasin(name) => write!(f, "unknown basin: {name:?}"),
            SelectorError::UnknownMetric(name) => write!(f, "unknown metric: {name:?}"),
        }
    }
}

impl std::error::Error for SelectorError {}

#[cfg(test)]
mod tests {
    use super::{BasinFilter, MetricSelector, SelectorError};
    use crate::dataset::ProductionDataset;

    #[test]
    fn test_parse_basin_filter() {
        let dataset = ProductionDataset::sample();
        assert_eq!(
            BasinFilter::parse("Total", &dataset).unwrap(),
            BasinFilter::All
        );
        assert_eq!(
            BasinFilter::parse("all", &dataset).unwrap(),
            BasinFilter::All
        );
        assert_eq!(
            BasinFilter::parse("santos", &dataset).unwrap(),
            BasinFilter::Basin("Santos".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_basin_rejected() {
        let dataset = ProductionDataset::sample();
        assert_eq!(
            BasinFilter::parse("Reconcavo", &dataset),
            Err(SelectorError::UnknownBasin("Reconcavo".to_string()))
        );
    }

    #[test]
    fn test_parse_metric_selector() {
        assert_eq!(
            MetricSelector::parse("total").unwrap(),
            MetricSelector::TotalVolume
        );
        assert_eq!(
            MetricSelector::parse("yearly-evolution").unwrap(),
            MetricSelector::YearlyEvolution
        );
        assert!(matches!(
            MetricSelector::parse("gas"),
            Err(SelectorError::UnknownMetric(_))
        ));
    }
}
