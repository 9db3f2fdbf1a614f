//! Recompute-on-input controller.
//!
//! Two observed inputs drive the dashboard: the basin filter and the metric
//! selector. A filter change recomputes the summary cards and the chart; a
//! metric change recomputes the chart only. Every recomputation is total,
//! never incremental, and the controller holds no state of its own beyond
//! the borrowed dataset.

use crate::view::{ChartData, DashboardFrame, SummaryCards};
use bop_anp::dataset::ProductionDataset;
use bop_anp::selector::{BasinFilter, MetricSelector};
use bop_data::ranking::{compute_ranking, field_whitelist};
use bop_data::rollup::{compute_rollup, RollupError};
use bop_data::series::{compute_series, group_series_by_field};
use bop_utils::volume::{format_field_volume, format_volume};

/// Binds the shared read-only dataset to the derived dashboard outputs.
pub struct DashboardController<'a> {
    dataset: &'a ProductionDataset,
}

impl<'a> DashboardController<'a> {
    pub fn new(dataset: &'a ProductionDataset) -> Self {
        DashboardController { dataset }
    }

    /// Output group 1: the summary cards, recomputed on filter change.
    ///
    /// An empty selection degrades to the "no data" cards instead of
    /// propagating the rollup error to the presentation layer.
    pub fn summary_cards(&self, filter: &BasinFilter) -> SummaryCards {
        match compute_rollup(self.dataset, filter) {
            Ok(rollup) => SummaryCards {
                total_production: format_volume(rollup.total_volume),
                top_field: format_field_volume(&rollup.top_field, rollup.top_field_volume),
                top_well: rollup.top_well,
                top_well_production: format_volume(rollup.top_well_volume),
            },
            Err(RollupError::NoMatchingRecords) => {
                log::warn!("no records match basin filter {filter}");
                SummaryCards::no_data()
            }
        }
    }

    /// Output group 2: the chart payload, recomputed on filter or metric
    /// change.
    ///
    /// The ranking always runs first; for the evolution metric its field
    /// whitelist feeds the series pass so both charts agree on the fields
    /// displayed.
    pub fn chart_data(&self, filter: &BasinFilter, metric: &MetricSelector) -> ChartData {
        let ranking = compute_ranking(self.dataset, filter);
        match metric {
            MetricSelector::TotalVolume => ChartData::Bar(ranking),
            MetricSelector::YearlyEvolution => {
                let whitelist = field_whitelist(&ranking);
                let points = compute_series(self.dataset, filter, &whitelist);
                ChartData::Lines(group_series_by_field(&points))
            }
        }
    }

    /// One input event's full recomputation: both output groups.
    pub fn render_frame(&self, filter: &BasinFilter, metric: &MetricSelector) -> DashboardFrame {
        DashboardFrame {
            cards: self.summary_cards(filter),
            chart: self.chart_data(filter, metric),
        }
    }
}
