//! View models handed to the presentation layer.
//!
//! All structs derive `Serialize` so chart components can consume them as
//! JSON. The dashboard core never renders; these are the plain structured
//! values of the in-process contract with the rendering collaborator.

use bop_data::ranking::RankedField;
use bop_data::series::FieldSeries;
use serde::Serialize;

/// Label shown on the cards when a filter matches no records.
pub const NO_DATA_LABEL: &str = "Sem dados";

/// The four summary-card strings of the dashboard's left column.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryCards {
    /// Total production for the selection, e.g. "152.409.731 m³".
    pub total_production: String,
    /// Top field with its volume, e.g. "TUPI: 82.345.154 m³".
    pub top_field: String,
    /// Name of the most productive well under the top field.
    pub top_well: String,
    /// That well's total production, e.g. "48.248.419 m³".
    pub top_well_production: String,
}

impl SummaryCards {
    /// Fallback cards for an empty selection: zero totals, no performers.
    pub fn no_data() -> Self {
        SummaryCards {
            total_production: bop_utils::volume::format_volume(0.0),
            top_field: NO_DATA_LABEL.to_string(),
            top_well: NO_DATA_LABEL.to_string(),
            top_well_production: bop_utils::volume::format_volume(0.0),
        }
    }
}

/// Chart payload for the currently selected metric.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", content = "data")]
pub enum ChartData {
    /// Top-10 field bars (total-volume metric).
    Bar(Vec<RankedField>),
    /// One line per ranked field (yearly-evolution metric).
    Lines(Vec<FieldSeries>),
}

/// One full recomputation: both output groups for one input state.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardFrame {
    pub cards: SummaryCards,
    pub chart: ChartData,
}

impl DashboardFrame {
    /// The JSON payload handed to chart components.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
