//! One-shot report commands: summary cards, field ranking, yearly series,
//! and basin listing.

use crate::loader;
use anyhow::Context;
use bop_anp::dataset::ProductionDataset;
use bop_anp::selector::BasinFilter;
use bop_data::ranking::{compute_ranking, field_whitelist};
use bop_data::series::{compute_series, group_series_by_field};
use bop_dashboard::controller::DashboardController;
use bop_utils::years::parse_report_year;
use log::info;

fn parse_basin(dataset: &ProductionDataset, basin: Option<&str>) -> anyhow::Result<BasinFilter> {
    match basin {
        Some(name) => Ok(BasinFilter::parse(name, dataset)?),
        None => Ok(BasinFilter::All),
    }
}

/// Print the four summary cards for a basin selection.
pub fn run_summary(production_csv: Option<&str>, basin: Option<&str>) -> anyhow::Result<()> {
    let dataset = loader::load_production_or_sample(production_csv)?;
    let filter = parse_basin(&dataset, basin)?;
    let controller = DashboardController::new(&dataset);
    let cards = controller.summary_cards(&filter);

    println!("Basin:               {filter}");
    println!("Total production:    {}", cards.total_production);
    println!("Top field:           {}", cards.top_field);
    println!("Top well:            {}", cards.top_well);
    println!("Top well production: {}", cards.top_well_production);
    Ok(())
}

/// Print the top-10 field ranking as a table, or as the bar-chart JSON
/// payload with `--json`.
pub fn run_ranking(
    production_csv: Option<&str>,
    basin: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let dataset = loader::load_production_or_sample(production_csv)?;
    let filter = parse_basin(&dataset, basin)?;
    let ranking = compute_ranking(&dataset, &filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
        return Ok(());
    }
    if ranking.is_empty() {
        println!("No production records for {filter}");
        return Ok(());
    }
    for (position, entry) in ranking.iter().enumerate() {
        println!(
            "{:>2}. {:<30} {:>18}",
            position + 1,
            entry.label,
            entry.volume_text
        );
    }
    Ok(())
}

/// Emit the yearly-evolution line payload for the ranked fields.
pub fn run_series(
    production_csv: Option<&str>,
    basin: Option<&str>,
    through_year: Option<&str>,
) -> anyhow::Result<()> {
    let dataset = loader::load_production_or_sample(production_csv)?;
    let filter = parse_basin(&dataset, basin)?;
    let through = through_year
        .map(parse_report_year)
        .transpose()
        .context("invalid --through-year")?;

    let ranking = compute_ranking(&dataset, &filter);
    let whitelist = field_whitelist(&ranking);
    let mut points = compute_series(&dataset, &filter, &whitelist);
    if let Some(year) = through {
        points.retain(|point| point.year <= year);
    }
    info!("series: emitting {} points for {}", points.len(), filter);

    let lines = group_series_by_field(&points);
    println!("{}", serde_json::to_string_pretty(&lines)?);
    Ok(())
}

/// List the basins present in the dataset with their record counts.
pub fn run_basins(production_csv: Option<&str>) -> anyhow::Result<()> {
    let dataset = loader::load_production_or_sample(production_csv)?;
    for basin in dataset.basins() {
        let count = dataset
            .filter_by_basin(&BasinFilter::Basin(basin.clone()))
            .len();
        println!("{basin} ({count} records)");
    }
    Ok(())
}
