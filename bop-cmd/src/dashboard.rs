//! Interactive dashboard loop: input events on stdin, recomputed frames on
//! stdout.
//!
//! Single-threaded and synchronous by design: each event triggers one total
//! recomputation that runs to completion before the next line is read.
//! Bad selectors are reported and the loop continues; only startup errors
//! (unreadable or rejected data) abort.

use crate::loader;
use bop_anp::dataset::ProductionDataset;
use bop_anp::selector::{BasinFilter, MetricSelector, SelectorError};
use bop_dashboard::controller::DashboardController;
use bop_dashboard::view::DashboardFrame;
use log::info;
use std::io::{self, BufRead};

/// One parsed input event.
#[derive(Debug, PartialEq, Eq)]
enum Event {
    Quit,
    Basin(String),
    Metric(String),
    Unknown(String),
    Empty,
}

fn parse_event(line: &str) -> Event {
    let trimmed = line.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };
    match command {
        "" => Event::Empty,
        "quit" | "exit" => Event::Quit,
        "basin" => Event::Basin(rest.to_string()),
        "metric" => Event::Metric(rest.to_string()),
        other => Event::Unknown(other.to_string()),
    }
}

fn print_frame(frame: &DashboardFrame, filter: &BasinFilter, metric: &MetricSelector) {
    println!();
    println!("== {filter} / {metric} ==");
    println!("Total production:    {}", frame.cards.total_production);
    println!("Top field:           {}", frame.cards.top_field);
    println!("Top well:            {}", frame.cards.top_well);
    println!("Top well production: {}", frame.cards.top_well_production);
    match frame.to_json() {
        Ok(payload) => println!("{payload}"),
        Err(e) => println!("failed to serialize chart payload: {e}"),
    }
}

fn print_help(basins: &[String]) {
    println!("Commands:");
    println!("  basin <name>   select a basin ({} or all)", basins.join(", "));
    println!("  metric <name>  select a metric (total-volume or yearly-evolution)");
    println!("  quit           exit");
}

/// Run the dashboard event loop over stdin.
pub fn run_dashboard(
    production_csv: Option<&str>,
    boundaries_json: Option<&str>,
) -> anyhow::Result<()> {
    let dataset = loader::load_production_or_sample(production_csv)?;
    if let Some(path) = boundaries_json {
        report_boundary_coverage(&dataset, path)?;
    }
    let controller = DashboardController::new(&dataset);

    let mut filter = BasinFilter::All;
    let mut metric = MetricSelector::TotalVolume;

    print_help(dataset.basins());
    print_frame(&controller.render_frame(&filter, &metric), &filter, &metric);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_event(&line) {
            Event::Empty => continue,
            Event::Quit => break,
            Event::Basin(name) => match BasinFilter::parse(&name, &dataset) {
                Ok(parsed) => filter = parsed,
                Err(SelectorError::UnknownBasin(name)) => {
                    println!("unknown basin: {name:?}");
                    continue;
                }
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            },
            Event::Metric(name) => match MetricSelector::parse(&name) {
                Ok(parsed) => metric = parsed,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            },
            Event::Unknown(command) => {
                println!("unknown command: {command:?}");
                print_help(dataset.basins());
                continue;
            }
        }
        info!("recomputing for {filter} / {metric}");
        print_frame(&controller.render_frame(&filter, &metric), &filter, &metric);
    }
    Ok(())
}

/// The map collaborator joins volumes onto polygons by canonical field
/// name; report how many of the dataset's fields it will find.
fn report_boundary_coverage(dataset: &ProductionDataset, path: &str) -> anyhow::Result<()> {
    let boundaries = loader::load_boundaries(path)?;
    let fields = dataset.fields(&BasinFilter::All);
    let mapped = fields
        .iter()
        .filter(|field| boundaries.lookup(field).is_some())
        .count();
    info!(
        "{} of {} fields have boundary polygons in {}",
        mapped,
        fields.len(),
        path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_event, Event};

    #[test]
    fn test_parse_event() {
        assert_eq!(parse_event("quit"), Event::Quit);
        assert_eq!(parse_event("  exit  "), Event::Quit);
        assert_eq!(parse_event("basin Santos"), Event::Basin("Santos".to_string()));
        assert_eq!(
            parse_event("metric yearly-evolution"),
            Event::Metric("yearly-evolution".to_string())
        );
        assert_eq!(parse_event(""), Event::Empty);
        assert_eq!(parse_event("refresh"), Event::Unknown("refresh".to_string()));
    }

    #[test]
    fn test_parse_event_keeps_multiword_basin() {
        assert_eq!(
            parse_event("basin Espirito Santo"),
            Event::Basin("Espirito Santo".to_string())
        );
    }
}
