//! Command implementations for the BOP CLI.
//!
//! Provides subcommands for inspecting ANP production data (summary cards,
//! field ranking, yearly series, basin listing) and for running the
//! interactive dashboard loop. When no production CSV is given, commands
//! fall back to the embedded Campos/Santos sample.

use clap::Subcommand;

pub mod dashboard;
pub mod loader;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Print the summary cards for a basin selection
    Summary {
        /// Path to the production CSV (plain or .gz); embedded sample if omitted
        #[arg(short = 'p', long)]
        production_csv: Option<String>,

        /// Basin to filter by (defaults to all basins)
        #[arg(short, long)]
        basin: Option<String>,
    },

    /// Print the top-10 field ranking
    Ranking {
        /// Path to the production CSV (plain or .gz); embedded sample if omitted
        #[arg(short = 'p', long)]
        production_csv: Option<String>,

        /// Basin to filter by (defaults to all basins)
        #[arg(short, long)]
        basin: Option<String>,

        /// Emit the bar-chart JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Emit the yearly-evolution line payload for the ranked fields
    Series {
        /// Path to the production CSV (plain or .gz); embedded sample if omitted
        #[arg(short = 'p', long)]
        production_csv: Option<String>,

        /// Basin to filter by (defaults to all basins)
        #[arg(short, long)]
        basin: Option<String>,

        /// Ignore records after this report year
        #[arg(long)]
        through_year: Option<String>,
    },

    /// List the basins present in the dataset
    Basins {
        /// Path to the production CSV (plain or .gz); embedded sample if omitted
        #[arg(short = 'p', long)]
        production_csv: Option<String>,
    },

    /// Run the interactive dashboard event loop on stdin
    Dashboard {
        /// Path to the production CSV (plain or .gz); embedded sample if omitted
        #[arg(short = 'p', long)]
        production_csv: Option<String>,

        /// Optional GeoJSON file with field boundary polygons
        #[arg(long)]
        boundaries_json: Option<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary {
            production_csv,
            basin,
        } => report::run_summary(production_csv.as_deref(), basin.as_deref()),
        Command::Ranking {
            production_csv,
            basin,
            json,
        } => report::run_ranking(production_csv.as_deref(), basin.as_deref(), json),
        Command::Series {
            production_csv,
            basin,
            through_year,
        } => report::run_series(
            production_csv.as_deref(),
            basin.as_deref(),
            through_year.as_deref(),
        ),
        Command::Basins { production_csv } => report::run_basins(production_csv.as_deref()),
        Command::Dashboard {
            production_csv,
            boundaries_json,
        } => dashboard::run_dashboard(production_csv.as_deref(), boundaries_json.as_deref()),
    }
}
