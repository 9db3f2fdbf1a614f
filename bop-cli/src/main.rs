//! BOP CLI - Command line tool for exploring ANP basin oil production data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bop-cli",
    version,
    about = "Brazil Oil Production data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: bop_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    bop_cmd::run(cli.command)
}
