use clap::{Parser, Subcommand};

mod commands;
mod format;
mod loader;
mod logging;
mod synthetic;

use commands::{AffordArgs, compare::CompareCommand, generate::GenerateCommand,
    project::ProjectCommand, trend::TrendCommand};

#[derive(Parser, Debug)]
#[command(name = "rentscope")]
#[command(about = "Dubai rental market affordability and comparison toolkit")]
struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute affordable rent and maximum purchase price from income inputs
    Afford(AffordArgs),
    /// Compare rental prices and affordability across neighborhoods
    Compare(CompareCommand),
    /// Show price trends by posting month or quarter
    Trend(TrendCommand),
    /// Project cumulative rent-vs-buy costs over a horizon
    Project(ProjectCommand),
    /// Write a synthetic listing dataset to disk
    Generate(GenerateCommand),
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init_logging(&args.log_level)?;

    match &args.command {
        Command::Afford(cmd) => commands::afford::run(cmd),
        Command::Compare(cmd) => commands::compare::run(cmd),
        Command::Trend(cmd) => commands::trend::run(cmd),
        Command::Project(cmd) => commands::project::run(cmd),
        Command::Generate(cmd) => commands::generate::run(cmd),
    }
}
