//! `generate` subcommand: write a synthetic dataset to disk

use std::path::PathBuf;

use clap::Args;
use color_eyre::Result;

use crate::loader::save_dataset;
use crate::synthetic::generate_dataset;

#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Output path for the JSON dataset
    #[arg(long)]
    pub out: PathBuf,

    /// Seed for the synthetic provider
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of records to generate
    #[arg(long, default_value_t = 1000)]
    pub records: usize,
}

pub fn run(cmd: &GenerateCommand) -> Result<()> {
    let today = jiff::Zoned::now().date();
    let dataset = generate_dataset(cmd.seed, cmd.records, today)?;
    save_dataset(&cmd.out, &dataset)?;
    println!(
        "Wrote {} listings to {} (seed {}).",
        dataset.len(),
        cmd.out.display(),
        cmd.seed
    );
    Ok(())
}
