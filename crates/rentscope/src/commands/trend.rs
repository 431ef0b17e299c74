//! `trend` subcommand: posting-date price trends

use clap::Args;
use color_eyre::Result;

use rentscope_core::trend::{TrendPeriod, price_trend};

use super::{DatasetArgs, FilterArgs};
use crate::format::format_aed;

#[derive(Args, Debug)]
pub struct TrendCommand {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Bucketing granularity
    #[arg(long, default_value = "month", value_parser = ["month", "quarter"])]
    pub by: String,
}

pub fn run(cmd: &TrendCommand) -> Result<()> {
    let dataset = cmd.dataset.load()?;
    let filter = cmd.filter.to_filter()?;
    let period = match cmd.by.as_str() {
        "quarter" => TrendPeriod::Quarter,
        _ => TrendPeriod::Month,
    };

    let points = price_trend(&dataset, &filter, period);
    if points.is_empty() {
        println!("No listings match the current filters.");
        return Ok(());
    }

    println!("{:<10} {:>10} {:>16} {:>16}", "Period", "Listings", "Average", "Median");
    for point in &points {
        let label = match period {
            TrendPeriod::Month => format!("{}-{:02}", point.year, point.period),
            TrendPeriod::Quarter => format!("{} Q{}", point.year, point.period),
        };
        println!(
            "{:<10} {:>10} {:>16} {:>16}",
            label,
            point.listing_count,
            format_aed(point.avg_price),
            format_aed(point.median_price)
        );
    }

    Ok(())
}
