//! `compare` subcommand: neighborhood comparison

use clap::Args;
use color_eyre::Result;

use rentscope_core::stats::{affordability_index, compare_neighborhoods, price_percentiles};

use super::{DatasetArgs, FilterArgs};
use crate::format::{format_aed, format_compact_aed, format_percentage};

#[derive(Args, Debug)]
pub struct CompareCommand {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Neighborhood to compare; repeat for multiple
    #[arg(long = "neighborhood", required = true)]
    pub neighborhoods: Vec<String>,

    /// Yearly rent budget in AED, used for within-budget and index figures
    #[arg(long, default_value_t = 60_000.0)]
    pub budget: f64,
}

pub fn run(cmd: &CompareCommand) -> Result<()> {
    let dataset = cmd.dataset.load()?;
    let filter = cmd.filter.to_filter()?;
    let report = compare_neighborhoods(&dataset, &cmd.neighborhoods, &filter, cmd.budget);

    for missing in &report.missing_groups {
        tracing::warn!(neighborhood = %missing, "no listings match the current filters");
        println!("(no data for {missing} with the current filters)");
    }

    for stat in &report.stats {
        println!("{}", stat.neighborhood);
        println!("  Listings          {:>14}", stat.listing_count);
        println!("  Average           {:>14}", format_aed(stat.avg_price));
        println!("  Median            {:>14}", format_aed(stat.median_price));
        println!("  Minimum           {:>14}", format_aed(stat.min_price));
        println!("  Maximum           {:>14}", format_aed(stat.max_price));
        println!(
            "  Within budget     {:>14}",
            format_percentage(stat.pct_within_budget)
        );
        if let Some(index) = affordability_index(stat.avg_price, cmd.budget) {
            let status = if index.is_affordable() {
                "affordable"
            } else {
                "unaffordable"
            };
            println!("  Affordability     {:>11}/100 ({status})", index.score);
        }
        println!();
    }

    let ranked = report.rank_most_affordable();
    if ranked.len() > 1 {
        println!("Most affordable first:");
        for (position, stat) in ranked.iter().enumerate() {
            println!(
                "  {}. {} ({})",
                position + 1,
                stat.neighborhood,
                format_compact_aed(stat.avg_price)
            );
        }
        println!();
    }

    // Market context across just the requested neighborhoods
    let scoped = filter.neighborhoods(cmd.neighborhoods.clone());
    if let Some(summary) = price_percentiles(&dataset, &scoped) {
        println!(
            "Filtered market percentiles: P25 {} / P50 {} / P75 {}",
            format_aed(summary.p25),
            format_aed(summary.p50),
            format_aed(summary.p75)
        );
    }

    Ok(())
}
