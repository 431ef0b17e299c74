//! `project` subcommand: rent-vs-buy cumulative cost projection

use clap::Args;
use color_eyre::Result;

use rentscope_core::model::ProjectionAssumptions;
use rentscope_core::projection::{ProjectionParams, project};
use rentscope_core::affordability;

use super::AffordArgs;
use crate::format::format_aed;

#[derive(Args, Debug)]
pub struct ProjectCommand {
    #[command(flatten)]
    pub afford: AffordArgs,

    /// Annual rent growth rate
    #[arg(long, default_value_t = 0.05)]
    pub rent_growth: f64,

    /// Annual property value appreciation rate
    #[arg(long, default_value_t = 0.03)]
    pub appreciation: f64,

    /// Projection horizon in years
    #[arg(long, default_value_t = 10)]
    pub horizon_years: u16,
}

pub fn run(cmd: &ProjectCommand) -> Result<()> {
    let input = cmd.afford.to_input();
    let result = affordability::calculate(&input)?;
    let assumptions = ProjectionAssumptions {
        rent_growth: cmd.rent_growth,
        appreciation: cmd.appreciation,
        horizon_years: cmd.horizon_years,
    };
    let params = ProjectionParams::from_affordability(&input, &result, assumptions);
    let series = project(&params)?;

    if result.is_degenerate() {
        println!(
            "Note: no mortgage is serviceable at these inputs; the buy scenario \
             only reflects the down payment and appreciation."
        );
        println!();
    }

    println!(
        "Monthly mortgage payment: {}",
        format_aed(series.monthly_mortgage_payment)
    );
    println!();
    println!("{:>4} {:>20} {:>20}", "Year", "Cumulative rent", "Net cost of buying");
    for point in &series.points {
        println!(
            "{:>4} {:>20} {:>20}",
            point.year,
            format_aed(point.cumulative_rent_cost),
            format_aed(point.cumulative_buy_cost)
        );
    }

    println!();
    match series.breakeven_year() {
        Some(year) => println!("Buying becomes cheaper than renting in year {year}."),
        None => println!(
            "Renting stays cheaper than buying over the {}-year horizon.",
            cmd.horizon_years
        ),
    }
    println!(
        "Assumes {:.0}% annual rent growth and {:.0}% property appreciation.",
        cmd.rent_growth * 100.0,
        cmd.appreciation * 100.0
    );

    Ok(())
}
