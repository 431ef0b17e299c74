//! `afford` subcommand: affordability calculator

use color_eyre::Result;

use rentscope_core::affordability;

use super::AffordArgs;
use crate::format::format_aed;

pub fn run(args: &AffordArgs) -> Result<()> {
    let input = args.to_input();
    let result = affordability::calculate(&input)?;

    println!("Affordability Results");
    println!("  Affordable monthly rent   {:>16}", format_aed(result.affordable_monthly_rent));
    println!("  Affordable yearly rent    {:>16}", format_aed(result.affordable_yearly_rent));
    println!("  Maximum mortgage          {:>16}", format_aed(result.max_mortgage));
    println!("  Maximum purchase price    {:>16}", format_aed(result.max_purchase_price));

    println!();
    println!("Monthly budget breakdown");
    println!("  Monthly income            {:>16}", format_aed(result.monthly_income));
    println!("  Housing budget            {:>16}", format_aed(result.affordable_monthly_rent));
    println!("  Debt payments             {:>16}", format_aed(input.monthly_debt));
    println!("  Other expenses            {:>16}", format_aed(input.other_monthly_expenses));
    let remaining = result.monthly_income
        - result.affordable_monthly_rent
        - input.monthly_debt
        - input.other_monthly_expenses;
    println!("  Remaining budget          {:>16}", format_aed(remaining));

    if result.is_degenerate() {
        tracing::warn!(
            capacity = result.monthly_payment_capacity,
            "debt payments consume the entire housing budget"
        );
        println!();
        println!(
            "Note: monthly debt payments exceed the housing budget; a mortgage is \
             not serviceable at these inputs."
        );
    }

    Ok(())
}
