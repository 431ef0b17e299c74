//! Rent-vs-buy projection series
//!
//! Produces per-year cumulative costs for the rent and buy scenarios over a
//! fixed horizon. Rent compounds at the growth rate; the mortgage payment is
//! constant across the term; the buy scenario nets out equity gained through
//! property appreciation (payments plus down payment, minus appreciated
//! value, plus purchase price). The rent series is non-decreasing by
//! construction; the buy series need not be — appreciation can outrun
//! payments.

use serde::{Deserialize, Serialize};

use crate::affordability::monthly_payment;
use crate::error::{InputError, Result};
use crate::model::{
    AffordabilityInput, AffordabilityResult, ProjectionAssumptions, ProjectionPoint,
    ProjectionSeries,
};

/// Parameters for a projection request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    pub affordable_yearly_rent: f64,
    pub max_mortgage: f64,
    pub max_purchase_price: f64,
    pub down_payment: f64,
    /// Monthly mortgage rate
    pub monthly_rate: f64,
    /// Mortgage term in months
    pub term_months: u32,
    pub assumptions: ProjectionAssumptions,
}

impl ProjectionParams {
    /// Assemble projection parameters from an affordability calculation.
    #[must_use]
    pub fn from_affordability(
        input: &AffordabilityInput,
        result: &AffordabilityResult,
        assumptions: ProjectionAssumptions,
    ) -> Self {
        Self {
            affordable_yearly_rent: result.affordable_yearly_rent,
            max_mortgage: result.max_mortgage,
            max_purchase_price: result.max_purchase_price,
            down_payment: input.down_payment,
            monthly_rate: input.monthly_rate(),
            term_months: input.term_months(),
            assumptions,
        }
    }
}

/// Generate the cumulative cost series for the configured horizon.
pub fn project(params: &ProjectionParams) -> Result<ProjectionSeries> {
    params.assumptions.validate()?;
    if params.monthly_rate < 0.0 {
        return Err(InputError::NegativeRate(params.monthly_rate));
    }
    if params.term_months == 0 {
        return Err(InputError::NonPositiveTerm(params.term_months));
    }

    let assumptions = &params.assumptions;
    let monthly_mortgage = if params.max_mortgage > 0.0 {
        monthly_payment(params.max_mortgage, params.monthly_rate, params.term_months)
    } else {
        0.0
    };
    let yearly_mortgage = monthly_mortgage * 12.0;

    let mut points = Vec::with_capacity(usize::from(assumptions.horizon_years));
    let mut cumulative_rent = 0.0;
    for year in 1..=assumptions.horizon_years {
        let exponent = i32::from(year) - 1;
        cumulative_rent +=
            params.affordable_yearly_rent * (1.0 + assumptions.rent_growth).powi(exponent);

        // Down payment lands once at year 1; the appreciated value nets out
        // equity gained since purchase
        let payments = yearly_mortgage * f64::from(year) + params.down_payment;
        let appreciated_value =
            params.max_purchase_price * (1.0 + assumptions.appreciation).powi(exponent);
        let cumulative_buy = payments - appreciated_value + params.max_purchase_price;

        points.push(ProjectionPoint {
            year,
            cumulative_rent_cost: cumulative_rent,
            cumulative_buy_cost: cumulative_buy,
        });
    }

    Ok(ProjectionSeries {
        points,
        monthly_mortgage_payment: monthly_mortgage,
    })
}
