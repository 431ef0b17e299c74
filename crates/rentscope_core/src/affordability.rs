//! Affordability calculator
//!
//! Converts income/expense/loan inputs into affordable rent figures and the
//! maximum serviceable mortgage via the standard present-value formula. Pure
//! and deterministic: the same input always yields the same result.

use crate::error::Result;
use crate::model::{AffordabilityInput, AffordabilityResult};

/// Compute an [`AffordabilityResult`] from validated inputs.
///
/// Payment capacity at or below zero yields a degenerate result with a zero
/// mortgage rather than a negative principal; callers check
/// [`AffordabilityResult::is_degenerate`] before claiming affordability.
pub fn calculate(input: &AffordabilityInput) -> Result<AffordabilityResult> {
    input.validate()?;

    let monthly_income = input.yearly_income / 12.0 + input.additional_monthly_income;
    let affordable_monthly_rent = monthly_income * input.rent_income_ratio;
    let affordable_yearly_rent = affordable_monthly_rent * 12.0;
    let monthly_payment_capacity = affordable_monthly_rent - input.monthly_debt;

    let max_mortgage = if monthly_payment_capacity > 0.0 {
        max_loan_principal(
            monthly_payment_capacity,
            input.monthly_rate(),
            input.term_months(),
        )
    } else {
        0.0
    };

    Ok(AffordabilityResult {
        monthly_income,
        affordable_monthly_rent,
        affordable_yearly_rent,
        monthly_payment_capacity,
        max_mortgage,
        max_purchase_price: max_mortgage + input.down_payment,
    })
}

/// Maximum loan principal serviceable by a fixed monthly payment.
///
/// Present-value formula for an amortized loan over `term_months` at monthly
/// rate `monthly_rate`; degenerates to `payment * n` at a zero rate.
#[must_use]
pub fn max_loan_principal(monthly_payment: f64, monthly_rate: f64, term_months: u32) -> f64 {
    let n = f64::from(term_months);
    if monthly_rate > 0.0 {
        monthly_payment * (1.0 - (1.0 + monthly_rate).powf(-n)) / monthly_rate
    } else {
        monthly_payment * n
    }
}

/// Fixed monthly payment that amortizes `principal` over `term_months`.
///
/// Inverse of [`max_loan_principal`]: feeding its output back through this
/// function reproduces the original payment.
#[must_use]
pub fn monthly_payment(principal: f64, monthly_rate: f64, term_months: u32) -> f64 {
    let n = f64::from(term_months);
    if monthly_rate > 0.0 {
        let growth = (1.0 + monthly_rate).powf(n);
        principal * (monthly_rate * growth) / (growth - 1.0)
    } else {
        principal / n
    }
}
