//! User-supplied calculation parameters
//!
//! Inputs are transient: constructed per calculation request, validated up
//! front, and never stored by the engine.

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};

/// Income, expense, and loan parameters for an affordability calculation.
///
/// All monetary amounts are AED. `rent_income_ratio` is the fraction of
/// monthly income that should go toward housing (0.30 is the conventional
/// rule of thumb).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityInput {
    pub yearly_income: f64,
    pub additional_monthly_income: f64,
    pub down_payment: f64,
    pub monthly_debt: f64,
    pub other_monthly_expenses: f64,
    pub rent_income_ratio: f64,
    pub mortgage_annual_rate: f64,
    pub mortgage_term_years: u16,
}

impl Default for AffordabilityInput {
    /// Defaults mirror the standard calculator form: 200k income, 30% rule,
    /// 4% mortgage over 25 years, 50k down payment, 2k monthly debt.
    fn default() -> Self {
        Self {
            yearly_income: 200_000.0,
            additional_monthly_income: 0.0,
            down_payment: 50_000.0,
            monthly_debt: 2_000.0,
            other_monthly_expenses: 5_000.0,
            rent_income_ratio: 0.30,
            mortgage_annual_rate: 0.04,
            mortgage_term_years: 25,
        }
    }
}

impl AffordabilityInput {
    /// Check all parameters before any arithmetic runs.
    ///
    /// Fails fast with the first offending field; no partial result is
    /// produced from invalid input.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("yearly_income", self.yearly_income),
            ("additional_monthly_income", self.additional_monthly_income),
            ("down_payment", self.down_payment),
            ("monthly_debt", self.monthly_debt),
            ("other_monthly_expenses", self.other_monthly_expenses),
            ("rent_income_ratio", self.rent_income_ratio),
            ("mortgage_annual_rate", self.mortgage_annual_rate),
        ] {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field });
            }
        }
        if self.yearly_income < 0.0 {
            return Err(InputError::NegativeAmount {
                field: "yearly_income",
                value: self.yearly_income,
            });
        }
        if self.additional_monthly_income < 0.0 {
            return Err(InputError::NegativeAmount {
                field: "additional_monthly_income",
                value: self.additional_monthly_income,
            });
        }
        if self.down_payment < 0.0 {
            return Err(InputError::NegativeAmount {
                field: "down_payment",
                value: self.down_payment,
            });
        }
        if self.monthly_debt < 0.0 {
            return Err(InputError::NegativeAmount {
                field: "monthly_debt",
                value: self.monthly_debt,
            });
        }
        if self.other_monthly_expenses < 0.0 {
            return Err(InputError::NegativeAmount {
                field: "other_monthly_expenses",
                value: self.other_monthly_expenses,
            });
        }
        if !(0.0..=1.0).contains(&self.rent_income_ratio) {
            return Err(InputError::RatioOutOfRange(self.rent_income_ratio));
        }
        if self.mortgage_annual_rate < 0.0 {
            return Err(InputError::NegativeRate(self.mortgage_annual_rate));
        }
        if self.mortgage_term_years == 0 {
            return Err(InputError::NonPositiveTerm(0));
        }
        Ok(())
    }

    /// Monthly mortgage rate derived from the annual rate
    #[must_use]
    pub fn monthly_rate(&self) -> f64 {
        self.mortgage_annual_rate / 12.0
    }

    /// Mortgage term in months
    #[must_use]
    pub fn term_months(&self) -> u32 {
        u32::from(self.mortgage_term_years) * 12
    }
}

/// Growth assumptions for the rent-vs-buy projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionAssumptions {
    /// Annual rent growth rate (default 5%/yr)
    pub rent_growth: f64,
    /// Annual property value appreciation rate (default 3%/yr)
    pub appreciation: f64,
    /// Projection horizon in years (default 10)
    pub horizon_years: u16,
}

impl Default for ProjectionAssumptions {
    fn default() -> Self {
        Self {
            rent_growth: 0.05,
            appreciation: 0.03,
            horizon_years: 10,
        }
    }
}

impl ProjectionAssumptions {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("rent_growth", self.rent_growth),
            ("appreciation", self.appreciation),
        ] {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field });
            }
            // A rate at or below -100%/yr makes the compounding meaningless
            if value <= -1.0 {
                return Err(InputError::RateBelowFloor { field, value });
            }
        }
        if self.horizon_years == 0 {
            return Err(InputError::ZeroHorizon);
        }
        Ok(())
    }
}
