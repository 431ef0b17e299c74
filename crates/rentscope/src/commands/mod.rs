//! CLI subcommands and their shared argument groups

pub mod afford;
pub mod compare;
pub mod generate;
pub mod project;
pub mod trend;

use std::path::PathBuf;

use clap::Args;
use color_eyre::Result;

use rentscope_core::model::{AffordabilityInput, BedroomFilter, PropertyType};
use rentscope_core::{Dataset, ListingFilter};

/// Where the listing snapshot comes from
#[derive(Args, Debug)]
pub struct DatasetArgs {
    /// Path to a JSON dataset; a synthetic snapshot is generated when omitted
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Seed for the synthetic dataset provider
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of synthetic records to generate
    #[arg(long, default_value_t = 1000)]
    pub records: usize,
}

impl DatasetArgs {
    pub fn load(&self) -> Result<Dataset> {
        match &self.data {
            Some(path) => crate::loader::load_dataset(path),
            None => {
                tracing::info!(
                    seed = self.seed,
                    records = self.records,
                    "no dataset file given, generating a synthetic snapshot"
                );
                let today = jiff::Zoned::now().date();
                crate::synthetic::generate_dataset(self.seed, self.records, today)
            }
        }
    }
}

/// Listing predicates applied before aggregation
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Property type (apartment, villa, townhouse, penthouse, studio)
    #[arg(long)]
    pub property_type: Option<String>,

    /// Bedroom selection: "studio", an exact count, or "N+"
    #[arg(long)]
    pub bedrooms: Option<String>,

    /// Minimum yearly price in AED, inclusive
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum yearly price in AED, inclusive
    #[arg(long)]
    pub max_price: Option<f64>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> Result<ListingFilter> {
        let mut filter = ListingFilter::new();
        if let Some(pt) = &self.property_type {
            filter = filter.property_type(pt.parse::<PropertyType>()?);
        }
        if let Some(bf) = &self.bedrooms {
            filter = filter.bedrooms(bf.parse::<BedroomFilter>()?);
        }
        filter = match (self.min_price, self.max_price) {
            (Some(lo), Some(hi)) => filter.price_range(lo, hi),
            (Some(lo), None) => filter.price_range(lo, f64::INFINITY),
            (None, Some(hi)) => filter.price_range(0.0, hi),
            (None, None) => filter,
        };
        Ok(filter)
    }
}

/// Income/expense/loan inputs; defaults mirror the standard calculator form
#[derive(Args, Debug)]
pub struct AffordArgs {
    /// Annual income before taxes (AED)
    #[arg(long, default_value_t = 200_000.0)]
    pub yearly_income: f64,

    /// Additional monthly income such as bonuses or rental income (AED)
    #[arg(long, default_value_t = 0.0)]
    pub additional_monthly_income: f64,

    /// Amount available for a down payment (AED)
    #[arg(long, default_value_t = 50_000.0)]
    pub down_payment: f64,

    /// Monthly debt payments: car loans, credit cards, etc. (AED)
    #[arg(long, default_value_t = 2_000.0)]
    pub monthly_debt: f64,

    /// Other monthly expenses: food, transportation, etc. (AED)
    #[arg(long, default_value_t = 5_000.0)]
    pub other_monthly_expenses: f64,

    /// Fraction of monthly income to put toward housing
    #[arg(long, default_value_t = 0.30)]
    pub rent_income_ratio: f64,

    /// Annual mortgage interest rate (e.g. 0.04)
    #[arg(long, default_value_t = 0.04)]
    pub mortgage_rate: f64,

    /// Mortgage term in years
    #[arg(long, default_value_t = 25)]
    pub mortgage_term_years: u16,
}

impl AffordArgs {
    pub fn to_input(&self) -> AffordabilityInput {
        AffordabilityInput {
            yearly_income: self.yearly_income,
            additional_monthly_income: self.additional_monthly_income,
            down_payment: self.down_payment,
            monthly_debt: self.monthly_debt,
            other_monthly_expenses: self.other_monthly_expenses,
            rent_income_ratio: self.rent_income_ratio,
            mortgage_annual_rate: self.mortgage_rate,
            mortgage_term_years: self.mortgage_term_years,
        }
    }
}
