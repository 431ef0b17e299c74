//! Computed results returned to the presentation layer
//!
//! All values are raw numerics in AED; formatting (currency symbols,
//! rounding for display) belongs to the caller. Nothing here is persisted —
//! results are recomputed per request.

use serde::{Deserialize, Serialize};

/// Output of the affordability calculator.
///
/// A degenerate result (payment capacity ≤ 0) carries a zero mortgage and
/// must not be presented as affordable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityResult {
    pub monthly_income: f64,
    pub affordable_monthly_rent: f64,
    pub affordable_yearly_rent: f64,
    /// Rent budget left after debt payments; may be negative
    pub monthly_payment_capacity: f64,
    pub max_mortgage: f64,
    pub max_purchase_price: f64,
}

impl AffordabilityResult {
    /// True when debt payments consume the entire housing budget.
    ///
    /// Degenerate results carry `max_mortgage == 0`; callers must not claim
    /// affordability from them.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.monthly_payment_capacity <= 0.0
    }
}

/// Per-neighborhood price aggregates over a filtered row set.
///
/// Invariants: `min_price <= median_price <= max_price` and
/// `0 <= pct_within_budget <= 100`. Only produced for groups with at least
/// one matching row; empty groups surface in
/// [`ComparisonReport::missing_groups`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodStat {
    pub neighborhood: String,
    pub avg_price: f64,
    pub median_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub listing_count: usize,
    /// Percentage of listings at or under the caller's budget
    pub pct_within_budget: f64,
}

/// Affordability index of a neighborhood relative to a yearly rent budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityIndex {
    /// `avg_price / affordable_yearly_rent`; > 1 means unaffordable
    pub ratio: f64,
    /// Saturating score in [0, 100]: 100 at ratio <= 1, decreasing linearly
    /// as the ratio grows, floored at 0
    pub score: u8,
}

impl AffordabilityIndex {
    #[must_use]
    pub fn is_affordable(&self) -> bool {
        self.ratio <= 1.0
    }
}

/// Result of a neighborhood comparison request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// One entry per requested neighborhood with matching rows, in request order
    pub stats: Vec<NeighborhoodStat>,
    /// Requested neighborhoods with zero rows after filtering.
    ///
    /// Distinct from a zero-valued stat; callers must surface these
    /// separately.
    pub missing_groups: Vec<String>,
}

impl ComparisonReport {
    #[must_use]
    pub fn get(&self, neighborhood: &str) -> Option<&NeighborhoodStat> {
        self.stats.iter().find(|s| s.neighborhood == neighborhood)
    }

    /// Stats ordered most-affordable first: ascending average price, ties
    /// broken lexicographically by neighborhood name.
    #[must_use]
    pub fn rank_most_affordable(&self) -> Vec<&NeighborhoodStat> {
        let mut ranked: Vec<&NeighborhoodStat> = self.stats.iter().collect();
        ranked.sort_by(|a, b| {
            a.avg_price
                .total_cmp(&b.avg_price)
                .then_with(|| a.neighborhood.cmp(&b.neighborhood))
        });
        ranked
    }
}

/// P25/P50/P75 summary of a filtered price distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
}

/// One year of the rent-vs-buy projection (years are 1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u16,
    pub cumulative_rent_cost: f64,
    /// Payments made (plus down payment) minus equity gained through
    /// appreciation; may decrease year over year
    pub cumulative_buy_cost: f64,
}

/// Multi-year cumulative cost series for the rent and buy scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    /// One point per year, ordered by year starting at 1
    pub points: Vec<ProjectionPoint>,
    /// Constant amortized payment across the mortgage term
    pub monthly_mortgage_payment: f64,
}

impl ProjectionSeries {
    /// First year in which the net cost of buying drops below the cumulative
    /// rent cost, if any within the horizon.
    #[must_use]
    pub fn breakeven_year(&self) -> Option<u16> {
        self.points
            .iter()
            .find(|p| p.cumulative_buy_cost < p.cumulative_rent_cost)
            .map(|p| p.year)
    }
}
