//! Comparative statistics over filtered listing sets
//!
//! Groups filtered rows by neighborhood and computes descriptive aggregates
//! of the yearly price per group. Requested neighborhoods that end up with
//! zero rows are reported in `missing_groups`, never as zero-valued stats —
//! the two cases mean different things to the caller.

use rustc_hash::FxHashMap;

use crate::dataset::Dataset;
use crate::model::{AffordabilityIndex, ComparisonReport, ListingFilter, NeighborhoodStat};
use crate::percentiles;

/// Compare requested neighborhoods over the filtered dataset.
///
/// `budget` is the caller's affordable yearly rent, used for the
/// percentage-within-budget figure. Stats come back in request order;
/// duplicate requests collapse to one entry.
#[must_use]
pub fn compare_neighborhoods(
    dataset: &Dataset,
    neighborhoods: &[String],
    filter: &ListingFilter,
    budget: f64,
) -> ComparisonReport {
    let mut prices_by_group: FxHashMap<&str, Vec<f64>> = FxHashMap::default();
    for listing in dataset.filtered(filter) {
        if let Some(name) = neighborhoods
            .iter()
            .find(|n| n.as_str() == listing.neighborhood)
        {
            prices_by_group
                .entry(name.as_str())
                .or_default()
                .push(listing.price_yearly);
        }
    }

    let mut report = ComparisonReport::default();
    for name in neighborhoods {
        if report.get(name).is_some() || report.missing_groups.iter().any(|m| m == name) {
            continue;
        }
        match prices_by_group.get(name.as_str()) {
            Some(prices) => report.stats.push(group_stat(name, prices, budget)),
            None => report.missing_groups.push(name.clone()),
        }
    }
    report
}

/// Aggregate one non-empty price group.
fn group_stat(neighborhood: &str, prices: &[f64], budget: f64) -> NeighborhoodStat {
    debug_assert!(!prices.is_empty());

    let count = prices.len();
    let sum: f64 = prices.iter().sum();
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let within = prices.iter().filter(|p| **p <= budget).count();

    NeighborhoodStat {
        neighborhood: neighborhood.to_string(),
        avg_price: sum / count as f64,
        // Non-empty group, median always defined
        median_price: percentiles::median(prices).unwrap_or(0.0),
        min_price: min,
        max_price: max,
        listing_count: count,
        pct_within_budget: 100.0 * within as f64 / count as f64,
    }
}

/// Affordability index of an average price against a yearly rent budget.
///
/// Returns `None` when the budget is zero or negative (the ratio would be a
/// division by zero or meaningless). The score saturates: 100 at
/// ratio <= 1, falling linearly to 0 as the ratio approaches 2.
#[must_use]
pub fn affordability_index(avg_price: f64, affordable_yearly_rent: f64) -> Option<AffordabilityIndex> {
    if affordable_yearly_rent <= 0.0 || !affordable_yearly_rent.is_finite() {
        return None;
    }
    let ratio = avg_price / affordable_yearly_rent;
    let score = if ratio > 1.0 {
        ((2.0 - ratio) * 100.0).round().clamp(0.0, 100.0) as u8
    } else {
        100
    };
    Some(AffordabilityIndex { ratio, score })
}

/// P25/P50/P75 summary of yearly prices over the filtered dataset.
///
/// Returns `None` when no rows survive the filter.
#[must_use]
pub fn price_percentiles(
    dataset: &Dataset,
    filter: &ListingFilter,
) -> Option<crate::model::PriceSummary> {
    let prices: Vec<f64> = dataset.filtered(filter).map(|l| l.price_yearly).collect();
    crate::model::PriceSummary::from_values(&prices)
}
