//! Posting-date price trends
//!
//! Buckets filtered listings by the month or quarter they were posted and
//! aggregates yearly prices per bucket. Buckets with no rows are omitted;
//! output is ordered chronologically.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::model::ListingFilter;
use crate::percentiles;

/// Bucketing granularity for a trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendPeriod {
    Month,
    Quarter,
}

/// Aggregates for one month or quarter of postings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i16,
    /// Month number (1-12) or quarter number (1-4) depending on the period
    pub period: u8,
    pub avg_price: f64,
    pub median_price: f64,
    pub listing_count: usize,
}

/// Price trend of the filtered dataset over posting dates.
#[must_use]
pub fn price_trend(
    dataset: &Dataset,
    filter: &ListingFilter,
    period: TrendPeriod,
) -> Vec<TrendPoint> {
    let mut buckets: FxHashMap<(i16, u8), Vec<f64>> = FxHashMap::default();
    for listing in dataset.filtered(filter) {
        let date = listing.date_posted;
        let month = date.month() as u8;
        let key = match period {
            TrendPeriod::Month => (date.year(), month),
            TrendPeriod::Quarter => (date.year(), (month - 1) / 3 + 1),
        };
        buckets.entry(key).or_default().push(listing.price_yearly);
    }

    let mut keys: Vec<(i16, u8)> = buckets.keys().copied().collect();
    keys.sort_unstable();

    keys.into_iter()
        .map(|key| {
            let prices = &buckets[&key];
            let sum: f64 = prices.iter().sum();
            TrendPoint {
                year: key.0,
                period: key.1,
                avg_price: sum / prices.len() as f64,
                median_price: percentiles::median(prices).unwrap_or(0.0),
                listing_count: prices.len(),
            }
        })
        .collect()
}
