//! Percentile and median helpers for price distributions

use crate::model::PriceSummary;

/// Standard percentiles used for price summaries
pub mod standard {
    pub const P25: f64 = 0.25;
    pub const P50: f64 = 0.50;
    pub const P75: f64 = 0.75;
}

/// Compute a percentile of an unsorted sample with linear interpolation
/// between closest ranks.
///
/// `p` is a fraction in [0, 1]. Returns `None` for an empty sample or an
/// out-of-range `p`.
#[must_use]
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(percentile_sorted(&sorted, p))
}

/// Percentile of an already-sorted, non-empty sample.
#[inline]
#[must_use]
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let weight = rank - lo as f64;
        sorted[lo] * (1.0 - weight) + sorted[hi] * weight
    }
}

/// Median of an unsorted sample; the mean of the two middle values for
/// even-sized samples. Returns `None` for an empty sample.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    percentile(values, standard::P50)
}

impl PriceSummary {
    /// P25/P50/P75 summary of a price sample.
    ///
    /// Returns `None` for an empty sample.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Some(Self {
            p25: percentile_sorted(&sorted, standard::P25),
            p50: percentile_sorted(&sorted, standard::P50),
            p75: percentile_sorted(&sorted, standard::P75),
        })
    }
}
