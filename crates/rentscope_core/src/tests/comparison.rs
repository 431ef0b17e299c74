//! Tests for neighborhood comparison statistics
//!
//! These tests verify:
//! - The worked Marina example (60k/70k/80k, budget 65k)
//! - Empty groups surfacing via missing_groups, not zero stats
//! - Filter predicates and inclusive price ranges
//! - Deterministic ranking and the saturating affordability score

use crate::dataset::Dataset;
use crate::model::{BedroomFilter, ListingFilter, PropertyType};
use crate::stats::{affordability_index, compare_neighborhoods, price_percentiles};
use crate::tests::listing;

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn marina_dataset() -> Dataset {
    Dataset::from_listings(vec![
        listing(1, "Dubai Marina", PropertyType::Apartment, 1, 60_000.0),
        listing(2, "Dubai Marina", PropertyType::Apartment, 2, 70_000.0),
        listing(3, "Dubai Marina", PropertyType::Villa, 3, 80_000.0),
    ])
}

#[test]
fn test_worked_marina_example() {
    let report = compare_neighborhoods(
        &marina_dataset(),
        &names(&["Dubai Marina"]),
        &ListingFilter::new(),
        65_000.0,
    );

    assert!(report.missing_groups.is_empty());
    let stat = report.get("Dubai Marina").unwrap();
    assert_eq!(stat.avg_price, 70_000.0);
    assert_eq!(stat.median_price, 70_000.0);
    assert_eq!(stat.min_price, 60_000.0);
    assert_eq!(stat.max_price, 80_000.0);
    assert_eq!(stat.listing_count, 3);
    assert!((stat.pct_within_budget - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_stat_invariants_hold() {
    let report = compare_neighborhoods(
        &marina_dataset(),
        &names(&["Dubai Marina"]),
        &ListingFilter::new(),
        0.0,
    );
    let stat = report.get("Dubai Marina").unwrap();

    assert!(stat.min_price <= stat.median_price);
    assert!(stat.median_price <= stat.max_price);
    assert!((0.0..=100.0).contains(&stat.pct_within_budget));
}

#[test]
fn test_missing_group_is_reported_not_zeroed() {
    let report = compare_neighborhoods(
        &marina_dataset(),
        &names(&["Dubai Marina", "Downtown Dubai"]),
        &ListingFilter::new(),
        65_000.0,
    );

    assert_eq!(report.stats.len(), 1);
    assert_eq!(report.missing_groups, vec!["Downtown Dubai".to_string()]);
    assert!(report.get("Downtown Dubai").is_none());
}

#[test]
fn test_group_emptied_by_filter_is_missing() {
    // Marina has rows, but none are penthouses
    let filter = ListingFilter::new().property_type(PropertyType::Penthouse);
    let report = compare_neighborhoods(&marina_dataset(), &names(&["Dubai Marina"]), &filter, 65_000.0);

    assert!(report.stats.is_empty());
    assert_eq!(report.missing_groups, vec!["Dubai Marina".to_string()]);
}

#[test]
fn test_bedroom_threshold_filter() {
    let filter = ListingFilter::new().bedrooms(BedroomFilter::AtLeast(3));
    let report = compare_neighborhoods(&marina_dataset(), &names(&["Dubai Marina"]), &filter, 65_000.0);

    let stat = report.get("Dubai Marina").unwrap();
    assert_eq!(stat.listing_count, 1);
    assert_eq!(stat.avg_price, 80_000.0);
}

#[test]
fn test_price_range_is_inclusive() {
    let filter = ListingFilter::new().price_range(60_000.0, 70_000.0);
    let report = compare_neighborhoods(&marina_dataset(), &names(&["Dubai Marina"]), &filter, 65_000.0);

    // Both boundary prices survive
    assert_eq!(report.get("Dubai Marina").unwrap().listing_count, 2);
}

#[test]
fn test_duplicate_request_collapses() {
    let report = compare_neighborhoods(
        &marina_dataset(),
        &names(&["Dubai Marina", "Dubai Marina"]),
        &ListingFilter::new(),
        65_000.0,
    );
    assert_eq!(report.stats.len(), 1);
}

#[test]
fn test_even_group_median_averages_middles() {
    let dataset = Dataset::from_listings(vec![
        listing(1, "JVC", PropertyType::Apartment, 1, 40_000.0),
        listing(2, "JVC", PropertyType::Apartment, 1, 50_000.0),
        listing(3, "JVC", PropertyType::Apartment, 2, 60_000.0),
        listing(4, "JVC", PropertyType::Apartment, 2, 90_000.0),
    ]);
    let report = compare_neighborhoods(&dataset, &names(&["JVC"]), &ListingFilter::new(), 50_000.0);

    let stat = report.get("JVC").unwrap();
    assert_eq!(stat.median_price, 55_000.0);
    assert_eq!(stat.pct_within_budget, 50.0);
}

#[test]
fn test_ranking_breaks_ties_by_name() {
    let dataset = Dataset::from_listings(vec![
        listing(1, "Business Bay", PropertyType::Apartment, 1, 80_000.0),
        listing(2, "Al Barsha", PropertyType::Apartment, 1, 80_000.0),
        listing(3, "JVC", PropertyType::Apartment, 1, 50_000.0),
    ]);
    let report = compare_neighborhoods(
        &dataset,
        &names(&["Business Bay", "Al Barsha", "JVC"]),
        &ListingFilter::new(),
        60_000.0,
    );

    let ranked = report.rank_most_affordable();
    let order: Vec<&str> = ranked.iter().map(|s| s.neighborhood.as_str()).collect();
    assert_eq!(order, vec!["JVC", "Al Barsha", "Business Bay"]);
}

#[test]
fn test_affordability_score_saturates_and_decreases() {
    let budget = 60_000.0;

    assert_eq!(affordability_index(30_000.0, budget).unwrap().score, 100);
    assert_eq!(affordability_index(60_000.0, budget).unwrap().score, 100);
    // ratio 1.5 -> (2 - 1.5) * 100 = 50
    assert_eq!(affordability_index(90_000.0, budget).unwrap().score, 50);
    // ratio >= 2 floors at 0
    assert_eq!(affordability_index(120_000.0, budget).unwrap().score, 0);
    assert_eq!(affordability_index(500_000.0, budget).unwrap().score, 0);

    // Non-increasing in avg_price
    let mut last = 101_i16;
    for avg in (30_000..300_000).step_by(10_000) {
        let score = i16::from(affordability_index(f64::from(avg), budget).unwrap().score);
        assert!(score <= last, "score rose from {last} to {score} at avg={avg}");
        last = score;
    }
}

#[test]
fn test_affordability_index_guards_zero_budget() {
    assert!(affordability_index(70_000.0, 0.0).is_none());
    assert!(affordability_index(70_000.0, -10.0).is_none());
}

#[test]
fn test_index_flags_unaffordable() {
    let index = affordability_index(90_000.0, 60_000.0).unwrap();
    assert!(!index.is_affordable());
    assert!((index.ratio - 1.5).abs() < 1e-12);

    assert!(affordability_index(45_000.0, 60_000.0).unwrap().is_affordable());
}

#[test]
fn test_price_percentiles_over_filter() {
    let dataset = marina_dataset();
    let summary = price_percentiles(&dataset, &ListingFilter::new()).unwrap();
    assert_eq!(summary.p50, 70_000.0);
    assert_eq!(summary.p25, 65_000.0);
    assert_eq!(summary.p75, 75_000.0);

    // Filter that matches nothing yields no summary
    let empty = ListingFilter::new().property_type(PropertyType::Penthouse);
    assert!(price_percentiles(&dataset, &empty).is_none());
}
