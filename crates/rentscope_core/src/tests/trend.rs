//! Tests for posting-date price trends

use jiff::civil::date;

use crate::dataset::Dataset;
use crate::model::{ListingFilter, PropertyType};
use crate::tests::listing_posted;
use crate::trend::{TrendPeriod, price_trend};

fn seasonal_dataset() -> Dataset {
    Dataset::from_listings(vec![
        listing_posted(1, "JVC", PropertyType::Apartment, 1, 40_000.0, date(2025, 1, 10)),
        listing_posted(2, "JVC", PropertyType::Apartment, 1, 60_000.0, date(2025, 1, 25)),
        listing_posted(3, "JVC", PropertyType::Apartment, 2, 55_000.0, date(2025, 2, 5)),
        listing_posted(4, "JVC", PropertyType::Villa, 4, 150_000.0, date(2025, 5, 1)),
        listing_posted(5, "JVC", PropertyType::Apartment, 1, 45_000.0, date(2024, 12, 20)),
    ])
}

#[test]
fn test_monthly_buckets_are_chronological() {
    let points = price_trend(&seasonal_dataset(), &ListingFilter::new(), TrendPeriod::Month);

    let keys: Vec<(i16, u8)> = points.iter().map(|p| (p.year, p.period)).collect();
    assert_eq!(keys, vec![(2024, 12), (2025, 1), (2025, 2), (2025, 5)]);

    let january = &points[1];
    assert_eq!(january.listing_count, 2);
    assert_eq!(january.avg_price, 50_000.0);
    assert_eq!(january.median_price, 50_000.0);
}

#[test]
fn test_quarterly_bucketing() {
    let points = price_trend(&seasonal_dataset(), &ListingFilter::new(), TrendPeriod::Quarter);

    let keys: Vec<(i16, u8)> = points.iter().map(|p| (p.year, p.period)).collect();
    assert_eq!(keys, vec![(2024, 4), (2025, 1), (2025, 2)]);

    // Q1 2025 holds the three Jan/Feb listings
    assert_eq!(points[1].listing_count, 3);
}

#[test]
fn test_trend_respects_filter() {
    let filter = ListingFilter::new().property_type(PropertyType::Villa);
    let points = price_trend(&seasonal_dataset(), &filter, TrendPeriod::Month);

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].avg_price, 150_000.0);
}

#[test]
fn test_empty_dataset_yields_no_points() {
    let dataset = Dataset::from_listings(vec![]);
    assert!(price_trend(&dataset, &ListingFilter::new(), TrendPeriod::Month).is_empty());
}
