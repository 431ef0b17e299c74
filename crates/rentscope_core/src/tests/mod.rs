//! Integration tests for the rentscope metrics engine
//!
//! Tests are organized by topic:
//! - `affordability` - Affordability calculator and the PV loan formula
//! - `comparison` - Neighborhood grouping, aggregates, and ranking
//! - `dataset` - Snapshot construction and raw-row exclusion
//! - `projection` - Rent-vs-buy cumulative cost series
//! - `trend` - Posting-date bucketing

mod comparison;
mod projection;
mod trend;

use jiff::civil::{Date, date};

use crate::model::{Listing, ListingId, PropertyType};

/// Shorthand listing constructor for tests; derived fields follow the
/// provider conventions (monthly = yearly / 12, 1000 sqft).
pub(crate) fn listing(
    id: u32,
    neighborhood: &str,
    property_type: PropertyType,
    bedrooms: u8,
    price_yearly: f64,
) -> Listing {
    listing_posted(
        id,
        neighborhood,
        property_type,
        bedrooms,
        price_yearly,
        date(2025, 3, 15),
    )
}

pub(crate) fn listing_posted(
    id: u32,
    neighborhood: &str,
    property_type: PropertyType,
    bedrooms: u8,
    price_yearly: f64,
    date_posted: Date,
) -> Listing {
    Listing {
        id: ListingId(id),
        neighborhood: neighborhood.to_string(),
        area: "Test Area".to_string(),
        property_type,
        bedrooms,
        bathrooms: bedrooms.max(1),
        size_sqft: 1_000.0,
        price_yearly,
        price_monthly: price_yearly / 12.0,
        date_posted,
        lat: 25.2,
        lng: 55.27,
    }
}
