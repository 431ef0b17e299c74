//! Listing filters
//!
//! A `ListingFilter` is a bag of optional predicates combined with AND
//! semantics. Filters are built fluently:
//!
//! ```ignore
//! let filter = ListingFilter::new()
//!     .property_type(PropertyType::Apartment)
//!     .bedrooms(BedroomFilter::AtLeast(3))
//!     .price_range(40_000.0, 120_000.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::listing::{Listing, PropertyType};

/// Bedroom-count predicate.
///
/// Studios are bedroom count 0; "3+" style selections map to `AtLeast(3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BedroomFilter {
    Exactly(u8),
    AtLeast(u8),
}

impl BedroomFilter {
    #[must_use]
    pub fn matches(&self, bedrooms: u8) -> bool {
        match self {
            BedroomFilter::Exactly(n) => bedrooms == *n,
            BedroomFilter::AtLeast(n) => bedrooms >= *n,
        }
    }
}

impl fmt::Display for BedroomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BedroomFilter::Exactly(0) => f.write_str("Studio"),
            BedroomFilter::Exactly(n) => write!(f, "{n} BR"),
            BedroomFilter::AtLeast(n) => write!(f, "{n}+ BR"),
        }
    }
}

/// Error returned when parsing a bedroom selection string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBedroomFilterError(pub String);

impl fmt::Display for ParseBedroomFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid bedroom selection {:?} (expected \"studio\", a count, or \"N+\")",
            self.0
        )
    }
}

impl std::error::Error for ParseBedroomFilterError {}

impl FromStr for BedroomFilter {
    type Err = ParseBedroomFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("studio") {
            return Ok(BedroomFilter::Exactly(0));
        }
        if let Some(base) = trimmed.strip_suffix('+') {
            return base
                .parse()
                .map(BedroomFilter::AtLeast)
                .map_err(|_| ParseBedroomFilterError(s.to_string()));
        }
        trimmed
            .parse()
            .map(BedroomFilter::Exactly)
            .map_err(|_| ParseBedroomFilterError(s.to_string()))
    }
}

/// Optional predicates applied to a dataset before aggregation.
///
/// An empty filter matches every listing. The price range is inclusive on
/// both ends and applies to the yearly price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingFilter {
    pub property_type: Option<PropertyType>,
    pub bedrooms: Option<BedroomFilter>,
    pub price_range: Option<(f64, f64)>,
    pub neighborhoods: Option<Vec<String>>,
}

impl ListingFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    #[must_use]
    pub fn bedrooms(mut self, bedrooms: BedroomFilter) -> Self {
        self.bedrooms = Some(bedrooms);
        self
    }

    /// Restrict to yearly prices in `[lo, hi]` inclusive
    #[must_use]
    pub fn price_range(mut self, lo: f64, hi: f64) -> Self {
        self.price_range = Some((lo, hi));
        self
    }

    #[must_use]
    pub fn neighborhoods<I, S>(mut self, neighborhoods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.neighborhoods = Some(neighborhoods.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(pt) = self.property_type
            && listing.property_type != pt
        {
            return false;
        }
        if let Some(bf) = self.bedrooms
            && !bf.matches(listing.bedrooms)
        {
            return false;
        }
        if let Some((lo, hi)) = self.price_range
            && !(listing.price_yearly >= lo && listing.price_yearly <= hi)
        {
            return false;
        }
        if let Some(names) = &self.neighborhoods
            && !names.iter().any(|n| n == &listing.neighborhood)
        {
            return false;
        }
        true
    }
}
