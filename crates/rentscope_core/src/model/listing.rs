//! Listing rows and the raw provider representation
//!
//! A `Listing` is an immutable row in a dataset snapshot. The engine never
//! mutates listings; it only filters and aggregates them. Providers hand over
//! `RawListing` rows, which may carry missing numeric fields — conversion to
//! `Listing` rejects rows the engine cannot operate on.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::ListingId;

/// Fallback coordinates for rows without a location (Dubai centre)
pub const DUBAI_CENTRE: (f64, f64) = (25.2048, 55.2708);

/// Kind of rental property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    Villa,
    Townhouse,
    Penthouse,
    Studio,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::Townhouse,
        PropertyType::Penthouse,
        PropertyType::Studio,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Studio => "Studio",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown property type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePropertyTypeError(pub String);

impl fmt::Display for ParsePropertyTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown property type {:?}", self.0)
    }
}

impl std::error::Error for ParsePropertyTypeError {}

impl FromStr for PropertyType {
    type Err = ParsePropertyTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "apartment" => Ok(PropertyType::Apartment),
            "villa" => Ok(PropertyType::Villa),
            "townhouse" => Ok(PropertyType::Townhouse),
            "penthouse" => Ok(PropertyType::Penthouse),
            "studio" => Ok(PropertyType::Studio),
            _ => Err(ParsePropertyTypeError(s.to_string())),
        }
    }
}

/// A single rental listing. All monetary fields are yearly/monthly AED.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub neighborhood: String,
    pub area: String,
    pub property_type: PropertyType,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub size_sqft: f64,
    pub price_yearly: f64,
    pub price_monthly: f64,
    pub date_posted: Date,
    pub lat: f64,
    pub lng: f64,
}

impl Listing {
    /// Yearly rent per square foot
    #[must_use]
    pub fn price_per_sqft(&self) -> f64 {
        self.price_yearly / self.size_sqft
    }
}

/// A provider row before validation.
///
/// Providers may deliver incomplete rows; the engine skips rows whose price
/// or size is missing or non-positive and reports how many were excluded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub id: Option<u32>,
    pub neighborhood: String,
    pub area: String,
    pub property_type: PropertyType,
    pub bedrooms: u8,
    #[serde(default)]
    pub bathrooms: Option<u8>,
    #[serde(default)]
    pub size_sqft: Option<f64>,
    #[serde(default)]
    pub price_yearly: Option<f64>,
    #[serde(default)]
    pub price_monthly: Option<f64>,
    pub date_posted: Date,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl RawListing {
    /// Validate and convert into a `Listing`.
    ///
    /// Returns `None` when price or size is missing, non-finite, or
    /// non-positive. A missing monthly price defaults to yearly/12 rounded to
    /// the nearest 100 AED (provider convention); missing coordinates fall
    /// back to the Dubai centre point.
    #[must_use]
    pub fn into_listing(self, fallback_id: u32) -> Option<Listing> {
        let size_sqft = positive(self.size_sqft?)?;
        let price_yearly = positive(self.price_yearly?)?;
        let price_monthly = match self.price_monthly {
            Some(p) => positive(p)?,
            None => (price_yearly / 12.0 / 100.0).round() * 100.0,
        };

        Some(Listing {
            id: ListingId(self.id.unwrap_or(fallback_id)),
            neighborhood: self.neighborhood,
            area: self.area,
            property_type: self.property_type,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms.unwrap_or(1).max(1),
            size_sqft,
            price_yearly,
            price_monthly,
            date_posted: self.date_posted,
            lat: self.lat.unwrap_or(DUBAI_CENTRE.0),
            lng: self.lng.unwrap_or(DUBAI_CENTRE.1),
        })
    }
}

fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}
