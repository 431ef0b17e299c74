//! Deterministic synthetic dataset provider
//!
//! Fabricates listing rows from fixed distributions modelled on typical
//! Dubai rental patterns: apartments dominate, sizes scale with bedroom
//! count, and the price per square foot follows the area and property type.
//! The same seed always produces the same dataset, so computed statistics
//! are reproducible across runs.

use color_eyre::Result;
use jiff::civil::Date;
use rand::distr::weighted::WeightedIndex;
use rand::prelude::*;
use rand_distr::Normal;

use rentscope_core::Dataset;
use rentscope_core::model::{Listing, ListingId, PropertyType};

/// A neighborhood with its parent area, anchor coordinates, and the area's
/// price multiplier over the city-wide base rate.
struct NeighborhoodProfile {
    name: &'static str,
    area: &'static str,
    lat: f64,
    lng: f64,
    price_factor: f64,
}

const PROFILES: [NeighborhoodProfile; 19] = [
    NeighborhoodProfile { name: "Downtown Dubai", area: "Downtown", lat: 25.1972, lng: 55.2744, price_factor: 1.5 },
    NeighborhoodProfile { name: "Business Bay", area: "Downtown", lat: 25.1850, lng: 55.2650, price_factor: 1.5 },
    NeighborhoodProfile { name: "DIFC", area: "Downtown", lat: 25.2110, lng: 55.2750, price_factor: 1.5 },
    NeighborhoodProfile { name: "Dubai Marina", area: "Marina Area", lat: 25.0800, lng: 55.1400, price_factor: 1.3 },
    NeighborhoodProfile { name: "JBR", area: "Marina Area", lat: 25.0780, lng: 55.1330, price_factor: 1.3 },
    NeighborhoodProfile { name: "JLT", area: "Marina Area", lat: 25.0700, lng: 55.1440, price_factor: 1.3 },
    NeighborhoodProfile { name: "Palm Jumeirah", area: "Palm Jumeirah", lat: 25.1124, lng: 55.1390, price_factor: 1.8 },
    NeighborhoodProfile { name: "Dubai Hills Estate", area: "New Dubai", lat: 25.1100, lng: 55.2440, price_factor: 1.1 },
    NeighborhoodProfile { name: "Arabian Ranches", area: "New Dubai", lat: 25.0570, lng: 55.2680, price_factor: 1.1 },
    NeighborhoodProfile { name: "Emirates Hills", area: "New Dubai", lat: 25.0730, lng: 55.1650, price_factor: 1.1 },
    NeighborhoodProfile { name: "Dubai Silicon Oasis", area: "Academic City", lat: 25.1210, lng: 55.3773, price_factor: 0.7 },
    NeighborhoodProfile { name: "Academic City", area: "Academic City", lat: 25.1270, lng: 55.4200, price_factor: 0.7 },
    NeighborhoodProfile { name: "International City", area: "Academic City", lat: 25.1600, lng: 55.4100, price_factor: 0.7 },
    NeighborhoodProfile { name: "Sports City", area: "Sports City", lat: 25.0390, lng: 55.2180, price_factor: 0.8 },
    NeighborhoodProfile { name: "Motor City", area: "Sports City", lat: 25.0450, lng: 55.2390, price_factor: 0.8 },
    NeighborhoodProfile { name: "JVC", area: "Sports City", lat: 25.0600, lng: 55.2080, price_factor: 0.8 },
    NeighborhoodProfile { name: "Deira", area: "Old Dubai", lat: 25.2700, lng: 55.3160, price_factor: 0.9 },
    NeighborhoodProfile { name: "Bur Dubai", area: "Old Dubai", lat: 25.2530, lng: 55.2970, price_factor: 0.9 },
    NeighborhoodProfile { name: "Al Karama", area: "Old Dubai", lat: 25.2450, lng: 55.3030, price_factor: 0.9 },
];

/// Yearly AED per square foot before area/type multipliers
const BASE_PRICE_PER_SQFT: f64 = 90.0;

fn property_type_factor(property_type: PropertyType) -> f64 {
    match property_type {
        PropertyType::Apartment => 1.0,
        PropertyType::Villa => 1.3,
        PropertyType::Townhouse => 1.2,
        PropertyType::Penthouse => 1.5,
        PropertyType::Studio => 0.9,
    }
}

/// Generate a deterministic synthetic snapshot of `records` listings posted
/// within the 180 days before `today`.
pub fn generate_dataset(seed: u64, records: usize, today: Date) -> Result<Dataset> {
    let mut rng = StdRng::seed_from_u64(seed);

    // Apartments dominate the market
    let type_weights = WeightedIndex::new([0.7, 0.1, 0.1, 0.05, 0.05])?;
    let coordinate_jitter: Normal<f64> = Normal::new(0.0, 0.004)?;

    let mut listings = Vec::with_capacity(records);
    for i in 0..records {
        let profile = &PROFILES[rng.random_range(0..PROFILES.len())];
        let property_type = PropertyType::ALL[type_weights.sample(&mut rng)];

        let bedrooms = sample_bedrooms(&mut rng, property_type)?;
        let bathrooms = sample_bathrooms(&mut rng, bedrooms);
        let size_sqft = sample_size(&mut rng, property_type, bedrooms);

        let price_per_sqft = BASE_PRICE_PER_SQFT
            * profile.price_factor
            * property_type_factor(property_type)
            * rng.random_range(0.9..1.1);
        let price_yearly = (size_sqft * price_per_sqft).round();
        let price_monthly = (price_yearly / 12.0 / 100.0).round() * 100.0;

        let days_ago: i64 = rng.random_range(1..=180);
        let date_posted = today.saturating_sub(jiff::Span::new().days(days_ago));

        listings.push(Listing {
            id: ListingId(i as u32 + 1),
            neighborhood: profile.name.to_string(),
            area: profile.area.to_string(),
            property_type,
            bedrooms,
            bathrooms,
            size_sqft,
            price_yearly,
            price_monthly,
            date_posted,
            lat: profile.lat + coordinate_jitter.sample(&mut rng).clamp(-0.01, 0.01),
            lng: profile.lng + coordinate_jitter.sample(&mut rng).clamp(-0.01, 0.01),
        });
    }

    Ok(Dataset::from_listings(listings))
}

fn sample_bedrooms(rng: &mut StdRng, property_type: PropertyType) -> Result<u8> {
    let (choices, weights): (&[u8], &[f64]) = match property_type {
        PropertyType::Studio => return Ok(0),
        PropertyType::Apartment => (&[1, 2, 3, 4], &[0.4, 0.4, 0.15, 0.05]),
        PropertyType::Penthouse => (&[2, 3, 4, 5], &[0.1, 0.3, 0.4, 0.2]),
        PropertyType::Villa | PropertyType::Townhouse => {
            (&[2, 3, 4, 5, 6], &[0.05, 0.3, 0.4, 0.2, 0.05])
        }
    };
    let index = WeightedIndex::new(weights)?;
    Ok(choices[index.sample(rng)])
}

/// Bathrooms track bedrooms, one off at most, never below one
fn sample_bathrooms(rng: &mut StdRng, bedrooms: u8) -> u8 {
    let offset: i16 = match rng.random_range(0..10) {
        0..=2 => -1,
        3..=8 => 0,
        _ => 1,
    };
    let sampled = (i16::from(bedrooms) + offset).max(1) as u8;
    sampled.min(bedrooms.max(1))
}

fn sample_size(rng: &mut StdRng, property_type: PropertyType, bedrooms: u8) -> f64 {
    let bedrooms = f64::from(bedrooms);
    match property_type {
        PropertyType::Studio => f64::from(rng.random_range(300..=600)),
        PropertyType::Apartment => 600.0 + bedrooms * f64::from(rng.random_range(200..=400)),
        PropertyType::Penthouse => 1_500.0 + bedrooms * f64::from(rng.random_range(400..=700)),
        PropertyType::Villa | PropertyType::Townhouse => {
            1_200.0 + bedrooms * f64::from(rng.random_range(500..=800))
        }
    }
}
