//! Rental market metrics library
//!
//! This crate provides the computational core behind a Dubai rental housing
//! dashboard. It operates on an immutable listing snapshot plus user-supplied
//! parameters and supports:
//! - Affordability calculations (affordable rent, maximum mortgage and
//!   purchase price via the present-value loan formula)
//! - Per-neighborhood comparative statistics (mean/median/min/max/count and
//!   percentage-within-budget over a filtered row set)
//! - Rent-vs-buy cumulative cost projections with compounding growth and
//!   appreciation
//! - Posting-date price trends and percentile summaries
//!
//! Everything is a stateless pure function over provided inputs: no I/O, no
//! caching, no shared mutable state. Callers load a [`Dataset`] once and pass
//! it explicitly to each computation.
//!
//! ```ignore
//! use rentscope_core::{AffordabilityInput, affordability};
//!
//! let result = affordability::calculate(&AffordabilityInput::default())?;
//! println!("max purchase price: {}", result.max_purchase_price);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod affordability;
pub mod dataset;
pub mod error;
pub mod percentiles;
pub mod projection;
pub mod stats;
pub mod trend;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use dataset::Dataset;
pub use error::{InputError, Result};
pub use model::{
    AffordabilityIndex, AffordabilityInput, AffordabilityResult, BedroomFilter, ComparisonReport,
    Listing, ListingFilter, NeighborhoodStat, ProjectionAssumptions, ProjectionPoint,
    ProjectionSeries, PropertyType, RawListing,
};
pub use projection::ProjectionParams;
