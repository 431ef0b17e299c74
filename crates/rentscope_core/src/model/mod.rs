mod filter;
mod ids;
mod inputs;
mod listing;
mod results;

pub use filter::{BedroomFilter, ListingFilter, ParseBedroomFilterError};
pub use ids::{DatasetVersion, ListingId};
pub use inputs::{AffordabilityInput, ProjectionAssumptions};
pub use listing::{DUBAI_CENTRE, Listing, ParsePropertyTypeError, PropertyType, RawListing};
pub use results::{
    AffordabilityIndex, AffordabilityResult, ComparisonReport, NeighborhoodStat, PriceSummary,
    ProjectionPoint, ProjectionSeries,
};
