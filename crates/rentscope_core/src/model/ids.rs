//! Unique identifiers for dataset entities
//!
//! IDs get their own newtypes so a listing id can never be confused with a
//! plain row index or a dataset version.

use serde::{Deserialize, Serialize};

/// Unique identifier for a Listing within a dataset snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ListingId(pub u32);

/// Monotonically increasing version of a dataset snapshot.
///
/// Two snapshots with different versions must not be assumed to contain the
/// same rows; a reload always bumps the version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DatasetVersion(pub u64);

impl DatasetVersion {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}
