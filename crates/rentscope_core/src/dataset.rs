//! Immutable dataset snapshots
//!
//! The engine never holds ambient state: callers load a `Dataset` once and
//! pass it explicitly to every computation. A refresh is a full reload that
//! produces a new snapshot with a bumped version — two calls may not assume
//! identical snapshots if a reload happened between them.

use crate::model::{DatasetVersion, Listing, ListingFilter, RawListing};

/// An immutable snapshot of listing rows.
#[derive(Debug, Clone)]
pub struct Dataset {
    listings: Vec<Listing>,
    version: DatasetVersion,
    count_excluded: usize,
}

impl Dataset {
    /// Build a snapshot from already-validated listings.
    #[must_use]
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            version: DatasetVersion(1),
            count_excluded: 0,
        }
    }

    /// Build a snapshot from raw provider rows.
    ///
    /// Rows with a missing or non-positive price or size are skipped and
    /// counted in [`count_excluded`](Self::count_excluded); the snapshot is
    /// still produced for the remaining rows.
    #[must_use]
    pub fn from_raw(rows: Vec<RawListing>) -> Self {
        Self::from_raw_versioned(rows, DatasetVersion(1))
    }

    /// Build a reloaded snapshot carrying an explicit version.
    #[must_use]
    pub fn from_raw_versioned(rows: Vec<RawListing>, version: DatasetVersion) -> Self {
        let total = rows.len();
        let listings: Vec<Listing> = rows
            .into_iter()
            .enumerate()
            .filter_map(|(i, row)| row.into_listing(i as u32 + 1))
            .collect();
        let count_excluded = total - listings.len();

        Self {
            listings,
            version,
            count_excluded,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    #[must_use]
    pub fn version(&self) -> DatasetVersion {
        self.version
    }

    /// Number of provider rows dropped during snapshot construction
    #[must_use]
    pub fn count_excluded(&self) -> usize {
        self.count_excluded
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter()
    }

    /// Listings matching every predicate of `filter`
    pub fn filtered<'a>(
        &'a self,
        filter: &'a ListingFilter,
    ) -> impl Iterator<Item = &'a Listing> {
        self.listings.iter().filter(move |l| filter.matches(l))
    }

    /// Distinct neighborhood names, sorted for deterministic presentation
    #[must_use]
    pub fn neighborhoods(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .listings
            .iter()
            .map(|l| l.neighborhood.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}
