//! Page envelope, pagination metadata, and validated page requests.

use serde::{Deserialize, Serialize};

use crate::artwork::Artwork;
use crate::error::MuseoError;

/// Pagination metadata as reported by the catalog for one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total number of records available on the remote catalog.
    pub total: u64,
    /// Number of records per page for this fetch.
    pub limit: u32,
    /// Zero-based offset of the first record in this page.
    pub offset: u64,
    /// Total number of pages at the current limit.
    pub total_pages: u32,
    /// One-based index of this page.
    pub current_page: u32,
}

/// One fetched page: a sequence of records plus the catalog's pagination
/// metadata. Mirrors the remote `{ data, pagination }` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkPage {
    /// Records contained in this page, in catalog order.
    #[serde(rename = "data")]
    pub records: Vec<Artwork>,
    /// Pagination metadata for this fetch.
    #[serde(rename = "pagination")]
    pub meta: PageMeta,
}

impl ArtworkPage {
    /// Returns true when this page holds fewer records than its limit,
    /// which signals that the remote source is exhausted.
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.records.len() < self.meta.limit as usize
    }
}

/// Validated request for one page of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Build a request for a one-based `page` of `limit` records.
    ///
    /// # Errors
    /// Returns `InvalidArg` when either argument is zero; the catalog's
    /// pages and limits are both one-based positive integers.
    pub fn new(page: u32, limit: u32) -> Result<Self, MuseoError> {
        if page == 0 {
            return Err(MuseoError::InvalidArg(
                "page index must be a positive integer".to_string(),
            ));
        }
        if limit == 0 {
            return Err(MuseoError::InvalidArg(
                "page limit must be a positive integer".to_string(),
            ));
        }
        Ok(Self { page, limit })
    }

    /// Build a request from a zero-based record offset and a page size,
    /// computing `page = offset / rows + 1`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `rows` is zero or the computed page index
    /// overflows `u32`.
    pub fn from_offset(first: u64, rows: u32) -> Result<Self, MuseoError> {
        if rows == 0 {
            return Err(MuseoError::InvalidArg(
                "page size must be a positive integer".to_string(),
            ));
        }
        let page = first / u64::from(rows) + 1;
        let page = u32::try_from(page).map_err(|_| {
            MuseoError::InvalidArg(format!("record offset {first} is out of range"))
        })?;
        Self::new(page, rows)
    }

    /// One-based page index.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Requested number of records per page.
    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit
    }
}
