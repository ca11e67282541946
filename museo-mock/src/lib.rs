//! museo-mock
//!
//! Mock catalog connector for CI-safe tests and examples. Serves a
//! deterministic collection of synthetic artworks, paginated the way the
//! real catalog paginates, with hooks to force failures and to count how
//! many page fetches were issued.
#![warn(missing_docs)]

mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use museo_core::connector::{ArtworkLookupProvider, ArtworkPageProvider, CatalogConnector};
use museo_core::{Artwork, ArtworkId, ArtworkPage, MuseoError, PageMeta, PageRequest};

pub use fixtures::artwork;

/// Mock connector serving `total` deterministic records.
///
/// Record ids run from 1 to `total` in catalog order. Every `fetch_page`
/// call is counted, including calls that are scripted to fail, so tests can
/// assert the exact fetch economy of code under test.
pub struct MockCatalog {
    total: usize,
    fail_page: Option<u32>,
    delay: Option<Duration>,
    fetches: AtomicUsize,
}

/// Builder for scripting `MockCatalog` behavior.
#[derive(Debug, Default)]
pub struct MockCatalogBuilder {
    total: usize,
    fail_page: Option<u32>,
    delay: Option<Duration>,
}

impl MockCatalogBuilder {
    /// Number of records the mock catalog holds.
    #[must_use]
    pub const fn total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    /// Force every fetch of the given one-based page to fail.
    #[must_use]
    pub const fn fail_page(mut self, page: u32) -> Self {
        self.fail_page = Some(page);
        self
    }

    /// Delay every page fetch, so tests can interleave cancellation.
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Finish the script.
    #[must_use]
    pub fn build(self) -> MockCatalog {
        MockCatalog {
            total: self.total,
            fail_page: self.fail_page,
            delay: self.delay,
            fetches: AtomicUsize::new(0),
        }
    }
}

impl MockCatalog {
    /// Plain catalog of `total` records with no scripted behavior.
    #[must_use]
    pub fn with_total(total: usize) -> Self {
        Self::builder().total(total).build()
    }

    /// Start scripting a mock catalog.
    #[must_use]
    pub fn builder() -> MockCatalogBuilder {
        MockCatalogBuilder::default()
    }

    /// Number of `fetch_page` calls issued so far, failed ones included.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArtworkPageProvider for MockCatalog {
    async fn fetch_page(&self, req: PageRequest) -> Result<ArtworkPage, MuseoError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_page == Some(req.page()) {
            return Err(MuseoError::connector(
                "museo-mock",
                format!("forced failure: page {}", req.page()),
            ));
        }

        let limit = req.limit() as usize;
        let offset = (req.page() as usize - 1) * limit;
        let end = offset.saturating_add(limit).min(self.total);
        let records: Vec<Artwork> = (offset..end)
            .map(|i| fixtures::artwork(i as i64 + 1))
            .collect();

        Ok(ArtworkPage {
            records,
            meta: PageMeta {
                total: self.total as u64,
                limit: req.limit(),
                offset: offset as u64,
                total_pages: u32::try_from(self.total.div_ceil(limit)).unwrap_or(u32::MAX),
                current_page: req.page(),
            },
        })
    }
}

#[async_trait]
impl ArtworkLookupProvider for MockCatalog {
    async fn lookup(&self, id: ArtworkId) -> Result<Artwork, MuseoError> {
        let raw = id.as_i64();
        if raw >= 1 && raw <= self.total as i64 {
            Ok(fixtures::artwork(raw))
        } else {
            Err(MuseoError::not_found(format!("artwork {id}")))
        }
    }
}

impl CatalogConnector for MockCatalog {
    fn name(&self) -> &'static str {
        "museo-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_page_provider(&self) -> Option<&dyn ArtworkPageProvider> {
        Some(self as &dyn ArtworkPageProvider)
    }

    fn as_lookup_provider(&self) -> Option<&dyn ArtworkLookupProvider> {
        Some(self as &dyn ArtworkLookupProvider)
    }
}
