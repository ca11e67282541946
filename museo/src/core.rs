use std::sync::Arc;

use museo_core::connector::CatalogConnector;
use museo_core::{
    Artwork, MuseoError, PageRequest, RecordPool, SelectAllState, SelectionSet, TableConfig,
    selection,
};

use crate::cancel::CancelHandle;
use crate::view::TableView;

/// Controller for one lazily paginated artwork table.
///
/// Owns the full client-side state: the visible page, pagination metadata,
/// the accumulated record pool, and the selection set. All state lives for
/// the lifetime of the table and is discarded with it; nothing is persisted.
pub struct ArtworkTable {
    connector: Arc<dyn CatalogConnector>,
    rows: u32,
    first: u64,
    total: u64,
    visible: Vec<Artwork>,
    pool: RecordPool,
    selection: SelectionSet,
    cancel: CancelHandle,
}

/// Builder for constructing an `ArtworkTable` with custom configuration.
pub struct ArtworkTableBuilder {
    connector: Option<Arc<dyn CatalogConnector>>,
    config: TableConfig,
}

impl Default for ArtworkTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtworkTableBuilder {
    /// Create a new builder with default configuration (page size 10).
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            config: TableConfig::default(),
        }
    }

    /// Register the catalog connector to fetch pages through.
    #[must_use]
    pub fn connector(mut self, connector: Arc<dyn CatalogConnector>) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Set the initial page size.
    #[must_use]
    pub const fn page_size(mut self, rows: u32) -> Self {
        self.config.page_size = rows;
        self
    }

    /// Build the table controller.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector has been registered or the page
    /// size is zero, and `Unsupported` if the connector does not serve
    /// paginated listings.
    pub fn build(self) -> Result<ArtworkTable, MuseoError> {
        let connector = self.connector.ok_or_else(|| {
            MuseoError::InvalidArg(
                "no connector registered; add one via connector(...)".to_string(),
            )
        })?;
        if self.config.page_size == 0 {
            return Err(MuseoError::InvalidArg(
                "page size must be a positive integer".to_string(),
            ));
        }
        if connector.as_page_provider().is_none() {
            return Err(MuseoError::unsupported("catalog/page"));
        }

        Ok(ArtworkTable {
            connector,
            rows: self.config.page_size,
            first: 0,
            total: 0,
            visible: Vec::new(),
            pool: RecordPool::new(),
            selection: SelectionSet::new(),
            cancel: CancelHandle::default(),
        })
    }
}

impl ArtworkTable {
    /// Start building a new table controller.
    #[must_use]
    pub fn builder() -> ArtworkTableBuilder {
        ArtworkTableBuilder::new()
    }

    /// Navigate to the page containing the zero-based record offset `first`,
    /// fetching `rows` records.
    ///
    /// On success the visible page, total count, offset, and page size are
    /// updated and the fetched records are merged into the pool. On failure
    /// every piece of state is left unchanged and the error is returned for
    /// the caller to surface.
    ///
    /// # Errors
    /// Propagates connector `Transport`/`Parse`/`Connector` failures,
    /// returns `InvalidArg` when `rows` is zero, and `Cancelled` when the
    /// table's `CancelHandle` fires while the response is in flight, in
    /// which case nothing is committed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "museo::go_to_page", skip(self), fields(first, rows)),
    )]
    pub async fn go_to_page(&mut self, first: u64, rows: u32) -> Result<(), MuseoError> {
        let req = PageRequest::from_offset(first, rows)?;
        let connector = Arc::clone(&self.connector);
        let provider = connector
            .as_page_provider()
            .ok_or_else(|| MuseoError::unsupported("catalog/page"))?;

        let token = self.cancel.epoch();

        let page = provider.fetch_page(req).await?;

        // `&mut self` serializes fetches for one table, but a cancel raised
        // while the response was in flight advances the epoch.
        if self.cancel.epoch() != token {
            return Err(MuseoError::cancelled("page fetch superseded"));
        }

        self.total = page.meta.total;
        self.first = first;
        self.rows = rows;
        self.visible = page.records.clone();
        self.pool.merge(page.records);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            visible = self.visible.len(),
            pool = self.pool.len(),
            total = self.total,
            "page committed"
        );

        Ok(())
    }

    /// Return the first `min` records of the pool, fetching additional pages
    /// as needed.
    ///
    /// If the pool already covers `min`, the prefix is returned without any
    /// network traffic. Otherwise pages are fetched from index
    /// `ceil(pool_len / page_size) + 1` onward and merged (upsert-by-id)
    /// until the pool covers `min` or a short page signals that the catalog
    /// is exhausted. Exhaustion returns everything available; fewer records
    /// than requested is not an error.
    ///
    /// # Errors
    /// Propagates connector failures, in which case records merged by
    /// earlier iterations stay in the pool, and returns `Cancelled` when the
    /// table's `CancelHandle` fires between fetches.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "museo::ensure_loaded", skip(self), fields(min)),
    )]
    pub async fn ensure_loaded(&mut self, min: usize) -> Result<Vec<Artwork>, MuseoError> {
        if self.pool.len() >= min {
            return Ok(self.pool.prefix(min));
        }

        let connector = Arc::clone(&self.connector);
        let provider = connector
            .as_page_provider()
            .ok_or_else(|| MuseoError::unsupported("catalog/page"))?;
        let limit = self.rows;

        self.cancel.rearm();
        let mut page = next_page_index(self.pool.len(), limit)?;

        while self.pool.len() < min {
            if self.cancel.is_cancelled() {
                return Err(MuseoError::cancelled("bulk row accumulation"));
            }

            let req = PageRequest::new(page, limit)?;
            let fetched = provider.fetch_page(req).await?;
            let exhausted = fetched.is_short();
            self.pool.merge(fetched.records);

            if exhausted {
                break;
            }
            page += 1;
        }

        Ok(self.pool.prefix(min))
    }

    /// Bulk-select-by-count: make the first `count` records (in fetch order)
    /// the selection, fetching supplementary pages as needed.
    ///
    /// Returns the number of records actually selected, which is smaller
    /// than `count` when the catalog is exhausted first.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a zero count before any fetch is issued;
    /// otherwise propagates `ensure_loaded` failures, leaving the existing
    /// selection untouched.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "museo::select_first", skip(self), fields(count)),
    )]
    pub async fn select_first(&mut self, count: usize) -> Result<usize, MuseoError> {
        if count == 0 {
            return Err(MuseoError::InvalidArg(
                "row count must be a positive integer".to_string(),
            ));
        }

        let records = self.ensure_loaded(count).await?;
        let selected = records.len();
        self.selection.replace(records);
        Ok(selected)
    }

    /// Replace the selection with an explicit set of records.
    pub fn set_selection<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Artwork>,
    {
        self.selection.replace(records);
    }

    /// Select exactly the records on the visible page.
    pub fn select_all_visible(&mut self) {
        self.selection.replace(self.visible.iter().cloned());
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Add or remove a single record by identity. Returns true when the
    /// record is selected after the call.
    pub fn toggle(&mut self, record: Artwork) -> bool {
        self.selection.toggle(record)
    }

    /// Derived tri-state select-all summary, scoped to the visible page.
    #[must_use]
    pub fn select_all_state(&self) -> SelectAllState {
        selection::select_all_state(&self.visible, &self.selection)
    }

    /// Handle for aborting in-flight work: a bulk accumulation stops at the
    /// next page boundary and an uncommitted page fetch is discarded.
    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Records on the currently displayed page.
    #[must_use]
    pub fn visible(&self) -> &[Artwork] {
        &self.visible
    }

    /// Currently selected records, in selection order.
    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Accumulated pool of every record fetched this session.
    #[must_use]
    pub fn pool(&self) -> &RecordPool {
        &self.pool
    }

    /// Total record count as reported by the last successful fetch.
    #[must_use]
    pub const fn total_records(&self) -> u64 {
        self.total
    }

    /// Zero-based offset of the first visible record.
    #[must_use]
    pub const fn first(&self) -> u64 {
        self.first
    }

    /// Current page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.rows
    }

    /// Snapshot for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> TableView {
        TableView {
            records: self.visible.clone(),
            total_records: self.total,
            first: self.first,
            rows: self.rows,
            selected: self.selection.len(),
            select_all: self.select_all_state(),
        }
    }
}

/// Next page to request when extending a pool of `pool_len` records in
/// pages of `limit`.
fn next_page_index(pool_len: usize, limit: u32) -> Result<u32, MuseoError> {
    let covered = pool_len.div_ceil(limit as usize);
    u32::try_from(covered + 1)
        .map_err(|_| MuseoError::InvalidArg(format!("pool size {pool_len} is out of range")))
}
