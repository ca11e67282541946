//! Museo drives a lazily paginated data table over a remote artwork catalog.
//!
//! Overview
//! - Fetches pages through connectors that implement the `museo_core`
//!   contracts and tracks pagination state from the catalog's own metadata.
//! - Accumulates every fetched record into a deduplicated pool so that
//!   "select the first N rows" can span pages that are not on screen yet.
//! - Derives a tri-state select-all summary, scoped to the visible page.
//!
//! Key behaviors and trade-offs
//! - Single thread of control: the table is mutated through `&mut self`, so
//!   two page fetches can never race each other for one table. Cancelling
//!   while a response is in flight discards it instead of committing it.
//! - Bulk selection fetches supplementary pages sequentially and stops as
//!   soon as the pool covers the request or the catalog runs out; a
//!   `CancelHandle` aborts the loop between fetches.
//! - Failures leave state untouched: a failed page fetch keeps the previous
//!   page on screen, and a failed bulk selection keeps the pool rows it
//!   already merged along with the existing selection.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use museo::ArtworkTable;
//!
//! let connector = Arc::new(museo_artic::ArticConnector::new_default());
//! let mut table = ArtworkTable::builder()
//!     .connector(connector)
//!     .page_size(10)
//!     .build()?;
//!
//! table.go_to_page(0, 10).await?;          // first page on screen
//! let selected = table.select_first(25).await?; // spans pages 2 and 3
//! println!("{selected} rows selected, state {:?}", table.select_all_state());
//! ```
#![warn(missing_docs)]

mod cancel;
mod core;
/// Presentation projections for table rendering.
pub mod view;

pub use cancel::CancelHandle;
pub use core::{ArtworkTable, ArtworkTableBuilder};
pub use view::TableView;

// Re-export core types for convenience
pub use museo_core::{
    Artwork,
    ArtworkId,
    ArtworkPage,
    CatalogConnector,
    ConnectorKey,
    MuseoError,
    PageMeta,
    PageRequest,
    RecordPool,
    SelectAllState,
    SelectionSet,
    TableConfig,
};
