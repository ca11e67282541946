//! museo-core
//!
//! Core types, traits, and state utilities shared across the museo ecosystem.
//!
//! - `connector`: the `CatalogConnector` trait and capability provider traits.
//! - `pool`: the deduplicated accumulator of every record fetched this session.
//! - `selection`: the ordered selection set and the derived tri-state summary.
//!
//! The pool and selection types are plain synchronous state containers; only
//! the connector seam is async. Controllers own both and mutate them from a
//! single logical thread of control.
#![warn(missing_docs)]

/// Connector capability traits and the primary `CatalogConnector` interface.
pub mod connector;
/// Accumulated record pool with upsert-by-id merge semantics.
pub mod pool;
/// Selection set and tri-state computation.
pub mod selection;

pub use connector::{ArtworkLookupProvider, ArtworkPageProvider, CatalogConnector};
pub use museo_types::*;
pub use pool::RecordPool;
pub use selection::{SelectionSet, select_all_state};
