//! museo-types
//!
//! Shared data transfer objects for the museo catalog-table ecosystem:
//! artwork records, page envelopes, configuration defaults, and the unified
//! error type.
#![warn(missing_docs)]

/// Artwork record and identity types.
pub mod artwork;
/// Table configuration defaults.
pub mod config;
/// Connector metadata types.
pub mod connector;
/// Unified error type.
pub mod error;
/// Page envelope, pagination metadata, and page requests.
pub mod page;
/// Selection summary types.
pub mod selection;

pub use artwork::{Artwork, ArtworkId};
pub use config::{PAGE_SIZE_OPTIONS, TableConfig};
pub use connector::ConnectorKey;
pub use error::MuseoError;
pub use page::{ArtworkPage, PageMeta, PageRequest};
pub use selection::SelectAllState;
