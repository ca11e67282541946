use async_trait::async_trait;

use museo_types::{Artwork, ArtworkId, ArtworkPage, MuseoError, PageRequest};
pub use museo_types::ConnectorKey;

/// Focused role trait for connectors that serve paginated artwork listings.
#[async_trait]
pub trait ArtworkPageProvider: Send + Sync {
    /// Fetch one page of records together with the catalog's pagination
    /// metadata. Idempotent for a given request; a failure surfaces
    /// immediately with no retry.
    async fn fetch_page(&self, req: PageRequest) -> Result<ArtworkPage, MuseoError>;
}

/// Focused role trait for connectors that can resolve a single record by id.
#[async_trait]
pub trait ArtworkLookupProvider: Send + Sync {
    /// Fetch the record with the given identity.
    async fn lookup(&self, id: ArtworkId) -> Result<Artwork, MuseoError>;
}

/// Primary interface implemented by catalog connectors.
///
/// Capabilities are discovered through the `as_*_provider` directory; a
/// connector advertises a capability by returning `Some(self)` from the
/// corresponding accessor.
pub trait CatalogConnector: Send + Sync {
    /// Stable connector name, e.g. "museo-artic".
    fn name(&self) -> &'static str;

    /// Human-readable name of the upstream data source.
    fn vendor(&self) -> &'static str;

    /// Typed key derived from the connector name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Paginated listing capability, if implemented.
    fn as_page_provider(&self) -> Option<&dyn ArtworkPageProvider> {
        None
    }

    /// Single-record lookup capability, if implemented.
    fn as_lookup_provider(&self) -> Option<&dyn ArtworkLookupProvider> {
        None
    }
}
