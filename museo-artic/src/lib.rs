//! museo-artic
//!
//! Public connector that implements `CatalogConnector` on top of the Art
//! Institute of Chicago public API. Exposes paginated artwork listings and
//! single-record lookup.
//!
//! The connector issues one HTTP GET per operation with no retry: a network
//! failure or non-success status surfaces as `MuseoError::Transport`, and a
//! body that does not decode into the expected envelope surfaces as
//! `MuseoError::Parse`. Requests are idempotent per `(page, limit)`.
#![warn(missing_docs)]

/// Builder for configuring the connector.
pub mod builder;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use museo_core::connector::{ArtworkLookupProvider, ArtworkPageProvider, CatalogConnector};
use museo_core::{Artwork, ArtworkId, ArtworkPage, ConnectorKey, MuseoError, PageRequest};

pub use builder::ArticConnectorBuilder;

/// Default base endpoint of the Art Institute of Chicago API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Field-selection list sent with every request; keeps response payloads to
/// the columns the table actually renders.
pub const FIELDS: &str =
    "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end,image_id";

const CONNECTOR_NAME: &str = "museo-artic";

/// Envelope for single-record responses; listings decode straight into
/// `ArtworkPage`.
#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    data: Artwork,
}

/// Catalog connector backed by the Art Institute of Chicago API.
#[derive(Debug)]
pub struct ArticConnector {
    http: reqwest::Client,
    base_url: Url,
}

impl ArticConnector {
    /// Static connector key for configuration and error tagging.
    pub const KEY: ConnectorKey = ConnectorKey::new(CONNECTOR_NAME);

    /// Build a connector against the public endpoint with a default client.
    ///
    /// # Panics
    /// Panics if the default HTTP client cannot be constructed, which is
    /// unexpected in normal environments.
    #[must_use]
    pub fn new_default() -> Self {
        Self::builder()
            .build()
            .expect("default ArticConnector configuration is valid")
    }

    /// Returns an unconfigured builder. Customize with the builder methods
    /// before calling `.build()`.
    #[must_use]
    pub fn builder() -> ArticConnectorBuilder {
        ArticConnectorBuilder::new()
    }

    pub(crate) const fn from_parts(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, MuseoError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                MuseoError::InvalidArg(format!("base url {} cannot carry a path", self.base_url))
            })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    async fn get_envelope<T>(&self, url: Url, what: &str) -> Result<T, MuseoError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| MuseoError::transport(format!("{what}: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MuseoError::not_found(what.to_string()));
        }
        if !status.is_success() {
            return Err(MuseoError::transport(format!(
                "{what}: unexpected status {status} from {url}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| MuseoError::transport(format!("{what}: {e}")))?;
        serde_json::from_slice(&body).map_err(|e| MuseoError::Parse(format!("{what}: {e}")))
    }
}

#[async_trait]
impl ArtworkPageProvider for ArticConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "museo_artic::fetch_page",
            skip(self),
            fields(page = req.page(), limit = req.limit()),
        )
    )]
    async fn fetch_page(&self, req: PageRequest) -> Result<ArtworkPage, MuseoError> {
        let mut url = self.endpoint(&["artworks"])?;
        url.query_pairs_mut()
            .append_pair("page", &req.page().to_string())
            .append_pair("limit", &req.limit().to_string())
            .append_pair("fields", FIELDS);

        let what = format!("artworks page {}", req.page());
        let page: ArtworkPage = self.get_envelope(url, &what).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            records = page.records.len(),
            total = page.meta.total,
            "fetched artworks page"
        );

        Ok(page)
    }
}

#[async_trait]
impl ArtworkLookupProvider for ArticConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "museo_artic::lookup", skip(self), fields(id = %id)),
    )]
    async fn lookup(&self, id: ArtworkId) -> Result<Artwork, MuseoError> {
        let mut url = self.endpoint(&["artworks", &id.to_string()])?;
        url.query_pairs_mut().append_pair("fields", FIELDS);

        let what = format!("artwork {id}");
        let envelope: DetailEnvelope = self.get_envelope(url, &what).await?;
        Ok(envelope.data)
    }
}

impl CatalogConnector for ArticConnector {
    fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }

    fn vendor(&self) -> &'static str {
        "Art Institute of Chicago"
    }

    fn as_page_provider(&self) -> Option<&dyn ArtworkPageProvider> {
        Some(self as &dyn ArtworkPageProvider)
    }

    fn as_lookup_provider(&self) -> Option<&dyn ArtworkLookupProvider> {
        Some(self as &dyn ArtworkLookupProvider)
    }
}
