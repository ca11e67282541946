use url::Url;

use museo_types::MuseoError;

use crate::{ArticConnector, DEFAULT_BASE_URL};

const DEFAULT_USER_AGENT: &str = "museo/0.1 (+https://github.com/museo-rs/museo)";

/// Builder for `ArticConnector`.
///
/// Defaults target the public endpoint with a fresh HTTP client. Tests point
/// `base_url` at a local mock server and production callers may inject a
/// preconfigured `reqwest::Client`.
#[derive(Debug, Default)]
pub struct ArticConnectorBuilder {
    base_url: Option<String>,
    client: Option<reqwest::Client>,
    user_agent: Option<String>,
}

impl ArticConnectorBuilder {
    /// Start from defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base endpoint, e.g. for a mock server.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a caller-provided HTTP client instead of building one.
    ///
    /// When set, the `user_agent` option is ignored; configure the client
    /// itself instead.
    #[must_use]
    pub fn custom_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Override the User-Agent header on the built-in client.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the base url does not parse, and a
    /// connector-tagged error when the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ArticConnector, MuseoError> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(raw)
            .map_err(|e| MuseoError::InvalidArg(format!("invalid base url {raw:?}: {e}")))?;

        let http = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
                .build()
                .map_err(|e| {
                    MuseoError::connector("museo-artic", format!("failed to build HTTP client: {e}"))
                })?,
        };

        Ok(ArticConnector::from_parts(http, base_url))
    }
}
