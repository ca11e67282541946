use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the museo workspace.
///
/// Two kinds of remote failure are distinguished: `Transport` (the network
/// call could not complete or returned a non-success status) and `Parse`
/// (the response body does not match the expected envelope shape). The
/// remaining variants cover argument validation, connector-tagged failures,
/// missing resources, absent capabilities, and cancelled work.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MuseoError {
    /// The network call failed or the server answered with a non-success status.
    #[error("transport failure: {msg}")]
    Transport {
        /// Human-readable description, including the HTTP status when one was received.
        msg: String,
    },

    /// The response body could not be decoded into the expected envelope.
    #[error("malformed response: {0}")]
    Parse(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A record or resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "artwork 27992".
        what: String,
    },

    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "catalog/page").
        capability: String,
    },

    /// In-flight work was cancelled or superseded before it could commit.
    #[error("cancelled: {what}")]
    Cancelled {
        /// Description of the cancelled work.
        what: String,
    },
}

impl MuseoError {
    /// Helper: build a `Transport` error from a message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport { msg: msg.into() }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Cancelled` error for a description of the abandoned work.
    pub fn cancelled(what: impl Into<String>) -> Self {
        Self::Cancelled { what: what.into() }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Capability absence and cancellation are benign outcomes of normal
    /// operation; everything else warrants a user-facing notification.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::Unsupported { .. } | Self::Cancelled { .. })
    }
}
