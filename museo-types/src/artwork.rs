//! The artwork record as served by the catalog API.

use serde::{Deserialize, Serialize};

/// Stable unique identity of an artwork record.
///
/// The catalog guarantees that the same artwork keeps the same id across
/// fetches, which is what makes cross-page selection bookkeeping possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub i64);

impl ArtworkId {
    /// Construct a typed id from its raw numeric form.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric id.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog item with its descriptive fields.
///
/// Every descriptive field is optional: the remote catalog omits or nulls
/// them freely, and the presentation layer substitutes placeholder text.
/// Records are immutable once fetched; identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Unique, stable identity.
    pub id: ArtworkId,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Geographic origin of the piece.
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Free-form attribution text (artist name, nationality, dates).
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Inscription/annotation text recorded on the piece.
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Year the work was begun.
    #[serde(default)]
    pub date_start: Option<i32>,
    /// Year the work was completed.
    #[serde(default)]
    pub date_end: Option<i32>,
    /// IIIF image identifier, when the piece has been photographed.
    #[serde(default)]
    pub image_id: Option<String>,
}

impl Artwork {
    /// Minimal record with only the identity populated.
    #[must_use]
    pub const fn with_id(id: ArtworkId) -> Self {
        Self {
            id,
            title: None,
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
            image_id: None,
        }
    }
}
