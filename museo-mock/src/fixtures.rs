use museo_core::{Artwork, ArtworkId};

const ORIGINS: &[&str] = &["Japan", "France", "Nigeria", "Peru", "Italy", "United States"];

/// Deterministic synthetic artwork for a one-based catalog position.
///
/// Every third record omits its inscriptions and every fifth omits the
/// image, mirroring the sparseness of the real catalog.
#[must_use]
pub fn artwork(id: i64) -> Artwork {
    let start = 1800 + (id % 180) as i32;
    Artwork {
        id: ArtworkId::new(id),
        title: Some(format!("Composition No. {id}")),
        place_of_origin: Some(ORIGINS[(id as usize) % ORIGINS.len()].to_string()),
        artist_display: Some(format!("Studio of Atelier {}", (id % 12) + 1)),
        inscriptions: (id % 3 != 0).then(|| format!("inscribed, no. {id}")),
        date_start: Some(start),
        date_end: Some(start + (id % 7) as i32),
        image_id: (id % 5 != 0).then(|| format!("mock-image-{id:04}")),
    }
}
