//! Presentation projections: the render snapshot and cell-text fallbacks.
//!
//! Everything here is derived from controller state; no independent logic.

use museo_core::{Artwork, SelectAllState};

/// Immutable snapshot of everything a table renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Records on the currently displayed page, in catalog order.
    pub records: Vec<Artwork>,
    /// Total record count reported by the catalog.
    pub total_records: u64,
    /// Zero-based offset of the first visible record.
    pub first: u64,
    /// Page size.
    pub rows: u32,
    /// Number of selected records, across all pages.
    pub selected: usize,
    /// Tri-state select-all summary for the visible page.
    pub select_all: SelectAllState,
}

/// Title cell text; untitled pieces render as "Untitled".
#[must_use]
pub fn title_text(record: &Artwork) -> &str {
    non_empty(record.title.as_deref()).unwrap_or("Untitled")
}

/// Place-of-origin cell text.
#[must_use]
pub fn origin_text(record: &Artwork) -> &str {
    non_empty(record.place_of_origin.as_deref()).unwrap_or("Unknown")
}

/// Artist attribution cell text.
#[must_use]
pub fn artist_text(record: &Artwork) -> &str {
    non_empty(record.artist_display.as_deref()).unwrap_or("Unknown Artist")
}

/// Inscriptions cell text.
#[must_use]
pub fn inscriptions_text(record: &Artwork) -> &str {
    non_empty(record.inscriptions.as_deref()).unwrap_or("None")
}

/// Date cell text for either end of the range. A zero year is treated as
/// missing, matching how the catalog encodes unknown dates.
#[must_use]
pub fn date_text(year: Option<i32>) -> String {
    match year {
        Some(y) if y != 0 => y.to_string(),
        _ => "Unknown".to_string(),
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}
