use std::collections::HashSet;

use museo_types::{Artwork, ArtworkId, SelectAllState};

/// Ordered set of currently selected records, deduplicated by identity.
///
/// The selection is a subset of ever-fetched records, not necessarily of the
/// page currently on screen.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    records: Vec<Artwork>,
    ids: HashSet<ArtworkId>,
}

impl SelectionSet {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true when a record with this identity is selected.
    #[must_use]
    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    /// Selected records in selection order.
    #[must_use]
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Replace the whole selection. Duplicate identities in the input keep
    /// their first occurrence.
    pub fn replace<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Artwork>,
    {
        self.records.clear();
        self.ids.clear();
        for record in records {
            if self.ids.insert(record.id) {
                self.records.push(record);
            }
        }
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.records.clear();
        self.ids.clear();
    }

    /// Add or remove a single record by identity. Returns true when the
    /// record is selected after the call.
    pub fn toggle(&mut self, record: Artwork) -> bool {
        if self.ids.remove(&record.id) {
            self.records.retain(|r| r.id != record.id);
            false
        } else {
            self.ids.insert(record.id);
            self.records.push(record);
            true
        }
    }
}

/// Compute the tri-state "select all" summary for the currently displayed
/// page.
///
/// The rule is scoped strictly to page-visible coverage: an empty selection
/// is `None`; a selection covering every visible record is `All`; anything
/// else, including a cross-page selection that misses part of the visible
/// page, is `Partial`.
#[must_use]
pub fn select_all_state(visible: &[Artwork], selection: &SelectionSet) -> SelectAllState {
    if selection.is_empty() {
        return SelectAllState::None;
    }
    let covered = visible
        .iter()
        .filter(|record| selection.contains(record.id))
        .count();
    if !visible.is_empty() && covered == visible.len() {
        SelectAllState::All
    } else {
        SelectAllState::Partial
    }
}
