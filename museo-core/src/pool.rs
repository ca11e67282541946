use std::collections::HashMap;

use museo_types::{Artwork, ArtworkId};

/// Deduplicated superset of every record fetched during the session.
///
/// - Records are keyed by identity; the pool never holds two entries with
///   the same id.
/// - Iteration order is first-fetch order, which is what "select the first
///   N records" slices against.
/// - Merging is upsert-by-id: a re-fetched id replaces the stored copy in
///   place without moving it, so results never depend on fetch order.
/// - The pool grows monotonically; there is no eviction.
#[derive(Debug, Clone, Default)]
pub struct RecordPool {
    records: Vec<Artwork>,
    index: HashMap<ArtworkId, usize>,
}

impl RecordPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct records accumulated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when nothing has been fetched yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true when a record with this identity has been fetched.
    #[must_use]
    pub fn contains(&self, id: ArtworkId) -> bool {
        self.index.contains_key(&id)
    }

    /// Borrow the stored record for an identity, if present.
    #[must_use]
    pub fn get(&self, id: ArtworkId) -> Option<&Artwork> {
        self.index.get(&id).map(|&i| &self.records[i])
    }

    /// All accumulated records in first-fetch order.
    #[must_use]
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Merge a batch of incoming records, upserting by id.
    ///
    /// Returns the number of records that were new to the pool. Existing
    /// entries are overwritten in place (last fetch wins) and keep their
    /// original position.
    pub fn merge<I>(&mut self, incoming: I) -> usize
    where
        I: IntoIterator<Item = Artwork>,
    {
        let mut added = 0;
        for record in incoming {
            match self.index.get(&record.id) {
                Some(&i) => {
                    self.records[i] = record;
                }
                None => {
                    self.index.insert(record.id, self.records.len());
                    self.records.push(record);
                    added += 1;
                }
            }
        }
        added
    }

    /// Clone out the first `n` records in first-fetch order, clamped to the
    /// pool size.
    #[must_use]
    pub fn prefix(&self, n: usize) -> Vec<Artwork> {
        self.records[..n.min(self.records.len())].to_vec()
    }
}
