use std::collections::HashSet;

use museo_core::RecordPool;
use museo_types::{Artwork, ArtworkId};
use proptest::prelude::*;

fn art(id: i64) -> Artwork {
    Artwork {
        title: Some(format!("Composition No. {id}")),
        ..Artwork::with_id(ArtworkId::new(id))
    }
}

// Small id range on purpose, so batches collide frequently.
fn arb_batch() -> impl Strategy<Value = Vec<Artwork>> {
    proptest::collection::vec((0i64..40).prop_map(art), 0..60)
}

proptest! {
    #[test]
    fn merge_never_introduces_duplicate_ids(batches in proptest::collection::vec(arb_batch(), 0..6)) {
        let mut pool = RecordPool::new();
        for batch in batches {
            pool.merge(batch);
            let ids: HashSet<ArtworkId> = pool.records().iter().map(|r| r.id).collect();
            prop_assert_eq!(ids.len(), pool.len());
        }
    }

    #[test]
    fn pool_growth_is_monotone_and_counts_new_ids(batches in proptest::collection::vec(arb_batch(), 0..6)) {
        let mut pool = RecordPool::new();
        let mut seen: HashSet<ArtworkId> = HashSet::new();
        for batch in batches {
            let before = pool.len();
            let expected_new = batch
                .iter()
                .map(|r| r.id)
                .filter(|id| seen.insert(*id))
                .count();
            let added = pool.merge(batch);
            prop_assert_eq!(added, expected_new);
            prop_assert_eq!(pool.len(), before + expected_new);
        }
    }

    #[test]
    fn remerging_a_batch_adds_nothing_and_keeps_order(batch in arb_batch()) {
        let mut pool = RecordPool::new();
        pool.merge(batch.clone());
        let order: Vec<ArtworkId> = pool.records().iter().map(|r| r.id).collect();

        let added = pool.merge(batch);
        prop_assert_eq!(added, 0);
        let order_after: Vec<ArtworkId> = pool.records().iter().map(|r| r.id).collect();
        prop_assert_eq!(order, order_after);
    }

    #[test]
    fn prefix_is_a_leading_slice_of_fetch_order(batch in arb_batch(), n in 0usize..80) {
        let mut pool = RecordPool::new();
        pool.merge(batch);
        let prefix = pool.prefix(n);
        prop_assert_eq!(prefix.len(), n.min(pool.len()));
        prop_assert_eq!(prefix.as_slice(), &pool.records()[..prefix.len()]);
    }
}

#[test]
fn upsert_replaces_in_place() {
    let mut pool = RecordPool::new();
    pool.merge(vec![art(1), art(2), art(3)]);

    let mut revised = art(2);
    revised.title = Some("Untitled (revised)".to_string());
    let added = pool.merge(vec![revised.clone()]);

    assert_eq!(added, 0);
    assert_eq!(pool.len(), 3);
    // Last fetch wins, position preserved.
    assert_eq!(pool.records()[1], revised);
    assert_eq!(pool.get(ArtworkId::new(2)), Some(&revised));
}
