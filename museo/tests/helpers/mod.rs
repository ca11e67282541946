#![allow(dead_code)]

use std::sync::Arc;

use museo::ArtworkTable;
use museo_mock::MockCatalog;

/// Table controller over a shared mock catalog, page size 10.
pub fn table_over(mock: Arc<MockCatalog>) -> ArtworkTable {
    ArtworkTable::builder()
        .connector(mock)
        .page_size(10)
        .build()
        .expect("valid table configuration")
}

/// Fresh table plus a handle to its mock, so tests can read fetch counts.
pub fn table_with(total: usize) -> (ArtworkTable, Arc<MockCatalog>) {
    let mock = Arc::new(MockCatalog::with_total(total));
    (table_over(Arc::clone(&mock)), mock)
}

/// Identity list of a record slice, for order assertions.
pub fn ids(records: &[museo::Artwork]) -> Vec<i64> {
    records.iter().map(|r| r.id.as_i64()).collect()
}
