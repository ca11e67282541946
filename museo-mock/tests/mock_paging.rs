use museo_core::connector::{ArtworkLookupProvider, ArtworkPageProvider};
use museo_core::{ArtworkId, MuseoError, PageRequest};
use museo_mock::MockCatalog;

#[tokio::test]
async fn pages_slice_the_catalog_in_order() {
    let mock = MockCatalog::with_total(25);

    let p1 = mock
        .fetch_page(PageRequest::new(1, 10).unwrap())
        .await
        .unwrap();
    assert_eq!(p1.records.len(), 10);
    assert_eq!(p1.records[0].id, ArtworkId::new(1));
    assert_eq!(p1.meta.total, 25);
    assert_eq!(p1.meta.total_pages, 3);
    assert!(!p1.is_short());

    let p3 = mock
        .fetch_page(PageRequest::new(3, 10).unwrap())
        .await
        .unwrap();
    assert_eq!(p3.records.len(), 5);
    assert_eq!(p3.records[0].id, ArtworkId::new(21));
    assert!(p3.is_short());

    assert_eq!(mock.fetch_count(), 2);
}

#[tokio::test]
async fn page_beyond_the_catalog_is_empty() {
    let mock = MockCatalog::with_total(25);
    let p9 = mock
        .fetch_page(PageRequest::new(9, 10).unwrap())
        .await
        .unwrap();
    assert!(p9.records.is_empty());
    assert!(p9.is_short());
}

#[tokio::test]
async fn scripted_page_failure_is_counted() {
    let mock = MockCatalog::builder().total(25).fail_page(2).build();

    mock.fetch_page(PageRequest::new(1, 10).unwrap())
        .await
        .unwrap();
    let err = mock
        .fetch_page(PageRequest::new(2, 10).unwrap())
        .await
        .expect_err("page 2 is scripted to fail");

    assert!(matches!(err, MuseoError::Connector { .. }));
    assert_eq!(mock.fetch_count(), 2);
}

#[tokio::test]
async fn lookup_matches_listing_fixtures() {
    let mock = MockCatalog::with_total(25);
    let listed = mock
        .fetch_page(PageRequest::new(1, 10).unwrap())
        .await
        .unwrap();

    let looked_up = mock.lookup(ArtworkId::new(7)).await.unwrap();
    assert_eq!(&looked_up, &listed.records[6]);

    let err = mock
        .lookup(ArtworkId::new(26))
        .await
        .expect_err("beyond the catalog");
    assert!(matches!(err, MuseoError::NotFound { .. }));
}
