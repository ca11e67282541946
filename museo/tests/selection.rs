mod helpers;

use helpers::{ids, table_with};
use museo::SelectAllState;
use museo_mock::artwork;

#[tokio::test]
async fn select_all_visible_then_clear_walks_the_indicator() {
    let (mut table, _mock) = table_with(50);
    table.go_to_page(0, 10).await.unwrap();

    assert_eq!(table.select_all_state(), SelectAllState::None);

    table.select_all_visible();
    assert_eq!(table.selection().len(), 10);
    assert_eq!(table.select_all_state(), SelectAllState::All);

    table.clear_selection();
    assert!(table.selection().is_empty());
    assert_eq!(table.select_all_state(), SelectAllState::None);
}

#[tokio::test]
async fn toggling_rows_moves_through_partial() {
    let (mut table, _mock) = table_with(50);
    table.go_to_page(0, 10).await.unwrap();

    assert!(table.toggle(artwork(3)));
    assert!(table.toggle(artwork(7)));
    assert_eq!(table.select_all_state(), SelectAllState::Partial);

    // Toggling the same row again removes it.
    assert!(!table.toggle(artwork(3)));
    assert_eq!(ids(table.selection().records()), vec![7]);
    assert_eq!(table.select_all_state(), SelectAllState::Partial);

    assert!(!table.toggle(artwork(7)));
    assert_eq!(table.select_all_state(), SelectAllState::None);
}

#[tokio::test]
async fn navigation_recomputes_the_indicator_for_the_new_page() {
    let (mut table, _mock) = table_with(50);

    table.go_to_page(0, 10).await.unwrap();
    table.select_all_visible();
    assert_eq!(table.select_all_state(), SelectAllState::All);

    // The selection survives the page change but no longer covers what is
    // on screen, so the indicator drops to Partial.
    table.go_to_page(10, 10).await.unwrap();
    assert_eq!(table.selection().len(), 10);
    assert_eq!(table.select_all_state(), SelectAllState::Partial);

    table.go_to_page(0, 10).await.unwrap();
    assert_eq!(table.select_all_state(), SelectAllState::All);
}

#[tokio::test]
async fn bulk_selection_covering_part_of_the_page_is_partial() {
    let (mut table, mock) = table_with(50);

    // Visit pages 1 and 5 so the pool holds records 1..=10 then 41..=50 in
    // fetch order, then select a prefix that straddles that seam.
    table.go_to_page(0, 10).await.unwrap();
    table.go_to_page(40, 10).await.unwrap();
    let selected = table.select_first(15).await.unwrap();

    assert_eq!(selected, 15);
    assert_eq!(mock.fetch_count(), 2, "the pool already covered the request");

    let mut expected: Vec<i64> = (1..=10).collect();
    expected.extend(41..=45);
    assert_eq!(ids(table.selection().records()), expected);

    // Only 5 of the 10 visible records (41..=50) are selected.
    assert_eq!(table.select_all_state(), SelectAllState::Partial);
}

#[tokio::test]
async fn explicit_selection_replaces_and_recomputes() {
    let (mut table, _mock) = table_with(50);
    table.go_to_page(0, 10).await.unwrap();

    table.set_selection(table.visible().to_vec());
    assert_eq!(table.select_all_state(), SelectAllState::All);

    table.set_selection([artwork(1), artwork(1), artwork(2)]);
    assert_eq!(ids(table.selection().records()), vec![1, 2], "duplicates collapse");
    assert_eq!(table.select_all_state(), SelectAllState::Partial);

    let view = table.snapshot();
    assert_eq!(view.selected, 2);
    assert_eq!(view.select_all, SelectAllState::Partial);
}
