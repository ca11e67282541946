use museo::ArtworkTable;
use museo_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create connector and controller.
    let connector = get_connector();
    let mut table = ArtworkTable::builder()
        .connector(connector)
        .page_size(10)
        .build()?;

    // 2. Land on the first page.
    table.go_to_page(0, 10).await?;
    println!(
        "page 1 loaded, {} records total",
        table.total_records()
    );

    // 3. Select the first 25 records; the controller fetches pages 2 and 3
    //    behind the scenes to cover the request.
    let selected = table.select_first(25).await?;
    println!(
        "selected {selected} records, pool now holds {}",
        table.pool().len()
    );

    // 4. The indicator is scoped to the visible page: every visible record
    //    is selected, so it reads All even though the selection is larger.
    println!("select-all state: {:?}", table.select_all_state());

    // 5. Navigate to page 4, which the bulk selection did not reach.
    table.go_to_page(30, 10).await?;
    println!(
        "after moving to page 4, select-all state: {:?}",
        table.select_all_state()
    );

    Ok(())
}
