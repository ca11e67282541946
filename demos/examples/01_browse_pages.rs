use museo::ArtworkTable;
use museo::view;
use museo_core::PAGE_SIZE_OPTIONS;
use museo_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create connector (mock in CI when MUSEO_DEMOS_USE_MOCK is set).
    let connector = get_connector();

    // 2. Build the table controller over it.
    let mut table = ArtworkTable::builder()
        .connector(connector)
        .page_size(10)
        .build()?;

    // 3. Walk the first three pages the way a paginator widget would.
    for page in 0..3u64 {
        table.go_to_page(page * 10, 10).await?;

        let snapshot = table.snapshot();
        println!(
            "--- page {} ({} of {} records) ---",
            page + 1,
            snapshot.records.len(),
            snapshot.total_records
        );
        for record in &snapshot.records {
            println!(
                "  #{:<8} {:<50} {}",
                record.id,
                view::title_text(record),
                view::origin_text(record)
            );
        }
    }

    // 4. Switch to a larger page size, as the paginator dropdown would.
    let wide = PAGE_SIZE_OPTIONS[2];
    table.go_to_page(0, wide).await?;
    println!(
        "--- {} rows per page: {} visible ---",
        wide,
        table.visible().len()
    );

    // 5. Everything walked so far stays in the pool.
    println!("pool holds {} records", table.pool().len());

    Ok(())
}
