use museo::ArtworkTable;
use museo_demos::common::get_connector;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,museo=trace,museo_artic=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Create connector (mock in CI when MUSEO_DEMOS_USE_MOCK is set) and the
    // table controller.
    let connector = get_connector();
    let mut table = ArtworkTable::builder()
        .connector(connector)
        .page_size(10)
        .build()?;

    // Page fetch
    table.go_to_page(0, 10).await?;

    // Bulk selection spanning unseen pages
    let _ = table.select_first(15).await?;

    // Navigation with the selection carried along
    table.go_to_page(10, 10).await?;
    println!("select-all state: {:?}", table.select_all_state());

    Ok(())
}
