use museo::{ArtworkId, MuseoError};
use museo::view;
use museo_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create connector and check the capability directory for lookup.
    let connector = get_connector();
    let lookup = connector
        .as_lookup_provider()
        .ok_or_else(|| MuseoError::unsupported("catalog/lookup"))?;

    // 2. Fetch a single record by identity. 27992 is "A Sunday on La
    //    Grande Jatte" in the real catalog; the mock serves a fixture.
    let id = if std::env::var("MUSEO_DEMOS_USE_MOCK").is_ok() {
        ArtworkId::new(42)
    } else {
        ArtworkId::new(27_992)
    };
    let record = lookup.lookup(id).await?;

    // 3. Render it the way a detail panel would.
    println!("title:        {}", view::title_text(&record));
    println!("artist:       {}", view::artist_text(&record));
    println!("origin:       {}", view::origin_text(&record));
    println!("inscriptions: {}", view::inscriptions_text(&record));
    println!(
        "dates:        {} - {}",
        view::date_text(record.date_start),
        view::date_text(record.date_end)
    );

    Ok(())
}
