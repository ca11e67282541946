use museo_core::connector::CatalogConnector;
use std::sync::Arc;

/// Return a connector for the demos.
///
/// # Panics
/// Panics if the default catalog endpoint fails client construction.
#[must_use]
pub fn get_connector() -> Arc<dyn CatalogConnector> {
    if std::env::var("MUSEO_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Arc::new(museo_mock::MockCatalog::with_total(120))
    } else {
        Arc::new(museo_artic::ArticConnector::new_default())
    }
}
