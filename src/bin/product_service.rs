use tracing::info;

use grocery_services::product::config::ProductConfig;
use grocery_services::product::services::ProductService;
use grocery_services::product::state::ProductState;
use grocery_services::product::{controllers, db};
use grocery_services::shared::layers::{init_tracing, shutdown_signal};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ProductConfig::from_env();
    let pool = db::connect(&config.database_url).await?;
    let state = ProductState {
        product_service: ProductService::new(pool),
    };
    let app = controllers::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "product service listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("product service stopped");
    Ok(())
}
