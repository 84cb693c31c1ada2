use tracing::info;

use grocery_services::cart::config::CartConfig;
use grocery_services::cart::services::{CartService, ProductClient};
use grocery_services::cart::state::CartState;
use grocery_services::cart::{controllers, db};
use grocery_services::shared::layers::{init_tracing, shutdown_signal};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = CartConfig::from_env();
    let pool = db::connect(&config.database_url).await?;
    let product_client =
        ProductClient::new(config.product_base_url.clone(), config.upstream_timeout);
    let state = CartState {
        cart_service: CartService::new(pool, product_client),
    };
    let app = controllers::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, upstream = %config.product_base_url, "cart service listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("cart service stopped");
    Ok(())
}
