use std::time::Duration;

use crate::shared::config::{env_or, env_or_parse};

/// Runtime configuration for the cart service, resolved from the environment
/// (with `.env` support) over built-in defaults.
#[derive(Clone, Debug)]
pub struct CartConfig {
    pub bind_addr: String,
    pub database_url: String,
    /// Base URL of the product service this instance validates against.
    pub product_base_url: String,
    /// Upper bound on each product lookup round trip.
    pub upstream_timeout: Duration,
}

impl CartConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("CART_BIND_ADDR", "0.0.0.0:5001"),
            database_url: env_or("CART_DATABASE_URL", "sqlite:carts.sqlite"),
            product_base_url: env_or("PRODUCT_SERVICE_URL", "http://localhost:5000"),
            upstream_timeout: Duration::from_millis(env_or_parse(
                "CART_UPSTREAM_TIMEOUT_MS",
                5000,
            )),
        }
    }
}
