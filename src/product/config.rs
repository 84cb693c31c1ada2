use crate::shared::config::env_or;

/// Runtime configuration for the product service, resolved from the
/// environment (with `.env` support) over built-in defaults.
#[derive(Clone, Debug)]
pub struct ProductConfig {
    pub bind_addr: String,
    pub database_url: String,
}

impl ProductConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("PRODUCT_BIND_ADDR", "0.0.0.0:5000"),
            database_url: env_or("PRODUCT_DATABASE_URL", "sqlite:products.sqlite"),
        }
    }
}
