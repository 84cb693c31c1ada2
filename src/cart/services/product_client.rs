use std::time::Duration;

use serde::Deserialize;

use crate::shared::error::ApiError;
use crate::shared::types::ProductInfo;

#[derive(Deserialize)]
struct ProductEnvelope {
    product: ProductInfo,
}

/// HTTP client wrapper for the Product Service.
///
/// Constructed with the product service base URL from configuration. Every
/// request carries a bounded timeout; a timeout or transport failure
/// surfaces as [`ApiError::UpstreamUnavailable`] and is never retried here,
/// because the callers' cart increments are not idempotent.
#[derive(Clone)]
pub struct ProductClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ProductClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Fetch authoritative product data for `id` from the product service.
    ///
    /// An upstream 404 means the product does not exist (`NotFound`); any
    /// failure to reach or understand the upstream is `UpstreamUnavailable`.
    pub async fn get_product(&self, id: i64) -> Result<ProductInfo, ApiError> {
        let url = format!("{}/products/{}", self.base_url, id);

        let resp = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                ApiError::UpstreamUnavailable(format!("Product service unavailable: {e}"))
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound("Product not listed in inventory".into()));
        }

        if !resp.status().is_success() {
            return Err(ApiError::UpstreamUnavailable(format!(
                "Product service returned {}",
                resp.status()
            )));
        }

        let envelope = resp.json::<ProductEnvelope>().await.map_err(|e| {
            ApiError::UpstreamUnavailable(format!("Invalid product response: {e}"))
        })?;

        Ok(envelope.product)
    }
}
