use serde::{Deserialize, Serialize};

/// A sellable item with its authoritative stock count.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

/// Body of `POST /products`.
///
/// `name` and `price` are required but modeled as `Option` so their absence
/// surfaces as a field-level 400 rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}
