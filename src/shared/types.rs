use serde::{Deserialize, Serialize};

/// Product information: the wire contract the product service exposes and
/// the cart service consumes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductInfo {
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// Sellable stock as currently reported by the inventory.
    pub quantity: i64,
}
