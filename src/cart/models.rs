use serde::Deserialize;

/// One product's reserved quantity and snapshotted price within a cart.
///
/// `name` and `price` are copied from the product service at add time; a
/// later price change at the inventory does not retroactively alter lines
/// already in a cart.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct CartLine {
    pub cart_id: i64,
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    pub quantity_in_cart: i64,
}

/// Body of the add/remove endpoints.
#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub quantity: Option<i64>,
}

/// Outcome of an add: both the delta and the resulting total, so the caller
/// can distinguish "added 3" from "now holds 9".
#[derive(Debug)]
pub struct AddedLine {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    pub added: i64,
    pub total: i64,
}

/// Outcome of a remove. `clamped` is set when more was requested than the
/// line held and the whole line was emptied instead.
#[derive(Debug)]
pub struct Removal {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    pub removed: i64,
    pub remaining: i64,
    pub clamped: bool,
}
