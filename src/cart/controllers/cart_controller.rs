use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::cart::models::{CartLine, QuantityRequest};
use crate::cart::state::CartState;
use crate::shared::error::ApiError;
use crate::shared::layers::{catch_panic_layer, default_trace};

/// Assemble the cart service router.
pub fn router(state: CartState) -> Router {
    Router::new()
        .route("/cart", get(list_carts))
        .route("/cart/{user_id}", get(get_cart))
        .route("/cart/{user_id}/add/{product_id}", post(add_to_cart))
        .route("/cart/{user_id}/remove/{product_id}", post(remove_from_cart))
        .route("/health", get(health))
        .layer(default_trace())
        .layer(catch_panic_layer())
        .with_state(state)
}

fn lines_json(lines: &[CartLine]) -> Vec<Value> {
    lines
        .iter()
        .map(|line| {
            json!({
                "id": line.product_id,
                "name": line.name,
                "price": line.price,
                "quantity": line.quantity_in_cart,
            })
        })
        .collect()
}

async fn list_carts(State(state): State<CartState>) -> Result<Json<Value>, ApiError> {
    let carts = state.cart_service.list_all().await?;
    let carts: Vec<Value> = carts
        .iter()
        .map(|(id, lines)| json!({ "id": id, "products": lines_json(lines) }))
        .collect();
    Ok(Json(json!({ "carts": carts })))
}

async fn get_cart(
    State(state): State<CartState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let lines = state.cart_service.contents(user_id).await?;
    Ok(Json(json!({ "id": user_id, "products": lines_json(&lines) })))
}

async fn add_to_cart(
    State(state): State<CartState>,
    Path((user_id, product_id)): Path<(i64, i64)>,
    body: Result<Json<QuantityRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let quantity = body.ok().and_then(|Json(b)| b.quantity);
    let added = state.cart_service.add(user_id, product_id, quantity).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Product added to cart",
            "product": {
                "id": added.product_id,
                "name": added.name,
                "price": added.price,
                "added quantity": added.added,
                "new quantity": added.total,
            },
        })),
    ))
}

async fn remove_from_cart(
    State(state): State<CartState>,
    Path((user_id, product_id)): Path<(i64, i64)>,
    body: Result<Json<QuantityRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let quantity = body.ok().and_then(|Json(b)| b.quantity);
    let removal = state
        .cart_service
        .remove(user_id, product_id, quantity)
        .await?;

    let response = if removal.clamped {
        json!({
            "message": "Removed all of product from cart",
            "product": {
                "id": removal.product_id,
                "name": removal.name,
                "price": removal.price,
                "quantity removed": removal.removed,
            },
        })
    } else {
        json!({
            "message": "Product removed",
            "product": {
                "id": removal.product_id,
                "name": removal.name,
                "price": removal.price,
                "quantity removed": removal.removed,
                "quantity remaining": removal.remaining,
            },
        })
    };
    Ok((StatusCode::CREATED, Json(response)))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}
