use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::product::models::CreateProductRequest;
use crate::product::state::ProductState;
use crate::shared::error::ApiError;
use crate::shared::layers::{catch_panic_layer, default_trace};

/// Assemble the product service router.
pub fn router(state: ProductState) -> Router {
    Router::new()
        .route("/products", get(list).post(create))
        .route("/products/{id}", get(get_by_id))
        .route("/health", get(health))
        .layer(default_trace())
        .layer(catch_panic_layer())
        .with_state(state)
}

async fn list(State(state): State<ProductState>) -> Result<Json<Value>, ApiError> {
    let products = state.product_service.list().await?;
    Ok(Json(json!({ "products": products })))
}

async fn get_by_id(
    State(state): State<ProductState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let product = state.product_service.get_by_id(id).await?;
    Ok(Json(json!({ "product": product })))
}

async fn create(
    State(state): State<ProductState>,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(body) =
        body.map_err(|_| ApiError::BadRequest("request body must be JSON".into()))?;
    let product = state.product_service.create(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Product created", "product": product })),
    ))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}
