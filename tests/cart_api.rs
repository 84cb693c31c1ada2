mod common;

use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;

use common::{get, memory_pool, post_json};
use grocery_services::cart::services::{CartService, ProductClient};
use grocery_services::cart::state::CartState;
use grocery_services::cart::{controllers as cart_controllers, db as cart_db};
use grocery_services::product::models::CreateProductRequest;
use grocery_services::product::services::ProductService;
use grocery_services::product::state::ProductState;
use grocery_services::product::{controllers as product_controllers, db as product_db};

/// Serve a seeded product service on an ephemeral local port and return its
/// base URL. The cart service under test talks to it over real HTTP, the
/// same way the deployed pair is wired together.
async fn spawn_product_service(seed: &[(&str, f64, i64)]) -> String {
    let pool = memory_pool().await;
    product_db::init_schema(&pool).await.unwrap();
    let service = ProductService::new(pool);
    for (name, price, quantity) in seed {
        service
            .create(CreateProductRequest {
                name: Some((*name).to_string()),
                price: Some(*price),
                quantity: Some(*quantity),
            })
            .await
            .unwrap();
    }
    let app = product_controllers::router(ProductState {
        product_service: service,
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn cart_app(product_base_url: &str) -> Router {
    let pool = memory_pool().await;
    cart_db::init_schema(&pool).await.unwrap();
    let client = ProductClient::new(product_base_url, Duration::from_secs(2));
    cart_controllers::router(CartState {
        cart_service: CartService::new(pool, client),
    })
}

#[tokio::test]
async fn reading_a_cart_creates_it_lazily() {
    let base = spawn_product_service(&[]).await;
    let app = cart_app(&base).await;

    let (status, body) = get(&app, "/cart/7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 7);
    assert_eq!(body["products"].as_array().unwrap().len(), 0);

    // Idempotent: a second read returns the same result, never 404.
    let (status, again) = get(&app, "/cart/7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again, body);
}

#[tokio::test]
async fn add_merge_clamp_and_reject_scenario() {
    let base = spawn_product_service(&[("apple", 0.5, 10)]).await;
    let app = cart_app(&base).await;

    let (status, body) = post_json(&app, "/cart/7/add/1", json!({ "quantity": 4 })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Product added to cart");
    assert_eq!(body["product"]["id"], 1);
    assert_eq!(body["product"]["name"], "apple");
    assert_eq!(body["product"]["added quantity"], 4);
    assert_eq!(body["product"]["new quantity"], 4);

    let (status, body) = post_json(&app, "/cart/7/add/1", json!({ "quantity": 3 })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["product"]["added quantity"], 3);
    assert_eq!(body["product"]["new quantity"], 7);

    // Repeated adds merge into one line.
    let (_, body) = get(&app, "/cart/7").await;
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["quantity"], 7);
    assert_eq!(products[0]["price"], 0.5);

    // Removing more than the line holds clamps instead of failing.
    let (status, body) = post_json(&app, "/cart/7/remove/1", json!({ "quantity": 10 })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Removed all of product from cart");
    assert_eq!(body["product"]["quantity removed"], 7);
    assert!(body["product"].get("quantity remaining").is_none());

    // Adding more than the inventory holds is rejected, not clamped.
    let (status, body) = post_json(&app, "/cart/7/add/1", json!({ "quantity": 99 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "Quantity of 99 requested but quantity in inventory is 10"
    );
}

#[tokio::test]
async fn rejected_add_leaves_the_line_unchanged() {
    let base = spawn_product_service(&[("apple", 0.5, 10)]).await;
    let app = cart_app(&base).await;

    post_json(&app, "/cart/1/add/1", json!({ "quantity": 4 })).await;
    let (status, _) = post_json(&app, "/cart/1/add/1", json!({ "quantity": 99 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = get(&app, "/cart/1").await;
    assert_eq!(body["products"][0]["quantity"], 4);
}

#[tokio::test]
async fn remove_decrements_exactly_when_enough_is_held() {
    let base = spawn_product_service(&[("apple", 0.5, 10)]).await;
    let app = cart_app(&base).await;

    post_json(&app, "/cart/2/add/1", json!({ "quantity": 5 })).await;

    let (status, body) = post_json(&app, "/cart/2/remove/1", json!({ "quantity": 2 })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Product removed");
    assert_eq!(body["product"]["quantity removed"], 2);
    assert_eq!(body["product"]["quantity remaining"], 3);

    // Removing exactly what is held empties the line without the clamp path.
    let (status, body) = post_json(&app, "/cart/2/remove/1", json!({ "quantity": 3 })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Product removed");
    assert_eq!(body["product"]["quantity removed"], 3);
    assert_eq!(body["product"]["quantity remaining"], 0);
}

#[tokio::test]
async fn quantity_is_required_and_positive() {
    let base = spawn_product_service(&[("apple", 0.5, 10)]).await;
    let app = cart_app(&base).await;

    let (status, body) = post_json(&app, "/cart/1/add/1", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "quantity is required");

    let (status, body) = post_json(&app, "/cart/1/add/1", json!({ "quantity": 0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "quantity must be a positive integer");
}

#[tokio::test]
async fn adding_an_unlisted_product_is_404() {
    let base = spawn_product_service(&[]).await;
    let app = cart_app(&base).await;

    let (status, body) = post_json(&app, "/cart/1/add/42", json!({ "quantity": 1 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not listed in inventory");
}

#[tokio::test]
async fn removing_from_a_missing_cart_or_line_is_404() {
    let base = spawn_product_service(&[("apple", 0.5, 10)]).await;
    let app = cart_app(&base).await;

    let (status, body) = post_json(&app, "/cart/9/remove/1", json!({ "quantity": 1 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "That cart does not exist");

    get(&app, "/cart/9").await; // lazily create the cart, still no lines
    let (status, body) = post_json(&app, "/cart/9/remove/1", json!({ "quantity": 1 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "That item is not in this cart");
}

#[tokio::test]
async fn unreachable_product_service_is_bad_gateway_not_404() {
    // Nothing listens on port 9; the connection is refused immediately.
    let app = cart_app("http://127.0.0.1:9").await;

    let (status, body) = post_json(&app, "/cart/1/add/1", json!({ "quantity": 1 })).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Product service unavailable"));
}

#[tokio::test]
async fn debug_listing_shows_every_cart() {
    let base = spawn_product_service(&[("apple", 0.5, 10)]).await;
    let app = cart_app(&base).await;

    post_json(&app, "/cart/1/add/1", json!({ "quantity": 2 })).await;
    get(&app, "/cart/2").await;

    let (status, body) = get(&app, "/cart").await;
    assert_eq!(status, StatusCode::OK);
    let carts = body["carts"].as_array().unwrap();
    assert_eq!(carts.len(), 2);
    assert_eq!(carts[0]["id"], 1);
    assert_eq!(carts[0]["products"][0]["quantity"], 2);
    assert_eq!(carts[1]["id"], 2);
    assert_eq!(carts[1]["products"].as_array().unwrap().len(), 0);
}
