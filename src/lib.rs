//! Grocery store microservices.
//!
//! Two independent HTTP/JSON services built as binaries of this crate:
//!
//! - `product-service` owns the product inventory (its own SQLite database)
//!   and exposes read access plus an append-only create endpoint.
//! - `cart-service` owns per-user shopping carts (a second, separate SQLite
//!   database) and calls the product service over HTTP on every cart
//!   mutation to validate against authoritative stock.
//!
//! The services never share storage; the only coupling is the product
//! service's HTTP contract (see [`shared::types`]).

pub mod cart;
pub mod product;
pub mod shared;
