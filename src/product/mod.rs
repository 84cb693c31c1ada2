//! Product inventory service.
//!
//! Owns the `products` table and exposes read access plus an append-only
//! create endpoint. Has no knowledge of carts and makes no outbound calls.

pub mod config;
pub mod controllers;
pub mod db;
pub mod models;
pub mod services;
pub mod state;
