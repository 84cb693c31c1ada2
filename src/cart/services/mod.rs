mod cart_service;
mod product_client;

pub use cart_service::CartService;
pub use product_client::ProductClient;
