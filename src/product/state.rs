use crate::product::services::ProductService;

#[derive(Clone)]
pub struct ProductState {
    pub product_service: ProductService,
}
