use crate::cart::services::CartService;

#[derive(Clone)]
pub struct CartState {
    pub cart_service: CartService,
}
