use sqlx::SqlitePool;

use crate::product::models::{CreateProductRequest, Product};
use crate::shared::error::ApiError;

#[derive(Clone)]
pub struct ProductService {
    pool: SqlitePool,
}

impl ProductService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, quantity FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Product, ApiError> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price, quantity FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".into()))
    }

    /// Append a new product. The store assigns the id; quantity defaults to 0.
    pub async fn create(&self, req: CreateProductRequest) -> Result<Product, ApiError> {
        let name = match req.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ApiError::BadRequest("Product name is required".into())),
        };
        let price = req
            .price
            .ok_or_else(|| ApiError::BadRequest("Product price is required".into()))?;
        if price < 0.0 {
            return Err(ApiError::BadRequest(
                "Product price must be non-negative".into(),
            ));
        }
        let quantity = req.quantity.unwrap_or(0);
        if quantity < 0 {
            return Err(ApiError::BadRequest(
                "Product quantity must be non-negative".into(),
            ));
        }

        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price, quantity) VALUES (?, ?, ?) \
             RETURNING id, name, price, quantity",
        )
        .bind(&name)
        .bind(price)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }
}
