use sqlx::SqlitePool;

use super::ProductClient;
use crate::cart::models::{AddedLine, CartLine, Removal};
use crate::shared::error::ApiError;

#[derive(Clone)]
pub struct CartService {
    pool: SqlitePool,
    product_client: ProductClient,
}

impl CartService {
    pub fn new(pool: SqlitePool, product_client: ProductClient) -> Self {
        Self {
            pool,
            product_client,
        }
    }

    /// Create the cart row for `user_id` if absent.
    ///
    /// Idempotent, so it is safe to commit before the rest of a mutation is
    /// validated; a failed add leaves at worst an empty cart behind.
    async fn ensure_cart(&self, user_id: i64) -> Result<(), ApiError> {
        sqlx::query("INSERT OR IGNORE INTO carts (id) VALUES (?)")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn cart_exists(&self, user_id: i64) -> Result<bool, ApiError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM carts WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    /// The cart's lines, creating the cart lazily on first access.
    pub async fn contents(&self, user_id: i64) -> Result<Vec<CartLine>, ApiError> {
        self.ensure_cart(user_id).await?;

        let lines = sqlx::query_as::<_, CartLine>(
            "SELECT cart_id, product_id, name, price, quantity_in_cart \
             FROM cart_items WHERE cart_id = ? ORDER BY product_id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }

    /// Every cart with its lines. Debug/admin listing.
    pub async fn list_all(&self) -> Result<Vec<(i64, Vec<CartLine>)>, ApiError> {
        let cart_ids: Vec<(i64,)> = sqlx::query_as("SELECT id FROM carts ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        let lines = sqlx::query_as::<_, CartLine>(
            "SELECT cart_id, product_id, name, price, quantity_in_cart \
             FROM cart_items ORDER BY cart_id, product_id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut carts: Vec<(i64, Vec<CartLine>)> = cart_ids
            .into_iter()
            .map(|(id,)| (id, Vec::new()))
            .collect();
        for line in lines {
            if let Some((_, items)) = carts.iter_mut().find(|(id, _)| *id == line.cart_id) {
                items.push(line);
            }
        }
        Ok(carts)
    }

    /// Add `quantity` of a product to the user's cart.
    ///
    /// Validates the request against the stock the product service currently
    /// reports; requesting more than is available is rejected, never clamped.
    /// The increment happens in a single upsert, so concurrent adds for the
    /// same (cart, product) pair cannot lose an update.
    pub async fn add(
        &self,
        user_id: i64,
        product_id: i64,
        quantity: Option<i64>,
    ) -> Result<AddedLine, ApiError> {
        let requested = validate_quantity(quantity)?;
        self.ensure_cart(user_id).await?;

        let product = self.product_client.get_product(product_id).await?;
        if requested > product.quantity {
            return Err(ApiError::InsufficientStock {
                requested,
                available: product.quantity,
            });
        }

        // On a repeated add only the quantity moves; the name/price snapshot
        // from the first add stays.
        let line = sqlx::query_as::<_, CartLine>(
            "INSERT INTO cart_items (cart_id, product_id, name, price, quantity_in_cart) \
             VALUES (?, ?, ?, ?, ?) \
             ON CONFLICT(cart_id, product_id) \
             DO UPDATE SET quantity_in_cart = quantity_in_cart + excluded.quantity_in_cart \
             RETURNING cart_id, product_id, name, price, quantity_in_cart",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(&product.name)
        .bind(product.price)
        .bind(requested)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddedLine {
            product_id: line.product_id,
            name: line.name,
            price: line.price,
            added: requested,
            total: line.quantity_in_cart,
        })
    }

    /// Remove up to `quantity` of a product from the user's cart.
    ///
    /// Removal is "remove up to N": overshooting empties the line and reports
    /// how much was actually removed. The emptied row is kept with quantity 0.
    pub async fn remove(
        &self,
        user_id: i64,
        product_id: i64,
        quantity: Option<i64>,
    ) -> Result<Removal, ApiError> {
        if !self.cart_exists(user_id).await? {
            return Err(ApiError::NotFound("That cart does not exist".into()));
        }
        let requested = validate_quantity(quantity)?;

        let mut tx = self.pool.begin().await?;
        let line = sqlx::query_as::<_, CartLine>(
            "SELECT cart_id, product_id, name, price, quantity_in_cart \
             FROM cart_items WHERE cart_id = ? AND product_id = ?",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some(line) = line else {
            return Err(ApiError::NotFound("That item is not in this cart".into()));
        };

        let removed = requested.min(line.quantity_in_cart);
        let remaining = line.quantity_in_cart - removed;
        sqlx::query(
            "UPDATE cart_items SET quantity_in_cart = ? WHERE cart_id = ? AND product_id = ?",
        )
        .bind(remaining)
        .bind(user_id)
        .bind(product_id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(Removal {
            product_id: line.product_id,
            name: line.name,
            price: line.price,
            removed,
            remaining,
            clamped: requested > line.quantity_in_cart,
        })
    }
}

fn validate_quantity(quantity: Option<i64>) -> Result<i64, ApiError> {
    match quantity {
        None => Err(ApiError::BadRequest("quantity is required".into())),
        Some(q) if q <= 0 => Err(ApiError::BadRequest(
            "quantity must be a positive integer".into(),
        )),
        Some(q) => Ok(q),
    }
}
