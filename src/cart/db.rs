use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Open the cart database, creating the file and schema if missing.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Bootstrap the cart schema. Idempotent.
///
/// One `cart_items` row per (cart, product) pair; the composite primary key
/// is what makes repeated adds an increment rather than a duplicate row.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("CREATE TABLE IF NOT EXISTS carts (id INTEGER PRIMARY KEY)")
        .execute(pool)
        .await?;
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS cart_items ( \
             cart_id INTEGER NOT NULL REFERENCES carts(id), \
             product_id INTEGER NOT NULL, \
             name TEXT NOT NULL, \
             price REAL NOT NULL, \
             quantity_in_cart INTEGER NOT NULL, \
             PRIMARY KEY (cart_id, product_id) \
         )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
