//! Repository for the `products` and `product_images` tables.
//!
//! Every read resolves the product's image list, ordered by display order.
//! Writes touching both tables run inside a single transaction so a
//! partially-written product is never observable.

use sqlx::PgPool;

use bazar_core::types::DbId;

use crate::models::product::{CreateProduct, Product, ProductDetail, ProductImage};

const COLUMNS: &str = "id, name, price, description, discount, store, \
     category_id, user_id, created_at, updated_at";

const IMAGE_COLUMNS: &str = "id, product_id, image_url, is_main_image, display_order";

/// Provides CRUD and filtered-query operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a product and one image row per URL, atomically.
    ///
    /// Display order equals the position in `input.image_urls`; position 0
    /// is flagged as the main image. A failed image insert rolls back the
    /// product row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateProduct,
    ) -> Result<ProductDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO products \
                (name, price, description, discount, store, category_id, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let product: Product = sqlx::query_as(&query)
            .bind(&input.name)
            .bind(input.price)
            .bind(&input.description)
            .bind(input.discount)
            .bind(&input.store)
            .bind(input.category_id)
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;

        let image_query = format!(
            "INSERT INTO product_images \
                (product_id, image_url, is_main_image, display_order) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {IMAGE_COLUMNS}"
        );
        let mut images = Vec::with_capacity(input.image_urls.len());
        for (order, url) in input.image_urls.iter().enumerate() {
            let image: ProductImage = sqlx::query_as(&image_query)
                .bind(product.id)
                .bind(url)
                .bind(order == 0)
                .bind(order as i32)
                .fetch_one(&mut *tx)
                .await?;
            images.push(image);
        }

        tx.commit().await?;
        Ok(ProductDetail::from_parts(product, images))
    }

    /// Find a product by ID with its images resolved.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProductDetail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        let product: Option<Product> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match product {
            Some(product) => {
                let images = Self::images_for(pool, product.id).await?;
                Ok(Some(ProductDetail::from_parts(product, images)))
            }
            None => Ok(None),
        }
    }

    /// List every product with images resolved, in insertion-id order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ProductDetail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id ASC");
        let products: Vec<Product> = sqlx::query_as(&query).fetch_all(pool).await?;
        Self::resolve_images(pool, products).await
    }

    /// List products with an exact match on the store name.
    pub async fn list_by_store(
        pool: &PgPool,
        store: &str,
    ) -> Result<Vec<ProductDetail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE store = $1 ORDER BY id ASC");
        let products: Vec<Product> = sqlx::query_as(&query)
            .bind(store)
            .fetch_all(pool)
            .await?;
        Self::resolve_images(pool, products).await
    }

    /// List products belonging to a category.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<ProductDetail>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM products WHERE category_id = $1 ORDER BY id ASC");
        let products: Vec<Product> = sqlx::query_as(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await?;
        Self::resolve_images(pool, products).await
    }

    /// List products owned by a user.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProductDetail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE user_id = $1 ORDER BY id ASC");
        let products: Vec<Product> = sqlx::query_as(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Self::resolve_images(pool, products).await
    }

    /// Update only the price column. Returns `true` if a row was touched.
    pub async fn update_price(
        pool: &PgPool,
        id: DbId,
        new_price: f64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE products SET price = $2, updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .bind(new_price)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a product by ID. Image rows go with it via the foreign-key
    /// cascade, which is atomic within the single DELETE statement.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every product, returning the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Count all product rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Images for one product, ordered by display order ascending.
    async fn images_for(pool: &PgPool, product_id: DbId) -> Result<Vec<ProductImage>, sqlx::Error> {
        let query = format!(
            "SELECT {IMAGE_COLUMNS} FROM product_images \
             WHERE product_id = $1 ORDER BY display_order ASC"
        );
        sqlx::query_as(&query).bind(product_id).fetch_all(pool).await
    }

    async fn resolve_images(
        pool: &PgPool,
        products: Vec<Product>,
    ) -> Result<Vec<ProductDetail>, sqlx::Error> {
        let mut details = Vec::with_capacity(products.len());
        for product in products {
            let images = Self::images_for(pool, product.id).await?;
            details.push(ProductDetail::from_parts(product, images));
        }
        Ok(details)
    }
}
