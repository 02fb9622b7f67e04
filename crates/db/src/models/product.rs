//! Product and product-image models and DTOs.

use bazar_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub discount: f64,
    pub store: String,
    pub category_id: Option<DbId>,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `product_images` table.
///
/// Never exposed on its own; always nested inside a [`ProductDetail`].
/// `is_main_image` is true exactly when `display_order` is 0.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductImage {
    pub id: DbId,
    pub product_id: DbId,
    pub image_url: String,
    pub is_main_image: bool,
    pub display_order: i32,
}

/// A product with its image list resolved, ordered by display order.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub discount: f64,
    pub store: String,
    pub category_id: Option<DbId>,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub images: Vec<ProductImage>,
}

impl ProductDetail {
    pub fn from_parts(product: Product, images: Vec<ProductImage>) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            description: product.description,
            discount: product.discount,
            store: product.store,
            category_id: product.category_id,
            user_id: product.user_id,
            created_at: product.created_at,
            updated_at: product.updated_at,
            images,
        }
    }

    /// Image URLs in display order.
    pub fn image_urls(&self) -> Vec<&str> {
        self.images.iter().map(|i| i.image_url.as_str()).collect()
    }
}

/// DTO for creating a new product. The owner id comes from the
/// authenticated caller, not from the request body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub discount: f64,
    pub store: String,
    pub category_id: Option<DbId>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}
