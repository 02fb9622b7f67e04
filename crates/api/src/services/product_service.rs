//! Product service: validation-then-store orchestration.

use sqlx::PgPool;

use bazar_core::error::CoreError;
use bazar_core::types::DbId;
use bazar_core::validation::{validate_product, ProductCandidate};
use bazar_db::models::product::{CreateProduct, ProductDetail};
use bazar_db::repositories::{CategoryRepo, ProductRepo};

use super::store_error;

/// Orchestrates product operations. Reads pass straight through to the
/// store; the only independent invariant here is "validate before create".
pub struct ProductService;

impl ProductService {
    /// Validate a candidate product and insert it with its images.
    ///
    /// The validation chain runs before any I/O; a rule violation never
    /// touches the store. A present `category_id` must reference an
    /// existing category.
    pub async fn add(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateProduct,
    ) -> Result<ProductDetail, CoreError> {
        validate_product(&ProductCandidate {
            name: &input.name,
            price: input.price,
            store: &input.store,
            discount: input.discount,
        })?;

        if let Some(category_id) = input.category_id {
            let exists = CategoryRepo::exists(pool, category_id)
                .await
                .map_err(|e| store_error("category lookup", e))?;
            if !exists {
                return Err(CoreError::Validation(format!(
                    "category with id {category_id} does not exist"
                )));
            }
        }

        let product = ProductRepo::create(pool, user_id, input)
            .await
            .map_err(|e| store_error("product insert", e))?;
        tracing::info!(product_id = product.id, user_id, "product added");
        Ok(product)
    }

    /// Fetch a product by id, with its images resolved.
    pub async fn get_by_id(pool: &PgPool, id: DbId) -> Result<ProductDetail, CoreError> {
        ProductRepo::find_by_id(pool, id)
            .await
            .map_err(|e| store_error("product lookup", e))?
            .ok_or(CoreError::NotFound {
                entity: "Product",
                id,
            })
    }

    pub async fn get_all(pool: &PgPool) -> Result<Vec<ProductDetail>, CoreError> {
        ProductRepo::list_all(pool)
            .await
            .map_err(|e| store_error("product list", e))
    }

    pub async fn get_all_by_store(
        pool: &PgPool,
        store: &str,
    ) -> Result<Vec<ProductDetail>, CoreError> {
        ProductRepo::list_by_store(pool, store)
            .await
            .map_err(|e| store_error("product list by store", e))
    }

    pub async fn get_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<ProductDetail>, CoreError> {
        ProductRepo::list_by_category(pool, category_id)
            .await
            .map_err(|e| store_error("product list by category", e))
    }

    pub async fn get_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<ProductDetail>, CoreError> {
        ProductRepo::list_by_user(pool, user_id)
            .await
            .map_err(|e| store_error("product list by user", e))
    }

    /// Update only the price of a product. Updating a missing id is a
    /// NotFound, not a silent success.
    pub async fn update_price(pool: &PgPool, id: DbId, new_price: f64) -> Result<(), CoreError> {
        let updated = ProductRepo::update_price(pool, id, new_price)
            .await
            .map_err(|e| store_error("price update", e))?;
        if !updated {
            return Err(CoreError::NotFound {
                entity: "Product",
                id,
            });
        }
        tracing::info!(product_id = id, new_price, "product price updated");
        Ok(())
    }

    /// Delete a product and, via cascade, its images.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<(), CoreError> {
        let deleted = ProductRepo::delete_by_id(pool, id)
            .await
            .map_err(|e| store_error("product delete", e))?;
        if !deleted {
            return Err(CoreError::NotFound {
                entity: "Product",
                id,
            });
        }
        tracing::info!(product_id = id, "product deleted");
        Ok(())
    }

    /// Delete every product. Removing zero rows is reported as an explicit
    /// empty result, distinct from a store failure.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, CoreError> {
        let removed = ProductRepo::delete_all(pool)
            .await
            .map_err(|e| store_error("product delete all", e))?;
        if removed == 0 {
            return Err(CoreError::Empty("no products to delete".to_string()));
        }
        tracing::info!(removed, "all products deleted");
        Ok(removed)
    }
}
