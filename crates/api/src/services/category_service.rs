//! Category service: the simpler sibling of the product path.

use sqlx::PgPool;

use bazar_core::error::CoreError;
use bazar_core::types::DbId;
use bazar_core::validation::validate_category;
use bazar_db::models::category::{Category, CreateCategory};
use bazar_db::repositories::CategoryRepo;

use super::store_error;

pub struct CategoryService;

impl CategoryService {
    pub async fn add(pool: &PgPool, input: &CreateCategory) -> Result<Category, CoreError> {
        validate_category(&input.name, &input.description)?;
        CategoryRepo::create(pool, input)
            .await
            .map_err(|e| store_error("category insert", e))
    }

    pub async fn get_by_id(pool: &PgPool, id: DbId) -> Result<Category, CoreError> {
        CategoryRepo::find_by_id(pool, id)
            .await
            .map_err(|e| store_error("category lookup", e))?
            .ok_or(CoreError::NotFound {
                entity: "Category",
                id,
            })
    }

    pub async fn get_all(pool: &PgPool) -> Result<Vec<Category>, CoreError> {
        CategoryRepo::list_all(pool)
            .await
            .map_err(|e| store_error("category list", e))
    }

    /// Full replacement; updates are validated exactly like creates.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateCategory,
    ) -> Result<Category, CoreError> {
        validate_category(&input.name, &input.description)?;
        CategoryRepo::update(pool, id, input)
            .await
            .map_err(|e| store_error("category update", e))?
            .ok_or(CoreError::NotFound {
                entity: "Category",
                id,
            })
    }

    /// Delete a category; products referencing it keep existing with the
    /// reference cleared by the schema.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<(), CoreError> {
        let deleted = CategoryRepo::delete_by_id(pool, id)
            .await
            .map_err(|e| store_error("category delete", e))?;
        if !deleted {
            return Err(CoreError::NotFound {
                entity: "Category",
                id,
            });
        }
        tracing::info!(category_id = id, "category deleted");
        Ok(())
    }
}
