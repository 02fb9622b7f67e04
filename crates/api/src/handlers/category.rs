//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bazar_core::types::DbId;
use bazar_db::models::category::{Category, CreateCategory};
use bazar_db::models::product::ProductDetail;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::services::{CategoryService, ProductService};
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryService::get_all(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryService::get_by_id(&state.pool, id).await?;
    Ok(Json(category))
}

/// GET /api/v1/categories/{id}/products
pub async fn products_in_category(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ProductDetail>>> {
    // 404 on a missing category rather than an empty list.
    CategoryService::get_by_id(&state.pool, id).await?;
    let products = ProductService::get_by_category(&state.pool, id).await?;
    Ok(Json(products))
}

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = CategoryService::add(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateCategory>,
) -> AppResult<Json<Category>> {
    let category = CategoryService::update(&state.pool, id, &input).await?;
    Ok(Json(category))
}

/// DELETE /api/v1/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    CategoryService::delete_by_id(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
