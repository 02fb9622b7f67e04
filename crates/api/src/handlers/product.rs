//! Handlers for the `/products` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use bazar_core::types::DbId;
use bazar_db::models::product::{CreateProduct, ProductDetail};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::services::ProductService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    /// Optional exact-match filter on the store name.
    pub store: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePriceQuery {
    #[serde(rename = "newPrice")]
    pub new_price: f64,
}

/// GET /api/v1/products[?store=...]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> AppResult<Json<Vec<ProductDetail>>> {
    let products = match query.store.as_deref() {
        Some(store) if !store.is_empty() => {
            ProductService::get_all_by_store(&state.pool, store).await?
        }
        _ => ProductService::get_all(&state.pool).await?,
    };
    Ok(Json(products))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProductDetail>> {
    let product = ProductService::get_by_id(&state.pool, id).await?;
    Ok(Json(product))
}

/// GET /api/v1/products/my-products
pub async fn my_products(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<ProductDetail>>> {
    let products = ProductService::get_by_user(&state.pool, user.user_id).await?;
    Ok(Json(products))
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<ProductDetail>)> {
    let product = ProductService::add(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/v1/products/{id}/price?newPrice=...
pub async fn update_price(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Query(query): Query<UpdatePriceQuery>,
) -> AppResult<StatusCode> {
    ProductService::update_price(&state.pool, id, query.new_price).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/v1/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ProductService::delete_by_id(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/products
pub async fn delete_all(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<StatusCode> {
    ProductService::delete_all(&state.pool).await?;
    Ok(StatusCode::NO_CONTENT)
}
