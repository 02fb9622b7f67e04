//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bazar_core::types::DbId;
use bazar_db::models::user::{UpdateUser, User};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::services::UserService;
use crate::state::AppState;

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserService::get_by_id(&state.pool, id).await?;
    Ok(Json(user))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = UserService::update(&state.pool, id, &input).await?;
    Ok(Json(user))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    UserService::delete_by_id(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
