//! Route definitions, one module per resource.

pub mod auth;
pub mod category;
pub mod health;
pub mod product;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// All routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/products", product::router())
        .nest("/categories", category::router())
        .nest("/users", user::router())
}
