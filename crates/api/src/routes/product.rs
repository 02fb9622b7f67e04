//! Route definitions for the `/products` resource.
//!
//! ```text
//! GET    /                -> list (optional ?store= filter)   [public]
//! POST   /                -> create                           [auth]
//! DELETE /                -> delete_all                       [auth]
//! GET    /my-products     -> my_products                      [auth]
//! GET    /{id}            -> get_by_id                        [public]
//! DELETE /{id}            -> delete                           [auth]
//! PUT    /{id}/price      -> update_price (?newPrice=)        [auth]
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(product::list)
                .post(product::create)
                .delete(product::delete_all),
        )
        .route("/my-products", get(product::my_products))
        .route("/{id}", get(product::get_by_id).delete(product::delete))
        .route("/{id}/price", put(product::update_price))
}
