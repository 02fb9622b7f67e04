//! Service layer: gates every mutating call through the validation rules,
//! then delegates to the repositories, translating store-level failures
//! into [`CoreError`] values.
//!
//! Store error policy (uniform across all operations): repository failures
//! are never swallowed. A `sqlx::Error` becomes `CoreError::Internal`, a
//! missing row becomes `CoreError::NotFound`, and an operation that had
//! nothing to act on becomes `CoreError::Empty`. The caller always gets an
//! unambiguous success / empty / failure signal.

pub mod category_service;
pub mod product_service;
pub mod user_service;

pub use category_service::CategoryService;
pub use product_service::ProductService;
pub use user_service::UserService;

use bazar_core::error::CoreError;

/// Translate an unexpected store failure, logging the underlying fault.
fn store_error(context: &'static str, err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, context, "store operation failed");
    CoreError::Internal(err.to_string())
}
