use crate::types::DbId;

/// Domain-level error kinds.
///
/// Every service operation resolves to either a success value or one of
/// these variants, so callers can distinguish a validation failure from a
/// missing row from a genuine store fault without parsing message strings.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Validation(String),

    /// The operation targeted rows that do not exist (e.g. deleting from an
    /// already-empty table). Distinct from [`CoreError::Internal`] so an
    /// empty result is never conflated with a failed statement.
    #[error("{0}")]
    Empty(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into())
    }
}
