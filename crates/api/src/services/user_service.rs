//! User service: registration, login, and profile CRUD.

use sqlx::PgPool;

use bazar_core::error::CoreError;
use bazar_core::types::DbId;
use bazar_db::models::user::{RegisterUser, UpdateUser, User};
use bazar_db::repositories::UserRepo;

use crate::auth::password::{hash_password, verify_password};

use super::store_error;

pub struct UserService;

impl UserService {
    /// Register a new user. The password is hashed with Argon2id before it
    /// reaches the store; uniqueness is enforced by the schema and surfaced
    /// as a conflict.
    pub async fn register(pool: &PgPool, input: &RegisterUser) -> Result<User, CoreError> {
        if input.username.is_empty() {
            return Err(CoreError::validation("username is required"));
        }
        if input.email.is_empty() || !input.email.contains('@') {
            return Err(CoreError::validation("a valid email is required"));
        }
        if input.password.len() < 8 {
            return Err(CoreError::validation(
                "password must be at least 8 characters long",
            ));
        }

        let password_hash = hash_password(&input.password)
            .map_err(|e| CoreError::Internal(format!("password hashing failed: {e}")))?;

        let user = UserRepo::create(
            pool,
            &input.username,
            &input.email,
            &password_hash,
            &input.first_name,
            &input.last_name,
        )
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                CoreError::Conflict("username or email already taken".to_string())
            } else {
                store_error("user insert", e)
            }
        })?;

        tracing::info!(user_id = user.id, "user registered");
        Ok(user)
    }

    /// Authenticate by username or email. Unknown identifier and wrong
    /// password are indistinguishable to the caller.
    pub async fn login(pool: &PgPool, identifier: &str, password: &str) -> Result<User, CoreError> {
        let user = UserRepo::find_by_username_or_email(pool, identifier)
            .await
            .map_err(|e| store_error("user lookup", e))?
            .ok_or_else(|| CoreError::Unauthorized("invalid username or password".to_string()))?;

        let matches = verify_password(password, &user.password_hash)
            .map_err(|e| CoreError::Internal(format!("password verification failed: {e}")))?;
        if !matches {
            return Err(CoreError::Unauthorized(
                "invalid username or password".to_string(),
            ));
        }

        Ok(user)
    }

    pub async fn get_by_id(pool: &PgPool, id: DbId) -> Result<User, CoreError> {
        UserRepo::find_by_id(pool, id)
            .await
            .map_err(|e| store_error("user lookup", e))?
            .ok_or(CoreError::NotFound { entity: "User", id })
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateUser) -> Result<User, CoreError> {
        if let Some(email) = &input.email {
            if email.is_empty() || !email.contains('@') {
                return Err(CoreError::validation("a valid email is required"));
            }
        }
        UserRepo::update(pool, id, input)
            .await
            .map_err(|e| store_error("user update", e))?
            .ok_or(CoreError::NotFound { entity: "User", id })
    }

    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<(), CoreError> {
        let deleted = UserRepo::delete_by_id(pool, id)
            .await
            .map_err(|e| store_error("user delete", e))?;
        if !deleted {
            return Err(CoreError::NotFound { entity: "User", id });
        }
        tracing::info!(user_id = id, "user deleted");
        Ok(())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}
