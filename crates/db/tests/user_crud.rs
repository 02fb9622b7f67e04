//! Integration tests for the user repository.

use sqlx::PgPool;

use bazar_db::models::user::UpdateUser;
use bazar_db::repositories::UserRepo;

#[sqlx::test(migrations = "../../migrations")]
async fn test_user_lookup_by_username_or_email(pool: PgPool) {
    let created = UserRepo::create(
        &pool,
        "ayse",
        "ayse@example.com",
        "$argon2id$fake",
        "Ayşe",
        "Yılmaz",
    )
    .await
    .unwrap();

    let by_username = UserRepo::find_by_username_or_email(&pool, "ayse")
        .await
        .unwrap()
        .expect("lookup by username");
    assert_eq!(by_username.id, created.id);

    let by_email = UserRepo::find_by_username_or_email(&pool, "ayse@example.com")
        .await
        .unwrap()
        .expect("lookup by email");
    assert_eq!(by_email.id, created.id);

    assert!(UserRepo::find_by_username_or_email(&pool, "nobody")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_duplicate_username_violates_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, "ayse", "ayse@example.com", "$argon2id$fake", "", "")
        .await
        .unwrap();

    let duplicate =
        UserRepo::create(&pool, "ayse", "other@example.com", "$argon2id$fake", "", "").await;
    assert!(duplicate.is_err());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_applies_only_provided_fields(pool: PgPool) {
    let created = UserRepo::create(
        &pool,
        "ayse",
        "ayse@example.com",
        "$argon2id$fake",
        "Ayşe",
        "Yılmaz",
    )
    .await
    .unwrap();

    let updated = UserRepo::update(
        &pool,
        created.id,
        &UpdateUser {
            email: None,
            first_name: Some("Fatma".to_string()),
            last_name: None,
        },
    )
    .await
    .unwrap()
    .expect("update should find the row");

    assert_eq!(updated.first_name, "Fatma");
    assert_eq!(updated.email, "ayse@example.com");
    assert_eq!(updated.last_name, "Yılmaz");
}
