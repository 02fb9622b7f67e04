//! Service-level tests: validation gating, error kinds, and the
//! two-table read/write contract, against a real database.

mod common;

use assert_matches::assert_matches;
use sqlx::PgPool;

use bazar_api::services::ProductService;
use bazar_core::error::CoreError;
use bazar_db::models::product::CreateProduct;
use bazar_db::repositories::{ProductRepo, UserRepo};

async fn seed_user(pool: &PgPool) -> i64 {
    UserRepo::create(pool, "seller", "seller@example.com", "$argon2id$fake", "", "")
        .await
        .unwrap()
        .id
}

fn candidate(name: &str, price: f64, store: &str, discount: f64) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        price,
        description: format!("{name} açıklaması"),
        discount,
        store: store.to_string(),
        category_id: None,
        image_urls: Vec::new(),
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_non_positive_price_is_rejected_without_persisting(pool: PgPool) {
    let user_id = seed_user(&pool).await;

    for price in [0.0, -1.0, -3000.0] {
        let result =
            ProductService::add(&pool, user_id, &candidate("AirFryer", price, "ABC TECH", 0.0))
                .await;
        let err = result.expect_err("non-positive price must fail");
        assert_eq!(err.to_string(), "product price must be greater than zero");
        assert_matches!(err, CoreError::Validation(_));
    }

    assert_eq!(ProductRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_out_of_range_discount_leaves_count_unchanged(pool: PgPool) {
    let user_id = seed_user(&pool).await;

    for discount in [-1.0, 70.5, 100.0] {
        let result = ProductService::add(
            &pool,
            user_id,
            &candidate("AirFryer", 3000.0, "ABC TECH", discount),
        )
        .await;
        let err = result.expect_err("out-of-range discount must fail");
        assert_eq!(err.to_string(), "discount must be between 0 and 70 percent");
    }

    assert_eq!(ProductRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_add_then_get_by_id_yields_equal_product(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let mut input = candidate("AirFryer", 3000.0, "ABC TECH", 22.0);
    input.image_urls = vec![
        "https://img.example.com/front.jpg".to_string(),
        "https://img.example.com/side.jpg".to_string(),
        "https://img.example.com/back.jpg".to_string(),
    ];

    let added = ProductService::add(&pool, user_id, &input).await.unwrap();
    let fetched = ProductService::get_by_id(&pool, added.id).await.unwrap();

    assert_eq!(fetched.name, input.name);
    assert_eq!(fetched.price, input.price);
    assert_eq!(fetched.description, input.description);
    assert_eq!(fetched.discount, input.discount);
    assert_eq!(fetched.store, input.store);
    assert_eq!(fetched.user_id, user_id);
    assert_eq!(
        fetched.image_urls(),
        input.image_urls.iter().map(String::as_str).collect::<Vec<_>>()
    );
    assert_eq!(
        fetched.images.iter().map(|i| i.display_order).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    assert!(fetched.images[0].is_main_image);
    assert!(fetched.images[1..].iter().all(|i| !i.is_main_image));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_by_id_on_unused_id_mentions_the_id(pool: PgPool) {
    let err = ProductService::get_by_id(&pool, 424_242).await.unwrap_err();
    assert_matches!(
        err,
        CoreError::NotFound {
            entity: "Product",
            id: 424_242
        }
    );
    assert!(err.to_string().contains("424242"), "message: {err}");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_missing_category_reference_is_a_validation_error(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let mut input = candidate("AirFryer", 3000.0, "ABC TECH", 0.0);
    input.category_id = Some(42);

    let err = ProductService::add(&pool, user_id, &input).await.unwrap_err();
    assert_eq!(err.to_string(), "category with id 42 does not exist");
    assert_matches!(err, CoreError::Validation(_));
    assert_eq!(ProductRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_price_then_get_reflects_only_new_price(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let added = ProductService::add(&pool, user_id, &candidate("Ütü", 1500.0, "ABC TECH", 10.0))
        .await
        .unwrap();

    ProductService::update_price(&pool, added.id, 1250.0)
        .await
        .unwrap();

    let fetched = ProductService::get_by_id(&pool, added.id).await.unwrap();
    assert_eq!(fetched.price, 1250.0);
    assert_eq!(fetched.name, added.name);
    assert_eq!(fetched.discount, added.discount);
    assert_eq!(fetched.store, added.store);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_price_on_missing_id_is_not_found(pool: PgPool) {
    let err = ProductService::update_price(&pool, 999_999, 10.0)
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "Product", .. });
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_by_id_cascades_and_subsequent_get_fails(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let mut input = candidate("AirFryer", 3000.0, "ABC TECH", 0.0);
    input.image_urls = vec!["https://img.example.com/a.jpg".to_string()];
    let added = ProductService::add(&pool, user_id, &input).await.unwrap();

    ProductService::delete_by_id(&pool, added.id).await.unwrap();

    let err = ProductService::get_by_id(&pool, added.id).await.unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "Product", .. });

    let orphans: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM product_images WHERE product_id = $1")
            .bind(added.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(orphans.0, 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_store_filter_scenario(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    for name in ["AirFryer", "Ütü", "Çamaşır Makinesi", "Mikrodalga"] {
        ProductService::add(&pool, user_id, &candidate(name, 1000.0, "ABC TECH", 0.0))
            .await
            .unwrap();
    }
    ProductService::add(
        &pool,
        user_id,
        &candidate("Lambader", 2000.0, "Dekorasyon Sarayı", 0.0),
    )
    .await
    .unwrap();

    let abc = ProductService::get_all_by_store(&pool, "ABC TECH")
        .await
        .unwrap();
    assert_eq!(abc.len(), 4);
    assert!(abc.windows(2).all(|w| w[0].id < w[1].id));
    assert!(abc.iter().all(|p| p.store == "ABC TECH"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_all_twice_reports_empty_second_time(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    for name in ["AirFryer", "Ütü"] {
        ProductService::add(&pool, user_id, &candidate(name, 1000.0, "ABC TECH", 0.0))
            .await
            .unwrap();
    }

    let removed = ProductService::delete_all(&pool).await.unwrap();
    assert_eq!(removed, 2);

    // Expected behaviour, not a bug: an already-empty table is an explicit
    // empty result.
    let err = ProductService::delete_all(&pool).await.unwrap_err();
    assert_matches!(err, CoreError::Empty(_));
    assert_eq!(err.to_string(), "no products to delete");
}
