//! Repository tests against a live PostgreSQL.
//!
//! Run with `cargo test -- --ignored` and `DATABASE_URL` pointing at a server
//! that allows creating databases.

mod common;

use common::TestDb;
use product_service::domain::product::errors::ProductError;
use product_service::domain::product::models::Product;
use product_service::domain::product::models::ProductPage;
use product_service::domain::product::models::SortOrder;
use product_service::domain::product::ports::ProductRepository;
use product_service::domain::user::errors::UserError;
use product_service::domain::user::models::EmailAddress;
use product_service::domain::user::models::User;
use product_service::domain::user::ports::UserRepository;
use product_service::outbound::repositories::PostgresProductRepository;
use product_service::outbound::repositories::PostgresUserRepository;

fn user(email: &str) -> User {
    User::new(
        "Ann".to_string(),
        email.to_string(),
        "secret",
        &auth::PasswordHasher::new(),
    )
    .expect("Failed to build user")
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_user_email_unique_constraint() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let created = repository.create(user("ann@example.com")).await.unwrap();
    let duplicate = repository.create(user("ann@example.com")).await;
    assert!(matches!(duplicate, Err(UserError::EmailAlreadyExists(_))));

    let email = EmailAddress::new("ann@example.com".to_string()).unwrap();
    let found = repository.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, created.password_hash);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_product_round_trip() {
    let db = TestDb::new().await;
    let repository = PostgresProductRepository::new(db.pool.clone());

    let product = Product::new("Widget".to_string(), 10.0).unwrap();
    let id = product.id;
    repository.create(product).await.unwrap();

    let mut stored = repository.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Widget");

    stored.price = 12.5;
    repository.update(stored).await.unwrap();
    assert_eq!(repository.find_by_id(&id).await.unwrap().unwrap().price, 12.5);

    repository.delete(&id).await.unwrap();
    assert!(repository.find_by_id(&id).await.unwrap().is_none());
    assert!(matches!(
        repository.delete(&id).await,
        Err(ProductError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_product_paging() {
    let db = TestDb::new().await;
    let repository = PostgresProductRepository::new(db.pool.clone());

    for (i, name) in ["a", "b", "c"].iter().enumerate() {
        let mut product = Product::new(name.to_string(), 1.0).unwrap();
        product.created_at = product.created_at + chrono::Duration::seconds(i as i64);
        repository.create(product).await.unwrap();
    }

    let names = |products: Vec<Product>| -> Vec<String> {
        products.into_iter().map(|p| p.name).collect()
    };

    let all = repository.find_all(ProductPage::default()).await.unwrap();
    assert_eq!(names(all), vec!["a", "b", "c"]);

    let newest = repository
        .find_all(ProductPage::new(1, 2, SortOrder::Desc))
        .await
        .unwrap();
    assert_eq!(names(newest), vec!["c", "b"]);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_product_paging_with_equal_timestamps() {
    let db = TestDb::new().await;
    let repository = PostgresProductRepository::new(db.pool.clone());

    let created_at = chrono::Utc::now();
    for name in ["a", "b", "c", "d"] {
        let mut product = Product::new(name.to_string(), 1.0).unwrap();
        product.created_at = created_at;
        repository.create(product).await.unwrap();
    }

    let mut seen = Vec::new();
    for page in 1..=4 {
        let products = repository
            .find_all(ProductPage::new(page, 1, SortOrder::Asc))
            .await
            .unwrap();
        assert_eq!(products.len(), 1);
        seen.push(products[0].id);
    }

    seen.sort_by_key(|id| id.0);
    seen.dedup();
    assert_eq!(seen.len(), 4);
}
