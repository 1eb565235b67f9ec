//! PostgreSQL 仓储集成测试
//!
//! 需要 `DATABASE_URL` 指向可用的 PostgreSQL 实例，未设置时跳过。
//! 迁移在建池后自动应用。

use sqlx::PgPool;
use vend_adapter_postgres::{PostgresConfig, create_pool, run_migrations};
use vend_catalog::MIGRATOR;
use vend_catalog::domain::{NewProduct, ProductId, ProductPatch};
use vend_catalog::infrastructure::persistence::PostgresProductRepository;
use vend_ports::CrudRepository;

async fn test_pool() -> Option<PgPool> {
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set, skipping postgres tests");
            return None;
        }
    };

    let pool = create_pool(&PostgresConfig::new(url).with_max_connections(2))
        .await
        .unwrap();
    run_migrations(&pool, &MIGRATOR).await.unwrap();
    Some(pool)
}

#[tokio::test]
async fn test_postgres_crud_roundtrip() {
    let Some(pool) = test_pool().await else { return };
    let repo = PostgresProductRepository::new(pool);

    let created = repo
        .insert(NewProduct {
            title: "roundtrip".to_string(),
            description: "test description".to_string(),
            price: 2.0,
        })
        .await
        .unwrap();
    assert!(created.id.0 >= 1);

    let found = repo.find_by_id(&created.id).await.unwrap();
    assert_eq!(found.as_ref(), Some(&created));

    let updated = repo
        .update(
            &created.id,
            ProductPatch {
                title: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.price, created.price);

    let deleted = repo.delete(&created.id).await.unwrap();
    assert_eq!(deleted, Some(updated));
    assert!(repo.find_by_id(&created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_postgres_missing_row_is_none() {
    let Some(pool) = test_pool().await else { return };
    let repo = PostgresProductRepository::new(pool);
    let id = ProductId(-1);

    assert!(repo.find_by_id(&id).await.unwrap().is_none());
    assert!(
        repo.update(&id, ProductPatch::default())
            .await
            .unwrap()
            .is_none()
    );
    assert!(repo.delete(&id).await.unwrap().is_none());
}
