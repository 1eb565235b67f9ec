//! Vend Catalog 服务入口

use std::sync::Arc;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::{info, warn};
use vend_adapter_postgres::{PostgresConfig, create_pool, run_migrations};
use vend_auth_core::TokenService;
use vend_bootstrap::{init_runtime, serve};
use vend_catalog::MIGRATOR;
use vend_catalog::api::{AppState, api_router, metrics_router};
use vend_catalog::application::ProductService;
use vend_catalog::domain::ProductRepository;
use vend_catalog::infrastructure::persistence::{
    InMemoryProductRepository, PostgresProductRepository,
};
use vend_config::AppConfig;
use vend_telemetry::init_metrics;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // 加载配置并初始化运行时
    let config = AppConfig::load("config")?;
    init_runtime(&config);

    let metrics_handle = init_metrics();

    // 仓储选择：配置了数据库则走 PostgreSQL，否则用内存仓储
    let (repo, pool): (Arc<dyn ProductRepository>, Option<PgPool>) = match &config.database.url {
        Some(url) => {
            let pg_config = PostgresConfig::new(url.expose_secret())
                .with_max_connections(config.database.max_connections);
            let pool = create_pool(&pg_config).await?;
            run_migrations(&pool, &MIGRATOR).await?;
            info!("connected to postgres");
            (
                Arc::new(PostgresProductRepository::new(pool.clone())),
                Some(pool),
            )
        }
        None => {
            warn!("database.url not configured, using in-memory store");
            (Arc::new(InMemoryProductRepository::new()), None)
        }
    };

    let tokens = TokenService::new(
        config.jwt.secret.expose_secret(),
        config.jwt.expires_in as i64,
        config.jwt.issuer.clone(),
        config.jwt.audience.clone(),
    );

    let state = AppState {
        products: ProductService::new(repo),
        tokens,
        pool,
    };

    let app = api_router(state).merge(metrics_router(metrics_handle));

    serve(app, &config.server.host, config.server.port).await?;

    Ok(())
}
