//! EMI Catalog API Server
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Client (Storefront)                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Axum Web Server                         │
//! │  ┌─────────────────────────────────────────────────────────┐│
//! │  │                      Routes Layer                        ││
//! │  │  /health  /api/products/*  /api/variants/*              ││
//! │  └─────────────────────────────────────────────────────────┘│
//! │  ┌─────────────────────────────────────────────────────────┐│
//! │  │                    Services Layer                        ││
//! │  │  PricingService    EMI calculator                       ││
//! │  └─────────────────────────────────────────────────────────┘│
//! │  ┌─────────────────────────────────────────────────────────┐│
//! │  │                    Data Layer                            ││
//! │  │  PostgreSQL (sqlx)    In-memory sample catalog          ││
//! │  └─────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use emi_catalog::{
    config::CatalogBackend, routes, AppState, CatalogStore, Config, Database, InMemoryCatalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // 로깅 초기화
    // RUST_LOG=debug,sqlx=warn 형태로 레벨 제어 가능
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "emi_catalog=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Starting EMI Catalog API Server");

    // 설정 로드
    let config = Config::from_env()?;
    tracing::info!(backend = ?config.backend, environment = ?config.environment, "📋 Configuration loaded");

    let catalog: Arc<dyn CatalogStore> = match config.backend {
        CatalogBackend::Postgres => {
            let db = Database::connect(&config.database_url).await?;
            tracing::info!("🗄️  Database connected");

            if config.run_migrations {
                db.run_migrations().await?;
                tracing::info!("📦 Migrations completed");
            }

            Arc::new(db)
        }
        CatalogBackend::Memory => {
            tracing::info!("🧪 Serving the in-memory sample catalog");
            Arc::new(InMemoryCatalog::seeded())
        }
    };

    // 라우터 구성 + 상태 주입
    let port = config.port;
    let app = routes::create_router(AppState::new(catalog, config));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🌐 Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
