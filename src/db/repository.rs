//! Catalog Repository
//!
//! Read-side interface over products, variants and EMI plans.
//!
//! The store handle is passed explicitly (`Arc<dyn CatalogStore>` in
//! [`crate::AppState`]) so the pricing service and routes run unchanged on
//! top of PostgreSQL ([`super::Database`]) or the in-memory catalog
//! ([`super::InMemoryCatalog`]).
//!
//! # Interview Q&A
//!
//! Q: 왜 trait로 추상화했는가?
//! A: 스토어를 주입받기 위함
//!    - 전역 커넥션 대신 `AppState`로 명시적으로 전달
//!    - 테스트에서는 `InMemoryCatalog`로 교체
//!    - 라우트/서비스 코드는 그대로
//!
//! Q: NotFound는 어디서 만들어지는가?
//! A: 스토어 경계에서만 생성, 서비스는 그대로 전달
//!    - HTTP 상태 코드 변환은 `error.rs` 한 곳에서만
//!
//! # Ordering Contract
//!
//! Every implementation returns:
//! - products by `id` ascending
//! - variants by `price` ascending, ties by `id`
//! - plans by `tenure_months`, then `interest_rate`, ties by `id`

use std::fmt;

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use super::models::{EmiPlan, Product, ProductSummary, Variant};

/// Catalog entity kinds, used to name what was not found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Product,
    Variant,
    EmiPlan,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Product => "Product",
            Entity::Variant => "Variant",
            Entity::EmiPlan => "EMI plan",
        };
        f.write_str(name)
    }
}

/// Catalog store failures
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Slug or id does not resolve to a row
    #[error("{0} not found")]
    NotFound(Entity),

    /// Data source unreachable or the query failed
    #[error("Catalog store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        CatalogError::StoreUnavailable(err.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog store interface
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// One summary row per product, with price bounds across its variants
    async fn list_products(&self) -> CatalogResult<Vec<ProductSummary>>;

    /// Exact, case-sensitive slug lookup
    async fn get_product_by_slug(&self, slug: &str) -> CatalogResult<Product>;

    /// All variants of a product, cheapest first
    async fn list_variants_for_product(&self, product_id: i32) -> CatalogResult<Vec<Variant>>;

    /// All plans, shortest and cheapest first
    async fn list_emi_plans(&self) -> CatalogResult<Vec<EmiPlan>>;

    /// Selling price of one variant
    async fn get_variant_price(&self, variant_id: i32) -> CatalogResult<Decimal>;

    async fn get_variant(&self, variant_id: i32) -> CatalogResult<Variant>;

    async fn get_emi_plan(&self, plan_id: i32) -> CatalogResult<EmiPlan>;

    /// Cheap round-trip to the backing store
    async fn health_check(&self) -> CatalogResult<()>;
}
