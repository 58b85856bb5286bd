//! Database Module
//!
//! Catalog storage: the [`CatalogStore`] interface, its PostgreSQL
//! implementation ([`Database`]) and an in-memory one ([`InMemoryCatalog`]).
//!
//! # Interview Q&A
//!
//! Q: 금액 컬럼은 왜 NUMERIC + `Decimal`인가?
//! A: 가격은 정확해야 함
//!    - DB에는 DECIMAL(10, 2)로 저장 (부동소수점 오차 없음)
//!    - Rust에서는 `rust_decimal::Decimal`로 그대로 디코딩
//!    - f64 변환은 EMI 공식 직전에 한 번만
//!
//! Q: 대표 이미지는 어떤 variant에서 가져오는가?
//! A: 가장 작은 variant id
//!    - `LIMIT 1`만 쓰면 저장 순서에 따라 결과가 달라짐
//!    - `ORDER BY id`로 결정적으로 고정
//!
//! # Connection Pool
//!
//! SQLx `PgPool`:
//! - max_connections: 10
//! - min_connections: 1
//! - acquire_timeout: 3 seconds
//!
//! # Schema
//!
//! ```text
//! products ──< variants      (variants.product_id, ON DELETE CASCADE)
//! emi_plans                  (standalone, offered against every variant)
//! ```
//!
//! Schema and sample data live in `migrations/`, applied only when
//! `RUN_MIGRATIONS=true`.

mod memory;
mod models;
mod repository;
pub mod seed;

pub use memory::InMemoryCatalog;
pub use models::*;
pub use repository::{CatalogError, CatalogResult, CatalogStore, Entity};

use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{postgres::PgPoolOptions, PgPool};

const VARIANT_COLUMNS: &str =
    "id, product_id, name, color, storage, mrp, price, image_url, stock, created_at";

const EMI_PLAN_COLUMNS: &str = "id, name, tenure_months, interest_rate, cashback, \
     cashback_description, min_amount, max_amount, created_at";

/// PostgreSQL-backed catalog
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// 커넥션 풀 생성
    ///
    /// - max_connections: 10 (트래픽에 따라 조정)
    /// - acquire_timeout: 3초 (커넥션 획득 대기)
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .min_connections(1)
            .acquire_timeout(std::time::Duration::from_secs(3))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Applies schema and sample-data migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for Database {
    async fn list_products(&self) -> CatalogResult<Vec<ProductSummary>> {
        // LEFT JOIN: variant 없는 상품도 포함 (집계값은 NULL)
        let products = sqlx::query_as::<_, ProductSummary>(
            r#"
            SELECT
                p.id,
                p.name,
                p.slug,
                p.description,
                p.category,
                p.brand,
                MIN(v.mrp) AS min_mrp,
                MIN(v.price) AS min_price,
                MAX(v.mrp) AS max_mrp,
                MAX(v.price) AS max_price,
                (
                    SELECT image_url
                    FROM variants
                    WHERE product_id = p.id
                    ORDER BY id
                    LIMIT 1
                ) AS image_url
            FROM products p
            LEFT JOIN variants v ON p.id = v.product_id
            GROUP BY p.id, p.name, p.slug, p.description, p.category, p.brand
            ORDER BY p.id
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get_product_by_slug(&self, slug: &str) -> CatalogResult<Product> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, slug, description, category, brand, created_at
            FROM products
            WHERE slug = $1
            "#
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(CatalogError::NotFound(Entity::Product))
    }

    async fn list_variants_for_product(&self, product_id: i32) -> CatalogResult<Vec<Variant>> {
        let query = format!(
            "SELECT {VARIANT_COLUMNS} FROM variants WHERE product_id = $1 ORDER BY price, id"
        );

        let variants = sqlx::query_as::<_, Variant>(&query)
            .bind(product_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(variants)
    }

    async fn list_emi_plans(&self) -> CatalogResult<Vec<EmiPlan>> {
        let query = format!(
            "SELECT {EMI_PLAN_COLUMNS} FROM emi_plans ORDER BY tenure_months, interest_rate, id"
        );

        let plans = sqlx::query_as::<_, EmiPlan>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(plans)
    }

    async fn get_variant_price(&self, variant_id: i32) -> CatalogResult<Decimal> {
        sqlx::query_scalar::<_, Decimal>("SELECT price FROM variants WHERE id = $1")
            .bind(variant_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(CatalogError::NotFound(Entity::Variant))
    }

    async fn get_variant(&self, variant_id: i32) -> CatalogResult<Variant> {
        let query = format!("SELECT {VARIANT_COLUMNS} FROM variants WHERE id = $1");

        sqlx::query_as::<_, Variant>(&query)
            .bind(variant_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(CatalogError::NotFound(Entity::Variant))
    }

    async fn get_emi_plan(&self, plan_id: i32) -> CatalogResult<EmiPlan> {
        let query = format!("SELECT {EMI_PLAN_COLUMNS} FROM emi_plans WHERE id = $1");

        sqlx::query_as::<_, EmiPlan>(&query)
            .bind(plan_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(CatalogError::NotFound(Entity::EmiPlan))
    }

    async fn health_check(&self) -> CatalogResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
