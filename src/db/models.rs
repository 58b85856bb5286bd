//! Database Models
//!
//! Rows of the three catalog relations plus the aggregated product summary.
//! NUMERIC columns are carried as `Decimal` and serialize as strings.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,

    /// Unique, URL-safe, never changes once assigned
    pub slug: String,

    pub description: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

/// Purchasable variant of a product (color / storage / price)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Variant {
    pub id: i32,

    /// Parent product (cascade delete)
    pub product_id: i32,

    /// e.g. "256GB - Silver"
    pub name: String,
    pub color: Option<String>,
    pub storage: Option<String>,

    /// List price
    pub mrp: Decimal,

    /// Selling price, expected `<= mrp` but not enforced
    pub price: Decimal,

    pub image_url: Option<String>,

    /// Informational only
    pub stock: Option<i32>,

    pub created_at: Option<NaiveDateTime>,
}

/// Installment plan, offered against every variant
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct EmiPlan {
    pub id: i32,
    pub name: String,

    /// Number of installments, must be > 0 for a usable plan
    pub tenure_months: i32,

    /// Annual percentage
    pub interest_rate: Decimal,

    /// Flat rebate, shown but never deducted from the installment
    pub cashback: Option<Decimal>,

    /// Shown only when cashback > 0
    pub cashback_description: Option<String>,

    /// Reserved: stored but not consulted when offering plans
    pub min_amount: Option<Decimal>,

    /// Reserved: stored but not consulted when offering plans
    pub max_amount: Option<Decimal>,

    pub created_at: Option<NaiveDateTime>,
}

/// One row of the product listing
///
/// Price bounds are aggregated over the product's variants and are `None`
/// for a product without variants. `image_url` comes from the lowest-id variant.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub min_mrp: Option<Decimal>,
    pub min_price: Option<Decimal>,
    pub max_mrp: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub image_url: Option<String>,
}
