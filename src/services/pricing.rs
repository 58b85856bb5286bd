//! Pricing Service
//!
//! Combines catalog reads with the EMI calculator.
//!
//! # Operations
//!
//! - `get_product_detail`: product + variants + plans, no payments computed
//! - `get_plans_for_variant`: every plan with the monthly payment for one variant
//! - `get_plan_quote`: full breakdown for one (variant, plan) pair
//!
//! # Interview Q&A
//!
//! Q: 상품 상세에서 월 납입액을 미리 계산하지 않는 이유는?
//! A: variant × plan 조합이 많음
//!    - 사용자가 선택한 조합만 계산 (`/emi-plans`, quote)
//!    - 상세 응답은 원본 데이터만
//!
//! Q: cashback은 월 납입액에서 빼는가?
//! A: 아니오, 표시용 정보
//!
//! # Design Decision
//!
//! Plans are global and offered unconditionally. `min_amount` / `max_amount`
//! are passed through untouched and never filter anything.
//!
//! Independent reads (variants and plans, variant and plan) are issued
//! concurrently with `tokio::try_join!`. Store errors pass through unchanged.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::db::{CatalogResult, CatalogStore, EmiPlan, Product, ProductSummary, Variant};
use crate::services::emi_calculator::{calculate_emi, decimal_to_f64};
use crate::types::{format_amount, Savings};

/// Product page payload
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,

    /// Cheapest first
    pub variants: Vec<Variant>,

    /// By tenure, then interest rate
    #[serde(rename = "emiPlans")]
    pub emi_plans: Vec<EmiPlan>,
}

/// An EMI plan priced against one variant
#[derive(Debug, Clone, Serialize)]
pub struct PlanWithPayment {
    #[serde(flatten)]
    pub plan: EmiPlan,

    /// Two-decimal string, e.g. "11009.76"
    #[serde(rename = "monthlyPayment")]
    pub monthly_payment: String,

    /// The variant's selling price
    pub principal: Decimal,
}

/// Checkout breakdown for a chosen (variant, plan) pair
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiQuote {
    pub variant_id: i32,
    pub plan_id: i32,
    pub plan_name: String,
    pub tenure_months: i32,
    pub interest_rate: Decimal,
    pub principal: Decimal,
    pub monthly_payment: String,

    /// Monthly payment × tenure
    pub total_amount: String,

    /// Total amount − principal
    pub total_interest: String,

    /// Informational, not deducted from any figure above
    pub cashback: Option<Decimal>,
    pub cashback_description: Option<String>,

    pub savings: Savings,
}

/// Pricing service over an injected catalog store
#[derive(Clone)]
pub struct PricingService {
    catalog: Arc<dyn CatalogStore>,
}

impl PricingService {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    pub async fn list_products(&self) -> CatalogResult<Vec<ProductSummary>> {
        self.catalog.list_products().await
    }

    /// Product with its variants and all EMI plans as sibling collections
    pub async fn get_product_detail(&self, slug: &str) -> CatalogResult<ProductDetail> {
        let product = self.catalog.get_product_by_slug(slug).await?;

        // 서로 의존성 없는 조회 → 동시 실행
        let (variants, emi_plans) = tokio::try_join!(
            self.catalog.list_variants_for_product(product.id),
            self.catalog.list_emi_plans(),
        )?;

        tracing::debug!(
            slug,
            variants = variants.len(),
            plans = emi_plans.len(),
            "Product detail assembled"
        );

        Ok(ProductDetail {
            product,
            variants,
            emi_plans,
        })
    }

    /// Every plan with its monthly payment for the variant's price
    pub async fn get_plans_for_variant(&self, variant_id: i32) -> CatalogResult<Vec<PlanWithPayment>> {
        let principal = self.catalog.get_variant_price(variant_id).await?;
        let plans = self.catalog.list_emi_plans().await?;

        Ok(plans
            .into_iter()
            .map(|plan| price_plan(plan, principal))
            .collect())
    }

    /// Monthly, total and interest figures for one variant under one plan
    pub async fn get_plan_quote(&self, variant_id: i32, plan_id: i32) -> CatalogResult<EmiQuote> {
        let (variant, plan) = tokio::try_join!(
            self.catalog.get_variant(variant_id),
            self.catalog.get_emi_plan(plan_id),
        )?;

        Ok(quote(&variant, plan))
    }
}

fn monthly_payment(plan: &EmiPlan, principal: Decimal) -> f64 {
    calculate_emi(
        decimal_to_f64(principal),
        plan.tenure_months,
        decimal_to_f64(plan.interest_rate),
    )
}

fn price_plan(plan: EmiPlan, principal: Decimal) -> PlanWithPayment {
    let monthly = monthly_payment(&plan, principal);

    PlanWithPayment {
        plan,
        monthly_payment: format_amount(monthly),
        principal,
    }
}

fn quote(variant: &Variant, plan: EmiPlan) -> EmiQuote {
    let principal = variant.price;
    let monthly = monthly_payment(&plan, principal);
    // 반올림 전 값으로 총액 계산 (오차 누적 방지)
    let total = monthly * plan.tenure_months.max(0) as f64;
    let interest = total - decimal_to_f64(principal);

    EmiQuote {
        variant_id: variant.id,
        plan_id: plan.id,
        plan_name: plan.name,
        tenure_months: plan.tenure_months,
        interest_rate: plan.interest_rate,
        principal,
        monthly_payment: format_amount(monthly),
        total_amount: format_amount(total),
        total_interest: format_amount(interest),
        cashback: plan.cashback,
        cashback_description: plan.cashback_description,
        savings: Savings::from_prices(variant.mrp, variant.price),
    }
}
