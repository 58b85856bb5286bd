//! Variant Endpoints
//!
//! EMI plans priced against a variant's selling price.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    db::Entity,
    error::ApiError,
    services::{EmiQuote, PlanWithPayment},
    AppState,
};

/// GET /api/variants/:variant_id/emi-plans
///
/// # Response
///
/// ```json
/// [{
///   "id": 4,
///   "name": "12 Months - 10.5% Interest",
///   "tenure_months": 12,
///   "interest_rate": "10.50",
///   "cashback": "500.00",
///   "monthlyPayment": "11009.76",
///   "principal": "124900.00"
/// }]
/// ```
pub async fn get_emi_plans(
    State(state): State<AppState>,
    Path(variant_id): Path<String>,
) -> Result<Json<Vec<PlanWithPayment>>, ApiError> {
    let variant_id = parse_id(&variant_id, Entity::Variant)?;
    let plans = state.pricing.get_plans_for_variant(variant_id).await?;
    Ok(Json(plans))
}

/// GET /api/variants/:variant_id/emi-plans/:plan_id
///
/// Monthly payment, total payable, total interest and MRP savings for one
/// (variant, plan) pair.
pub async fn get_emi_quote(
    State(state): State<AppState>,
    Path((variant_id, plan_id)): Path<(String, String)>,
) -> Result<Json<EmiQuote>, ApiError> {
    let variant_id = parse_id(&variant_id, Entity::Variant)?;
    let plan_id = parse_id(&plan_id, Entity::EmiPlan)?;
    let quote = state.pricing.get_plan_quote(variant_id, plan_id).await?;
    Ok(Json(quote))
}

// ============ Helpers ============

/// A non-numeric id can never match a row
fn parse_id(raw: &str, entity: Entity) -> Result<i32, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(entity.to_string()))
}
