//! Product Endpoints
//!
//! Product listing with per-product price bounds, and the product page
//! payload (product + variants + EMI plans).

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    db::ProductSummary,
    error::ApiError,
    services::ProductDetail,
    AppState,
};

/// GET /api/products
///
/// # Response
///
/// ```json
/// [{
///   "id": 1,
///   "name": "Apple iPhone 17 Pro",
///   "slug": "apple-iphone-17-pro",
///   "min_mrp": "134900.00", "min_price": "124900.00",
///   "max_mrp": "154900.00", "max_price": "144900.00",
///   "image_url": "https://..."
/// }]
/// ```
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductSummary>>, ApiError> {
    let products = state.pricing.list_products().await?;
    Ok(Json(products))
}

/// GET /api/products/:slug
///
/// Product fields with `variants` (cheapest first) and `emiPlans`
/// (by tenure, then rate). 404 when the slug is unknown.
pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductDetail>, ApiError> {
    let detail = state.pricing.get_product_detail(&slug).await?;
    Ok(Json(detail))
}
