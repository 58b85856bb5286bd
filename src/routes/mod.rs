//! API Routes Module
//!
//! All HTTP endpoints and the router that wires them.
//!
//! # Routes
//! - `/health` - health check
//! - `/api/products` - product listing and detail
//! - `/api/variants/*` - EMI plans priced for a variant

pub mod health;
pub mod products;
pub mod variants;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Builds the application router
///
/// # Route Structure
///
/// ```text
/// GET /health                                       - service status
///
/// GET /api/products                                 - product summaries
/// GET /api/products/:slug                           - product + variants + plans
///
/// GET /api/variants/:variant_id/emi-plans           - plans with monthly payment
/// GET /api/variants/:variant_id/emi-plans/:plan_id  - checkout quote
/// ```
pub fn create_router(state: AppState) -> Router {
    let cors = if state.config.is_production() {
        // 프로덕션: ALLOWED_ORIGINS에 지정된 도메인만 허용
        let origins: Vec<HeaderValue> = state
            .config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        // 개발: localhost 허용
        CorsLayer::new()
            .allow_origin([
                HeaderValue::from_static("http://localhost:3000"), // CRA dev server
                HeaderValue::from_static("http://localhost:5173"), // Vite dev server
                HeaderValue::from_static("http://127.0.0.1:3000"),
            ])
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let api = Router::new()
        .route("/products", get(products::list_products))
        .route("/products/:slug", get(products::get_product))
        .route("/variants/:variant_id/emi-plans", get(variants::get_emi_plans))
        .route(
            "/variants/:variant_id/emi-plans/:plan_id",
            get(variants::get_emi_quote),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
