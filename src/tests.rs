//! Router Integration Tests
//!
//! Full HTTP round-trips through `create_router` over the seeded
//! in-memory catalog.

#[cfg(test)]
mod integration_tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::{CatalogBackend, Config, Environment};
    use crate::db::{InMemoryCatalog, Product};
    use crate::routes::create_router;
    use crate::services::emi_calculator::calculate_emi;
    use crate::types::format_amount;
    use crate::AppState;

    fn test_config() -> Config {
        Config {
            port: 0,
            database_url: String::new(),
            backend: CatalogBackend::Memory,
            run_migrations: false,
            allowed_origins: vec![],
            environment: Environment::Development,
        }
    }

    fn app_with(catalog: Arc<InMemoryCatalog>) -> Router {
        create_router(AppState::new(catalog, test_config()))
    }

    fn app() -> Router {
        app_with(Arc::new(InMemoryCatalog::seeded()))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    // =============================================================
    // Product Listing
    // =============================================================

    mod product_listing {
        use super::*;

        #[tokio::test]
        async fn test_list_products() {
            let (status, body) = get(app(), "/api/products").await;
            assert_eq!(status, StatusCode::OK);

            let products = body.as_array().unwrap();
            assert_eq!(products.len(), 3);
            assert_eq!(products[0]["slug"], "apple-iphone-17-pro");
            assert_eq!(products[0]["min_price"], "124900");
            assert_eq!(products[0]["max_mrp"], "154900");
            assert_eq!(products[2]["slug"], "oneplus-12");
        }

        #[tokio::test]
        async fn test_product_without_variants_lists_nulls() {
            let catalog = Arc::new(InMemoryCatalog::seeded());
            catalog
                .add_product(Product {
                    id: 4,
                    name: "Pixel 10".to_string(),
                    slug: "google-pixel-10".to_string(),
                    description: None,
                    category: Some("Smartphones".to_string()),
                    brand: Some("Google".to_string()),
                    created_at: None,
                })
                .unwrap();

            let (status, body) = get(app_with(catalog), "/api/products").await;
            assert_eq!(status, StatusCode::OK);

            let pixel = &body.as_array().unwrap()[3];
            assert_eq!(pixel["slug"], "google-pixel-10");
            assert!(pixel["min_price"].is_null());
            assert!(pixel["max_price"].is_null());
            assert!(pixel["image_url"].is_null());
        }

        #[tokio::test]
        async fn test_store_failure_is_500() {
            let catalog = Arc::new(InMemoryCatalog::seeded());
            catalog.set_unavailable(true);

            let (status, body) = get(app_with(catalog), "/api/products").await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body["error"], "Internal server error");
        }
    }

    // =============================================================
    // Product Detail
    // =============================================================

    mod product_detail {
        use super::*;

        #[tokio::test]
        async fn test_product_detail() {
            let (status, body) = get(app(), "/api/products/apple-iphone-17-pro").await;
            assert_eq!(status, StatusCode::OK);

            assert_eq!(body["name"], "Apple iPhone 17 Pro");
            assert_eq!(body["brand"], "Apple");

            let prices: Vec<f64> = body["variants"]
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v["price"].as_str().unwrap().parse().unwrap())
                .collect();
            assert_eq!(prices.len(), 4);
            assert!(prices.windows(2).all(|w| w[0] <= w[1]));

            let plans: Vec<(i64, f64)> = body["emiPlans"]
                .as_array()
                .unwrap()
                .iter()
                .map(|p| {
                    (
                        p["tenure_months"].as_i64().unwrap(),
                        p["interest_rate"].as_str().unwrap().parse().unwrap(),
                    )
                })
                .collect();
            assert_eq!(plans.len(), 6);
            assert!(plans.windows(2).all(|w| w[0] <= w[1]));
        }

        #[tokio::test]
        async fn test_detail_does_not_price_plans() {
            let (_, body) = get(app(), "/api/products/oneplus-12").await;
            assert!(body["emiPlans"][0].get("monthlyPayment").is_none());
        }

        #[tokio::test]
        async fn test_unknown_slug_is_404() {
            let (status, body) = get(app(), "/api/products/does-not-exist").await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["error"], "Product not found");
        }
    }

    // =============================================================
    // EMI Plans
    // =============================================================

    mod emi_plans {
        use super::*;

        #[tokio::test]
        async fn test_plans_for_variant() {
            // variant 8 is priced at 59999
            let (status, body) = get(app(), "/api/variants/8/emi-plans").await;
            assert_eq!(status, StatusCode::OK);

            let plans = body.as_array().unwrap();
            assert_eq!(plans.len(), 6);

            for plan in plans {
                assert_eq!(plan["principal"], "59999");

                let tenure = plan["tenure_months"].as_i64().unwrap() as i32;
                let rate: f64 = plan["interest_rate"].as_str().unwrap().parse().unwrap();
                let expected = format_amount(calculate_emi(59999.0, tenure, rate));
                assert_eq!(plan["monthlyPayment"], expected.as_str());
            }
        }

        #[tokio::test]
        async fn test_plans_keep_cashback_fields() {
            let (_, body) = get(app(), "/api/variants/1/emi-plans").await;
            let twelve = body
                .as_array()
                .unwrap()
                .iter()
                .find(|p| p["tenure_months"] == 12)
                .unwrap();

            assert_eq!(twelve["monthlyPayment"], "11009.76");
            assert_eq!(twelve["cashback"], "500");
            assert_eq!(twelve["cashback_description"], "Get ₹500 cashback");
        }

        #[tokio::test]
        async fn test_unknown_variant_is_404() {
            let (status, body) = get(app(), "/api/variants/999/emi-plans").await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["error"], "Variant not found");
        }

        #[tokio::test]
        async fn test_non_numeric_variant_is_404() {
            let (status, body) = get(app(), "/api/variants/abc/emi-plans").await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["error"], "Variant not found");
        }
    }

    // =============================================================
    // Quotes
    // =============================================================

    mod quotes {
        use super::*;

        #[tokio::test]
        async fn test_quote() {
            let (status, body) = get(app(), "/api/variants/1/emi-plans/4").await;
            assert_eq!(status, StatusCode::OK);

            assert_eq!(body["variantId"], 1);
            assert_eq!(body["planId"], 4);
            assert_eq!(body["monthlyPayment"], "11009.76");
            assert_eq!(body["savings"]["amount"], "10000.00");
        }

        #[tokio::test]
        async fn test_quote_unknown_plan_is_404() {
            let (status, body) = get(app(), "/api/variants/1/emi-plans/42").await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["error"], "EMI plan not found");
        }
    }

    // =============================================================
    // Health
    // =============================================================

    mod health {
        use super::*;

        #[tokio::test]
        async fn test_health_reports_store_state() {
            let catalog = Arc::new(InMemoryCatalog::seeded());

            let (status, body) = get(app_with(catalog.clone()), "/health").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["status"], "healthy");
            assert_eq!(body["catalog"]["backend"], "memory");
            assert_eq!(body["catalog"]["reachable"], true);
            assert!(body["catalog"]["latency_ms"].is_u64());
        }

        #[tokio::test]
        async fn test_unreachable_store_is_503() {
            let catalog = Arc::new(InMemoryCatalog::seeded());
            catalog.set_unavailable(true);

            let (status, body) = get(app_with(catalog), "/health").await;
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(body["status"], "degraded");
            assert_eq!(body["catalog"]["reachable"], false);
            assert!(body["catalog"].get("latency_ms").is_none());
        }
    }
}
