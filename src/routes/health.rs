//! Health Check Endpoint
//!
//! # Interview Q&A
//!
//! Q: 프로세스만 살아 있으면 healthy 아닌가?
//! A: 카탈로그 스토어가 응답해야 실제로 가격을 보여줄 수 있음
//!    - 스토어 round-trip 성공: 200 `healthy`
//!    - 실패: 503 `degraded` → 로드밸런서가 트래픽을 빼도록
//!
//! Q: 어떤 백엔드인지 왜 노출하는가?
//! A: `memory` 백엔드로 잘못 배포된 인스턴스를 바로 구분하기 위함

use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub catalog: CatalogStatus,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct CatalogStatus {
    /// postgres | memory
    pub backend: &'static str,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// GET /health
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let started = Instant::now();
    let reachable = match state.catalog.health_check().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!("Catalog health check failed: {}", err);
            false
        }
    };

    let (code, status) = if reachable {
        (StatusCode::OK, ServiceStatus::Healthy)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, ServiceStatus::Degraded)
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        catalog: CatalogStatus {
            backend: state.config.backend.as_str(),
            reachable,
            latency_ms: reachable.then(|| started.elapsed().as_millis() as u64),
        },
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    (code, Json(body))
}
