//! EMI Catalog API Library
//!
//! # Overview
//!
//! Product catalog with installment (EMI) pricing: products, their purchase
//! variants, global EMI plans, and the monthly payment for any
//! (variant, plan) pair.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                          API                              │
//! │                                                           │
//! │  ┌─────────┐   ┌──────────────────┐   ┌───────────────┐  │
//! │  │ Routes  │──▶│ PricingService   │──▶│ CatalogStore  │  │
//! │  └─────────┘   │  + EMI calculator│   └───────┬───────┘  │
//! │                └──────────────────┘           │          │
//! └───────────────────────────────────────────────┼──────────┘
//!                                                 │
//!                                 ┌───────────────┴───────────┐
//!                                 ▼                           ▼
//!                          ┌────────────┐            ┌──────────────┐
//!                          │ PostgreSQL │            │  In-memory   │
//!                          └────────────┘            └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: environment configuration
//! - `error`: API error type and HTTP mapping
//! - `routes`: HTTP handlers and router
//! - `services`: EMI calculator and pricing service
//! - `db`: catalog store interface and implementations
//! - `types`: money formatting and savings
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use emi_catalog::{routes, AppState, Config, InMemoryCatalog};
//!
//! let state = AppState::new(Arc::new(InMemoryCatalog::seeded()), Config::from_env()?);
//! let app = routes::create_router(state);
//! ```

use std::sync::Arc;

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod services;
pub mod types;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use config::Config;
pub use db::{CatalogStore, Database, InMemoryCatalog};
pub use error::ApiError;
pub use services::PricingService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogStore>,
    pub pricing: PricingService,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the pricing service to the given store
    pub fn new(catalog: Arc<dyn CatalogStore>, config: Config) -> Self {
        Self {
            pricing: PricingService::new(catalog.clone()),
            catalog,
            config: Arc::new(config),
        }
    }
}
