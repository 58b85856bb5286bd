//! Services Module
//!
//! Business logic layer
//!
//! # Services
//! - `emi_calculator`: monthly installment math and input coercion
//! - `PricingService`: catalog reads combined with EMI pricing

pub mod emi_calculator;
mod pricing;

pub use pricing::{EmiQuote, PlanWithPayment, PricingService, ProductDetail};
