//! # kas-api
//!
//! HTTP API layer for kas-pay.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The payment-session endpoint backing the ledger's mobile client
//! - The webhook endpoint Midtrans calls with status notifications
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/v1/payments` | Create a payment session |
//! | POST | `/webhook/midtrans` | Midtrans status notification |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
