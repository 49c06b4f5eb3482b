//! # Routes
//!
//! Axum router configuration for the payment API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the main application router
///
/// Routes:
/// - API:
///   - POST /api/v1/payments - Create a payment session
///
/// - Webhooks:
///   - POST /webhook/midtrans - Midtrans status notification
///
/// - Health:
///   - GET /health - Health check
///
/// Both payment routes answer OPTIONS preflights themselves so a preflight
/// never reaches the gateway or the store; the cross-origin headers on the
/// POST responses are set by the handlers.
pub fn create_router(state: AppState) -> Router {
    // API routes (browser/mobile callers)
    let api_routes = Router::new().route(
        "/payments",
        post(handlers::create_payment).options(handlers::preflight),
    );

    // Webhook routes (gateway-initiated, raw body)
    let webhook_routes = Router::new().route(
        "/midtrans",
        post(handlers::payment_notification).options(handlers::preflight),
    );

    // Combine all routes
    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // API v1
        .nest("/api/v1", api_routes)
        // Webhooks
        .nest("/webhook", webhook_routes)
        // Middleware
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
