//! # Request Handlers
//!
//! Axum request handlers for the payment-session and webhook endpoints.
//! Both are called from browser/mobile contexts, so every response carries a
//! permissive cross-origin header and preflights short-circuit before any
//! capability is touched.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use kas_core::{PaymentError, PaymentGateway, PaymentRequest, TransactionStore};
use kas_midtrans::PaymentNotification;
use serde::Serialize;
use tracing::{error, info, instrument};

/// Headers browsers are allowed to send on cross-origin calls
const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

// =============================================================================
// Response Types
// =============================================================================

/// Error response
///
/// Every failure collapses into this single shape; callers cannot tell a
/// malformed body from a gateway or store rejection.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Acknowledgement body for the webhook
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(body),
    )
        .into_response()
}

fn json_error(err: PaymentError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "kas-pay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// CORS preflight for the payment and webhook endpoints.
///
/// Returns a bare success without touching the gateway or the store.
pub async fn preflight() -> Response {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
        ],
    )
        .into_response()
}

/// Create a payment session for an order.
///
/// Relays the gateway's session body to the caller unchanged. The body is
/// parsed by hand so that malformed JSON yields the same `{error}` shape as
/// every other failure, with no outbound call made.
#[instrument(skip(state, body))]
pub async fn create_payment(State(state): State<AppState>, body: Bytes) -> Response {
    let request: PaymentRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            return json_error(PaymentError::InvalidRequest(format!(
                "Malformed payment request: {}",
                e
            )))
        }
    };

    info!(
        "Creating payment session: order_id={}, gross_amount={}",
        request.order_id, request.gross_amount
    );

    match state.gateway.create_session(&request).await {
        Ok(session) => json_ok(session),
        Err(e) => {
            error!("Failed to create payment session: {}", e);
            json_error(e)
        }
    }
}

/// Handle a Midtrans status notification.
///
/// Maps the gateway's status vocabulary onto the ledger status and persists
/// it for the matching order. The gateway only needs an acknowledgement, so
/// success is a bare `{"message": "OK"}`.
#[instrument(skip(state, body))]
pub async fn payment_notification(State(state): State<AppState>, body: Bytes) -> Response {
    let notification: PaymentNotification = match serde_json::from_slice(&body) {
        Ok(notification) => notification,
        Err(e) => {
            return json_error(PaymentError::InvalidRequest(format!(
                "Malformed notification: {}",
                e
            )))
        }
    };

    info!(
        "Received notification: order_id={}, transaction_status={}, fraud_status={:?}",
        notification.order_id, notification.transaction_status, notification.fraud_status
    );

    let final_status = notification.final_status();

    if let Err(e) = state
        .store
        .update_status(&notification.order_id, final_status)
        .await
    {
        error!("Failed to update transaction status: {}", e);
        return json_error(e);
    }

    info!("Updated order {} to {}", notification.order_id, final_status);

    json_ok(MessageResponse {
        message: "OK".to_string(),
    })
}
