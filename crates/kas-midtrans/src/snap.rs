//! # Midtrans Snap Sessions
//!
//! Implementation of the Snap transaction API. Snap returns a session token
//! and a redirect URL that let the paying client complete the transaction on
//! Midtrans' hosted page.

use crate::config::MidtransConfig;
use async_trait::async_trait;
use kas_core::{PaymentError, PaymentGateway, PaymentRequest, PaymentResult, PaymentSession};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, info, instrument};

/// Midtrans Snap gateway
///
/// Exchanges an order id and amount for a hosted payment session.
pub struct MidtransSnapGateway {
    config: MidtransConfig,
    client: Client,
}

impl MidtransSnapGateway {
    /// Create a new Snap gateway
    pub fn new(config: MidtransConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = MidtransConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Build the Snap transaction payload for an order
    fn build_payload(request: &PaymentRequest) -> SnapTransactionPayload {
        SnapTransactionPayload {
            transaction_details: SnapTransactionDetails {
                order_id: request.order_id.clone(),
                gross_amount: request.gross_amount,
            },
            credit_card: SnapCreditCard { secure: true },
        }
    }
}

#[async_trait]
impl PaymentGateway for MidtransSnapGateway {
    #[instrument(skip(self, request), fields(order_id = %request.order_id))]
    async fn create_session(&self, request: &PaymentRequest) -> PaymentResult<PaymentSession> {
        request.validate()?;

        let payload = Self::build_payload(request);

        debug!("Requesting Snap session: gross_amount={}", request.gross_amount);

        let url = format!("{}/snap/v1/transactions", self.config.api_base_url);

        // Midtrans authentication: the server key is the Basic auth
        // username, the password stays empty.
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.server_key, Some(""))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Snap API error: status={}, body={}", status, body);

            // The whole response body is the error; Midtrans lists the
            // details under `error_messages` and callers get the raw text.
            return Err(PaymentError::Gateway(body));
        }

        let session: PaymentSession = serde_json::from_str(&body).map_err(|e| {
            PaymentError::Serialization(format!("Failed to parse Snap response: {}", e))
        })?;

        info!("Created Snap session: redirect_url={}", session.redirect_url);

        Ok(session)
    }

    fn gateway_name(&self) -> &'static str {
        "midtrans"
    }
}

// =============================================================================
// Snap API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct SnapTransactionPayload {
    transaction_details: SnapTransactionDetails,
    credit_card: SnapCreditCard,
}

#[derive(Debug, Serialize)]
struct SnapTransactionDetails {
    order_id: String,
    gross_amount: i64,
}

#[derive(Debug, Serialize)]
struct SnapCreditCard {
    secure: bool,
}
