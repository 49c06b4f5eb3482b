//! # Payment Types
//!
//! Request, session, and status types shared across the kas-pay crates.

use crate::error::{PaymentError, PaymentResult};
use serde::{Deserialize, Serialize};

/// A request to open a payment session for a ledger transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Ledger order identifier (unique per transaction)
    pub order_id: String,

    /// Amount due, in whole currency units
    pub gross_amount: i64,
}

impl PaymentRequest {
    /// Create a new payment request
    pub fn new(order_id: impl Into<String>, gross_amount: i64) -> Self {
        Self {
            order_id: order_id.into(),
            gross_amount,
        }
    }

    /// Validate the request before any outbound call
    pub fn validate(&self) -> PaymentResult<()> {
        if self.order_id.is_empty() {
            return Err(PaymentError::InvalidRequest(
                "order_id must not be empty".to_string(),
            ));
        }

        if self.gross_amount <= 0 {
            return Err(PaymentError::InvalidRequest(
                "gross_amount must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// A payment session issued by the gateway.
///
/// Only `token` and `redirect_url` are consumed by this system. Everything
/// else the gateway returns lands in `extra` and is relayed to the caller
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSession {
    /// Session token for the gateway's client SDK
    pub token: String,

    /// Hosted payment page the end user is redirected to
    pub redirect_url: String,

    /// Opaque pass-through of any remaining gateway fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Transaction status persisted in the ledger table.
///
/// The initial value of every ledger row is `Pending`; only the webhook
/// mutates it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
    Challenge,
}

impl TransactionStatus {
    /// Column value written to the store
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Success => "SUCCESS",
            TransactionStatus::Failed => "FAILED",
            TransactionStatus::Challenge => "CHALLENGE",
        }
    }
}

impl Default for TransactionStatus {
    fn default() -> Self {
        TransactionStatus::Pending
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_validation() {
        assert!(PaymentRequest::new("ORDER-101", 50_000).validate().is_ok());

        let err = PaymentRequest::new("", 50_000).validate().unwrap_err();
        assert!(matches!(err, PaymentError::InvalidRequest(_)));

        let err = PaymentRequest::new("ORDER-101", 0).validate().unwrap_err();
        assert!(matches!(err, PaymentError::InvalidRequest(_)));

        let err = PaymentRequest::new("ORDER-101", -500).validate().unwrap_err();
        assert!(matches!(err, PaymentError::InvalidRequest(_)));
    }

    #[test]
    fn test_session_passes_unknown_fields_through() {
        let body = json!({
            "token": "66e4fa55-fdac-4ef9-91b5-733b97d1b862",
            "redirect_url": "https://app.sandbox.midtrans.com/snap/v2/vtweb/66e4fa55",
            "expiry_time": "2025-01-01 12:00:00"
        });

        let session: PaymentSession = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(session.token, "66e4fa55-fdac-4ef9-91b5-733b97d1b862");
        assert!(session.extra.contains_key("expiry_time"));

        // Relaying the session must not drop fields this system ignores
        assert_eq!(serde_json::to_value(&session).unwrap(), body);
    }

    #[test]
    fn test_status_column_values() {
        assert_eq!(TransactionStatus::Pending.as_str(), "PENDING");
        assert_eq!(TransactionStatus::Success.as_str(), "SUCCESS");
        assert_eq!(TransactionStatus::Failed.as_str(), "FAILED");
        assert_eq!(TransactionStatus::Challenge.as_str(), "CHALLENGE");
        assert_eq!(TransactionStatus::default(), TransactionStatus::Pending);
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(
            serde_json::to_value(TransactionStatus::Success).unwrap(),
            json!("SUCCESS")
        );
        let status: TransactionStatus = serde_json::from_value(json!("CHALLENGE")).unwrap();
        assert_eq!(status, TransactionStatus::Challenge);
    }
}
