//! # Midtrans Notifications
//!
//! Payload types for the asynchronous notifications Midtrans POSTs after a
//! transaction changes state, and the mapping from the gateway's status
//! vocabulary onto the ledger's `TransactionStatus`.

use kas_core::TransactionStatus;
use serde::{Deserialize, Serialize};

/// The subset of a Midtrans notification this system consumes.
///
/// Midtrans sends many more fields (payment_type, signature_key, amounts);
/// they are ignored on input and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentNotification {
    /// Ledger order identifier
    pub order_id: String,

    /// Gateway transaction status (capture, settlement, cancel, ...)
    pub transaction_status: String,

    /// Fraud classification, attached only to card captures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraud_status: Option<String>,
}

impl PaymentNotification {
    /// Map the gateway's (transaction_status, fraud_status) pair onto the
    /// status persisted in the ledger.
    ///
    /// Pure and total: unknown statuses resolve to `Pending`, and a capture
    /// without an explicit fraud verdict stays `Pending` until the gateway
    /// notifies again.
    pub fn final_status(&self) -> TransactionStatus {
        match self.transaction_status.as_str() {
            "capture" => match self.fraud_status.as_deref() {
                Some("challenge") => TransactionStatus::Challenge,
                Some("accept") => TransactionStatus::Success,
                _ => TransactionStatus::Pending,
            },
            "settlement" => TransactionStatus::Success,
            "cancel" | "deny" | "expire" => TransactionStatus::Failed,
            "pending" => TransactionStatus::Pending,
            _ => TransactionStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn notification(transaction_status: &str, fraud_status: Option<&str>) -> PaymentNotification {
        PaymentNotification {
            order_id: "ORDER-101".to_string(),
            transaction_status: transaction_status.to_string(),
            fraud_status: fraud_status.map(String::from),
        }
    }

    #[test]
    fn test_capture_follows_fraud_verdict() {
        assert_eq!(
            notification("capture", Some("accept")).final_status(),
            TransactionStatus::Success
        );
        assert_eq!(
            notification("capture", Some("challenge")).final_status(),
            TransactionStatus::Challenge
        );
        // No explicit verdict: the capture stays pending
        assert_eq!(
            notification("capture", None).final_status(),
            TransactionStatus::Pending
        );
        assert_eq!(
            notification("capture", Some("review")).final_status(),
            TransactionStatus::Pending
        );
    }

    #[test]
    fn test_settlement_is_success() {
        assert_eq!(
            notification("settlement", None).final_status(),
            TransactionStatus::Success
        );
        // fraud_status is irrelevant outside capture
        assert_eq!(
            notification("settlement", Some("challenge")).final_status(),
            TransactionStatus::Success
        );
    }

    #[test]
    fn test_terminal_failures() {
        assert_eq!(
            notification("cancel", None).final_status(),
            TransactionStatus::Failed
        );
        assert_eq!(
            notification("deny", None).final_status(),
            TransactionStatus::Failed
        );
        assert_eq!(
            notification("expire", None).final_status(),
            TransactionStatus::Failed
        );
    }

    #[test]
    fn test_pending_and_unknown_default_to_pending() {
        assert_eq!(
            notification("pending", None).final_status(),
            TransactionStatus::Pending
        );
        assert_eq!(
            notification("refund", None).final_status(),
            TransactionStatus::Pending
        );
        assert_eq!(
            notification("unknown-value", Some("accept")).final_status(),
            TransactionStatus::Pending
        );
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let n = notification("settlement", None);
        assert_eq!(n.final_status(), n.final_status());
    }

    #[test]
    fn test_deserialize_ignores_unconsumed_fields() {
        let n: PaymentNotification = serde_json::from_value(json!({
            "order_id": "ORDER-101",
            "transaction_status": "settlement",
            "payment_type": "bank_transfer",
            "signature_key": "abcdef",
            "gross_amount": "50000.00"
        }))
        .unwrap();

        assert_eq!(n.order_id, "ORDER-101");
        assert_eq!(n.fraud_status, None);
        assert_eq!(n.final_status(), TransactionStatus::Success);
    }
}
