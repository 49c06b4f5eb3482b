//! # Payment Gateway Trait
//!
//! Capability boundary for the external payment gateway. The API layer only
//! sees this trait; the Midtrans implementation lives in `kas-midtrans`, and
//! tests substitute stubs without touching the network.

use crate::error::PaymentResult;
use crate::payment::{PaymentRequest, PaymentSession};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment gateway implementations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Open a payment session for the given order.
    ///
    /// # Arguments
    /// * `request` - Order identifier and amount to charge
    ///
    /// # Returns
    /// A `PaymentSession` containing the token and redirect URL, plus any
    /// other fields the gateway returned.
    async fn create_session(&self, request: &PaymentRequest) -> PaymentResult<PaymentSession>;

    /// Get the gateway name (for logging).
    fn gateway_name(&self) -> &'static str;
}

/// Type alias for a shared payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
