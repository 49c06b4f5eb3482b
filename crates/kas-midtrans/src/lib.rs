//! # kas-midtrans
//!
//! Midtrans Snap gateway for kas-pay.
//!
//! This crate covers both halves of the Midtrans integration:
//!
//! 1. **MidtransSnapGateway** - Snap transaction API
//!    - Exchanges an order id and amount for a session token and redirect URL
//!    - Basic auth with the merchant server key
//!    - Best for: hosted payment pages on mobile and web clients
//!
//! 2. **PaymentNotification** - asynchronous status notifications
//!    - Typed view of the webhook payload Midtrans sends after a
//!      transaction changes state
//!    - Maps the gateway's transaction/fraud vocabulary onto the ledger's
//!      `TransactionStatus`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kas_core::{PaymentGateway, PaymentRequest};
//! use kas_midtrans::MidtransSnapGateway;
//!
//! // Create gateway from environment
//! let gateway = MidtransSnapGateway::from_env()?;
//!
//! // Open a payment session
//! let session = gateway
//!     .create_session(&PaymentRequest::new("ORDER-101", 50_000))
//!     .await?;
//!
//! // Hand session.token / session.redirect_url to the paying client
//! ```
//!
//! ## Notification Handling
//!
//! ```rust,ignore
//! use kas_midtrans::PaymentNotification;
//!
//! // In your webhook endpoint:
//! let notification: PaymentNotification = serde_json::from_slice(&body)?;
//! let status = notification.final_status();
//! store.update_status(&notification.order_id, status).await?;
//! ```

pub mod config;
pub mod notification;
pub mod snap;

// Re-exports
pub use config::{MidtransConfig, SANDBOX_API_BASE_URL};
pub use notification::PaymentNotification;
pub use snap::MidtransSnapGateway;
