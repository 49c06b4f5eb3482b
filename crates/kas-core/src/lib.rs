//! # kas-core
//!
//! Core types and traits for the kas-pay ledger payment bridge.
//!
//! This crate provides:
//! - `PaymentGateway` trait for the external payment gateway
//! - `TransactionStore` trait for the ledger's persistent store
//! - `PaymentRequest`, `PaymentSession`, and `TransactionStatus` types
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use kas_core::{PaymentGateway, PaymentRequest, TransactionStatus, TransactionStore};
//!
//! // Open a payment session for an order
//! let request = PaymentRequest::new("ORDER-101", 50_000);
//! let session = gateway.create_session(&request).await?;
//!
//! // Later, the gateway's notification resolves to a ledger status
//! store.update_status("ORDER-101", TransactionStatus::Success).await?;
//! ```

pub mod error;
pub mod gateway;
pub mod payment;
pub mod store;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use payment::{PaymentRequest, PaymentSession, TransactionStatus};
pub use store::{BoxedTransactionStore, TransactionStore};
