//! # Payment Error Types
//!
//! Typed error handling for the kas-pay ledger payment bridge.
//! All payment operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Gateway rejected the call; carries the raw response body
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Network/HTTP error reaching the gateway or the store
    #[error("Network error: {0}")]
    Network(String),

    /// Persistent store rejected the update
    #[error("Store error: {0}")]
    Store(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
