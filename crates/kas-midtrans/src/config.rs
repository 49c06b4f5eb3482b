//! # Midtrans Configuration
//!
//! Configuration management for the Midtrans integration.
//! The server key is loaded from environment variables.

use kas_core::PaymentError;
use std::env;

/// Default Snap API base URL (sandbox).
///
/// Production is `https://app.midtrans.com`; switch via
/// `MIDTRANS_API_BASE_URL`.
pub const SANDBOX_API_BASE_URL: &str = "https://app.sandbox.midtrans.com";

/// Midtrans API configuration
#[derive(Debug, Clone)]
pub struct MidtransConfig {
    /// Merchant server key (SB-Mid-server-... or Mid-server-...)
    pub server_key: String,

    /// API base URL (for sandbox/production switching and test mocking)
    pub api_base_url: String,
}

impl MidtransConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `MIDTRANS_SERVER_KEY`
    ///
    /// Optional:
    /// - `MIDTRANS_API_BASE_URL` (defaults to the sandbox)
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let server_key = env::var("MIDTRANS_SERVER_KEY").map_err(|_| {
            PaymentError::Configuration("MIDTRANS_SERVER_KEY not set".to_string())
        })?;

        if server_key.is_empty() {
            return Err(PaymentError::Configuration(
                "MIDTRANS_SERVER_KEY must not be empty".to_string(),
            ));
        }

        let api_base_url =
            env::var("MIDTRANS_API_BASE_URL").unwrap_or_else(|_| SANDBOX_API_BASE_URL.to_string());

        Ok(Self {
            server_key,
            api_base_url,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(server_key: impl Into<String>) -> Self {
        Self {
            server_key: server_key.into(),
            api_base_url: SANDBOX_API_BASE_URL.to_string(),
        }
    }

    /// Check if pointing at the sandbox environment
    pub fn is_sandbox(&self) -> bool {
        self.api_base_url.contains("sandbox")
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}
