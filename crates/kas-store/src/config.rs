//! # Supabase Configuration
//!
//! Configuration management for the Supabase store.
//! The service-role key is loaded from environment variables.

use kas_core::PaymentError;
use std::env;

/// Default table holding the ledger's transaction rows
pub const DEFAULT_TABLE: &str = "kas_transactions";

/// Supabase project configuration
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL (https://<ref>.supabase.co)
    pub url: String,

    /// Service-role key; bypasses row-level security
    pub service_role_key: String,

    /// Table holding the transaction rows
    pub table: String,
}

impl SupabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_SERVICE_ROLE_KEY`
    ///
    /// Optional:
    /// - `SUPABASE_TABLE` (defaults to `kas_transactions`)
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let url = env::var("SUPABASE_URL")
            .map_err(|_| PaymentError::Configuration("SUPABASE_URL not set".to_string()))?;

        let service_role_key = env::var("SUPABASE_SERVICE_ROLE_KEY").map_err(|_| {
            PaymentError::Configuration("SUPABASE_SERVICE_ROLE_KEY not set".to_string())
        })?;

        if service_role_key.is_empty() {
            return Err(PaymentError::Configuration(
                "SUPABASE_SERVICE_ROLE_KEY must not be empty".to_string(),
            ));
        }

        let table = env::var("SUPABASE_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string());

        Ok(Self {
            url,
            service_role_key,
            table,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(url: impl Into<String>, service_role_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            service_role_key: service_role_key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Builder: set the transaction table
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }
}
