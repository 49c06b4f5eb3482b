//! # Application State
//!
//! Shared state for the Axum application: the gateway and store
//! capabilities plus server configuration.

use kas_core::{BoxedPaymentGateway, BoxedTransactionStore};
use kas_midtrans::MidtransSnapGateway;
use kas_store::SupabaseStore;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway capability
    pub gateway: BoxedPaymentGateway,
    /// Ledger store capability
    pub store: BoxedTransactionStore,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by Midtrans and Supabase
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let gateway = MidtransSnapGateway::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Midtrans: {}", e))?;

        let store = SupabaseStore::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Supabase: {}", e))?;

        Ok(Self {
            gateway: Arc::new(gateway),
            store: Arc::new(store),
            config,
        })
    }

    /// Create an AppState with explicit capabilities (for testing)
    pub fn with_capabilities(
        gateway: BoxedPaymentGateway,
        store: BoxedTransactionStore,
        config: AppConfig,
    ) -> Self {
        Self {
            gateway,
            store,
            config,
        }
    }
}
