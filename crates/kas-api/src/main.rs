//! # Kas-Pay
//!
//! Midtrans payment bridge for the kas ledger.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export MIDTRANS_SERVER_KEY=SB-Mid-server-...
//! export SUPABASE_URL=https://<ref>.supabase.co
//! export SUPABASE_SERVICE_ROLE_KEY=...
//!
//! # Run the server
//! kas-pay
//! ```

use kas_api::{routes, state::AppState};
use kas_core::PaymentGateway;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment gateway: {}", state.gateway.gateway_name());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Kas-Pay starting on http://{}", addr);

    if !is_prod {
        info!("Payment sessions: POST http://{}/api/v1/payments", addr);
        info!("Webhook: POST http://{}/webhook/midtrans", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
