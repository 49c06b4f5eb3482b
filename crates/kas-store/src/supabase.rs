//! # Supabase Store
//!
//! `TransactionStore` implementation over the Supabase PostgREST API.

use crate::config::SupabaseConfig;
use async_trait::async_trait;
use kas_core::{PaymentError, PaymentResult, TransactionStatus, TransactionStore};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Supabase-backed transaction store
///
/// Updates the `status` column of the row matching an order id. Never
/// creates rows; the ledger inserts them (status `PENDING`) when the
/// transaction is recorded.
pub struct SupabaseStore {
    config: SupabaseConfig,
    client: Client,
}

impl SupabaseStore {
    /// Create a new Supabase store
    pub fn new(config: SupabaseConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = SupabaseConfig::from_env()?;
        Ok(Self::new(config))
    }
}

#[async_trait]
impl TransactionStore for SupabaseStore {
    #[instrument(skip(self), fields(order_id = %order_id, status = %status))]
    async fn update_status(
        &self,
        order_id: &str,
        status: TransactionStatus,
    ) -> PaymentResult<()> {
        let url = format!("{}/rest/v1/{}", self.config.url, self.config.table);

        // PostgREST applies the patch to every row matching the eq filter
        // and answers 204 even when nothing matched.
        let response = self
            .client
            .patch(&url)
            .query(&[("order_id", format!("eq.{}", order_id))])
            .header("apikey", &self.config.service_role_key)
            .bearer_auth(&self.config.service_role_key)
            .json(&serde_json::json!({ "status": status.as_str() }))
            .send()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        let http_status = response.status();

        if !http_status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Store update rejected: status={}, body={}", http_status, body);
            return Err(PaymentError::Store(format!("HTTP {}: {}", http_status, body)));
        }

        debug!("Store update accepted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store_for(server: &MockServer) -> SupabaseStore {
        SupabaseStore::new(SupabaseConfig::new(server.uri(), "service-key"))
    }

    #[tokio::test]
    async fn test_update_issues_single_patch() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/rest/v1/kas_transactions"))
            .and(query_param("order_id", "eq.A1"))
            .and(header("apikey", "service-key"))
            .and(header("authorization", "Bearer service-key"))
            .and(body_json(json!({"status": "SUCCESS"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        store_for(&server)
            .update_status("A1", TransactionStatus::Success)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unknown_order_id_is_indistinguishable_from_success() {
        let server = MockServer::start().await;

        // PostgREST answers 204 whether or not a row matched
        Mock::given(method("PATCH"))
            .and(path("/rest/v1/kas_transactions"))
            .and(query_param("order_id", "eq.NO-SUCH-ORDER"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        store_for(&server)
            .update_status("NO-SUCH-ORDER", TransactionStatus::Failed)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_surfaces_store_rejection() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/rest/v1/kas_transactions"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "message": "connection to the database failed"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = store_for(&server)
            .update_status("A1", TransactionStatus::Success)
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentError::Store(_)));
        assert!(err.to_string().contains("connection to the database failed"));
    }

    #[tokio::test]
    async fn test_update_targets_configured_table() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/rest/v1/payments"))
            .and(query_param("order_id", "eq.A1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let store = SupabaseStore::new(
            SupabaseConfig::new(server.uri(), "service-key").with_table("payments"),
        );

        store
            .update_status("A1", TransactionStatus::Challenge)
            .await
            .unwrap();
    }
}
