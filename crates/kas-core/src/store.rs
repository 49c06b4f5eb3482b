//! # Transaction Store Trait
//!
//! Capability boundary for the ledger's persistent store. A single
//! operation: set the status of the transaction row matching an order id.

use crate::error::PaymentResult;
use crate::payment::TransactionStatus;
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for the ledger's transaction store.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Set the status of the transaction identified by `order_id`.
    ///
    /// Matching zero rows is not an error; the store reports only transport
    /// failures and outright rejections. Rows are never created here.
    async fn update_status(
        &self,
        order_id: &str,
        status: TransactionStatus,
    ) -> PaymentResult<()>;
}

/// Type alias for a shared transaction store (dynamic dispatch)
pub type BoxedTransactionStore = Arc<dyn TransactionStore>;
