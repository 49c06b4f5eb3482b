//! # kas-store
//!
//! Supabase-backed transaction store for kas-pay.
//!
//! The ledger keeps its transaction rows in a Supabase table; this crate
//! talks to the PostgREST API with the project's service-role key. That key
//! bypasses row-level security, which is what an unauthenticated external
//! caller path (the gateway webhook) requires - keep it server-side only.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kas_core::{TransactionStatus, TransactionStore};
//! use kas_store::SupabaseStore;
//!
//! let store = SupabaseStore::from_env()?;
//! store.update_status("ORDER-101", TransactionStatus::Success).await?;
//! ```

pub mod config;
pub mod supabase;

// Re-exports
pub use config::SupabaseConfig;
pub use supabase::SupabaseStore;
