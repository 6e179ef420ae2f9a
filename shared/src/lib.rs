//! Shared types for the Kasir POS receipt pipeline
//!
//! Data models exchanged between the cashier application and the receipt
//! rendering crate: store identity, printer configuration, the backend's
//! transaction-detail wire shape and the derived render-ready shape.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
