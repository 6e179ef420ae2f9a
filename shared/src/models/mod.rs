//! Data models
//!
//! Shared between the cashier application and the receipt renderer.
//! Wire-facing types mirror the backend's camelCase JSON.

pub mod printer_settings;
pub mod receipt;
pub mod store_info;
pub mod transaction;

// Re-exports
pub use printer_settings::*;
pub use receipt::*;
pub use store_info::*;
pub use transaction::*;
