//! Error types for the receipt library

use thiserror::Error;

/// Receipt pipeline error types.
///
/// Rendering itself never fails - missing or malformed fields degrade to
/// documented defaults. Errors only surface at the JSON decode boundary.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Malformed JSON at the decode boundary
    #[error("Decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for receipt operations
pub type ReceiptResult<T> = Result<T, ReceiptError>;
