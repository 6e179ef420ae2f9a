//! # kasir-receipt
//!
//! Receipt document generation for thermal printing - pure rendering only.
//!
//! ## Scope
//!
//! This crate handles WHAT the printed receipt looks like:
//! - Discount classification and four-bucket aggregation
//! - Receipt data assembly from backend transaction records
//! - Printer configuration mapping (paper width, margin shorthand)
//! - Self-contained HTML/CSS document rendering
//!
//! Driving the physical printer (HOW to print) stays in application code:
//! the rendered document is handed to the host's print surface as-is.
//!
//! Every stage is a pure, synchronous function. Missing or malformed
//! optional input degrades to a documented default; only the JSON decode
//! boundary can fail.
//!
//! ## Example
//!
//! ```
//! use kasir_receipt::{assemble, ReceiptRenderer};
//! use shared::models::{FooterInfo, PrinterSettings, TransactionDetail};
//!
//! # fn render(detail: &TransactionDetail) -> String {
//! let receipt = assemble(detail, None);
//! ReceiptRenderer::new(&receipt, &PrinterSettings::default(), &FooterInfo::default())
//!     .render()
//! # }
//! ```

mod assemble;
mod decode;
mod discount;
mod error;
mod format;
mod html;
mod money;
mod printer_config;
mod render;

// Re-exports
pub use assemble::{GUEST_NAME, assemble};
pub use decode::{
    footer_from_json, settings_from_json, store_info_from_json, transaction_from_json,
};
pub use discount::{TransactionDiscount, aggregate_discounts};
pub use error::{ReceiptError, ReceiptResult};
pub use format::{format_receipt_date, format_rupiah, payment_method_label};
pub use html::{HtmlBuilder, escape};
pub use printer_config::{Margins, body_padding, css_margin, paper_width_px, resolve_margins};
pub use render::ReceiptRenderer;
