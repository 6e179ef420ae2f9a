//! Render-ready Receipt Models
//!
//! `ReceiptData` is computed on demand right before printing or preview and
//! discarded after use; it is never persisted.

use serde::{Deserialize, Serialize};

use crate::models::store_info::StoreInfo;
use crate::models::transaction::ItemDiscount;

/// Free-text footer lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterInfo {
    pub thanks_message: String,
    pub return_message: String,
}

impl Default for FooterInfo {
    fn default() -> Self {
        Self {
            thanks_message: "Terima kasih atas kunjungan Anda".to_string(),
            return_message: "Barang yang sudah dibeli tidak dapat ditukar/dikembalikan"
                .to_string(),
        }
    }
}

/// Four-bucket discount breakdown.
///
/// At most one of `member`/`tier`/`global` is non-zero for any transaction;
/// `product` accumulates independently from line items.
/// Invariant: `total == product + member + tier + global`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountBreakdown {
    pub product: f64,
    pub member: f64,
    pub tier: f64,
    pub global: f64,
    pub total: f64,
}

/// Transaction metadata block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub tran_id: String,
    /// Pre-formatted display date
    pub date: String,
    pub cashier: String,
    /// Member name, or the "Guest" sentinel
    pub customer: String,
    pub customer_tier: Option<String>,
}

/// One renderable line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    pub name: String,
    pub unit_price: f64,
    pub quantity: i32,
    pub line_total: f64,
    pub discount: Option<ItemDiscount>,
}

/// Normalized pricing summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummary {
    /// Sum of line totals before any discounts
    pub subtotal: f64,
    pub discounts: DiscountBreakdown,
    /// Voucher code/name shown next to the global discount line
    pub voucher_label: Option<String>,
    /// Absolute value; sign is discarded for display
    pub final_amount: f64,
    pub payment_amount: f64,
    pub change: f64,
}

/// Render-ready receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptData {
    pub store_info: StoreInfo,
    pub transaction: TransactionSummary,
    pub items: Vec<ReceiptItem>,
    pub pricing: PricingSummary,
    pub payment_method: String,
    pub points_earned: Option<i64>,
}
