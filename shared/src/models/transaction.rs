//! Transaction Detail Models
//!
//! Mirror of the backend's transaction-detail endpoint payload (camelCase).
//! Fetched per view and held transiently; never persisted by this workspace.

use serde::{Deserialize, Serialize};

/// Member attached to a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberInfo {
    #[serde(default)]
    pub name: String,
    pub tier: Option<String>,
}

/// Product snapshot captured at sale time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

/// Per-line-item discount annotation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDiscount {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: f64,
}

/// One line item on a transaction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionItem {
    #[serde(default)]
    pub product: ProductSnapshot,
    #[serde(default)]
    pub quantity: i32,
    /// Line total after the item's own discount
    #[serde(default)]
    pub amount: f64,
    pub discount: Option<ItemDiscount>,
}

/// Transaction-level discount descriptor.
///
/// Either a global/voucher discount (`isGlobal`) or a member/tier discount
/// selected by `applyTo`. At most one is active per transaction; the
/// classification rules live in the rendering crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountInfo {
    #[serde(default)]
    pub is_global: bool,
    pub apply_to: Option<String>,
    #[serde(default)]
    pub amount: f64,
    pub name: Option<String>,
    pub code: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub value: Option<f64>,
}

/// Pricing block of a transaction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBlock {
    #[serde(default)]
    pub original_amount: f64,
    #[serde(default)]
    pub final_amount: f64,
    pub discount: Option<DiscountInfo>,
}

/// Payment block of a transaction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBlock {
    pub method: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub change: f64,
}

/// Raw transaction record as fetched from the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetail {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub tran_id: String,
    #[serde(default)]
    pub cashier_name: String,
    pub member: Option<MemberInfo>,
    /// A missing array degrades to an empty receipt, never an error
    #[serde(default)]
    pub items: Vec<TransactionItem>,
    #[serde(default)]
    pub pricing: PricingBlock,
    #[serde(default)]
    pub payment: PaymentBlock,
    pub points_earned: Option<i64>,
    /// Unix millis
    #[serde(default)]
    pub created_at: i64,
}
