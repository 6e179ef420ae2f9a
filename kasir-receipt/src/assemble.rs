//! Receipt data assembly
//!
//! Folds a backend transaction record into the render-ready `ReceiptData`:
//! normalized pricing, Guest fallback, Title Case payment label, absolute
//! final amount.

use shared::models::{
    PricingSummary, ReceiptData, ReceiptItem, StoreInfo, TransactionDetail, TransactionSummary,
};

use crate::discount::{TransactionDiscount, aggregate_discounts};
use crate::format::{format_receipt_date, payment_method_label};
use crate::money::{to_decimal, to_f64};

/// Customer display name when no member is attached
pub const GUEST_NAME: &str = "Guest";

/// Assemble a render-ready receipt from a raw transaction record.
///
/// `store_info` falls back to the built-in identity when absent. Never
/// fails; missing optional fields resolve to documented defaults.
pub fn assemble(detail: &TransactionDetail, store_info: Option<StoreInfo>) -> ReceiptData {
    tracing::debug!(
        tran_id = %detail.tran_id,
        items = detail.items.len(),
        "assembling receipt"
    );

    let discount_info = detail.pricing.discount.as_ref();
    let discounts = aggregate_discounts(&detail.items, discount_info);
    let voucher_label = match TransactionDiscount::classify(discount_info) {
        TransactionDiscount::Global { label, .. } => label,
        _ => None,
    };

    let items = detail
        .items
        .iter()
        .map(|item| ReceiptItem {
            name: item.product.name.clone(),
            unit_price: item.product.price,
            quantity: item.quantity,
            line_total: item.amount,
            discount: item.discount.clone(),
        })
        .collect();

    let (customer, customer_tier) = match &detail.member {
        Some(member) => (member.name.clone(), member.tier.clone()),
        None => (GUEST_NAME.to_string(), None),
    };

    ReceiptData {
        store_info: store_info.unwrap_or_else(StoreInfo::fallback),
        transaction: TransactionSummary {
            tran_id: detail.tran_id.clone(),
            date: format_receipt_date(detail.created_at),
            cashier: detail.cashier_name.clone(),
            customer,
            customer_tier,
        },
        items,
        pricing: PricingSummary {
            subtotal: detail.pricing.original_amount,
            discounts,
            voucher_label,
            // Sign discarded: refund-style records may carry a negative figure
            final_amount: to_f64(to_decimal(detail.pricing.final_amount).abs()),
            payment_amount: detail.payment.amount,
            change: detail.payment.change,
        },
        payment_method: payment_method_label(detail.payment.method.as_deref()),
        points_earned: detail.points_earned,
    }
}
