//! Transaction-level discount classification and aggregation
//!
//! The backend encodes the transaction-level discount as a flag-inspected
//! object (`isGlobal` + `applyTo`). [`TransactionDiscount`] lifts it into a
//! tagged variant so the mutual-exclusivity invariant holds by construction.
//! Classification precedence follows the backend: global, then member, then
//! tier.

use rust_decimal::Decimal;
use shared::models::{DiscountBreakdown, DiscountInfo, TransactionItem};

use crate::money::{to_decimal, to_f64};

/// `applyTo` marker for member-specific discounts
const APPLY_TO_MEMBERS: &str = "SPECIFIC_MEMBERS";
/// `applyTo` marker for tier discounts
const APPLY_TO_TIERS: &str = "SPECIFIC_MEMBER_TIERS";

/// Transaction-level discount, classified
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionDiscount {
    /// Voucher/promo discount not tied to a member
    Global {
        label: Option<String>,
        amount: f64,
    },
    /// Discount targeted at specific members
    Member { amount: f64 },
    /// Discount granted by membership tier
    Tier { amount: f64 },
    /// No transaction-level discount
    None,
}

impl TransactionDiscount {
    /// Classify the raw descriptor.
    ///
    /// Precedence is fixed: global wins when `isGlobal` is set, else member
    /// on `SPECIFIC_MEMBERS`, else tier on `SPECIFIC_MEMBER_TIERS`; anything
    /// else is no discount. Never fails - malformed fields count as absent.
    pub fn classify(info: Option<&DiscountInfo>) -> Self {
        let Some(info) = info else {
            return Self::None;
        };
        let amount = if info.amount.is_finite() {
            info.amount
        } else {
            0.0
        };

        if info.is_global {
            return Self::Global {
                label: info.code.clone().or_else(|| info.name.clone()),
                amount,
            };
        }
        match info.apply_to.as_deref() {
            Some(APPLY_TO_MEMBERS) => Self::Member { amount },
            Some(APPLY_TO_TIERS) => Self::Tier { amount },
            _ => Self::None,
        }
    }

    /// Voucher code/name for display, when this is a global discount.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Global { label, .. } => label.as_deref(),
            _ => None,
        }
    }
}

/// Aggregate line-item discounts and the transaction-level discount into the
/// four-bucket breakdown.
///
/// `product` sums the per-item annotations; exactly one of the remaining
/// buckets is populated from the classified transaction-level discount.
pub fn aggregate_discounts(
    items: &[TransactionItem],
    info: Option<&DiscountInfo>,
) -> DiscountBreakdown {
    let product: Decimal = items
        .iter()
        .filter_map(|item| item.discount.as_ref())
        .map(|d| to_decimal(d.amount))
        .sum();

    let (member, tier, global) = match TransactionDiscount::classify(info) {
        TransactionDiscount::Global { amount, .. } => {
            (Decimal::ZERO, Decimal::ZERO, to_decimal(amount))
        }
        TransactionDiscount::Member { amount } => {
            (to_decimal(amount), Decimal::ZERO, Decimal::ZERO)
        }
        TransactionDiscount::Tier { amount } => (Decimal::ZERO, to_decimal(amount), Decimal::ZERO),
        TransactionDiscount::None => (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
    };

    let product = to_f64(product);
    let member = to_f64(member);
    let tier = to_f64(tier);
    let global = to_f64(global);
    DiscountBreakdown {
        product,
        member,
        tier,
        global,
        // Summed after rounding so the invariant holds exactly
        total: product + member + tier + global,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ItemDiscount;

    fn item_with_discount(amount: f64) -> TransactionItem {
        TransactionItem {
            discount: Some(ItemDiscount {
                name: "Promo".to_string(),
                amount,
            }),
            ..TransactionItem::default()
        }
    }

    fn global_discount(amount: f64) -> DiscountInfo {
        DiscountInfo {
            is_global: true,
            amount,
            code: Some("WELCOME10".to_string()),
            ..DiscountInfo::default()
        }
    }

    #[test]
    fn test_classify_none() {
        assert_eq!(TransactionDiscount::classify(None), TransactionDiscount::None);
        let blank = DiscountInfo::default();
        assert_eq!(
            TransactionDiscount::classify(Some(&blank)),
            TransactionDiscount::None
        );
    }

    #[test]
    fn test_classify_precedence_global_wins() {
        // Both flags set: the backend's if/else-if chain checks global first
        let info = DiscountInfo {
            is_global: true,
            apply_to: Some(APPLY_TO_MEMBERS.to_string()),
            amount: 500.0,
            ..DiscountInfo::default()
        };
        assert!(matches!(
            TransactionDiscount::classify(Some(&info)),
            TransactionDiscount::Global { .. }
        ));
    }

    #[test]
    fn test_classify_member_and_tier() {
        let member = DiscountInfo {
            apply_to: Some(APPLY_TO_MEMBERS.to_string()),
            amount: 2000.0,
            ..DiscountInfo::default()
        };
        assert_eq!(
            TransactionDiscount::classify(Some(&member)),
            TransactionDiscount::Member { amount: 2000.0 }
        );

        let tier = DiscountInfo {
            apply_to: Some(APPLY_TO_TIERS.to_string()),
            amount: 3000.0,
            ..DiscountInfo::default()
        };
        assert_eq!(
            TransactionDiscount::classify(Some(&tier)),
            TransactionDiscount::Tier { amount: 3000.0 }
        );
    }

    #[test]
    fn test_classify_unknown_apply_to() {
        let info = DiscountInfo {
            apply_to: Some("EVERYONE".to_string()),
            amount: 1000.0,
            ..DiscountInfo::default()
        };
        assert_eq!(
            TransactionDiscount::classify(Some(&info)),
            TransactionDiscount::None
        );
    }

    #[test]
    fn test_aggregate_mutual_exclusivity() {
        let items = vec![item_with_discount(5000.0), item_with_discount(1000.0)];
        let breakdown = aggregate_discounts(&items, Some(&global_discount(10000.0)));

        assert_eq!(breakdown.product, 6000.0);
        assert_eq!(breakdown.global, 10000.0);
        assert_eq!(breakdown.member, 0.0);
        assert_eq!(breakdown.tier, 0.0);

        let populated = [breakdown.member, breakdown.tier, breakdown.global]
            .iter()
            .filter(|&&v| v != 0.0)
            .count();
        assert!(populated <= 1);
    }

    #[test]
    fn test_aggregate_total_invariant() {
        let cases: [(Vec<TransactionItem>, Option<DiscountInfo>); 3] = [
            (vec![], None),
            (vec![item_with_discount(5000.0)], Some(global_discount(10000.0))),
            (
                // Fractional rupiah rounds per bucket before totalling
                vec![item_with_discount(0.5)],
                Some(DiscountInfo {
                    apply_to: Some(APPLY_TO_TIERS.to_string()),
                    amount: 0.5,
                    ..DiscountInfo::default()
                }),
            ),
        ];

        for (items, info) in &cases {
            let b = aggregate_discounts(items, info.as_ref());
            assert_eq!(b.total, b.product + b.member + b.tier + b.global);
        }
    }

    #[test]
    fn test_aggregate_items_without_discounts() {
        let items = vec![TransactionItem::default(), TransactionItem::default()];
        let breakdown = aggregate_discounts(&items, None);
        assert_eq!(breakdown, DiscountBreakdown::default());
    }

    #[test]
    fn test_aggregate_non_finite_amount() {
        let info = DiscountInfo {
            is_global: true,
            amount: f64::NAN,
            ..DiscountInfo::default()
        };
        let breakdown = aggregate_discounts(&[], Some(&info));
        assert_eq!(breakdown.global, 0.0);
        assert_eq!(breakdown.total, 0.0);
    }
}
