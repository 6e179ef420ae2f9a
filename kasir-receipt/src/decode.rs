//! JSON decode boundary
//!
//! The backend transaction record must decode cleanly; configuration blobs
//! are lenient and fall back to defaults on malformed input, logging a
//! warning.

use shared::models::{FooterInfo, PrinterSettings, StoreInfo, TransactionDetail};

use crate::error::ReceiptResult;

/// Decode a transaction-detail payload.
pub fn transaction_from_json(json: &str) -> ReceiptResult<TransactionDetail> {
    Ok(serde_json::from_str(json)?)
}

/// Decode printer settings, falling back to defaults on malformed input.
pub fn settings_from_json(json: &str) -> PrinterSettings {
    serde_json::from_str(json).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "malformed printer settings, falling back to defaults");
        PrinterSettings::default()
    })
}

/// Decode the stored store identity; `None` on malformed input so the
/// assembler substitutes the built-in fallback.
pub fn store_info_from_json(json: &str) -> Option<StoreInfo> {
    serde_json::from_str(json)
        .map_err(|e| tracing::warn!(error = %e, "malformed store info, using fallback"))
        .ok()
}

/// Decode footer lines, falling back to the default messages.
pub fn footer_from_json(json: &str) -> FooterInfo {
    serde_json::from_str(json).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "malformed footer info, falling back to defaults");
        FooterInfo::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::PaperSize;

    #[test]
    fn test_transaction_missing_items_is_empty() {
        let json = r#"{
            "id": 1,
            "tranId": "TRX-001",
            "cashierName": "Dewi",
            "pricing": { "originalAmount": 0, "finalAmount": 0 },
            "payment": { "amount": 0, "change": 0 },
            "createdAt": 0
        }"#;
        let detail = transaction_from_json(json).unwrap();
        assert!(detail.items.is_empty());
        assert!(detail.member.is_none());
    }

    #[test]
    fn test_transaction_malformed_is_error() {
        assert!(transaction_from_json("not json").is_err());
    }

    #[test]
    fn test_settings_unknown_paper_size_falls_back() {
        let settings = settings_from_json(r#"{ "paperSize": 64 }"#);
        assert_eq!(settings.paper_size, PaperSize::Mm58);
        // Untouched fields keep their defaults
        assert_eq!(settings.font_size_px, 12);
    }

    #[test]
    fn test_settings_malformed_falls_back() {
        assert_eq!(settings_from_json("{"), PrinterSettings::default());
    }

    #[test]
    fn test_store_info_malformed_is_none() {
        assert!(store_info_from_json("[]").is_none());
        let info = store_info_from_json(r#"{ "name": "Toko Jaya" }"#).unwrap();
        assert_eq!(info.name, "Toko Jaya");
    }

    #[test]
    fn test_footer_partial_fields() {
        let footer = footer_from_json(r#"{ "thanksMessage": "Sampai jumpa" }"#);
        assert_eq!(footer.thanks_message, "Sampai jumpa");
        assert_eq!(footer.return_message, FooterInfo::default().return_message);
    }
}
