//! Renders a sample transaction to stdout as a printable HTML document.
//!
//! Run with: cargo run -p kasir-receipt --example preview

use anyhow::Result;
use kasir_receipt::{ReceiptRenderer, assemble, transaction_from_json};
use shared::models::{FooterInfo, PrinterSettings};

const SAMPLE: &str = r#"{
    "id": 1024,
    "tranId": "TRX-2026-000123",
    "cashierName": "Dewi",
    "member": { "name": "Budi Santoso", "tier": "Gold" },
    "items": [
        {
            "product": { "name": "Kopi Susu 1L", "price": 47500 },
            "quantity": 2,
            "amount": 95000,
            "discount": { "name": "Promo", "amount": 5000 }
        },
        {
            "product": { "name": "Gula Aren 500g", "price": 25000 },
            "quantity": 1,
            "amount": 25000
        }
    ],
    "pricing": {
        "originalAmount": 125000,
        "finalAmount": 110000,
        "discount": {
            "isGlobal": true,
            "amount": 10000,
            "code": "WELCOME10",
            "type": "FIXED",
            "value": 10000
        }
    },
    "payment": { "method": "cash", "amount": 120000, "change": 10000 },
    "pointsEarned": 11,
    "createdAt": 1785915000000
}"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let detail = transaction_from_json(SAMPLE)?;
    let receipt = assemble(&detail, None);
    let html =
        ReceiptRenderer::new(&receipt, &PrinterSettings::default(), &FooterInfo::default())
            .render();

    println!("{html}");
    Ok(())
}
