//! HTML receipt document renderer
//!
//! Emits a complete, self-contained HTML document (inline stylesheet, no
//! external references) sized to the physical paper. Deterministic: the same
//! `ReceiptData` + `PrinterSettings` + `FooterInfo` always produce
//! byte-identical output.

use shared::models::{FooterInfo, PrinterSettings, ReceiptData};

use crate::assemble::GUEST_NAME;
use crate::format::format_rupiah;
use crate::html::HtmlBuilder;
use crate::printer_config::{body_padding, css_margin, paper_width_px, resolve_margins};

/// Hard-coded attribution line at the bottom of every receipt
const ATTRIBUTION: &str = "Powered by Kasir POS";

pub struct ReceiptRenderer<'a> {
    receipt: &'a ReceiptData,
    settings: &'a PrinterSettings,
    footer: &'a FooterInfo,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(
        receipt: &'a ReceiptData,
        settings: &'a PrinterSettings,
        footer: &'a FooterInfo,
    ) -> Self {
        Self {
            receipt,
            settings,
            footer,
        }
    }

    pub fn render(&self) -> String {
        tracing::debug!(
            tran_id = %self.receipt.transaction.tran_id,
            paper_mm = self.settings.paper_size.width_mm(),
            items = self.receipt.items.len(),
            "rendering receipt document"
        );

        let mut b = HtmlBuilder::new();
        b.raw("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>");
        b.raw(&self.stylesheet());
        b.raw("</style></head><body>");

        self.render_store_header(&mut b);
        self.render_transaction_meta(&mut b);
        self.render_items(&mut b);
        self.render_totals(&mut b);
        self.render_payment(&mut b);
        self.render_points(&mut b);
        self.render_footer(&mut b);

        b.raw("</body></html>");
        b.finalize()
    }

    fn stylesheet(&self) -> String {
        let width_mm = self.settings.paper_size.width_mm();
        let width_px = paper_width_px(self.settings.paper_size);
        let page_margin = css_margin(&self.settings.margin);
        let padding = body_padding(&resolve_margins(&self.settings.margin));
        // Config string lands in CSS: strip delimiters
        let font = self
            .settings
            .font_family
            .replace(['"', '\'', '\\', ';', '{', '}'], "");
        let size = self.settings.font_size_px;
        let title_size = size + 2;
        let small_size = size.saturating_sub(2).max(8);
        let line_height = self.settings.line_height;
        // Thermal output favors heavier strokes: semi-bold floor even with
        // bold disabled
        let weight = if self.settings.enable_bold { "900" } else { "600" };

        format!(
            "@page{{size:{width_mm}mm auto;margin:{page_margin};}}\
             *{{margin:0;padding:0;box-sizing:border-box;}}\
             body{{width:{width_mm}mm;max-width:{width_px}px;padding:{padding};\
             font-family:'{font}',monospace;font-size:{size}px;\
             line-height:{line_height};font-weight:{weight};\
             color:#000;background:#fff;}}\
             .store{{text-align:center;}}\
             .store-name{{font-size:{title_size}px;text-transform:uppercase;}}\
             .row{{display:flex;justify-content:space-between;gap:4px;}}\
             .row .right{{text-align:right;white-space:nowrap;}}\
             .sep{{border-top:1px dashed #000;margin:4px 0;}}\
             .item{{margin-bottom:2px;}}\
             .item-detail{{padding-left:8px;}}\
             .item-discount{{padding-left:8px;}}\
             .grand-total{{font-size:{title_size}px;border-top:1px solid #000;\
             margin-top:2px;padding-top:2px;}}\
             .points{{text-align:center;margin-top:4px;}}\
             .footer{{text-align:center;margin-top:4px;}}\
             .attribution{{margin-top:4px;font-size:{small_size}px;}}"
        )
    }

    // ── Store header ──
    fn render_store_header(&self, b: &mut HtmlBuilder) {
        let info = &self.receipt.store_info;
        b.open("div", "store");
        b.div("store-name", &info.name);
        if !info.address.is_empty() {
            b.div("store-line", &info.address);
        }
        if !info.phone.is_empty() {
            b.div("store-line", &format!("Telp: {}", info.phone));
        }
        if let Some(email) = &info.email {
            b.div("store-line", email);
        }
        if let Some(website) = &info.website {
            b.div("store-line", website);
        }
        b.close("div");
        b.sep();
    }

    // ── Transaction metadata ──
    fn render_transaction_meta(&self, b: &mut HtmlBuilder) {
        let tx = &self.receipt.transaction;
        b.open("div", "meta");
        b.row("row", "No. Transaksi", &tx.tran_id);
        b.row("row", "Tanggal", &tx.date);
        b.row("row", "Kasir", &tx.cashier);
        if tx.customer != GUEST_NAME {
            let customer = match &tx.customer_tier {
                Some(tier) => format!("{} ({})", tx.customer, tier),
                None => tx.customer.clone(),
            };
            b.row("row", "Pelanggan", &customer);
        }
        b.row("row", "Pembayaran", &self.receipt.payment_method);
        b.close("div");
        b.sep();
    }

    // ── Items ──
    fn render_items(&self, b: &mut HtmlBuilder) {
        b.open("div", "items");
        b.div("items-header", &format!("{} Item", self.receipt.items.len()));
        for item in &self.receipt.items {
            b.open("div", "item");
            b.row("row item-name", &item.name, &format_rupiah(item.line_total));
            b.div(
                "item-detail",
                &format!("{} x {}", item.quantity, format_rupiah(item.unit_price)),
            );
            if let Some(discount) = &item.discount {
                b.row(
                    "row item-discount",
                    &discount.name,
                    &format!("-{}", format_rupiah(discount.amount)),
                );
            }
            b.close("div");
        }
        b.close("div");
        b.sep();
    }

    // ── Totals ──
    fn render_totals(&self, b: &mut HtmlBuilder) {
        let pricing = &self.receipt.pricing;
        let d = &pricing.discounts;
        b.open("div", "totals");
        b.row("row", "Subtotal", &format_rupiah(pricing.subtotal));

        // Fixed bucket order: product, member, tier, global. Zero lines are
        // omitted entirely.
        if d.product > 0.0 {
            b.row(
                "row discount",
                "Diskon Produk",
                &format!("-{}", format_rupiah(d.product)),
            );
        }
        if d.member > 0.0 {
            b.row(
                "row discount",
                "Diskon Member",
                &format!("-{}", format_rupiah(d.member)),
            );
        }
        if d.tier > 0.0 {
            b.row(
                "row discount",
                "Diskon Tier",
                &format!("-{}", format_rupiah(d.tier)),
            );
        }
        if d.global > 0.0 {
            let label = match &pricing.voucher_label {
                Some(code) => format!("Diskon Voucher ({})", code),
                None => "Diskon Voucher".to_string(),
            };
            b.row(
                "row discount",
                &label,
                &format!("-{}", format_rupiah(d.global)),
            );
        }

        b.row(
            "row grand-total",
            "Total",
            &format_rupiah(pricing.final_amount),
        );
        b.close("div");
    }

    // ── Payment ──
    fn render_payment(&self, b: &mut HtmlBuilder) {
        let pricing = &self.receipt.pricing;
        b.open("div", "payment");
        b.row("row", "Bayar", &format_rupiah(pricing.payment_amount));
        if pricing.change > 0.0 {
            b.row("row", "Kembalian", &format_rupiah(pricing.change));
        }
        b.close("div");
    }

    // ── Points ──
    fn render_points(&self, b: &mut HtmlBuilder) {
        if let Some(points) = self.receipt.points_earned {
            if points > 0 {
                b.div("points", &format!("Poin didapat: +{}", points));
            }
        }
    }

    // ── Footer ──
    fn render_footer(&self, b: &mut HtmlBuilder) {
        b.sep();
        b.open("div", "footer");
        b.div("footer-line", &self.footer.thanks_message);
        b.div("footer-line", &self.footer.return_message);
        b.div("attribution", ATTRIBUTION);
        b.close("div");
    }
}
