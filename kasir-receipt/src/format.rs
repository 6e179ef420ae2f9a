//! Currency and date formatting
//!
//! Fixed Indonesian conventions: rupiah with dot thousands separators and no
//! decimal places, dates as "Rabu, 5 Agu 2026 14.30" in Western Indonesian
//! Time (WIB, UTC+7). Every numeric display on a receipt routes through
//! [`format_rupiah`].

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::money::to_decimal;

/// Indonesian day names, Monday-first (chrono weekday numbering)
const DAY_NAMES: [&str; 7] = [
    "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
];

/// Indonesian short month names
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Receipts render in Western Indonesian Time (UTC+7)
const WIB_OFFSET_SECS: i32 = 7 * 3600;

/// Format an amount as Indonesian rupiah, no decimal places.
///
/// # Examples
///
/// ```
/// use kasir_receipt::format_rupiah;
///
/// assert_eq!(format_rupiah(1_500_000.0), "Rp 1.500.000");
/// assert_eq!(format_rupiah(0.0), "Rp 0");
/// assert_eq!(format_rupiah(-5_000.0), "-Rp 5.000");
/// ```
pub fn format_rupiah(amount: f64) -> String {
    // Round to whole rupiah first so "999.6" groups as "1.000"
    let rounded =
        to_decimal(amount).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if negative {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Format a Unix-millis timestamp for the receipt header.
///
/// Fixed pattern: `"{Hari}, {d} {Bul} {yyyy} {HH}.{MM}"`, e.g.
/// "Rabu, 5 Agu 2026 14.30". Out-of-range timestamps fall back to the epoch.
pub fn format_receipt_date(millis: i64) -> String {
    let utc = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH);
    let wib = FixedOffset::east_opt(WIB_OFFSET_SECS).expect("UTC+7 is a valid fixed offset");
    let dt = utc.with_timezone(&wib);

    let day = DAY_NAMES[dt.weekday().num_days_from_monday() as usize];
    let month = MONTH_NAMES[dt.month0() as usize];
    format!(
        "{}, {} {} {} {:02}.{:02}",
        day,
        dt.day(),
        month,
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

/// Normalize a payment method to a display label.
///
/// Title Case with `_`/`-` separators replaced by spaces; absent or blank
/// resolves to "Cash".
pub fn payment_method_label(method: Option<&str>) -> String {
    let raw = method.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return "Cash".to_string();
    }

    raw.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah_grouping() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(999.0), "Rp 999");
        assert_eq!(format_rupiah(1_000.0), "Rp 1.000");
        assert_eq!(format_rupiah(85_000.0), "Rp 85.000");
        assert_eq!(format_rupiah(1_500_000.0), "Rp 1.500.000");
        assert_eq!(format_rupiah(123_456_789.0), "Rp 123.456.789");
    }

    #[test]
    fn test_format_rupiah_rounds_half_up() {
        assert_eq!(format_rupiah(999.5), "Rp 1.000");
        assert_eq!(format_rupiah(999.4), "Rp 999");
    }

    #[test]
    fn test_format_rupiah_negative() {
        assert_eq!(format_rupiah(-5_000.0), "-Rp 5.000");
        assert_eq!(format_rupiah(-0.4), "Rp 0");
    }

    #[test]
    fn test_format_rupiah_deterministic() {
        let first = format_rupiah(1_500_000.0);
        for _ in 0..10 {
            assert_eq!(format_rupiah(1_500_000.0), first);
        }
    }

    #[test]
    fn test_format_receipt_date_golden() {
        // 2026-08-05T07:30:00Z = 14:30 WIB, a Wednesday
        assert_eq!(
            format_receipt_date(1_785_915_000_000),
            "Rabu, 5 Agu 2026 14.30"
        );
        // Epoch = 1970-01-01T07:00 WIB, a Thursday
        assert_eq!(format_receipt_date(0), "Kamis, 1 Jan 1970 07.00");
    }

    #[test]
    fn test_format_receipt_date_out_of_range() {
        assert_eq!(format_receipt_date(i64::MAX), "Kamis, 1 Jan 1970 07.00");
    }

    #[test]
    fn test_payment_method_label() {
        assert_eq!(payment_method_label(None), "Cash");
        assert_eq!(payment_method_label(Some("")), "Cash");
        assert_eq!(payment_method_label(Some("   ")), "Cash");
        assert_eq!(payment_method_label(Some("CASH")), "Cash");
        assert_eq!(payment_method_label(Some("bank_transfer")), "Bank Transfer");
        assert_eq!(payment_method_label(Some("e-wallet")), "E Wallet");
        assert_eq!(payment_method_label(Some("debit card")), "Debit Card");
    }
}
