//! Printer configuration mapping
//!
//! Translates user-facing settings (paper width class, CSS-style margin
//! shorthand in millimetres) into the physical units the stylesheet needs.

use shared::models::PaperSize;

/// mm to CSS px at 96dpi
const MM_TO_PX: f64 = 3.77953;
/// Narrow papers still get a stable preview width
const MIN_WIDTH_PX: u32 = 280;
/// Lower bound for derived body padding (mm)
const MIN_PADDING_MM: f64 = 0.5;

/// Resolved four-sided margins in millimetres
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

/// Split a margin shorthand into numeric tokens; non-numeric tokens parse to 0.
fn parse_tokens(margin: &str) -> Vec<f64> {
    margin
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .unwrap_or_else(|| {
                    tracing::warn!(token, "non-numeric margin token, treating as 0");
                    0.0
                })
        })
        .collect()
}

/// Resolve a margin shorthand into per-side values.
///
/// CSS convention: 1 token = all sides, 2 = vertical/horizontal,
/// 3 = top/horizontal/bottom, 4 = top/right/bottom/left. Any other token
/// count resolves to zero margins.
pub fn resolve_margins(margin: &str) -> Margins {
    match parse_tokens(margin).as_slice() {
        [a] => Margins {
            top: *a,
            right: *a,
            bottom: *a,
            left: *a,
        },
        [a, b] => Margins {
            top: *a,
            right: *b,
            bottom: *a,
            left: *b,
        },
        [a, b, c] => Margins {
            top: *a,
            right: *b,
            bottom: *c,
            left: *b,
        },
        [a, b, c, d] => Margins {
            top: *a,
            right: *b,
            bottom: *c,
            left: *d,
        },
        _ => Margins::default(),
    }
}

/// CSS length for one millimetre value ("5mm", "7.5mm")
fn mm(value: f64) -> String {
    format!("{}mm", value)
}

/// Produce the CSS `margin` shorthand for the page stylesheet.
///
/// Mirrors the token-count branching of [`resolve_margins`]; the empty,
/// invalid-count and all-zero cases collapse to the literal "0mm".
pub fn css_margin(margin: &str) -> String {
    let tokens = parse_tokens(margin);
    if tokens.iter().all(|&v| v == 0.0) {
        return "0mm".to_string();
    }
    match tokens.as_slice() {
        [a] => mm(*a),
        [a, b] => format!("{} {}", mm(*a), mm(*b)),
        [a, b, c] => format!("{} {} {}", mm(*a), mm(*b), mm(*c)),
        [a, b, c, d] => format!("{} {} {} {}", mm(*a), mm(*b), mm(*c), mm(*d)),
        _ => "0mm".to_string(),
    }
}

/// Derive in-document body padding from resolved margins.
///
/// Each side is half the page margin, clamped to at least 0.5mm, so page
/// margin and in-document padding do not double up visually. An all-zero
/// margin still pads 1mm for legibility.
pub fn body_padding(margins: &Margins) -> String {
    if margins.is_zero() {
        return "1mm".to_string();
    }
    let half = |v: f64| (v / 2.0).max(MIN_PADDING_MM);
    format!(
        "{} {} {} {}",
        mm(half(margins.top)),
        mm(half(margins.right)),
        mm(half(margins.bottom)),
        mm(half(margins.left))
    )
}

/// Pixel width ceiling for the rendered document.
///
/// mm converted at 96dpi, floored at 280px so preview and print layout stay
/// stable on narrow paper.
pub fn paper_width_px(paper: PaperSize) -> u32 {
    let px = (paper.width_mm() as f64 * MM_TO_PX).ceil() as u32;
    px.max(MIN_WIDTH_PX)
}
