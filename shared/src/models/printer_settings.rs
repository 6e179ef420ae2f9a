//! Printer Settings Model
//!
//! Physical and typographic configuration for the thermal receipt printer.
//! Read from local configuration storage at render time; never owned here.

use serde::{Deserialize, Serialize};

/// Physical thermal paper width class.
///
/// Stored as the numeric width in millimetres. Anything outside the
/// supported set decodes to the 58mm default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum PaperSize {
    Mm44,
    Mm57,
    #[default]
    Mm58,
    Mm76,
    Mm78,
    Mm80,
}

impl PaperSize {
    /// Physical width in millimetres.
    pub fn width_mm(self) -> u32 {
        match self {
            PaperSize::Mm44 => 44,
            PaperSize::Mm57 => 57,
            PaperSize::Mm58 => 58,
            PaperSize::Mm76 => 76,
            PaperSize::Mm78 => 78,
            PaperSize::Mm80 => 80,
        }
    }
}

impl From<u32> for PaperSize {
    fn from(value: u32) -> Self {
        match value {
            44 => PaperSize::Mm44,
            57 => PaperSize::Mm57,
            58 => PaperSize::Mm58,
            76 => PaperSize::Mm76,
            78 => PaperSize::Mm78,
            80 => PaperSize::Mm80,
            other => {
                tracing::warn!(width = other, "unknown paper width, falling back to 58mm");
                PaperSize::Mm58
            }
        }
    }
}

impl From<PaperSize> for u32 {
    fn from(value: PaperSize) -> Self {
        value.width_mm()
    }
}

/// Printer settings (read from local configuration storage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrinterSettings {
    pub paper_size: PaperSize,
    /// CSS-style margin shorthand in millimetres: "5", "5 10", "5 10 15 20"
    pub margin: String,
    pub copies: u32,
    pub font_family: String,
    pub font_size_px: u32,
    /// Unitless multiplier
    pub line_height: f64,
    pub enable_bold: bool,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::default(),
            margin: "0".to_string(),
            copies: 1,
            font_family: "Courier New".to_string(),
            font_size_px: 12,
            line_height: 1.3,
            enable_bold: true,
        }
    }
}
