//! # Upstream 2D Generators
//!
//! Thin adapters over third-party encoders that implement the public
//! symbology standards. Each one renders its symbol at native resolution:
//! one pixel per module, dark = [`DARK`], light = 255, with the encoder's
//! own quiet zone left in place.
//!
//! | Symbology | Crate | Error correction |
//! |-----------|-------|------------------|
//! | QR Code | `qrcode` | L / M / Q / H |
//! | Aztec | `rxing` | minimum check-word share: 10 / 23 / 36 / 50% |
//! | PDF417 | `pdf417` | chosen by the encoder to fill the grid |

use image::{GrayImage, Luma};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::DARK;
use crate::error::EncodeError;
use crate::symbology::Symbology;

const LIGHT: u8 = 255;

/// Error correction strength requested from a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCorrection {
    /// ~7% recovery
    Low,
    /// ~15% recovery
    #[default]
    Medium,
    /// ~25% recovery
    Quartile,
    /// ~30% recovery
    High,
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorCorrection::Low => "L",
            ErrorCorrection::Medium => "M",
            ErrorCorrection::Quartile => "Q",
            ErrorCorrection::High => "H",
        })
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "l" | "low" => Ok(ErrorCorrection::Low),
            "m" | "medium" => Ok(ErrorCorrection::Medium),
            "q" | "quartile" => Ok(ErrorCorrection::Quartile),
            "h" | "high" => Ok(ErrorCorrection::High),
            _ => Err(format!("Unknown error correction level '{}'", s)),
        }
    }
}

/// A black-box 2D symbol encoder.
pub trait SymbolGenerator: Send + Sync {
    fn symbology(&self) -> Symbology;

    /// Render `payload` as a native-resolution bitmap.
    fn generate(&self, payload: &str, ec: ErrorCorrection) -> Result<GrayImage, EncodeError>;
}

/// Get the generator for a 2D symbology.
pub fn generator_for(symbology: Symbology) -> Option<Box<dyn SymbolGenerator>> {
    match symbology {
        Symbology::Qr => Some(Box::new(QrGenerator)),
        Symbology::Aztec => Some(Box::new(AztecGenerator)),
        Symbology::Pdf417 => Some(Box::new(Pdf417Generator)),
        _ => None,
    }
}

fn generator_error(symbology: Symbology, reason: impl Into<String>) -> EncodeError {
    EncodeError::Generator {
        symbology,
        reason: reason.into(),
    }
}

/// Paint a module grid onto a light canvas with a quiet zone.
fn paint_modules(
    width: usize,
    height: usize,
    quiet_zone: usize,
    is_dark: impl Fn(usize, usize) -> bool,
) -> GrayImage {
    let total_w = (width + 2 * quiet_zone) as u32;
    let total_h = (height + 2 * quiet_zone) as u32;

    GrayImage::from_fn(total_w, total_h, |x, y| {
        let (x, y) = (x as usize, y as usize);
        let inside = x >= quiet_zone
            && y >= quiet_zone
            && x < quiet_zone + width
            && y < quiet_zone + height;
        if inside && is_dark(x - quiet_zone, y - quiet_zone) {
            Luma([DARK])
        } else {
            Luma([LIGHT])
        }
    })
}

// ============================================================================
// QR CODE
// ============================================================================

/// QR Code via the `qrcode` crate.
pub struct QrGenerator;

impl QrGenerator {
    /// Quiet zone in modules, per ISO/IEC 18004.
    pub const QUIET_ZONE: usize = 4;
}

impl SymbolGenerator for QrGenerator {
    fn symbology(&self) -> Symbology {
        Symbology::Qr
    }

    fn generate(&self, payload: &str, ec: ErrorCorrection) -> Result<GrayImage, EncodeError> {
        use qrcode::{EcLevel, QrCode};

        let ec_level = match ec {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        };

        let code = QrCode::with_error_correction_level(payload.as_bytes(), ec_level)
            .map_err(|e| generator_error(Symbology::Qr, e.to_string()))?;

        let width = code.width();
        debug!(modules = width, ec = %ec, "generated QR code");

        Ok(paint_modules(width, width, Self::QUIET_ZONE, |x, y| {
            code[(x, y)] == qrcode::Color::Dark
        }))
    }
}

// ============================================================================
// AZTEC
// ============================================================================

/// Aztec via the `rxing` crate.
///
/// rxing emits the symbol without a quiet zone; one is added for parity
/// with the other generators.
pub struct AztecGenerator;

impl AztecGenerator {
    pub const QUIET_ZONE: usize = 2;
    /// Let the encoder pick the layer count.
    const AUTO_LAYERS: i32 = 0;

    /// Minimum share of check words, in percent of the symbol.
    pub fn ec_percent(ec: ErrorCorrection) -> u32 {
        match ec {
            ErrorCorrection::Low => 10,
            ErrorCorrection::Medium => 23,
            ErrorCorrection::Quartile => 36,
            ErrorCorrection::High => 50,
        }
    }
}

impl SymbolGenerator for AztecGenerator {
    fn symbology(&self) -> Symbology {
        Symbology::Aztec
    }

    fn generate(&self, payload: &str, ec: ErrorCorrection) -> Result<GrayImage, EncodeError> {
        use rxing::aztec::encoder::aztec_encoder as encoder;

        let percent = Self::ec_percent(ec);
        let code = encoder::encode(payload, percent, Self::AUTO_LAYERS)
            .map_err(|e| generator_error(Symbology::Aztec, e.to_string()))?;
        let matrix = code.getMatrix();

        let width = matrix.getWidth() as usize;
        let height = matrix.getHeight() as usize;
        debug!(width, height, ec_percent = percent, "generated Aztec code");

        Ok(paint_modules(width, height, Self::QUIET_ZONE, |x, y| {
            matrix.get(x as u32, y as u32)
        }))
    }
}

// ============================================================================
// PDF417
// ============================================================================

/// PDF417 via the `pdf417` crate.
///
/// The grid is grown column-first until the payload fits. Each codeword row
/// is drawn [`Pdf417Generator::ROW_HEIGHT`] modules tall.
pub struct Pdf417Generator;

impl Pdf417Generator {
    pub const ROW_HEIGHT: usize = 3;
    pub const QUIET_ZONE: usize = 2;
    const COLUMN_LADDER: [u8; 10] = [2, 4, 6, 8, 10, 12, 16, 20, 24, 30];
    const MIN_ROWS: u8 = 3;
    const MAX_ROWS: u8 = 90;
    /// Largest codeword count a PDF417 symbol may hold.
    pub const MAX_CODEWORDS: u16 = 928;

    /// Module width of a symbol with `cols` data columns.
    ///
    /// start + left row indicator + data + right row indicator + end
    pub fn module_width(cols: u8) -> usize {
        use pdf417::{END_PATTERN, START_PATTERN};

        START_PATTERN.size() as usize + 17 + cols as usize * 17 + 17 + END_PATTERN.size() as usize
    }

    /// Encode into the smallest grid on the ladder; returns (rows, cols, bits).
    ///
    /// Grids above [`Self::MAX_CODEWORDS`] are never tried.
    fn encode_grid(payload: &str) -> Option<(u8, u8, Vec<bool>)> {
        use pdf417::{PDF417, PDF417Encoder};

        for cols in Self::COLUMN_LADDER {
            let max_rows = (cols as u16 * 4)
                .min(Self::MAX_CODEWORDS / cols as u16)
                .clamp(Self::MIN_ROWS as u16, Self::MAX_ROWS as u16) as u8;
            for rows in Self::MIN_ROWS..=max_rows {
                if rows as u16 * cols as u16 > Self::MAX_CODEWORDS {
                    break;
                }
                let mut codewords = vec![0u16; rows as usize * cols as usize];
                let Some((level, filled)) = PDF417Encoder::new(&mut codewords[..], false)
                    .append_ascii(payload)
                    .fit_seal()
                else {
                    continue;
                };

                let barcode = PDF417::new(filled, rows, cols, level);
                let bits: Vec<bool> = barcode.bits().collect();
                return Some((rows, cols, bits));
            }
        }
        None
    }
}

impl SymbolGenerator for Pdf417Generator {
    fn symbology(&self) -> Symbology {
        Symbology::Pdf417
    }

    fn generate(&self, payload: &str, _ec: ErrorCorrection) -> Result<GrayImage, EncodeError> {
        if !payload.is_ascii() {
            return Err(generator_error(
                Symbology::Pdf417,
                "only ASCII content is supported",
            ));
        }

        let (rows, cols, bits) = Self::encode_grid(payload)
            .ok_or_else(|| generator_error(Symbology::Pdf417, "content too long"))?;

        let width = Self::module_width(cols);
        let height = rows as usize * Self::ROW_HEIGHT;
        debug!(rows, cols, width, "generated PDF417 code");

        Ok(paint_modules(width, height, Self::QUIET_ZONE, |x, y| {
            bits.get((y / Self::ROW_HEIGHT) * width + x)
                .copied()
                .unwrap_or(false)
        }))
    }
}
