//! # Linear Bar Encoding
//!
//! Turns payloads into 1D bar/space module strings.
//!
//! ## EAN/UPC Layout
//!
//! ```text
//! EAN-13: 101 | d2..d7 (L/G by d1) | 01010 | d8..d13 (R) | 101   = 95 modules
//! EAN-8:  101 | d1..d4 (L)         | 01010 | d5..d8 (R)  | 101   = 67 modules
//! UPC-A:  encoded as EAN-13 with a leading 0
//! ```
//!
//! Content is filtered to digits first. Either the full digit count or one
//! short of it is accepted; a missing check digit is computed.
//!
//! ## Example
//!
//! ```
//! use barcraft::linear;
//! use barcraft::Symbology;
//!
//! let bars = linear::encode("690123456789", Symbology::Ean13).unwrap();
//! assert_eq!(bars.code(), Some("6901234567892"));
//! assert_eq!(bars.len(), 95);
//! ```

mod code128;
pub mod raster;
pub mod tables;

pub use raster::render_bars;

use std::fmt;
use tracing::debug;

use crate::checksum::{self, compute_check_digit};
use crate::error::EncodeError;
use crate::symbology::Symbology;
use tables::{CENTER_GUARD, END_GUARD, FIRST_DIGIT_PARITY, LEFT_EVEN, LEFT_ODD, RIGHT, START_GUARD};

/// A finished 1D symbol as a string of `'0'` (space) and `'1'` (bar) modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearBarString {
    modules: String,
    /// Full numeric code (with check digit) for EAN/UPC symbols.
    code: Option<String>,
}

impl LinearBarString {
    /// Build from raw module values (non-zero = bar).
    pub fn from_modules(modules: &[u8]) -> Self {
        Self {
            modules: modules
                .iter()
                .map(|&m| if m != 0 { '1' } else { '0' })
                .collect(),
            code: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.modules
    }

    /// Number of modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// The check-digit-completed code, for EAN/UPC symbols.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Modules as booleans (`true` = bar).
    pub fn modules(&self) -> impl Iterator<Item = bool> + '_ {
        self.modules.bytes().map(|b| b == b'1')
    }
}

impl fmt::Display for LinearBarString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.modules)
    }
}

/// Encode `content` as a linear symbol.
///
/// Accepts the EAN/UPC family and Code 128. 2D symbologies are rejected.
pub fn encode(content: &str, symbology: Symbology) -> Result<LinearBarString, EncodeError> {
    match symbology {
        Symbology::Ean13 | Symbology::Ean8 | Symbology::UpcA => encode_numeric(content, symbology),
        Symbology::Code128 => code128::encode(content),
        Symbology::Aztec | Symbology::Pdf417 | Symbology::Qr => Err(EncodeError::Generator {
            symbology,
            reason: "not a linear symbology".to_string(),
        }),
    }
}

/// Validate and complete the digits of a fixed-length numeric symbology.
///
/// Returns the full code including the check digit. A supplied check digit
/// is kept as-is.
pub fn complete_digits(content: &str, symbology: Symbology) -> Result<Vec<u8>, EncodeError> {
    let (Some(required), Some(scheme)) =
        (symbology.required_digit_length(), symbology.checksum_scheme())
    else {
        return Err(EncodeError::Generator {
            symbology,
            reason: "not a fixed-length numeric symbology".to_string(),
        });
    };

    let mut digits = checksum::digits_of(content);
    if digits.len() == required {
        return Ok(digits);
    }
    if digits.len() + 1 != required {
        return Err(EncodeError::InvalidDigitCount {
            symbology,
            expected: required,
            found: digits.len(),
        });
    }

    let check = compute_check_digit(&digits, scheme).map_err(|_| EncodeError::InvalidDigitCount {
        symbology,
        expected: required,
        found: digits.len(),
    })?;
    digits.push(check);
    Ok(digits)
}

fn encode_numeric(content: &str, symbology: Symbology) -> Result<LinearBarString, EncodeError> {
    let digits = complete_digits(content, symbology)?;
    let code: String = digits.iter().map(|d| char::from(b'0' + d)).collect();

    let modules = match symbology {
        Symbology::Ean8 => assemble_ean8(&digits),
        Symbology::UpcA => {
            let mut ean = Vec::with_capacity(13);
            ean.push(0);
            ean.extend_from_slice(&digits);
            assemble_ean13(&ean)
        }
        _ => assemble_ean13(&digits),
    };

    debug!(%symbology, code = %code, modules = modules.len(), "encoded linear symbol");

    Ok(LinearBarString {
        modules,
        code: Some(code),
    })
}

/// Assemble 13 digits into 95 modules.
fn assemble_ean13(digits: &[u8]) -> String {
    let parity = FIRST_DIGIT_PARITY[digits[0] as usize].as_bytes();
    let mut out = String::with_capacity(95);

    out.push_str(START_GUARD);
    for (i, &d) in digits[1..7].iter().enumerate() {
        let table = if parity[i] == b'G' { &LEFT_EVEN } else { &LEFT_ODD };
        out.push_str(table[d as usize]);
    }
    out.push_str(CENTER_GUARD);
    for &d in &digits[7..13] {
        out.push_str(RIGHT[d as usize]);
    }
    out.push_str(END_GUARD);
    out
}

/// Assemble 8 digits into 67 modules.
fn assemble_ean8(digits: &[u8]) -> String {
    let mut out = String::with_capacity(67);

    out.push_str(START_GUARD);
    for &d in &digits[..4] {
        out.push_str(LEFT_ODD[d as usize]);
    }
    out.push_str(CENTER_GUARD);
    for &d in &digits[4..8] {
        out.push_str(RIGHT[d as usize]);
    }
    out.push_str(END_GUARD);
    out
}
