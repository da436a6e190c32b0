//! # Symbology Registry
//!
//! Static metadata for every supported symbology.
//!
//! | Symbology | Digits | Letters | Kind |
//! |-----------|--------|---------|------|
//! | EAN-13 | 13 | no | 1D |
//! | EAN-8 | 8 | no | 1D |
//! | UPC-A | 12 | no | 1D |
//! | Code 128 | variable | yes | 1D |
//! | Aztec | variable | yes | 2D |
//! | PDF417 | variable | yes | 2D |
//! | QR Code | variable | yes | 2D |
//!
//! The table is process-wide and read-only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::checksum::{self, ChecksumScheme};

/// A barcode / 2D code standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Symbology {
    Ean13,
    Ean8,
    UpcA,
    Code128,
    Aztec,
    Pdf417,
    Qr,
}

/// Per-symbology metadata row.
#[derive(Debug, Clone, Copy)]
struct Meta {
    name: &'static str,
    label: &'static str,
    required_digits: Option<usize>,
    allows_letters: bool,
    is_2d: bool,
}

static META: [Meta; 7] = [
    Meta {
        name: "ean13",
        label: "EAN-13",
        required_digits: Some(13),
        allows_letters: false,
        is_2d: false,
    },
    Meta {
        name: "ean8",
        label: "EAN-8",
        required_digits: Some(8),
        allows_letters: false,
        is_2d: false,
    },
    Meta {
        name: "upca",
        label: "UPC-A",
        required_digits: Some(12),
        allows_letters: false,
        is_2d: false,
    },
    Meta {
        name: "code128",
        label: "Code 128",
        required_digits: None,
        allows_letters: true,
        is_2d: false,
    },
    Meta {
        name: "aztec",
        label: "Aztec",
        required_digits: None,
        allows_letters: true,
        is_2d: true,
    },
    Meta {
        name: "pdf417",
        label: "PDF417",
        required_digits: None,
        allows_letters: true,
        is_2d: true,
    },
    Meta {
        name: "qr",
        label: "QR Code",
        required_digits: None,
        allows_letters: true,
        is_2d: true,
    },
];

impl Symbology {
    /// All symbologies, in display order.
    pub const ALL: [Symbology; 7] = [
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::UpcA,
        Symbology::Code128,
        Symbology::Aztec,
        Symbology::Pdf417,
        Symbology::Qr,
    ];

    fn meta(self) -> &'static Meta {
        &META[self as usize]
    }

    /// Short lowercase identifier (e.g. `"ean13"`).
    pub fn name(self) -> &'static str {
        self.meta().name
    }

    /// Human-readable label (e.g. `"EAN-13"`).
    pub fn label(self) -> &'static str {
        self.meta().label
    }

    /// Full digit count for fixed-length numeric symbologies.
    pub fn required_digit_length(self) -> Option<usize> {
        self.meta().required_digits
    }

    pub fn allows_letters(self) -> bool {
        self.meta().allows_letters
    }

    pub fn is_2d(self) -> bool {
        self.meta().is_2d
    }

    /// Check-digit scheme for the EAN/UPC family.
    pub fn checksum_scheme(self) -> Option<ChecksumScheme> {
        match self {
            Symbology::Ean13 => Some(ChecksumScheme::Ean13),
            Symbology::Ean8 => Some(ChecksumScheme::Ean8),
            Symbology::UpcA => Some(ChecksumScheme::UpcA),
            _ => None,
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Symbology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "ean13" | "jan13" => Ok(Symbology::Ean13),
            "ean8" | "jan8" => Ok(Symbology::Ean8),
            "upca" | "upc" => Ok(Symbology::UpcA),
            "code128" => Ok(Symbology::Code128),
            "aztec" => Ok(Symbology::Aztec),
            "pdf417" => Ok(Symbology::Pdf417),
            "qr" | "qrcode" => Ok(Symbology::Qr),
            _ => Err(format!(
                "Unknown symbology '{}'. Expected one of: {}",
                s,
                Symbology::ALL.map(Symbology::name).join(", ")
            )),
        }
    }
}

impl TryFrom<String> for Symbology {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Symbology> for String {
    fn from(value: Symbology) -> Self {
        value.name().to_string()
    }
}

/// Whether `content` is acceptable input for `symbology`.
///
/// Variable-length symbologies accept any non-empty content. Fixed-length
/// numeric symbologies accept content whose digits number either the full
/// length or one less (the check digit is then computed).
pub fn is_valid_barcode(content: &str, symbology: Symbology) -> bool {
    match symbology.required_digit_length() {
        Some(required) => {
            let count = checksum::digits_of(content).len();
            count == required || count + 1 == required
        }
        None => !content.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_table_order() {
        for symbology in Symbology::ALL {
            assert_eq!(symbology.meta().name, symbology.name());
            assert_eq!(symbology.name().parse::<Symbology>(), Ok(symbology));
        }
    }

    #[test]
    fn test_required_lengths() {
        assert_eq!(Symbology::Ean13.required_digit_length(), Some(13));
        assert_eq!(Symbology::Ean8.required_digit_length(), Some(8));
        assert_eq!(Symbology::UpcA.required_digit_length(), Some(12));
        assert_eq!(Symbology::Qr.required_digit_length(), None);
        assert_eq!(Symbology::Code128.required_digit_length(), None);
    }

    #[test]
    fn test_fixed_length_implies_numeric() {
        for symbology in Symbology::ALL {
            if symbology.required_digit_length().is_some() {
                assert!(!symbology.allows_letters());
                assert!(!symbology.is_2d());
                assert!(symbology.checksum_scheme().is_some());
            }
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("EAN-13".parse::<Symbology>(), Ok(Symbology::Ean13));
        assert_eq!("upc_a".parse::<Symbology>(), Ok(Symbology::UpcA));
        assert_eq!("QRCode".parse::<Symbology>(), Ok(Symbology::Qr));
        assert!("code39".parse::<Symbology>().is_err());
    }

    #[test]
    fn test_serde_by_name() {
        let json = serde_json::to_string(&Symbology::Pdf417).unwrap();
        assert_eq!(json, "\"pdf417\"");
        let parsed: Symbology = serde_json::from_str("\"ean-8\"").unwrap();
        assert_eq!(parsed, Symbology::Ean8);
    }

    #[test]
    fn test_is_valid_barcode() {
        assert!(is_valid_barcode("690123456789", Symbology::Ean13));
        assert!(is_valid_barcode("6901234567892", Symbology::Ean13));
        assert!(!is_valid_barcode("69012345678", Symbology::Ean13));
        assert!(is_valid_barcode("690-1234-5678-9", Symbology::Ean13));
        assert!(is_valid_barcode("hello", Symbology::Qr));
        assert!(!is_valid_barcode("", Symbology::Qr));
        assert!(!is_valid_barcode("", Symbology::Ean8));
    }
}
