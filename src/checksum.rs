//! # Check Digit Arithmetic
//!
//! Weighted modulo-10 check digits for the EAN/UPC family.
//!
//! ## Weighting
//!
//! | Scheme | Data digits | Even index | Odd index |
//! |--------|-------------|------------|-----------|
//! | EAN-13 | 12 | 1 | 3 |
//! | EAN-8 | 7 | 3 | 1 |
//! | UPC-A | 11 | 3 | 1 |
//!
//! In all three the rightmost data digit carries weight 3, which is what the
//! GS1 definition prescribes. The check digit closes the weighted sum to the
//! next multiple of ten:
//!
//! ```text
//! check = (10 - (sum mod 10)) mod 10
//! ```
//!
//! ```
//! use barcraft::checksum::{compute_check_digit, ChecksumScheme};
//!
//! let digits = [6, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//! assert_eq!(compute_check_digit(&digits, ChecksumScheme::Ean13), Ok(2));
//! ```

use std::fmt;
use thiserror::Error;

/// Check-digit scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumScheme {
    Ean13,
    Ean8,
    UpcA,
}

impl ChecksumScheme {
    /// Number of data digits the check digit is computed over.
    pub fn data_length(self) -> usize {
        match self {
            ChecksumScheme::Ean13 => 12,
            ChecksumScheme::Ean8 => 7,
            ChecksumScheme::UpcA => 11,
        }
    }

    #[inline]
    fn weight(self, index: usize) -> u32 {
        let even = index % 2 == 0;
        match (self, even) {
            (ChecksumScheme::Ean13, true) => 1,
            (ChecksumScheme::Ean13, false) => 3,
            (_, true) => 3,
            (_, false) => 1,
        }
    }
}

impl fmt::Display for ChecksumScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChecksumScheme::Ean13 => "EAN-13",
            ChecksumScheme::Ean8 => "EAN-8",
            ChecksumScheme::UpcA => "UPC-A",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    #[error("{scheme} expects {expected} digits, got {found}")]
    InvalidLength {
        scheme: ChecksumScheme,
        expected: usize,
        found: usize,
    },
}

/// Compute the check digit over exactly `scheme.data_length()` digits.
///
/// Each element must be in `0..=9`.
pub fn compute_check_digit(digits: &[u8], scheme: ChecksumScheme) -> Result<u8, ChecksumError> {
    let expected = scheme.data_length();
    if digits.len() != expected {
        return Err(ChecksumError::InvalidLength {
            scheme,
            expected,
            found: digits.len(),
        });
    }

    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d as u32 * scheme.weight(i))
        .sum();

    Ok(((10 - sum % 10) % 10) as u8)
}

/// Verify the trailing check digit of a full-length code.
pub fn verify_check_digit(digits: &[u8], scheme: ChecksumScheme) -> Result<bool, ChecksumError> {
    let expected = scheme.data_length() + 1;
    let Some((&check, data)) = digits.split_last().filter(|_| digits.len() == expected) else {
        return Err(ChecksumError::InvalidLength {
            scheme,
            expected,
            found: digits.len(),
        });
    };
    Ok(compute_check_digit(data, scheme)? == check)
}

/// Decimal digits of `content`, in order, as values `0..=9`.
pub fn digits_of(content: &str) -> Vec<u8> {
    content
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ean13_check_digit() {
        let digits = [6, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(compute_check_digit(&digits, ChecksumScheme::Ean13), Ok(2));
    }

    #[test]
    fn test_ean13_known_codes() {
        // 4006381333931, 5901234123457
        assert_eq!(
            compute_check_digit(&digits_of("400638133393"), ChecksumScheme::Ean13),
            Ok(1)
        );
        assert_eq!(
            compute_check_digit(&digits_of("590123412345"), ChecksumScheme::Ean13),
            Ok(7)
        );
    }

    #[test]
    fn test_upca_check_digit() {
        let digits = [0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5];
        assert_eq!(compute_check_digit(&digits, ChecksumScheme::UpcA), Ok(2));
    }

    #[test]
    fn test_ean8_check_digit() {
        // 55123457 and 96385074 are published EAN-8 examples
        assert_eq!(
            compute_check_digit(&digits_of("5512345"), ChecksumScheme::Ean8),
            Ok(7)
        );
        assert_eq!(
            compute_check_digit(&digits_of("9638507"), ChecksumScheme::Ean8),
            Ok(4)
        );
    }

    #[test]
    fn test_check_digit_zero() {
        // Sum already a multiple of ten
        assert_eq!(compute_check_digit(&[0; 12], ChecksumScheme::Ean13), Ok(0));
    }

    #[test]
    fn test_invalid_length() {
        let err = compute_check_digit(&[1, 2, 3], ChecksumScheme::Ean13).unwrap_err();
        assert_eq!(
            err,
            ChecksumError::InvalidLength {
                scheme: ChecksumScheme::Ean13,
                expected: 12,
                found: 3,
            }
        );
    }

    #[test]
    fn test_verify() {
        assert_eq!(
            verify_check_digit(&digits_of("036000291452"), ChecksumScheme::UpcA),
            Ok(true)
        );
        assert_eq!(
            verify_check_digit(&digits_of("036000291453"), ChecksumScheme::UpcA),
            Ok(false)
        );
        assert!(verify_check_digit(&digits_of("03600029145"), ChecksumScheme::UpcA).is_err());
    }

    #[test]
    fn test_digits_of_filters() {
        assert_eq!(digits_of("a1-2 3x"), vec![1, 2, 3]);
        assert!(digits_of("abc").is_empty());
    }
}
