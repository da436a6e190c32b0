//! EAN/UPC symbol character tables.
//!
//! Each digit encodes to 7 modules. Left-half digits use either the odd-parity
//! `L` set or the even-parity `G` set; right-half digits use the `R` set.
//! For EAN-13 the parity sequence of the left half encodes the first digit.

/// Left-half odd parity (set A / "L").
pub const LEFT_ODD: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011", "0110001", "0101111", "0111011",
    "0110111", "0001011",
];

/// Left-half even parity (set B / "G").
pub const LEFT_EVEN: [&str; 10] = [
    "0100111", "0110011", "0011011", "0100001", "0011101", "0111001", "0000101", "0010001",
    "0001001", "0010111",
];

/// Right half (set C / "R").
pub const RIGHT: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100", "1001110", "1010000", "1000100",
    "1001000", "1110100",
];

/// EAN-13 left-half parity pattern, indexed by the first digit.
pub const FIRST_DIGIT_PARITY: [&str; 10] = [
    "LLLLLL", "LLGLGG", "LLGGLG", "LLGGGL", "LGLLGG", "LGGLLG", "LGGGLL", "LGLGLG", "LGLGGL",
    "LGGLGL",
];

pub const START_GUARD: &str = "101";
pub const CENTER_GUARD: &str = "01010";
pub const END_GUARD: &str = "101";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_seven_modules() {
        for table in [LEFT_ODD, LEFT_EVEN, RIGHT] {
            for code in table {
                assert_eq!(code.len(), 7);
                assert!(code.chars().all(|c| c == '0' || c == '1'));
            }
        }
    }

    #[test]
    fn test_right_is_complement_of_left_odd() {
        for (l, r) in LEFT_ODD.iter().zip(RIGHT.iter()) {
            let complement: String = l
                .chars()
                .map(|c| if c == '0' { '1' } else { '0' })
                .collect();
            assert_eq!(&complement, r);
        }
    }

    #[test]
    fn test_left_even_is_reversed_right() {
        for (g, r) in LEFT_EVEN.iter().zip(RIGHT.iter()) {
            let reversed: String = r.chars().rev().collect();
            assert_eq!(&reversed, g);
        }
    }

    #[test]
    fn test_parity_patterns() {
        for pattern in FIRST_DIGIT_PARITY {
            assert_eq!(pattern.len(), 6);
            assert!(pattern.starts_with('L'));
        }
        assert_eq!(FIRST_DIGIT_PARITY[0], "LLLLLL");
    }
}
