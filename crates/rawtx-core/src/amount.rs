//! Decimal amount parsing and formatting.
//!
//! Amounts are entered in ether as decimal strings and carried internally as
//! integers in wei (18 decimal places below ether).
//!
//! # Example
//!
//! ```rust
//! use rawtx_core::amount::{format_amount, parse_amount, ETHER_DECIMALS};
//! use rawtx_core::U256;
//!
//! let wei = parse_amount("1.5").unwrap();
//! assert_eq!(wei, U256::from(1_500_000_000_000_000_000u128));
//! assert_eq!(format_amount(wei, ETHER_DECIMALS), "1.5");
//! ```

use alloy_primitives::U256;

use crate::error::{FormatError, FormatResult};

/// Number of decimal places between ether and wei.
pub const ETHER_DECIMALS: u8 = 18;

/// Parse a decimal ether amount into wei.
///
/// The input is split on `.`; the integer and fractional digits are joined
/// into a single integer `fval` with `P` fractional places, and the result is
/// `fval * 10^18 / 10^P` with truncating division. Fractional digits past the
/// 18th are therefore dropped.
///
/// No whitespace trimming, signs or digit separators are accepted.
///
/// # Errors
///
/// - [`FormatError::MultipleDecimalPoints`] if the input has more than one `.`
/// - [`FormatError::InvalidAmount`] if there are no digits or a non-digit character
/// - [`FormatError::AmountOverflow`] if the result does not fit in 256 bits
pub fn parse_amount(text: &str) -> FormatResult<U256> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() > 2 {
        return Err(FormatError::MultipleDecimalPoints);
    }

    let integer = parts[0];
    let fraction = parts.get(1).copied().unwrap_or_default();

    if integer.is_empty() && fraction.is_empty() {
        return Err(FormatError::invalid_amount(text));
    }
    if !is_digits(integer) || !is_digits(fraction) {
        return Err(FormatError::invalid_amount(text));
    }

    let decimals = usize::from(ETHER_DECIMALS);
    let kept = &fraction[..fraction.len().min(decimals)];

    let mut scaled = String::with_capacity(integer.len() + decimals);
    scaled.push_str(integer);
    scaled.push_str(kept);
    scaled.extend(std::iter::repeat('0').take(decimals - kept.len()));

    U256::from_str_radix(&scaled, 10).map_err(|_| FormatError::amount_overflow(text))
}

/// Parse a plain base-10 integer such as a gas price or gas limit.
///
/// Returns `None` for empty input, any non-digit character, or a value that
/// does not fit in 256 bits.
#[must_use]
pub fn parse_integer(text: &str) -> Option<U256> {
    if text.is_empty() || !is_digits(text) {
        return None;
    }
    U256::from_str_radix(text, 10).ok()
}

/// Format a base-unit amount with the given number of decimals.
///
/// Trailing zeros in the fractional part are removed, and the decimal point
/// is omitted for whole amounts.
///
/// # Examples
///
/// ```rust
/// use rawtx_core::amount::format_amount;
/// use rawtx_core::U256;
///
/// assert_eq!(format_amount(U256::from(1_000_000_000_000_000_000u64), 18), "1");
/// assert_eq!(format_amount(U256::from(1u64), 18), "0.000000000000000001");
/// assert_eq!(format_amount(U256::ZERO, 18), "0");
/// ```
#[must_use]
pub fn format_amount(amount: U256, decimals: u8) -> String {
    let digits = amount.to_string();
    let decimals = usize::from(decimals);

    if amount.is_zero() {
        return "0".to_string();
    }

    let padded = if digits.len() <= decimals {
        format!("{digits:0>width$}", width = decimals + 1)
    } else {
        digits
    };

    let (integer_part, decimal_part) = padded.split_at(padded.len() - decimals);
    let decimal_trimmed = decimal_part.trim_end_matches('0');

    if decimal_trimmed.is_empty() {
        integer_part.to_string()
    } else {
        format!("{integer_part}.{decimal_trimmed}")
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use proptest::prelude::*;

    fn ether(n: u64) -> U256 {
        U256::from(n) * U256::from(10u64).pow(U256::from(18u64))
    }

    // ------------------------------------------------------------------------
    // parse_amount
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_whole_ether() {
        assert_eq!(parse_amount("1").unwrap(), ether(1));
        assert_eq!(parse_amount("0").unwrap(), U256::ZERO);
        assert_eq!(parse_amount("250").unwrap(), ether(250));
    }

    #[test]
    fn test_parse_fractional_ether() {
        assert_eq!(
            parse_amount("1.5").unwrap(),
            U256::from(1_500_000_000_000_000_000u128)
        );
        assert_eq!(
            parse_amount("0.000000000000000001").unwrap(),
            U256::from(1u64)
        );
        assert_eq!(
            parse_amount("0.01").unwrap(),
            U256::from(10_000_000_000_000_000u64)
        );
    }

    #[test]
    fn test_parse_trailing_point() {
        assert_eq!(parse_amount("5.").unwrap(), ether(5));
    }

    #[test]
    fn test_parse_leading_point() {
        assert_eq!(
            parse_amount(".5").unwrap(),
            U256::from(500_000_000_000_000_000u64)
        );
    }

    #[test]
    fn test_parse_truncates_below_one_wei() {
        assert_eq!(
            parse_amount("0.0000000000000000019").unwrap(),
            U256::from(1u64)
        );
        assert_eq!(parse_amount("0.0000000000000000009").unwrap(), U256::ZERO);
    }

    #[test]
    fn test_parse_leading_zeros() {
        assert_eq!(parse_amount("007.25").unwrap(), parse_amount("7.25").unwrap());
    }

    #[test]
    fn test_parse_multiple_points() {
        assert_eq!(
            parse_amount("1.2.3").unwrap_err(),
            FormatError::MultipleDecimalPoints
        );
        assert_eq!(
            parse_amount("..").unwrap_err(),
            FormatError::MultipleDecimalPoints
        );
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        for input in ["abc", "", ".", "1a", "1.5e3", "-1", "+1", " 1", "1 ", "1_000"] {
            assert!(
                matches!(
                    parse_amount(input),
                    Err(FormatError::InvalidAmount { .. })
                ),
                "expected InvalidAmount for {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_overflow() {
        let too_big = "9".repeat(80);
        assert!(matches!(
            parse_amount(&too_big),
            Err(FormatError::AmountOverflow { .. })
        ));
    }

    #[test]
    fn test_parse_max_representable() {
        // U256::MAX has 78 digits; the largest whole-ether amount has 59.
        let max_ether = U256::MAX / U256::from(10u64).pow(U256::from(18u64));
        let parsed = parse_amount(&max_ether.to_string()).unwrap();
        assert_eq!(parsed, max_ether * U256::from(10u64).pow(U256::from(18u64)));
    }

    // ------------------------------------------------------------------------
    // parse_integer
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("4000000000"), Some(U256::from(4_000_000_000u64)));
        assert_eq!(parse_integer("0"), Some(U256::ZERO));
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("1.5"), None);
        assert_eq!(parse_integer("0x10"), None);
        assert_eq!(parse_integer("-1"), None);
    }

    // ------------------------------------------------------------------------
    // format_amount
    // ------------------------------------------------------------------------

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(ether(1), 18), "1");
        assert_eq!(
            format_amount(U256::from(1_500_000_000_000_000_000u128), 18),
            "1.5"
        );
        assert_eq!(format_amount(U256::from(1u64), 18), "0.000000000000000001");
        assert_eq!(format_amount(U256::from(1_000_000u64), 6), "1");
        assert_eq!(format_amount(U256::from(123u64), 0), "123");
    }

    proptest! {
        #[test]
        fn prop_parse_matches_scaled_integer(whole in 0u64..1_000_000, frac in 0u64..1_000_000_000_000_000_000) {
            let text = format!("{whole}.{frac:018}");
            let expected = U256::from(whole) * U256::from(10u64).pow(U256::from(18u64)) + U256::from(frac);
            prop_assert_eq!(parse_amount(&text).unwrap(), expected);
        }

        #[test]
        fn prop_format_then_parse(wei in any::<u128>()) {
            let amount = U256::from(wei);
            let text = format_amount(amount, ETHER_DECIMALS);
            prop_assert_eq!(parse_amount(&text).unwrap(), amount);
        }

        #[test]
        fn prop_parse_never_panics(text in "\\PC{0,40}") {
            let _ = parse_amount(&text);
        }
    }
}
