use num_bigint::{BigInt, ParseBigIntError};
use num_traits::{Signed, Zero};
use std::str::FromStr;

/// Parses an on-chain amount, dropping any quoting and fractional digits.
pub fn parse_amount(amount_str: &str) -> Result<BigInt, ParseBigIntError> {
    let cleaned = amount_str
        .trim()
        .trim_matches('"')
        .split('.')
        .next()
        .unwrap_or("0");
    BigInt::from_str(cleaned)
}

/// Renders base units with `decimals` fractional digits, trailing zeros trimmed.
pub fn format_amount(amount: &BigInt, decimals: u32) -> String {
    let scale = BigInt::from(10u8).pow(decimals);
    let whole = amount.abs() / &scale;
    let fraction = amount.abs() % &scale;
    let sign = if amount.is_negative() { "-" } else { "" };

    if fraction.is_zero() {
        return format!("{}{}", sign, whole);
    }
    let digits = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    format!("{}{}.{}", sign, whole, digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_and_fractional_amounts() {
        assert_eq!(parse_amount("\"1500\"").unwrap(), BigInt::from(1500));
        assert_eq!(parse_amount(" 42.99 ").unwrap(), BigInt::from(42));
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn formats_with_decimals() {
        assert_eq!(format_amount(&BigInt::from(350_000_000_000u64), 9), "350");
        assert_eq!(format_amount(&BigInt::from(1_050_000_000u64), 9), "1.05");
        assert_eq!(format_amount(&BigInt::from(5), 9), "0.000000005");
        assert_eq!(format_amount(&BigInt::from(-2_500_000_000i64), 9), "-2.5");
        assert_eq!(format_amount(&BigInt::from(7), 0), "7");
    }
}
