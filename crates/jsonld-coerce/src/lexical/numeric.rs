use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::error::LexicalError;

/// Parse an exact decimal of any precision. Plain (`-12.50`) and exponent
/// (`1.5e3`) notation are both accepted; surrounding whitespace is ignored.
pub fn parse_decimal(text: &str) -> Result<BigDecimal, LexicalError> {
    let trimmed = text.trim();
    BigDecimal::from_str(trimmed).map_err(|e| LexicalError::decimal(format!("{trimmed:?}: {e}")))
}

/// Parse a binary floating-point number. Used for both `xsd:float` and
/// `xsd:double`; `INF`, `-INF` and `NaN` are accepted.
pub fn parse_double(text: &str) -> Result<f64, LexicalError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|e| LexicalError::float(format!("{trimmed:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).unwrap()
    }

    #[test]
    fn decimal_is_exact() {
        let d = parse_decimal("0.1").unwrap();
        assert_eq!(d, dec("0.10"));
        assert_eq!(d.to_string(), "0.1");
    }

    #[test]
    fn decimal_keeps_every_digit() {
        let literal = "0.123456789012345678901234567890123";
        let d = parse_decimal(literal).unwrap();
        assert_eq!(d.to_string(), literal);
        assert_ne!(d, dec("0.1234567890123456789012345679"));

        let big = "123456789012345678901234567890.000000000000000000001";
        assert_eq!(parse_decimal(big).unwrap().to_string(), big);
    }

    #[test]
    fn decimal_accepts_sign_whitespace_and_exponent() {
        assert_eq!(parse_decimal(" -12.50 ").unwrap(), dec("-12.5"));
        assert_eq!(parse_decimal("1.5e3").unwrap(), BigDecimal::from(1500));
        assert_eq!(parse_decimal("25E-2").unwrap(), dec("0.25"));
    }

    #[test]
    fn decimal_rejects_garbage() {
        let err = parse_decimal("xxx").unwrap_err();
        assert!(matches!(err, LexicalError::InvalidDecimal(_)));
        assert!(parse_decimal("").is_err());
        assert!(parse_decimal("NaN").is_err());
    }

    #[test]
    fn double_parses() {
        assert!((parse_double("0.1").unwrap() - 0.1).abs() < f64::EPSILON);
        assert_eq!(parse_double("-1E4").unwrap(), -10_000.0);
        assert_eq!(parse_double(" 3 ").unwrap(), 3.0);
    }

    #[test]
    fn double_special_values() {
        assert_eq!(parse_double("INF").unwrap(), f64::INFINITY);
        assert_eq!(parse_double("-INF").unwrap(), f64::NEG_INFINITY);
        assert!(parse_double("NaN").unwrap().is_nan());
    }

    #[test]
    fn double_rejects_garbage() {
        let err = parse_double("xxx").unwrap_err();
        assert!(matches!(err, LexicalError::InvalidFloat(_)));
        assert!(parse_double("1,5").is_err());
    }
}
