//! Arbitrary-precision decimal numbers with literal preservation.
//!
//! A [`Decimal`] holds any number whose literal has a fractional part, an
//! exponent, or a magnitude beyond 64-bit signed range. The original literal
//! text is retained verbatim and re-emitted on serialization, so no precision
//! is lost or renormalized in a parse/serialize round trip. Alongside the
//! text, a parsed form (a [`BigInt`] unscaled value and a base-10 exponent,
//! normalized so the unscaled value has no trailing zero digits) supports
//! mathematical comparison: `Decimal::new("1.0")` equals
//! `Decimal::new("0.10e1")`.

use std::fmt;
use std::hash::{Hash, Hasher};

use num_bigint::BigInt;

use crate::error::{ParseError, ParseErrorKind};

/// A decimal number of arbitrary precision.
///
/// The mathematical value is `unscaled * 10^exponent`.
#[derive(Debug, Clone)]
pub struct Decimal {
    text: String,
    unscaled: BigInt,
    exponent: i64,
}

impl Decimal {
    /// Parse a decimal from its literal text.
    ///
    /// Accepts an optional sign, digits with an optional fractional part,
    /// and an optional exponent. The text is retained for serialization.
    /// Fails with "Illegal JSON number" for malformed text, or for an
    /// exponent too large to represent.
    pub fn new(text: impl Into<String>) -> Result<Self, ParseError> {
        let text = text.into();
        let (unscaled, exponent) =
            parse_parts(&text).ok_or(ParseErrorKind::IllegalNumber)?;
        Ok(Self {
            text,
            unscaled,
            exponent,
        })
    }

    /// Convert a finite float through its shortest decimal representation.
    ///
    /// Returns `None` for NaN and infinities, which have no decimal form.
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_finite() {
            Self::new(value.to_string()).ok()
        } else {
            None
        }
    }

    /// Convert a finite float through its shortest decimal representation.
    pub fn from_f32(value: f32) -> Option<Self> {
        if value.is_finite() {
            Self::new(value.to_string()).ok()
        } else {
            None
        }
    }

    /// The original literal text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The exact integer value, when the number is integral and fits in i64.
    pub fn to_i64(&self) -> Option<i64> {
        if !(0..=18).contains(&self.exponent) {
            return None;
        }
        let mut digits = self.unscaled.to_string();
        for _ in 0..self.exponent {
            digits.push('0');
        }
        digits.parse().ok()
    }

    /// The exact integer value, when the number is integral and fits in i32.
    pub fn to_i32(&self) -> Option<i32> {
        self.to_i64().and_then(|i| i32::try_from(i).ok())
    }

    /// The nearest double-precision value for the literal.
    pub fn to_f64(&self) -> f64 {
        self.text.parse().unwrap_or(f64::NAN)
    }

    /// True when the mathematical value has no fractional part.
    pub fn is_integral(&self) -> bool {
        self.exponent >= 0
    }
}

/// Equality and hashing compare the parsed value, not the literal text:
/// `1.0`, `1.00` and `0.1e1` are all equal and hash alike.
impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.unscaled == other.unscaled && self.exponent == other.exponent
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unscaled.hash(state);
        self.exponent.hash(state);
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        let text = value.to_string();
        let (unscaled, exponent) = parse_parts(&text).unwrap_or((BigInt::from(value), 0));
        Self {
            text,
            unscaled,
            exponent,
        }
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

/// Canonical comparison key shared by all numeric variants.
///
/// Numbers that are mathematically equal map to the same key, so equality
/// and hashing agree across `Int`, `Long`, `Float`, `Double` and `Decimal`.
/// Integers within i64 collapse to `Int`; everything else keeps its
/// normalized unscaled/exponent pair. Non-finite floats carry their bit
/// pattern (they are never mathematically equal to anything).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum NumericKey {
    Int(i64),
    Big { unscaled: BigInt, exponent: i64 },
    NonFinite(u64),
}

impl NumericKey {
    pub(crate) fn from_i64(value: i64) -> Self {
        NumericKey::Int(value)
    }

    pub(crate) fn from_decimal(value: &Decimal) -> Self {
        match value.to_i64() {
            Some(i) => NumericKey::Int(i),
            None => NumericKey::Big {
                unscaled: value.unscaled.clone(),
                exponent: value.exponent,
            },
        }
    }

    pub(crate) fn from_f64(value: f64) -> Self {
        match Decimal::from_f64(value) {
            Some(d) => Self::from_decimal(&d),
            None => NumericKey::NonFinite(value.to_bits()),
        }
    }

    pub(crate) fn from_f32(value: f32) -> Self {
        match Decimal::from_f32(value) {
            Some(d) => Self::from_decimal(&d),
            None => NumericKey::NonFinite(f64::from(value).to_bits()),
        }
    }
}

/// Parse literal text into a normalized (unscaled, exponent) pair.
fn parse_parts(text: &str) -> Option<(BigInt, i64)> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let int_digits = &text[int_start..pos];

    let frac_digits = if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let frac_start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        &text[frac_start..pos]
    } else {
        ""
    };

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let exp: i64 = if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        pos += 1;
        let exp_start = pos;
        if matches!(bytes.get(pos), Some(b'+') | Some(b'-')) {
            pos += 1;
        }
        let digit_start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        if pos == digit_start {
            return None;
        }
        text[exp_start..pos].parse().ok()?
    } else {
        0
    };

    if pos != bytes.len() {
        return None;
    }

    // Scale down by the fractional digit count, then normalize by stripping
    // trailing zeros into the exponent.
    let mut exponent = exp.checked_sub(i64::try_from(frac_digits.len()).ok()?)?;
    let digits = format!("{int_digits}{frac_digits}");
    let significant = digits.trim_start_matches('0');
    let trimmed = significant.trim_end_matches('0');
    if trimmed.is_empty() {
        return Some((BigInt::from(0), 0));
    }
    let stripped = i64::try_from(significant.len() - trimmed.len()).ok()?;
    exponent = exponent.checked_add(stripped)?;

    let mut unscaled: BigInt = trimmed.parse().ok()?;
    if negative {
        unscaled = -unscaled;
    }
    Some((unscaled, exponent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn dec(text: &str) -> Decimal {
        Decimal::new(text).unwrap()
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_literal_text_retained() {
        assert_eq!(dec("1.0").as_str(), "1.0");
        assert_eq!(dec("1.500e3").as_str(), "1.500e3");
        assert_eq!(dec("-0.25").as_str(), "-0.25");
    }

    #[test]
    fn test_value_equality_ignores_text() {
        assert_eq!(dec("1.0"), dec("1.00"));
        assert_eq!(dec("1.0"), dec("0.10e1"));
        assert_eq!(dec("1500"), dec("1.5e3"));
        assert_eq!(dec("-0.25"), dec("-2.5e-1"));
        assert_ne!(dec("1.0"), dec("1.01"));
    }

    #[test]
    fn test_zero_forms_equal() {
        assert_eq!(dec("0"), dec("0.0"));
        assert_eq!(dec("0"), dec("-0"));
        assert_eq!(dec("0"), dec("0e5"));
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        assert_eq!(hash_of(&dec("1.0")), hash_of(&dec("1.00")));
        assert_eq!(hash_of(&dec("1500")), hash_of(&dec("1.5e3")));
    }

    #[test]
    fn test_to_i64() {
        assert_eq!(dec("5.0").to_i64(), Some(5));
        assert_eq!(dec("5e2").to_i64(), Some(500));
        assert_eq!(dec("9223372036854775807").to_i64(), Some(i64::MAX));
        assert_eq!(dec("9223372036854775808").to_i64(), None);
        assert_eq!(dec("0.5").to_i64(), None);
        assert_eq!(dec("-3.00").to_i64(), Some(-3));
    }

    #[test]
    fn test_to_i32() {
        assert_eq!(dec("2147483647").to_i32(), Some(i32::MAX));
        assert_eq!(dec("2147483648").to_i32(), None);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(dec("1.5").to_f64(), 1.5);
        assert_eq!(dec("1e10").to_f64(), 1e10);
    }

    #[test]
    fn test_is_integral() {
        assert!(dec("5.0").is_integral());
        assert!(dec("5e3").is_integral());
        assert!(!dec("5.01").is_integral());
    }

    #[test]
    fn test_from_floats() {
        assert_eq!(Decimal::from_f64(1.5).unwrap(), dec("1.5"));
        assert_eq!(Decimal::from_f64(5e20).unwrap(), dec("5e20"));
        assert_eq!(Decimal::from_f32(0.25).unwrap(), dec("0.25"));
        assert!(Decimal::from_f64(f64::NAN).is_none());
        assert!(Decimal::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn test_from_integers() {
        assert_eq!(Decimal::from(5i64), dec("5"));
        assert_eq!(Decimal::from(500i32), dec("5e2"));
        assert_eq!(Decimal::from(0i64), dec("0"));
    }

    #[test]
    fn test_malformed_text_rejected() {
        assert!(Decimal::new("").is_err());
        assert!(Decimal::new("-").is_err());
        assert!(Decimal::new("1.5x").is_err());
        assert!(Decimal::new("1e").is_err());
        assert!(Decimal::new("e5").is_err());
        assert!(Decimal::new("1e99999999999999999999").is_err());
    }

    #[test]
    fn test_lenient_programmatic_forms() {
        // Construction accepts forms the JSON grammar does not.
        assert_eq!(dec("+5"), dec("5"));
        assert_eq!(dec(".5"), dec("0.5"));
        assert_eq!(dec("00.50"), dec("0.5"));
    }

    #[test]
    fn test_huge_magnitude() {
        let big = dec("123456789012345678901234567890");
        assert_eq!(big.to_i64(), None);
        assert_eq!(big, dec("1.2345678901234567890123456789e29"));
    }

    #[test]
    fn test_numeric_key_collapses_variants() {
        assert_eq!(NumericKey::from_i64(5), NumericKey::from_decimal(&dec("5.0")));
        assert_eq!(NumericKey::from_i64(5), NumericKey::from_f64(5.0));
        assert_eq!(NumericKey::from_f32(0.25), NumericKey::from_decimal(&dec("0.25")));
        assert_eq!(
            NumericKey::from_decimal(&dec("9223372036854775808")),
            NumericKey::from_decimal(&dec("9.223372036854775808e18"))
        );
        assert_ne!(NumericKey::from_i64(5), NumericKey::from_decimal(&dec("5.5")));
    }
}
