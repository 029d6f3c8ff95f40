// ============================================================================
// Magnitude Encoder
// u64/i64 -> "<integer>[.<fraction>] <suffix><unit>"
// ============================================================================

use super::scale::{pow10, ScaleBase, Suffix, MAX_FRACTION};
use crate::text::BoundedStr;
use std::fmt;
use std::ops::Deref;

/// Byte capacity of [`HumanReadableStr`], terminator byte included.
pub const HUMAN_READABLE_CAPACITY: usize = 64;

/// Longest possible numeric rendering: sign, 20 integer digits, '.',
/// `MAX_FRACTION` digits, space and suffix symbol.
pub const MAX_NUMERIC_LEN: usize = 1 + 20 + 1 + MAX_FRACTION as usize + 1 + 1;

const _: () = assert!(MAX_NUMERIC_LEN < HUMAN_READABLE_CAPACITY);

/// Fraction digits printed when no suffix was applied.
const UNSCALED_FRACTION: u8 = 3;

/// Output buffer for the encoder.
///
/// Sized so that any number renders without a bounds check; only the unit
/// text is cut when it does not fit in what is left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HumanReadableStr {
    buf: BoundedStr<HUMAN_READABLE_CAPACITY>,
}

impl HumanReadableStr {
    pub const fn new() -> Self {
        Self {
            buf: BoundedStr::new(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    /// Room left for unit text after the numeric part.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// Encode `number` into a fresh buffer.
    pub fn from_u64(
        number: u64,
        unit: Option<&str>,
        fraction: u8,
        binary: bool,
        raw: bool,
    ) -> Self {
        let mut out = Self::new();
        encode_unsigned(&mut out, number, unit, fraction, binary, raw);
        out
    }

    /// Encode a signed `number` into a fresh buffer.
    pub fn from_i64(
        number: i64,
        unit: Option<&str>,
        fraction: u8,
        binary: bool,
        raw: bool,
    ) -> Self {
        let mut out = Self::new();
        encode_signed(&mut out, number, unit, fraction, binary, raw);
        out
    }

    fn push_digits(&mut self, mut value: u64) {
        let mut digits = [0u8; 20];
        let mut pos = digits.len();
        loop {
            pos -= 1;
            digits[pos] = b'0' + (value % 10) as u8;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        for &digit in &digits[pos..] {
            self.buf.push(char::from(digit));
        }
    }
}

impl Deref for HumanReadableStr {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for HumanReadableStr {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HumanReadableStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Converts an unsigned magnitude into a human readable string.
///
/// `number` is read as a fixed-point value with `fraction` decimals, so
/// `120_000` with `fraction = 0` becomes `"120 k"` and `150_000` with
/// `fraction = 2` becomes `"1.5 k"`. Precision is capped at
/// [`MAX_FRACTION`].
///
/// # Arguments
/// * `out` - buffer that receives the text, previous content is discarded
/// * `unit` - text appended after the suffix, truncated if it does not fit
/// * `binary` - step by 1024 instead of 1000
/// * `raw` - skip suffix selection and print the plain number
///
/// # Example
/// ```
/// use magstr::numeric::{encode_unsigned, HumanReadableStr};
///
/// let mut out = HumanReadableStr::new();
/// assert_eq!(encode_unsigned(&mut out, 120_000, Some("bit/s"), 0, false, false), "120 kbit/s");
/// assert_eq!(encode_unsigned(&mut out, 1024, None, 0, true, false), "1 k");
/// ```
pub fn encode_unsigned<'a>(
    out: &'a mut HumanReadableStr,
    number: u64,
    unit: Option<&str>,
    fraction: u8,
    binary: bool,
    raw: bool,
) -> &'a str {
    out.buf.clear();
    write_magnitude(out, number, unit, fraction, binary, raw);
    out.as_str()
}

/// Converts a signed magnitude into a human readable string.
///
/// `-120000` becomes `"-120 k"`. `i64::MIN` is printed through its unsigned
/// absolute value `2^63`.
pub fn encode_signed<'a>(
    out: &'a mut HumanReadableStr,
    number: i64,
    unit: Option<&str>,
    fraction: u8,
    binary: bool,
    raw: bool,
) -> &'a str {
    out.buf.clear();
    if number < 0 {
        out.buf.push('-');
    }
    write_magnitude(out, number.unsigned_abs(), unit, fraction, binary, raw);
    out.as_str()
}

// ============================================================================
// Rendering
// ============================================================================

fn write_magnitude(
    out: &mut HumanReadableStr,
    number: u64,
    unit: Option<&str>,
    fraction: u8,
    binary: bool,
    raw: bool,
) {
    let step = ScaleBase::from_binary(binary).step();
    let fraction = fraction.min(MAX_FRACTION);
    let mut multiplier = pow10(fraction);
    let mut suffix = Suffix::None;

    if !raw {
        while let Some(next) = suffix.next() {
            match multiplier.checked_mul(step) {
                Some(scaled) if number >= scaled => {
                    multiplier = scaled;
                    suffix = next;
                },
                _ => break,
            }
        }
    }

    out.push_digits(number / multiplier);

    // Everything up to `keep` survives; trailing zero digits and a bare '.' are cut.
    let mut keep = out.buf.len();
    out.buf.push('.');

    let mut budget = if suffix == Suffix::None {
        UNSCALED_FRACTION
    } else {
        fraction
    };
    let mut remainder = number % multiplier;
    while remainder != 0 && budget > 0 {
        budget -= 1;
        multiplier /= 10;

        let digit = remainder / multiplier;
        debug_assert!(digit < 10);
        out.buf.push(char::from(b'0' + digit as u8));
        if digit != 0 {
            keep = out.buf.len();
        }
        remainder %= multiplier;
    }
    out.buf.truncate(keep);

    out.buf.push(' ');
    if let Some(symbol) = suffix.symbol() {
        out.buf.push(symbol);
    }

    if let Some(unit) = unit {
        out.buf.append(unit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(number: u64, unit: Option<&str>, fraction: u8, binary: bool, raw: bool) -> String {
        HumanReadableStr::from_u64(number, unit, fraction, binary, raw).to_string()
    }

    fn enc_signed(number: i64, fraction: u8, binary: bool, raw: bool) -> String {
        HumanReadableStr::from_i64(number, None, fraction, binary, raw).to_string()
    }

    #[test]
    fn test_zero() {
        assert_eq!(enc(0, None, 0, false, false), "0 ");
        assert_eq!(enc(0, None, 3, true, false), "0 ");
        assert_eq!(enc(0, Some("B"), 0, false, false), "0 B");
        assert_eq!(enc(0, None, 0, false, true), "0 ");
    }

    #[test]
    fn test_decimal_suffixes() {
        assert_eq!(enc(999, None, 0, false, false), "999 ");
        assert_eq!(enc(1000, None, 0, false, false), "1 k");
        assert_eq!(enc(120_000, None, 0, false, false), "120 k");
        assert_eq!(enc(5_000_000, None, 0, false, false), "5 M");
        assert_eq!(enc(7_000_000_000_000, None, 0, false, false), "7 T");
        assert_eq!(enc(u64::MAX, None, 0, false, false), "18 E");
    }

    #[test]
    fn test_binary_suffixes() {
        assert_eq!(enc(1023, None, 0, true, false), "1023 ");
        assert_eq!(enc(1024, None, 0, true, false), "1 k");
        assert_eq!(enc(3 << 20, None, 0, true, false), "3 M");
        assert_eq!(enc(1 << 60, None, 0, true, false), "1 E");
        assert_eq!(enc(u64::MAX, None, 0, true, false), "15 E");
    }

    #[test]
    fn test_fraction_digits_with_suffix() {
        // fixed-point: 150_000 at two decimals is 1500.00
        assert_eq!(enc(150_000, None, 2, false, false), "1.5 k");
        assert_eq!(enc(123_456, None, 2, false, false), "1.23 k");
        assert_eq!(enc(123_456, None, 5, false, false), "1.234 ");
        // binary fraction of 1.5 Ki at one decimal
        assert_eq!(enc(15 * 1024, None, 1, true, false), "1.5 k");
    }

    #[test]
    fn test_fraction_budget_limits_digits() {
        // 1_234_567 at zero decimals -> 1.234567 M, budget 0 prints none
        assert_eq!(enc(1_234_567, None, 0, false, false), "1 M");
        // a suffix uses the caller's budget only, so 1500 at zero decimals is "1 k"
        assert_eq!(enc(1500, None, 0, false, false), "1 k");
        assert_eq!(enc(1_234_567_000, None, 3, false, false), "1.234 M");
    }

    #[test]
    fn test_trailing_zeros_dropped() {
        assert_eq!(enc(1_200_000, None, 3, false, false), "1.2 k");
        assert_eq!(enc(1_000_000, None, 3, false, false), "1 k");
        assert_eq!(enc(1_050_000, None, 3, false, false), "1.05 k");
    }

    #[test]
    fn test_unscaled_value_keeps_caller_decimals() {
        // no suffix: the fixed budget of three never exceeds the available decimals
        assert_eq!(enc(12_345, None, 2, false, false), "123.45 ");
        assert_eq!(enc(5, None, 1, false, false), "0.5 ");
        assert_eq!(enc(123_456, None, 6, false, false), "0.123 ");
    }

    #[test]
    fn test_raw_mode() {
        assert_eq!(enc(120_000, None, 0, false, true), "120000 ");
        assert_eq!(enc(u64::MAX, None, 0, true, true), "18446744073709551615 ");
        assert_eq!(enc(12_345, Some("ms"), 3, false, true), "12.345 ms");
    }

    #[test]
    fn test_unit_appended() {
        assert_eq!(enc(120_000, Some("bit/s"), 0, false, false), "120 kbit/s");
        assert_eq!(enc(2048, Some("iB"), 0, true, false), "2 kiB");
    }

    #[test]
    fn test_unit_truncated_to_capacity() {
        let long_unit = "u".repeat(100);
        let out = HumanReadableStr::from_u64(u64::MAX, Some(&long_unit), 0, false, true);
        assert_eq!(out.len(), HUMAN_READABLE_CAPACITY - 1);
        assert!(out.starts_with("18446744073709551615 u"));
        assert_eq!(out.remaining(), 0);
    }

    #[test]
    fn test_worst_case_numeric_rendering_fits() {
        let out = HumanReadableStr::from_i64(i64::MIN + 1, None, MAX_FRACTION, false, true);
        assert!(out.len() <= MAX_NUMERIC_LEN);
        assert_eq!(out.as_str(), "-0.922 ");
    }

    #[test]
    fn test_fraction_clamped() {
        assert_eq!(enc(5, None, 200, false, false), enc(5, None, MAX_FRACTION, false, false));
    }

    #[test]
    fn test_signed() {
        assert_eq!(enc_signed(-120_000, 0, false, false), "-120 k");
        assert_eq!(enc_signed(120_000, 0, false, false), "120 k");
        assert_eq!(enc_signed(-1, 0, false, true), "-1 ");
        assert_eq!(enc_signed(0, 0, false, false), "0 ");
    }

    #[test]
    fn test_signed_min() {
        assert_eq!(enc_signed(i64::MIN, 0, false, true), "-9223372036854775808 ");
        assert_eq!(enc_signed(i64::MIN, 0, true, false), "-8 E");
    }

    #[test]
    fn test_buffer_reuse_discards_previous_content() {
        let mut out = HumanReadableStr::new();
        encode_unsigned(&mut out, 123_456_789, Some("bit/s"), 0, false, true);
        assert_eq!(encode_unsigned(&mut out, 1, None, 0, false, false), "1 ");
        assert_eq!(encode_signed(&mut out, -2, None, 0, false, false), "-2 ");
    }
}
