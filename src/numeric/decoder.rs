// ============================================================================
// Magnitude Decoder
// "<digits>[.<digits>][ ]<suffix>" -> u64/i64
// ============================================================================

use super::errors::{ParseError, ParseResult};
use super::scale::{ScaleBase, Suffix};

/// `isspace` set accepted in front of the integer part.
#[inline]
fn is_leading_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Accumulate one decimal digit.
#[inline]
fn push_digit(number: u64, digit: u8) -> ParseResult<u64> {
    number
        .checked_mul(10)
        .and_then(|n| n.checked_add(u64::from(digit - b'0')))
        .ok_or(ParseError::Overflow)
}

/// Leading unsigned integer with `strtoull` rules.
///
/// Returns the value and the index of the first unconsumed byte. Without any
/// digit the value is 0 and the cursor stays at the start of the input.
fn parse_integer(bytes: &[u8]) -> ParseResult<(u64, usize)> {
    let mut pos = bytes.iter().take_while(|b| is_leading_space(**b)).count();
    if bytes.get(pos) == Some(&b'+') {
        pos += 1;
    }

    let start = pos;
    let mut number = 0u64;
    while let Some(&digit) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
        number = push_digit(number, digit)?;
        pos += 1;
    }

    if pos == start {
        return Ok((0, 0));
    }
    Ok((number, pos))
}

/// Parses a human readable magnitude into an unsigned integer.
///
/// The result is scaled by `10^fraction`: `"1.5 k"` with `fraction = 2`
/// yields `150_000`. Fraction digits beyond the budget are ignored. Input that
/// is a bare integer is returned unscaled.
///
/// # Errors
/// * `Overflow` - the integer part, the fraction scaling or the suffix factor
///   leaves the `u64` range
/// * `InvalidSuffix` - anything other than one of `k M G T P E` (or nothing)
///   follows the number
///
/// # Example
/// ```
/// use magstr::numeric::{decode_unsigned, ParseError};
///
/// assert_eq!(decode_unsigned("120 k", 0, false), Ok(120_000));
/// assert_eq!(decode_unsigned("1.5 k", 2, false), Ok(150_000));
/// assert_eq!(decode_unsigned("2 M", 0, true), Ok(2 << 20));
/// assert_eq!(decode_unsigned("1 Ki", 0, true), Err(ParseError::InvalidSuffix));
/// ```
pub fn decode_unsigned(text: &str, fraction: u8, binary: bool) -> ParseResult<u64> {
    decode_magnitude(text, fraction, binary, false)
}

/// [`decode_unsigned`] for text whose unit was already cut off: a bare
/// integer is scaled by `10^fraction` like any other number.
pub(crate) fn decode_unsigned_scaled(text: &str, fraction: u8, binary: bool) -> ParseResult<u64> {
    decode_magnitude(text, fraction, binary, true)
}

fn decode_magnitude(
    text: &str,
    fraction: u8,
    binary: bool,
    scale_bare: bool,
) -> ParseResult<u64> {
    let bytes = text.as_bytes();

    let (mut number, mut pos) = parse_integer(bytes).inspect_err(|_| {
        tracing::trace!("integer part of {:?} out of range", text);
    })?;
    if pos == bytes.len() && !scale_bare {
        return Ok(number);
    }

    let mut digits = 0u8;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        while let Some(&digit) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
            if digits < fraction {
                number = push_digit(number, digit)?;
                digits += 1;
            }
            pos += 1;
        }
    }
    for _ in digits..fraction {
        number = number.checked_mul(10).ok_or(ParseError::Overflow)?;
    }

    while bytes.get(pos) == Some(&b' ') {
        pos += 1;
    }

    let suffix = match &bytes[pos..] {
        [] => Suffix::None,
        [symbol] => Suffix::from_symbol(*symbol).ok_or(ParseError::InvalidSuffix)?,
        _ => {
            tracing::trace!("unexpected trailing text in {:?}", text);
            return Err(ParseError::InvalidSuffix);
        },
    };

    let factor = suffix.factor(ScaleBase::from_binary(binary));
    if number > u64::MAX / factor {
        tracing::trace!("{:?} overflows after scaling by {}", text, factor);
        return Err(ParseError::Overflow);
    }
    Ok(number * factor)
}

/// Parses a human readable magnitude with an optional leading '-'.
///
/// The unsigned magnitude is decoded first and negated last, so
/// `"-9223372036854775808"` yields `i64::MIN`.
///
/// Magnitudes outside the `i64` range are rejected rather than wrapped into
/// a value of the opposite sign.
///
/// # Errors
/// Everything [`decode_unsigned`] reports, plus `Overflow` when the magnitude
/// does not fit in `i64` for the given sign.
pub fn decode_signed(text: &str, fraction: u8, binary: bool) -> ParseResult<i64> {
    signed_from(text, |magnitude| decode_unsigned(magnitude, fraction, binary))
}

/// Signed counterpart of [`decode_unsigned_scaled`].
pub(crate) fn decode_signed_scaled(text: &str, fraction: u8, binary: bool) -> ParseResult<i64> {
    signed_from(text, |magnitude| decode_unsigned_scaled(magnitude, fraction, binary))
}

fn signed_from<F>(text: &str, decode: F) -> ParseResult<i64>
where
    F: Fn(&str) -> ParseResult<u64>,
{
    const MIN_MAGNITUDE: u64 = i64::MIN.unsigned_abs();

    match text.strip_prefix('-') {
        Some(rest) => match decode(rest)? {
            MIN_MAGNITUDE => Ok(i64::MIN),
            magnitude => i64::try_from(magnitude)
                .map(|n| -n)
                .map_err(|_| ParseError::Overflow),
        },
        None => i64::try_from(decode(text)?).map_err(|_| ParseError::Overflow),
    }
}
