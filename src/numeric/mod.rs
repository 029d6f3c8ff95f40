// ============================================================================
// Numeric Module
// Human-readable magnitude codec ("120 k", "1.5 M")
// ============================================================================
//
// This module provides:
// - encode_unsigned / encode_signed: magnitude -> scaled text with suffix
// - decode_unsigned / decode_signed: scaled text -> exact integer
// - HumanReadableStr: fixed-capacity output buffer for the encoder
// - ScaleBase / Suffix: the 1000/1024 ladder k, M, G, T, P, E
// - ParseError: decode failures
//
// Design principles:
// - No floating-point operations, fractions are integer remainders
// - Decoding returns Result, encoding cannot fail
// - Magnitudes are fixed-point values with `fraction` implied decimals

mod decoder;
mod encoder;
mod errors;
mod scale;

pub use decoder::{decode_signed, decode_unsigned};
pub(crate) use decoder::{decode_signed_scaled, decode_unsigned_scaled};
pub use encoder::{
    encode_signed, encode_unsigned, HumanReadableStr, HUMAN_READABLE_CAPACITY, MAX_NUMERIC_LEN,
};
pub use errors::{ParseError, ParseResult};
pub use scale::{pow10, ScaleBase, Suffix, MAX_FRACTION};
