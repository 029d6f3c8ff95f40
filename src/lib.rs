// ============================================================================
// magstr Library
// Human-readable magnitudes and bounded string helpers for routing daemons
// ============================================================================

//! # magstr
//!
//! Converts 64-bit magnitudes to and from text such as `"120 k"` or
//! `"1.5 Mbit/s"`, together with the small string toolkit that configuration
//! and console code needs around it.
//!
//! ## Features
//!
//! - **Exact codec**: integer-only encoding and decoding, no floating point
//! - **Decimal and binary steps** (1000 or 1024 per suffix, up to `E`)
//! - **Fixed-point magnitudes** with a configurable number of implied decimals
//! - **Stack buffers** for output, no allocation on the encode path
//! - **Packed string arrays** for multi-value configuration entries
//!
//! ## Example
//!
//! ```rust
//! use magstr::prelude::*;
//!
//! let mut out = HumanReadableStr::new();
//! assert_eq!(encode_unsigned(&mut out, 120_000, Some("bit/s"), 0, false, false), "120 kbit/s");
//!
//! assert_eq!(decode_unsigned("1.5 k", 2, false), Ok(150_000));
//! assert_eq!(decode_signed("-8 E", 0, true), Ok(i64::MIN));
//!
//! let format = MagnitudeFormat::byte_size();
//! assert_eq!(format.format_u64(64 << 10).as_str(), "64 kB");
//! ```

pub mod domain;
pub mod numeric;
pub mod text;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{MagnitudeFormat, StrArray, StrArrayError};
    pub use crate::numeric::{
        decode_signed, decode_unsigned, encode_signed, encode_unsigned, HumanReadableStr,
        ParseError, ParseResult, ScaleBase, Suffix,
    };
    pub use crate::text::{copy_next_word, has_next_word, is_printable, trim, BoundedStr};
}
