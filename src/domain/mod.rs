// ============================================================================
// Domain Module
// Value types built on the codec and the text helpers
// ============================================================================

pub mod config;
pub mod strarray;

pub use config::{MagnitudeFormat, MAX_UNIT_LEN};
pub use strarray::{block_size, StrArray, StrArrayError, STRARRAY_BLOCKSIZE};
