// ============================================================================
// Text Module
// Bounded string buffers and word helpers used by the codec and its callers
// ============================================================================

mod bounded;
mod printable;
mod words;

pub use bounded::{truncate_to_boundary, BoundedStr};
pub use printable::{char_is_printable, is_printable};
pub use words::{copy_next_word, has_next_word, is_blank, is_space, trim};
