// ============================================================================
// Printable Check
// ============================================================================

/// Printable is every byte >= 32 except 127 (DEL) and 255.
#[inline]
pub const fn char_is_printable(b: u8) -> bool {
    b >= 32 && b != 127 && b != 255
}

/// True if every byte of `value` is printable.
///
/// Multi-byte UTF-8 sequences pass as long as none of their bytes is 255,
/// which never occurs in valid UTF-8.
pub fn is_printable(value: &str) -> bool {
    value.bytes().all(char_is_printable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_is_printable() {
        assert!(char_is_printable(b' '));
        assert!(char_is_printable(b'~'));
        assert!(char_is_printable(128));
        assert!(!char_is_printable(b'\n'));
        assert!(!char_is_printable(0));
        assert!(!char_is_printable(127));
        assert!(!char_is_printable(255));
    }

    #[test]
    fn test_is_printable() {
        assert!(is_printable("bit/s"));
        assert!(is_printable(""));
        assert!(is_printable("µs"));
        assert!(!is_printable("tab\there"));
        assert!(!is_printable("del\x7f"));
    }
}
