// ============================================================================
// Word Helpers
// Whitespace trimming and blank-delimited word scanning
// ============================================================================

use super::bounded::BoundedStr;

/// Characters of the C `isspace` set.
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Characters of the C `isblank` set.
#[inline]
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

#[inline]
fn skip_blanks(s: &str) -> &str {
    s.trim_start_matches(is_blank)
}

/// Removes leading and trailing whitespace.
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Checks whether `buffer` starts with `word`, ignoring ASCII case.
///
/// Leading blanks of `buffer` are skipped, and the match has to end at the end
/// of the input or at a blank. Returns the text behind the word with its
/// leading blanks removed.
///
/// ```
/// use magstr::text::has_next_word;
///
/// assert_eq!(has_next_word("  Show  neighbors", "show"), Some("neighbors"));
/// assert_eq!(has_next_word("showall", "show"), None);
/// ```
pub fn has_next_word<'a>(buffer: &'a str, word: &str) -> Option<&'a str> {
    let buffer = skip_blanks(buffer);
    let end = buffer.find(is_blank).unwrap_or(buffer.len());

    if !buffer[..end].eq_ignore_ascii_case(word) {
        return None;
    }
    Some(skip_blanks(&buffer[end..]))
}

/// Copies the next blank-delimited word of `src` into `dst`.
///
/// The word is truncated to the capacity of `dst`. Returns the text after the
/// word with leading blanks removed, or `None` when nothing follows.
pub fn copy_next_word<'a, const N: usize>(
    dst: &mut BoundedStr<N>,
    src: &'a str,
) -> Option<&'a str> {
    let src = skip_blanks(src);
    let end = src.find(is_blank).unwrap_or(src.len());
    dst.copy_from(&src[..end]);

    let rest = skip_blanks(&src[end..]);
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        assert_eq!(trim("  hello \t\r\n"), "hello");
        assert_eq!(trim("\x0b\x0cmid dle\x0c"), "mid dle");
        assert_eq!(trim("   "), "");
        assert_eq!(trim(""), "");
        assert_eq!(trim("x"), "x");
    }

    #[test]
    fn test_has_next_word_matches() {
        assert_eq!(has_next_word("link list", "link"), Some("list"));
        assert_eq!(has_next_word("\t LINK\t  list", "link"), Some("list"));
        assert_eq!(has_next_word("link", "link"), Some(""));
        assert_eq!(has_next_word("link   ", "link"), Some(""));
    }

    #[test]
    fn test_has_next_word_rejects() {
        assert_eq!(has_next_word("linker", "link"), None);
        assert_eq!(has_next_word("lin", "link"), None);
        assert_eq!(has_next_word("route", "link"), None);
        assert_eq!(has_next_word("", "link"), None);
    }

    #[test]
    fn test_has_next_word_empty_word() {
        // an empty word only matches an empty leading token
        assert_eq!(has_next_word("   ", ""), Some(""));
        assert_eq!(has_next_word("abc", ""), None);
    }

    #[test]
    fn test_copy_next_word() {
        let mut word = BoundedStr::<16>::new();

        let rest = copy_next_word(&mut word, "  activate  olsrv2 now");
        assert_eq!(word.as_str(), "activate");
        assert_eq!(rest, Some("olsrv2 now"));

        let rest = copy_next_word(&mut word, rest.unwrap());
        assert_eq!(word.as_str(), "olsrv2");
        assert_eq!(rest, Some("now"));

        let rest = copy_next_word(&mut word, rest.unwrap());
        assert_eq!(word.as_str(), "now");
        assert_eq!(rest, None);
    }

    #[test]
    fn test_copy_next_word_truncates() {
        let mut word = BoundedStr::<4>::new();
        let rest = copy_next_word(&mut word, "interface eth0");
        assert_eq!(word.as_str(), "int");
        assert_eq!(rest, Some("eth0"));
    }

    #[test]
    fn test_copy_next_word_empty_input() {
        let mut word = BoundedStr::<8>::new();
        word.copy_from("stale");
        assert_eq!(copy_next_word(&mut word, " \t "), None);
        assert!(word.is_empty());
    }
}
