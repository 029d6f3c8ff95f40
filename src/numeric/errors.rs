// ============================================================================
// Numeric Errors
// Error types for human-readable magnitude parsing
// ============================================================================

use std::fmt;

/// Errors that can occur while decoding a human-readable magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Integer part, fraction accumulation or suffix scaling exceeded the target range
    Overflow,
    /// Trailing text is not exactly one recognized suffix symbol
    InvalidSuffix,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Overflow => {
                write!(f, "numeric overflow: value exceeds the 64-bit range")
            },
            ParseError::InvalidSuffix => write!(
                f,
                "invalid suffix: expected one of 'k', 'M', 'G', 'T', 'P', 'E' at end of input"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type alias for decode operations
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::Overflow.to_string(),
            "numeric overflow: value exceeds the 64-bit range"
        );
        assert!(ParseError::InvalidSuffix
            .to_string()
            .starts_with("invalid suffix"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ParseError::Overflow, ParseError::Overflow);
        assert_ne!(ParseError::Overflow, ParseError::InvalidSuffix);
    }
}
