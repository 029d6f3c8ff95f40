// ============================================================================
// Magnitude Format Configuration
// Reusable codec settings for one kind of configuration value
// ============================================================================

use crate::numeric::{
    decode_signed, decode_signed_scaled, decode_unsigned, decode_unsigned_scaled,
    HumanReadableStr, ParseResult, ScaleBase, MAX_FRACTION, MAX_NUMERIC_LEN,
};
use crate::text::is_printable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest unit text that is never truncated by the encoder.
pub const MAX_UNIT_LEN: usize = crate::numeric::HUMAN_READABLE_CAPACITY - 1 - MAX_NUMERIC_LEN;

/// How a family of values is written and read back, e.g. link speeds in
/// `bit/s` with three decimals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MagnitudeFormat {
    /// Text appended after the suffix
    pub unit: Option<String>,

    /// Implied decimals of the stored magnitude (0 - 19)
    pub fraction: u8,

    /// Step between suffixes
    pub base: ScaleBase,

    /// Print plain numbers without suffix selection
    pub raw: bool,
}

impl MagnitudeFormat {
    /// Create a format with every knob explicit
    pub fn new(unit: Option<String>, fraction: u8, base: ScaleBase, raw: bool) -> Self {
        Self {
            unit,
            fraction,
            base,
            raw,
        }
    }

    /// Builder method: Set unit text
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Builder method: Set implied decimals
    pub fn with_fraction(mut self, fraction: u8) -> Self {
        self.fraction = fraction;
        self
    }

    /// Builder method: Set suffix base
    pub fn with_base(mut self, base: ScaleBase) -> Self {
        self.base = base;
        self
    }

    /// Builder method: Disable suffix selection
    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.fraction > MAX_FRACTION {
            return Err(format!(
                "Fraction must not exceed {} digits, got {}",
                MAX_FRACTION, self.fraction
            ));
        }

        if let Some(unit) = &self.unit {
            if !is_printable(unit) {
                return Err("Unit must only contain printable characters".to_string());
            }
            if unit.len() > MAX_UNIT_LEN {
                return Err(format!("Unit must not be longer than {} bytes", MAX_UNIT_LEN));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Codec
    // ========================================================================

    pub fn format_u64(&self, value: u64) -> HumanReadableStr {
        HumanReadableStr::from_u64(
            value,
            self.unit.as_deref(),
            self.fraction,
            self.base.is_binary(),
            self.raw,
        )
    }

    pub fn format_i64(&self, value: i64) -> HumanReadableStr {
        HumanReadableStr::from_i64(
            value,
            self.unit.as_deref(),
            self.fraction,
            self.base.is_binary(),
            self.raw,
        )
    }

    /// Parse a value written in this format.
    ///
    /// The unit text, if configured and present, is stripped before decoding.
    /// A number directly followed by its unit (`"5bit/s"`) reads the same as
    /// `"5 bit/s"`.
    pub fn parse_u64(&self, text: &str) -> ParseResult<u64> {
        let binary = self.base.is_binary();
        match self.strip_unit(text) {
            Some(number) => decode_unsigned_scaled(number, self.fraction, binary),
            None => decode_unsigned(text, self.fraction, binary),
        }
    }

    /// Signed variant of [`MagnitudeFormat::parse_u64`].
    pub fn parse_i64(&self, text: &str) -> ParseResult<i64> {
        let binary = self.base.is_binary();
        match self.strip_unit(text) {
            Some(number) => decode_signed_scaled(number, self.fraction, binary),
            None => decode_signed(text, self.fraction, binary),
        }
    }

    /// Number part of `text` when it ends in the configured unit.
    fn strip_unit<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.unit
            .as_deref()
            .filter(|unit| !unit.is_empty())
            .and_then(|unit| text.strip_suffix(unit))
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MagnitudeFormat {
    /// Link speeds
    /// - Unit: bit/s
    /// - Decimal steps, three implied decimals
    pub fn bandwidth() -> Self {
        Self::new(Some("bit/s".to_string()), 3, ScaleBase::Decimal, false)
    }

    /// Memory and buffer sizes
    /// - Unit: B
    /// - Binary steps, whole bytes
    pub fn byte_size() -> Self {
        Self::new(Some("B".to_string()), 0, ScaleBase::Binary, false)
    }

    /// Plain counters
    /// - No unit
    /// - Decimal steps, whole numbers
    pub fn plain() -> Self {
        Self::default()
    }
}

#[cfg(feature = "serde")]
impl MagnitudeFormat {
    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }

    /// Deserialize from JSON and validate
    pub fn from_json(json: &str) -> Result<Self, String> {
        let format: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        format.validate()?;
        Ok(format)
    }
}
