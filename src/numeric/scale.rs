// ============================================================================
// Scale Ladder
// Base factors and the ordered suffix symbols of the magnitude codec
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest fraction precision whose power of ten still fits in a `u64`.
pub const MAX_FRACTION: u8 = 19;

/// Compute 10^n at compile time
///
/// Callers keep `n <= MAX_FRACTION`.
pub const fn pow10(n: u8) -> u64 {
    let mut result: u64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

// ============================================================================
// Scale Base
// ============================================================================

/// Factor between two neighbouring suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScaleBase {
    /// SI steps of 1000
    #[default]
    Decimal,
    /// IEC steps of 1024
    Binary,
}

impl ScaleBase {
    /// Map the codec's `binary` flag onto a base.
    #[inline]
    pub const fn from_binary(binary: bool) -> Self {
        if binary {
            ScaleBase::Binary
        } else {
            ScaleBase::Decimal
        }
    }

    #[inline]
    pub const fn is_binary(self) -> bool {
        matches!(self, ScaleBase::Binary)
    }

    /// Multiplier applied per suffix step.
    #[inline]
    pub const fn step(self) -> u64 {
        match self {
            ScaleBase::Decimal => 1000,
            ScaleBase::Binary => 1024,
        }
    }
}

// ============================================================================
// Suffix
// ============================================================================

/// Magnitude suffix, ordered from unscaled up to exa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Suffix {
    #[default]
    None = 0,
    Kilo = 1,
    Mega = 2,
    Giga = 3,
    Tera = 4,
    Peta = 5,
    Exa = 6,
}

impl Suffix {
    /// All suffixes in ascending order.
    pub const LADDER: [Suffix; 7] = [
        Suffix::None,
        Suffix::Kilo,
        Suffix::Mega,
        Suffix::Giga,
        Suffix::Tera,
        Suffix::Peta,
        Suffix::Exa,
    ];

    /// Number of base steps this suffix stands for.
    #[inline]
    pub const fn exponent(self) -> u32 {
        self as u32
    }

    /// Printed symbol, `None` for the unscaled rung.
    pub const fn symbol(self) -> Option<char> {
        match self {
            Suffix::None => None,
            Suffix::Kilo => Some('k'),
            Suffix::Mega => Some('M'),
            Suffix::Giga => Some('G'),
            Suffix::Tera => Some('T'),
            Suffix::Peta => Some('P'),
            Suffix::Exa => Some('E'),
        }
    }

    /// Parse a single trailing symbol. A space means "no scaling".
    pub const fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b' ' => Some(Suffix::None),
            b'k' => Some(Suffix::Kilo),
            b'M' => Some(Suffix::Mega),
            b'G' => Some(Suffix::Giga),
            b'T' => Some(Suffix::Tera),
            b'P' => Some(Suffix::Peta),
            b'E' => Some(Suffix::Exa),
            _ => None,
        }
    }

    /// Next larger suffix, `None` after exa.
    #[inline]
    pub fn next(self) -> Option<Self> {
        Self::LADDER.get(self as usize + 1).copied()
    }

    /// `step^exponent` for the given base.
    ///
    /// Exa is the top rung, so the result never exceeds 1024^6 = 2^60.
    pub fn factor(self, base: ScaleBase) -> u64 {
        let step = base.step();
        let mut factor = 1u64;
        for _ in 0..self.exponent() {
            factor *= step;
        }
        factor
    }
}
