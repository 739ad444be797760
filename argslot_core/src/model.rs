/// The numeric classification of a coercible type.
///
/// Resolved once per concrete type (see `Numeric::CLASS`), this selects which textual parser and limit check applies.
/// Enumerations do not have their own class; they take the class of their underlying integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericClass {
    /// A two's complement integer of `bits` width.
    Signed {
        /// The width of the integer.
        bits: u32,
    },
    /// An unsigned integer of `bits` width.
    Unsigned {
        /// The width of the integer.
        bits: u32,
    },
    /// An IEEE-754 floating point number of `bits` width.
    Float {
        /// The width of the float.
        bits: u32,
    },
}

impl NumericClass {
    /// Whether this class is parsed by the integer parser.
    pub fn is_integer(&self) -> bool {
        !matches!(self, NumericClass::Float { .. })
    }
}

impl std::fmt::Display for NumericClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericClass::Signed { bits } => write!(f, "signed {bits}-bit integer"),
            NumericClass::Unsigned { bits } => write!(f, "unsigned {bits}-bit integer"),
            NumericClass::Float { bits } => write!(f, "{bits}-bit float"),
        }
    }
}

/// The base used to parse integer tokens.
///
/// Only bases `2` through `36` are representable.
/// Floating point targets accept `Radix::DECIMAL` exclusively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radix(u32);

impl Radix {
    /// Base 2.
    pub const BINARY: Radix = Radix(2);
    /// Base 8.
    pub const OCTAL: Radix = Radix(8);
    /// Base 10, the default.
    pub const DECIMAL: Radix = Radix(10);
    /// Base 16; tokens may carry a `0x` or `0X` prefix after the sign.
    pub const HEXADECIMAL: Radix = Radix(16);

    /// Create a radix, provided `base` lies within `2..=36`.
    pub fn new(base: u32) -> Result<Self, ()> {
        if (2..=36).contains(&base) {
            Ok(Radix(base))
        } else {
            Err(())
        }
    }

    /// The numeric base.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for Radix {
    fn default() -> Self {
        Radix::DECIMAL
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "base {}", self.0)
    }
}
