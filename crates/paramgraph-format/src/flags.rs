//! Edge flag and scalar-kind bitmasks.
//!
//! Bit values are part of the wire format and must not change.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// What kinds of value an input field accepts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EdgeFlags(u8);

impl EdgeFlags {
    pub const EMPTY: Self = Self(0);
    pub const PARAM_SCALAR: Self = Self(1);
    pub const PARAM_ENUM: Self = Self(1 << 1);
    pub const PARAM_LIST_SCALAR: Self = Self(1 << 2);
    pub const PARAM_LIST_ENUM: Self = Self(1 << 3);
    pub const LIST_OBJECT: Self = Self(1 << 4);
    pub const OBJECT: Self = Self(1 << 5);

    const NAMES: [(Self, &'static str); 6] = [
        (Self::PARAM_SCALAR, "scalar"),
        (Self::PARAM_ENUM, "enum"),
        (Self::PARAM_LIST_SCALAR, "scalar[]"),
        (Self::PARAM_LIST_ENUM, "enum[]"),
        (Self::LIST_OBJECT, "object[]"),
        (Self::OBJECT, "object"),
    ];

    #[inline]
    pub fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn accepts_scalar(self) -> bool {
        self.intersects(Self::PARAM_SCALAR | Self::PARAM_LIST_SCALAR)
    }

    pub fn accepts_enum(self) -> bool {
        self.intersects(Self::PARAM_ENUM | Self::PARAM_LIST_ENUM)
    }

    pub fn accepts_object(self) -> bool {
        self.intersects(Self::OBJECT | Self::LIST_OBJECT)
    }

    /// Names of the set flags, in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

impl BitOr for EdgeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for EdgeFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for EdgeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeFlags({})", self)
    }
}

impl fmt::Display for EdgeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let names: Vec<_> = self.names().collect();
        f.write_str(&names.join("|"))
    }
}

/// Scalar primitive kinds a field accepts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ScalarMask(u16);

impl ScalarMask {
    pub const EMPTY: Self = Self(0);
    pub const STRING: Self = Self(1);
    pub const INT: Self = Self(1 << 1);
    pub const BIGINT: Self = Self(1 << 2);
    pub const FLOAT: Self = Self(1 << 3);
    pub const DECIMAL: Self = Self(1 << 4);
    pub const BOOLEAN: Self = Self(1 << 5);
    pub const DATETIME: Self = Self(1 << 6);
    pub const JSON: Self = Self(1 << 7);
    pub const BYTES: Self = Self(1 << 8);

    const NAMES: [(Self, &'static str); 9] = [
        (Self::STRING, "String"),
        (Self::INT, "Int"),
        (Self::BIGINT, "BigInt"),
        (Self::FLOAT, "Float"),
        (Self::DECIMAL, "Decimal"),
        (Self::BOOLEAN, "Boolean"),
        (Self::DATETIME, "DateTime"),
        (Self::JSON, "Json"),
        (Self::BYTES, "Bytes"),
    ];

    /// Mask for a schema scalar type name; unknown names map to empty.
    pub fn from_scalar_type(name: &str) -> Self {
        Self::NAMES
            .into_iter()
            .find(|(_, n)| *n == name)
            .map_or(Self::EMPTY, |(mask, _)| mask)
    }

    #[inline]
    pub fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline]
    pub fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |(kind, _)| self.contains(*kind))
            .map(|(_, name)| name)
    }
}

impl BitOr for ScalarMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ScalarMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for ScalarMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarMask({})", self)
    }
}

impl fmt::Display for ScalarMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let names: Vec<_> = self.names().collect();
        f.write_str(&names.join("|"))
    }
}
