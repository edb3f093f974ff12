//! Runtime metadata for the eleven scalar kinds.
//!
//! Everything here mirrors what the type system already knows through
//! [`Scalar`](super::Scalar); the enum form exists for inspection, wire
//! formats, and table-driven tests. The two views are kept in lockstep by
//! `promotion_table_matches_associated_types` in `vector::convert`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed enumeration of the supported numeric representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F16,
    F32,
    F64,
}

/// Coarse classification of a scalar kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericClass {
    Signed,
    Unsigned,
    Float,
}

impl ScalarKind {
    /// Every kind, in declaration order. Handy for table-driven tests.
    pub const ALL: [ScalarKind; 11] = [
        ScalarKind::I8,
        ScalarKind::U8,
        ScalarKind::I16,
        ScalarKind::U16,
        ScalarKind::I32,
        ScalarKind::U32,
        ScalarKind::I64,
        ScalarKind::U64,
        ScalarKind::F16,
        ScalarKind::F32,
        ScalarKind::F64,
    ];

    /// Native width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            ScalarKind::I8 | ScalarKind::U8 => 8,
            ScalarKind::I16 | ScalarKind::U16 | ScalarKind::F16 => 16,
            ScalarKind::I32 | ScalarKind::U32 | ScalarKind::F32 => 32,
            ScalarKind::I64 | ScalarKind::U64 | ScalarKind::F64 => 64,
        }
    }

    pub const fn class(self) -> NumericClass {
        match self {
            ScalarKind::I8 | ScalarKind::I16 | ScalarKind::I32 | ScalarKind::I64 => {
                NumericClass::Signed
            }
            ScalarKind::U8 | ScalarKind::U16 | ScalarKind::U32 | ScalarKind::U64 => {
                NumericClass::Unsigned
            }
            ScalarKind::F16 | ScalarKind::F32 | ScalarKind::F64 => NumericClass::Float,
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self.class(), NumericClass::Float)
    }

    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }

    pub const fn is_signed(self) -> bool {
        !matches!(self.class(), NumericClass::Unsigned)
    }

    /// Smallest representable value, as f64.
    ///
    /// Exact except at the signed 64-bit extreme, where f64 carries only
    /// 53 significand bits.
    pub const fn min(self) -> f64 {
        match self {
            ScalarKind::I8 => i8::MIN as f64,
            ScalarKind::U8 | ScalarKind::U16 | ScalarKind::U32 | ScalarKind::U64 => 0.0,
            ScalarKind::I16 => i16::MIN as f64,
            ScalarKind::I32 => i32::MIN as f64,
            ScalarKind::I64 => i64::MIN as f64,
            ScalarKind::F16 => -65504.0,
            ScalarKind::F32 => f32::MIN as f64,
            ScalarKind::F64 => f64::MIN,
        }
    }

    /// Largest representable value, as f64. Same 64-bit caveat as [`min`](Self::min).
    pub const fn max(self) -> f64 {
        match self {
            ScalarKind::I8 => i8::MAX as f64,
            ScalarKind::U8 => u8::MAX as f64,
            ScalarKind::I16 => i16::MAX as f64,
            ScalarKind::U16 => u16::MAX as f64,
            ScalarKind::I32 => i32::MAX as f64,
            ScalarKind::U32 => u32::MAX as f64,
            ScalarKind::I64 => i64::MAX as f64,
            ScalarKind::U64 => u64::MAX as f64,
            ScalarKind::F16 => 65504.0,
            ScalarKind::F32 => f32::MAX as f64,
            ScalarKind::F64 => f64::MAX,
        }
    }

    /// Machine epsilon for floating kinds, `None` for integers.
    pub const fn epsilon(self) -> Option<f64> {
        match self {
            ScalarKind::F16 => Some(0.0009765625), // 2^-10
            ScalarKind::F32 => Some(f32::EPSILON as f64),
            ScalarKind::F64 => Some(f64::EPSILON),
            _ => None,
        }
    }

    /// Result kind of a binary arithmetic operator over two operands of this
    /// kind. Narrow integers go to i32, f16 to f32, wider kinds are returned
    /// unchanged. This table decides overflow and precision for every
    /// downstream operation, so it is fixed rather than derived.
    pub const fn promoted(self) -> ScalarKind {
        match self {
            ScalarKind::I8 | ScalarKind::U8 | ScalarKind::I16 | ScalarKind::U16 => ScalarKind::I32,
            ScalarKind::F16 => ScalarKind::F32,
            other => other,
        }
    }

    /// True when a cast from `self` to `target` preserves every value
    /// exactly (range and precision both embed). All other directed pairs
    /// are narrowing and only reachable through the explicit convert path.
    pub fn widens_to(self, target: ScalarKind) -> bool {
        use ScalarKind::*;
        if self == target {
            return true;
        }
        matches!(
            (self, target),
            (I8, I16 | I32 | I64 | F32 | F64)
                | (U8, I16 | U16 | I32 | U32 | I64 | U64 | F32 | F64)
                | (I16, I32 | I64 | F32 | F64)
                | (U16, I32 | U32 | I64 | U64 | F32 | F64)
                | (I32, I64 | F64)
                | (U32, I64 | U64 | F64)
                | (F16, F32 | F64)
                | (F32, F64)
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::I8 => "i8",
            ScalarKind::U8 => "u8",
            ScalarKind::I16 => "i16",
            ScalarKind::U16 => "u16",
            ScalarKind::I32 => "i32",
            ScalarKind::U32 => "u32",
            ScalarKind::I64 => "i64",
            ScalarKind::U64 => "u64",
            ScalarKind::F16 => "f16",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
