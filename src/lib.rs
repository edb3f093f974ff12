//! # vector-rs — Fixed-Size Numeric Vector Algebra
//!
//! Immutable 2/3/4/8-lane vectors over eleven scalar kinds, with a cross-kind
//! conversion lattice, promoted-kind arithmetic, geometric operations, and a
//! bit-packing codec.
//!
//! ## Design Principles
//!
//! 1. **One generic type**: `Vector<T, N>` replaces the per-kind, per-lane
//!    zoo; lane counts are restricted to {2, 3, 4, 8} by a sealed marker
//! 2. **Metadata in the type system**: promotion and magnitude kinds are
//!    associated types on [`Scalar`], not runtime lookups
//! 3. **Pure values**: every operation returns a new vector; nothing is
//!    mutated, shared, or locked
//! 4. **Boundary traits**: binary serialization delegates to
//!    [`PrimitiveWriter`]/[`PrimitiveReader`] collaborators
//!
//! ## Quick Start
//!
//! ```rust
//! use vector_rs::Vector;
//!
//! let v: Vector<f64, 2> = Vector::new([3.0, 4.0]);
//! assert_eq!(v.absolute(), 5.0);
//! assert_eq!(v.normalize().into_array(), [0.6, 0.8]);
//!
//! // Arithmetic promotes: u8 + u8 runs in i32, so 200 + 100 is 300, not 44.
//! let a: Vector<u8, 3> = Vector::splat(200);
//! let b: Vector<u8, 3> = Vector::splat(100);
//! assert_eq!((a + b).into_array(), [300i32, 300, 300]);
//!
//! // Dense bit packing: component i sits at bit offset i × width.
//! let p: Vector<u16, 2> = Vector::new([1, 2]);
//! assert_eq!(p.pack_dense().unwrap(), 0x0002_0001);
//! ```
//!
//! ## Scalar Kinds
//!
//! | Kind | Bits | Class | Promotes to |
//! |------|------|-------|-------------|
//! | i8, u8, i16, u16 | 8/16 | integer | i32 |
//! | i32, u32, i64, u64 | 32/64 | integer | unchanged |
//! | f16 | 16 | floating | f32 |
//! | f32, f64 | 32/64 | floating | unchanged |

// ============================================================================
// Modules
// ============================================================================

pub mod scalar;
pub mod vector;

// ============================================================================
// Re-exports: Scalar kinds and traits
// ============================================================================

pub use scalar::{CastFrom, NumericClass, Real, Scalar, ScalarKind, WidensTo};

/// Half-precision scalar kind, re-exported from the `half` crate.
pub use half::f16;

// ============================================================================
// Re-exports: Vector type and collaborators
// ============================================================================

pub use vector::{
    LaneCount, Midpoint, SupportedLaneCount, Vector, Vector2, Vector3, Vector4, Vector8,
};

pub use vector::io::{LittleEndianCodec, PrimitiveReader, PrimitiveWriter};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Construction from a flat sequence that cannot supply N components.
    #[error("sequence too short: need {needed} components at offset {offset}, have {len}")]
    SequenceTooShort {
        needed: usize,
        offset: usize,
        len: usize,
    },

    /// Component or permutation index outside `[0, N)`.
    #[error("component index {index} out of range for {dim}-lane vector")]
    IndexOutOfRange { index: usize, dim: usize },

    /// A packed field width exceeds the scalar kind's native width.
    #[error("field width {width} exceeds native width {native} for component {index}")]
    FieldWidth { index: usize, width: u32, native: u32 },

    /// A packed layout does not fit the backing integer.
    #[error("packed layout needs {required} bits but the backing integer holds {capacity}")]
    LayoutOverflow { required: u32, capacity: u32 },

    /// Surfaced by the binary I/O boundary only.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
