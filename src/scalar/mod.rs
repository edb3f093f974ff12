//! # Scalar Kinds
//!
//! The eleven numeric representations a vector can hold, in two mirrored
//! forms:
//!
//! - [`ScalarKind`]: a runtime enumeration carrying bit width, classification,
//!   range, epsilon, and the promoted result kind. Inspectable, serializable.
//! - [`Scalar`] / [`Real`]: the compile-time counterpart. Promotion and
//!   magnitude kinds are associated types, so operator result kinds are fixed
//!   at compile time with no branching.
//!
//! Cross-kind movement lives in [`cast`]: `CastFrom<T>` covers every ordered
//! kind pair (explicit, possibly lossy), while the `WidensTo<U>` marker is
//! implemented only for the value-preserving edges of the lattice.

pub mod cast;
pub mod kind;
pub mod traits;

pub use cast::{CastFrom, WidensTo};
pub use kind::{NumericClass, ScalarKind};
pub use traits::{Real, Scalar};
