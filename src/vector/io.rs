//! Binary serialization boundary.
//!
//! A vector serializes as N sequential primitive writes in component order,
//! component 0 first, and deserializes as N sequential reads in the same
//! order. How a single scalar becomes bytes is the collaborator's decision:
//! [`PrimitiveWriter`]/[`PrimitiveReader`] are the contract, and
//! [`LittleEndianCodec`] is the in-crate implementation over any
//! `std::io` stream (native-width little-endian raw bits per scalar).

use std::io;

use num_traits::Zero;

use super::types::{LaneCount, SupportedLaneCount, Vector};
use crate::scalar::Scalar;
use crate::Result;

// ============================================================================
// Collaborator contract
// ============================================================================

/// Sink for single scalars; byte encoding is the implementor's concern.
pub trait PrimitiveWriter<T: Scalar> {
    fn write_scalar(&mut self, value: T) -> Result<()>;
}

/// Source of single scalars; byte decoding is the implementor's concern.
pub trait PrimitiveReader<T: Scalar> {
    fn read_scalar(&mut self) -> Result<T>;
}

impl<T: Scalar, const N: usize> Vector<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    /// Write all components through the collaborator, component 0 first.
    pub fn write_to<W: PrimitiveWriter<T> + ?Sized>(&self, sink: &mut W) -> Result<()> {
        for &component in &self.0 {
            sink.write_scalar(component)?;
        }
        Ok(())
    }

    /// Read N components from the collaborator, component 0 first.
    pub fn read_from<R: PrimitiveReader<T> + ?Sized>(source: &mut R) -> Result<Self> {
        let mut components = [T::zero(); N];
        for slot in &mut components {
            *slot = source.read_scalar()?;
        }
        Ok(Self(components))
    }
}

// ============================================================================
// Little-endian std::io adapter
// ============================================================================

/// Adapts any `std::io` stream as the primitive collaborator, encoding each
/// scalar as its native-width raw bits in little-endian byte order.
pub struct LittleEndianCodec<S>(pub S);

impl<S> LittleEndianCodec<S> {
    pub fn new(stream: S) -> Self {
        Self(stream)
    }

    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: io::Write, T: Scalar> PrimitiveWriter<T> for LittleEndianCodec<S> {
    fn write_scalar(&mut self, value: T) -> Result<()> {
        let bytes = value.to_bits().to_le_bytes();
        let len = (T::KIND.bits() / 8) as usize;
        self.0.write_all(&bytes[..len])?;
        Ok(())
    }
}

impl<S: io::Read, T: Scalar> PrimitiveReader<T> for LittleEndianCodec<S> {
    fn read_scalar(&mut self) -> Result<T> {
        let len = (T::KIND.bits() / 8) as usize;
        let mut bytes = [0u8; 8];
        self.0.read_exact(&mut bytes[..len])?;
        Ok(T::from_bits(u64::from_le_bytes(bytes)))
    }
}
