//! End-to-end tests for the bit-packing codec.
//!
//! The dense mode must be a perfect round trip for every layout that fits
//! the backing integer. The width-parameterized mode is *not* a round trip
//! at partial widths (pack keeps top bits, unpack returns low bits); these
//! tests pin that asymmetry so a behavioral change cannot slip in silently.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use vector_rs::{f16, Error, Vector, Vector2};

// ============================================================================
// 1. Dense mode
// ============================================================================

#[test]
fn test_dense_u16_pair_layout() {
    let v: Vector2<u16> = Vector::new([1, 2]);
    assert_eq!(v.pack_dense().unwrap(), 0x0002_0001);
    assert_eq!(Vector2::<u16>::unpack_dense(0x0002_0001).unwrap(), v);
}

#[test]
fn test_dense_eight_bytes_fill_a_u64() {
    let v: Vector<u8, 8> = Vector::new([1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(v.pack_dense().unwrap(), 0x0807_0605_0403_0201);
}

#[test]
fn test_dense_half_vector_packs_ieee_bits() {
    let one = f16::from_f32(1.0); // 0x3C00
    let v: Vector2<f16> = Vector::new([one, -one]);
    assert_eq!(v.pack_dense().unwrap(), 0xBC00_3C00);
}

#[test]
fn test_dense_overflow_is_a_range_error() {
    let v: Vector<i64, 4> = Vector::splat(0);
    assert!(matches!(
        v.pack_dense().unwrap_err(),
        Error::LayoutOverflow {
            required: 256,
            capacity: 128
        }
    ));
}

// ============================================================================
// 2. Width-parameterized mode
// ============================================================================

#[test]
fn test_field_pack_keeps_top_bits_and_unpack_returns_low_bits() {
    let v: Vector2<u8> = Vector::new([0xF1, 0x9E]);
    // Top nibbles are 0xF and 0x9.
    let packed = v.pack_fields([4, 4]).unwrap();
    assert_eq!(packed, 0x9F);
    // Unpack does not scale the nibbles back up.
    let back = Vector2::<u8>::unpack_fields([4, 4], packed).unwrap();
    assert_eq!(back.into_array(), [0x0F, 0x09]);
}

#[test]
fn test_field_pack_at_native_width_equals_dense() {
    let v: Vector<u32, 4> = Vector::new([0xDEAD_BEEF, 1, 2, u32::MAX]);
    assert_eq!(
        v.pack_fields([32, 32, 32, 32]).unwrap(),
        v.pack_dense().unwrap()
    );
    assert_eq!(
        Vector::<u32, 4>::unpack_fields([32, 32, 32, 32], v.pack_dense().unwrap()).unwrap(),
        v
    );
}

#[test]
fn test_field_pack_mixed_widths_layout() {
    // A 5-6-5 color-style layout in a u16 worth of bits.
    let v: Vector<u8, 3> = Vector::new([0xFF, 0x00, 0x80]);
    let packed = v.pack_fields([5, 6, 5]).unwrap();
    // Fields: 0b11111 at 0, 0b000000 at 5, 0b10000 at 11.
    assert_eq!(packed, 0b10000_000000_11111);
}

#[test]
fn test_field_width_validation() {
    let v: Vector2<u16> = Vector::new([1, 2]);
    assert!(matches!(
        v.pack_fields([17, 0]).unwrap_err(),
        Error::FieldWidth {
            index: 0,
            width: 17,
            native: 16
        }
    ));
    let wide: Vector2<u64> = Vector::splat(0);
    assert!(wide.pack_fields([64, 64]).is_ok());
    assert!(matches!(
        Vector::<u64, 4>::splat(0).pack_fields([40, 40, 40, 40]).unwrap_err(),
        Error::LayoutOverflow {
            required: 160,
            capacity: 128
        }
    ));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_dense_round_trip_u16_pairs(v in any::<[u16; 2]>()) {
        let v = Vector::new(v);
        prop_assert_eq!(Vector2::<u16>::unpack_dense(v.pack_dense().unwrap()).unwrap(), v);
    }

    #[test]
    fn prop_dense_round_trip_signed_bytes(v in any::<[i8; 8]>()) {
        let v = Vector::new(v);
        prop_assert_eq!(Vector::<i8, 8>::unpack_dense(v.pack_dense().unwrap()).unwrap(), v);
    }

    #[test]
    fn prop_dense_round_trip_wide_lanes(v in any::<[u64; 2]>()) {
        let v = Vector::new(v);
        prop_assert_eq!(Vector2::<u64>::unpack_dense(v.pack_dense().unwrap()).unwrap(), v);
    }

    #[test]
    fn prop_full_width_fields_round_trip(v in any::<[u8; 4]>()) {
        let v = Vector::new(v);
        let packed = v.pack_fields([8, 8, 8, 8]).unwrap();
        prop_assert_eq!(Vector::<u8, 4>::unpack_fields([8, 8, 8, 8], packed).unwrap(), v);
    }

    #[test]
    fn prop_partial_fields_shift_down(v in any::<[u8; 2]>(), width in 1u32..8) {
        // The pinned asymmetry: what comes back is the top `width` bits of
        // each component, relocated to the bottom.
        let v = Vector::new(v);
        let packed = v.pack_fields([width, width]).unwrap();
        let back = Vector2::<u8>::unpack_fields([width, width], packed).unwrap();
        let expected = Vector::from_fn(|i| v[i] >> (8 - width));
        prop_assert_eq!(back, expected);
    }
}
