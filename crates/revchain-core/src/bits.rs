//! Bit-level helpers over raw chain indices.
//!
//! These operate on the bare `u64` representation and are total: positions
//! past the end of the word read as zero instead of overflowing the shift.
//! [`Index`](crate::Index) wraps them with a validated 48-bit domain.

use crate::index::MAX_HEIGHT;

/// Return the bit of `index` at `position` (0 = least significant).
pub fn get_bit(index: u64, position: u8) -> u8 {
    index
        .checked_shr(u32::from(position))
        .map_or(0, |shifted| (shifted & 1) as u8)
}

/// Clear the `position` low-order bits of `index`.
///
/// Bit `position` itself and everything above it are kept:
///
/// ```text
///   index    = 1 0 1 1 0 1 1 0 1
///   position =          ^ (3)
///   prefix   = 1 0 1 1 0 1 0 0 0
/// ```
///
/// A checkpoint at index `c` with `z` trailing zeros covers `i` exactly when
/// `prefix(i, z) == c`.
pub fn prefix(index: u64, position: u8) -> u64 {
    match 1u64.checked_shl(u32::from(position)) {
        Some(low) => index & !(low - 1),
        None => 0,
    }
}

/// Count trailing zero bits, capped at [`MAX_HEIGHT`].
///
/// This is the bucket an element is stored in. Index 0 has no set bits and
/// lands in the root bucket, `MAX_HEIGHT`.
pub fn count_trailing_zeros(index: u64) -> u8 {
    index.trailing_zeros().min(u32::from(MAX_HEIGHT)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_get_bit() {
        assert_eq!(get_bit(0b101, 0), 1);
        assert_eq!(get_bit(0b101, 1), 0);
        assert_eq!(get_bit(0b101, 2), 1);
        assert_eq!(get_bit(1 << 47, 47), 1);
        assert_eq!(get_bit(u64::MAX, 64), 0);
        assert_eq!(get_bit(u64::MAX, 255), 0);
    }

    #[test]
    fn test_prefix_keeps_position_bit() {
        assert_eq!(prefix(0b1_0110_1101, 3), 0b1_0110_1000);
        assert_eq!(prefix(0b1111, 0), 0b1111);
        assert_eq!(prefix(0b1111, 1), 0b1110);
        assert_eq!(prefix(0b1111, 4), 0);
        assert_eq!(prefix((1 << 48) - 1, 48), 0);
        assert_eq!(prefix(u64::MAX, 63), 1 << 63);
        assert_eq!(prefix(u64::MAX, 64), 0);
    }

    #[test]
    fn test_count_trailing_zeros() {
        assert_eq!(count_trailing_zeros(1), 0);
        assert_eq!(count_trailing_zeros(0b1000), 3);
        assert_eq!(count_trailing_zeros((1 << 48) - 1), 0);
        assert_eq!(count_trailing_zeros((1 << 48) - 2), 1);
        assert_eq!(count_trailing_zeros(1 << 47), 47);
        assert_eq!(count_trailing_zeros(0), MAX_HEIGHT);
    }

    proptest! {
        #[test]
        fn test_prefix_is_fixed_point_at_own_bucket(index in 1u64..(1 << 48)) {
            let zeros = count_trailing_zeros(index);
            prop_assert_eq!(prefix(index, zeros), index);
            prop_assert_eq!(get_bit(index, zeros), 1);
        }

        #[test]
        fn test_prefix_clears_only_low_bits(index in 0u64..(1 << 48), position in 0u8..48) {
            let p = prefix(index, position);
            prop_assert_eq!(p >> position, index >> position);
            prop_assert_eq!(p & ((1u64 << position) - 1), 0);
        }
    }
}
