//! Mathematical helper functions.

use num_bigint::BigInt;
use num_traits::One;

/// Splits `x` at `bit_idx` into `(hi, lo)` so that
/// `x == (hi << bit_idx) + lo` and `0 <= lo < 2^bit_idx`.
///
/// One shift and one mask; `x` must be nonnegative.
#[inline]
pub(crate) fn split_bits(x: &BigInt, bit_idx: u64) -> (BigInt, BigInt) {
    let hi = x >> bit_idx;
    let lo = x & &ones(bit_idx);
    (hi, lo)
}

/// n ones: 2^n - 1
#[inline]
pub(crate) fn ones(n: u64) -> BigInt {
    (BigInt::one() << n) - 1u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_bits() {
        let x = BigInt::from(0b1011_0110u32);
        assert_eq!(
            split_bits(&x, 4),
            (BigInt::from(0b1011u32), BigInt::from(0b0110u32))
        );
        assert_eq!(split_bits(&x, 0), (x.clone(), BigInt::from(0u32)));
        assert_eq!(split_bits(&x, 100), (BigInt::from(0u32), x));
    }

    #[test]
    fn test_ones() {
        assert_eq!(ones(0), BigInt::from(0u32));
        assert_eq!(ones(5), BigInt::from(0b11111u32));
        assert_eq!(ones(64), (BigInt::one() << 64u32) - 1u32);
    }
}
