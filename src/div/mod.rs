//! Division functions.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use static_assertions::const_assert;

mod divide_conquer;

/// If the divisor is shorter than this, use the host's schoolbook division.
pub(crate) const MAX_BITS_SIMPLE: u64 = 10_000;

// To guarantee the recursive branches can split the divisor into two
// nonempty halves.
const_assert!(MAX_BITS_SIMPLE >= 4);

/// Quotient and remainder of `lhs` by `rhs` with floored semantics.
///
/// The quotient rounds toward negative infinity and the remainder takes the
/// sign of `rhs` (or is zero), so `lhs == q * rhs + r` always holds with
/// `0 <= r < rhs` for a positive divisor and `rhs < r <= 0` for a negative
/// one.
///
/// # Panics
///
/// Panics if `rhs` is zero.
///
/// # Examples
/// ```
/// use fastbig::div_mod_floor;
/// use num_bigint::BigInt;
///
/// let (q, r) = div_mod_floor(&BigInt::from(-10), &BigInt::from(3));
/// assert_eq!((q, r), (BigInt::from(-4), BigInt::from(2)));
/// ```
pub fn div_mod_floor(lhs: &BigInt, rhs: &BigInt) -> (BigInt, BigInt) {
    let (q, r) = div_rem_positive(&lhs.abs(), &rhs.abs());
    let negative_lhs = lhs.is_negative();
    let negative_rhs = rhs.is_negative();
    if negative_lhs == negative_rhs {
        if negative_lhs {
            (q, -r)
        } else {
            (q, r)
        }
    } else if r.is_zero() {
        (-q, r)
    } else if negative_rhs {
        (-(q + 1u32), rhs + r)
    } else {
        (-(q + 1u32), rhs - r)
    }
}

/// Quotient and remainder of nonnegative `lhs` by positive `rhs`.
///
/// Every recursion level comes back through here, so the schoolbook bailout
/// applies at every depth.
pub(crate) fn div_rem_positive(lhs: &BigInt, rhs: &BigInt) -> (BigInt, BigInt) {
    debug_assert!(!lhs.is_negative() && !rhs.is_negative());
    if rhs.bits() < MAX_BITS_SIMPLE {
        lhs.div_rem(rhs)
    } else {
        divide_conquer::div_rem(lhs, rhs)
    }
}
