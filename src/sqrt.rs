//! Integer floor square root.

use crate::div;
use num_bigint::BigInt;
use num_traits::{One, Signed};

/// Below this bit length the root is found by counting up from 1.
const MAX_BITS_BRUTE_FORCE: u64 = 8;

/// Upper bound on the steps of the final ±1 settling loop.
const MAX_CORRECTION_STEPS: u32 = 4;

/// The largest integer whose square does not exceed `n`.
///
/// A recursive estimate from the high half of the operand supplies half the
/// result bits; one Newton step through the fast division doubles them,
/// leaving at most a step or two of exact correction.
///
/// # Panics
///
/// Panics if `n` is negative.
///
/// # Examples
/// ```
/// use fastbig::floor_sqrt;
/// use num_bigint::BigInt;
///
/// assert_eq!(floor_sqrt(&BigInt::from(15)), BigInt::from(3));
/// assert_eq!(floor_sqrt(&BigInt::from(16)), BigInt::from(4));
/// ```
pub fn floor_sqrt(n: &BigInt) -> BigInt {
    if n.is_negative() {
        panic!("floor_sqrt of a negative number");
    }
    floor_sqrt_positive(n)
}

fn floor_sqrt_positive(n: &BigInt) -> BigInt {
    let bits = n.bits();
    if bits <= 1 {
        // 0 and 1 are their own roots.
        return n.clone();
    }
    if bits < MAX_BITS_BRUTE_FORCE {
        let mut s = BigInt::one();
        loop {
            let next = &s + 1u32;
            if &next * &next > *n {
                return s;
            }
            s = next;
        }
    }

    // Estimate from the top half of the bits, then take one Newton step.
    let result_pad_bits = bits / 4;
    let pad_bits = 2 * result_pad_bits;
    let mut approx = floor_sqrt_positive(&(n >> pad_bits)) << result_pad_bits;
    approx = (&approx + div::div_rem_positive(n, &approx).0) >> 1u32;

    // Settle the last unit exactly. The running square moves in steps of
    // 2s+1 or 2s-1, so no resquaring is needed.
    let mut square = &approx * &approx;
    let mut steps = 0u32;
    if square > *n {
        while square > *n {
            approx -= 1u32;
            square -= (&approx << 1u32) | BigInt::one();
            steps += 1;
        }
    } else {
        loop {
            let step_up = (&approx << 1u32) | BigInt::one();
            if &square + &step_up > *n {
                break;
            }
            square += step_up;
            approx += 1u32;
            steps += 1;
        }
    }
    debug_assert!(steps <= MAX_CORRECTION_STEPS);
    approx
}
