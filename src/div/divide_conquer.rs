//! Divide and conquer division algorithm.

use crate::{div, math::split_bits};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Upper bound on the steps any single correction loop may take.
///
/// A quotient estimated from the operands' high bits errs by a small
/// constant, so each loop settles after a handful of divisor-sized
/// adjustments.
const MAX_CORRECTION_STEPS: u32 = 4;

/// Quotient and remainder of nonnegative `m` by positive `n`.
///
/// `n` must be at least `div::MAX_BITS_SIMPLE` bits long; smaller divisors
/// belong to the schoolbook fallback.
pub(crate) fn div_rem(m: &BigInt, n: &BigInt) -> (BigInt, BigInt) {
    let m_bits = m.bits();
    let n_bits = n.bits();
    debug_assert!(n_bits >= div::MAX_BITS_SIMPLE);

    if m_bits < n_bits {
        // m < n by bit length alone.
        (BigInt::zero(), m.clone())
    } else if m_bits == n_bits {
        // Either m < n or n <= m < 2n, so the quotient is 0 or 1. A loop
        // instead of a single conditional subtraction; it runs at most
        // twice.
        let mut q = BigInt::zero();
        let mut r = m.clone();
        while r >= *n {
            r -= n;
            q += 1u32;
        }
        (q, r)
    } else if m_bits < 2 * n_bits {
        div_rem_small_quotient(m, n, m_bits, n_bits)
    } else if m_bits == 2 * n_bits {
        div_rem_same_len(m, n, n_bits)
    } else {
        div_rem_long(m, n, n_bits)
    }
}

/// Quotient shorter than the divisor: n_bits < m_bits < 2 * n_bits.
///
/// The top 2k bits of m over the top k bits of n approximate the quotient,
/// where k is the excess bit length of m; both low halves share the same
/// width.
fn div_rem_small_quotient(m: &BigInt, n: &BigInt, m_bits: u64, n_bits: u64) -> (BigInt, BigInt) {
    let k = m_bits - n_bits;
    let low_bits = n_bits - k;
    let (m_hi, m_lo) = split_bits(m, low_bits);
    let (n_hi, n_lo) = split_bits(n, low_bits);

    let (mut q, r) = div::div_rem_positive(&m_hi, &n_hi);
    // r = m - n * q
    let mut r = ((r << low_bits) | m_lo) - &n_lo * &q;
    correct(&mut q, &mut r, n);
    (q, r)
}

/// The ideal shape m_bits == 2 * n_bits: two half-size divisions by the top
/// half of n, each followed by a bounded correction.
fn div_rem_same_len(m: &BigInt, n: &BigInt, n_bits: u64) -> (BigInt, BigInt) {
    let k = n_bits;
    let half = k / 2;
    let half_up = k - half;
    // m = m_hi * 2^k + m_mid * 2^half_up + m_lo, n = n_hi * 2^half + n_lo.
    let (m_hi, m_rest) = split_bits(m, k);
    let (m_mid, m_lo) = split_bits(&m_rest, half_up);
    let (n_hi, n_lo) = split_bits(n, half);

    let (mut q1, r1) = div::div_rem_positive(&m_hi, &n_hi);
    // r1 = (m >> half_up) - n * q1
    let mut r1 = ((r1 << half) | m_mid) - &n_lo * &q1;
    correct(&mut q1, &mut r1, n);

    // Second half-quotient from the first remainder. An odd k makes the two
    // halves unequal, which surfaces as a factor of two here.
    let (mut q2, r2) = div::div_rem_positive(&r1, &n_hi);
    if k & 1 == 1 {
        q2 <<= 1u32;
    }
    // r2 = (r1 << half_up | m_lo) - n * q2
    let mut r2 = ((r2 << half_up) | m_lo) - &n_lo * &q2;
    correct(&mut q2, &mut r2, n);

    ((q1 << half_up) + q2, r2)
}

/// Long division in base 2^k for m_bits > 2 * n_bits.
///
/// Peels the top 2k bits off the working remainder, divides them by n
/// through the ideal case, and folds the peeled low bits back in. Only the
/// 2k-by-k subproblem recurses, so the recursion depth stays logarithmic in
/// the dividend's bit length.
fn div_rem_long(m: &BigInt, n: &BigInt, n_bits: u64) -> (BigInt, BigInt) {
    let mut q = BigInt::zero();
    let mut r = m.clone();
    let mut remaining_bits = r.bits() - 2 * n_bits;
    while r >= *n {
        let new_remaining = r.bits().saturating_sub(2 * n_bits);
        // Quotient digits shift in as the remainder shrinks, which avoids
        // right-padding the partial quotient up front.
        q <<= remaining_bits - new_remaining;
        remaining_bits = new_remaining;

        let (r_hi, r_lo) = split_bits(&r, remaining_bits);
        let (qi, r_top) = div::div_rem_positive(&r_hi, n);
        r = (r_top << remaining_bits) | r_lo;
        q += qi;
    }
    (q << remaining_bits, r)
}

/// Adjusts a trial quotient by whole divisor steps until `0 <= r < n`.
fn correct(q: &mut BigInt, r: &mut BigInt, n: &BigInt) {
    let mut steps = 0u32;
    while r.is_negative() {
        *r += n;
        *q -= 1u32;
        steps += 1;
    }
    while *r >= *n {
        *r -= n;
        *q += 1u32;
        steps += 1;
    }
    debug_assert!(steps <= MAX_CORRECTION_STEPS);
}
