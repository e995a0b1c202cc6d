//! Decimal string conversion.

use crate::div;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// If the value is shorter than this, format through the host directly.
const MAX_BITS_SIMPLE: u64 = 20_000;

/// The decimal digits of `n`, with a leading `-` for negative values.
///
/// Equivalent to `n.to_string()`, but a large operand is first cut down by
/// precomputed powers of ten, so each level of recursion halves the digit
/// count and the conversion cost tracks the fast division instead of the
/// host's quadratic loop.
///
/// # Examples
/// ```
/// use fastbig::to_decimal_str;
/// use num_bigint::BigInt;
///
/// assert_eq!(to_decimal_str(&BigInt::from(0)), "0");
/// assert_eq!(to_decimal_str(&BigInt::from(-14255)), "-14255");
/// ```
pub fn to_decimal_str(n: &BigInt) -> String {
    if n.is_zero() {
        return "0".to_string();
    }
    let magnitude = n.abs();
    let powers = power_table(magnitude.bits());
    let mut digits = String::new();
    write_decimal(&magnitude, &powers, powers.len(), &mut digits);
    // Slot padding leaves zeros in front of the topmost chunk.
    let digits = digits.trim_start_matches('0');
    if n.is_negative() {
        let mut s = String::with_capacity(digits.len() + 1);
        s.push('-');
        s.push_str(digits);
        s
    } else {
        digits.to_string()
    }
}

/// Powers of ten of the form 10^(2^i), grown until the square of the last
/// entry covers an operand of `bits` bits.
fn power_table(bits: u64) -> Vec<BigInt> {
    let mut powers = vec![BigInt::from(10u32)];
    while powers.last().unwrap().bits() * 2 < bits {
        let prev = powers.last().unwrap();
        let next = prev * prev;
        powers.push(next);
    }
    powers
}

/// Writes `n` into a slot of exactly `2^digits_log2` decimal digits,
/// left-padded with zeros so concatenated slots keep their positional value.
///
/// Only the leftmost slot of the whole conversion may run over its width.
fn write_decimal(n: &BigInt, powers: &[BigInt], digits_log2: usize, out: &mut String) {
    if n.bits() < MAX_BITS_SIMPLE {
        let chunk = n.to_string();
        let width = 1usize << digits_log2;
        for _ in chunk.len()..width {
            out.push('0');
        }
        out.push_str(&chunk);
        return;
    }

    // Halve the digit count: the quotient fills the left slot and the
    // remainder the right one.
    let (hi, lo) = div::div_rem_positive(n, &powers[digits_log2 - 1]);
    write_decimal(&hi, powers, digits_log2 - 1, out);
    write_decimal(&lo, powers, digits_log2 - 1, out);
}
