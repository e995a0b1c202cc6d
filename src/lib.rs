// Licensed under either of
//
// * Apache License, Version 2.0
//   (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)
// * MIT license
//   (LICENSE-MIT or https://opensource.org/licenses/MIT)
//
// at your option.

//! Divide-and-conquer arithmetic for big integers.
//!
//! The crate implements three operations on [`num_bigint::BigInt`] that beat
//! the schoolbook algorithms once operands grow past a few thousand bits:
//! division with remainder, conversion to a decimal string, and the integer
//! floor square root.
//!
//! All three share one recursive division engine: a 2K-by-K-bit division is
//! split into two K-by-(K/2)-bit divisions plus bounded corrections, so the
//! cost of dividing tracks the cost of multiplying. Stringification cuts the
//! operand down by precomputed powers of ten and the square root runs
//! Newton's method on the high half of its argument, both through the same
//! engine. Below a threshold every operation defers to the host's native
//! primitive, which is faster for small operands.
//!
//! ```
//! use fastbig::{div_mod_floor, floor_sqrt, to_decimal_str};
//! use num_bigint::BigInt;
//!
//! let m = BigInt::from(-10);
//! let n = BigInt::from(3);
//! assert_eq!(div_mod_floor(&m, &n), (BigInt::from(-4), BigInt::from(2)));
//!
//! assert_eq!(to_decimal_str(&BigInt::from(-14255)), "-14255");
//! assert_eq!(floor_sqrt(&BigInt::from(99)), BigInt::from(9));
//! ```

pub use crate::{div::div_mod_floor, fmt::to_decimal_str, sqrt::floor_sqrt};

mod div;
mod fmt;
mod math;
mod sqrt;
