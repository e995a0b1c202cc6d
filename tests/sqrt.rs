use fastbig::floor_sqrt;
use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::Pow;

#[test]
fn test_floor_sqrt_small() {
    let test_cases = [
        (0u32, 0u32),
        (1, 1),
        (2, 1),
        (3, 1),
        (4, 2),
        (8, 2),
        (9, 3),
        (15, 3),
        (16, 4),
        (17, 4),
        (99, 9),
        (100, 10),
        (255, 15),
        (256, 16),
    ];

    for (n, s) in &test_cases {
        assert_eq!(floor_sqrt(&BigInt::from(*n)), BigInt::from(*s));
    }
}

#[test]
fn test_floor_sqrt_matches_host() {
    for n in 0u32..2000 {
        let n_big = BigInt::from(n);
        assert_eq!(floor_sqrt(&n_big), n_big.sqrt(), "sqrt of {}", n);
    }
}

#[test]
fn test_floor_sqrt_large() {
    let n = BigInt::from(2u32) * BigInt::from(10u32).pow(8192u32);
    let s = floor_sqrt(&n);
    assert_eq!(s, n.sqrt());
    let next = &s + 1u32;
    assert!(&s * &s <= n);
    assert!(&next * &next > n);
}

#[test]
fn test_floor_sqrt_perfect_squares() {
    // Around a perfect square the result must land exactly, not one off.
    let r = BigInt::from(3u32).pow(9000u32);
    let n = &r * &r;
    assert_eq!(floor_sqrt(&(&n - 1u32)), &r - 1u32);
    assert_eq!(floor_sqrt(&n), r);
    assert_eq!(floor_sqrt(&(&n + 1u32)), r);
}

#[test]
#[should_panic]
fn test_floor_sqrt_negative() {
    let _ = floor_sqrt(&BigInt::from(-1));
}
