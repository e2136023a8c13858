//! Integer arithmetic modulo `k`
//!
//! The modulus of the curves this engine handles is small, so both the
//! primality test and the inverse search are exhaustive. `k` is not required
//! to be prime; callers treat a missing inverse as a geometric outcome.

/// Residue of `n` modulo `k` in `[0, k)`, for negative `n` as well.
///
/// Takes `i128` so that products of two residues can be reduced directly.
#[inline]
pub fn modulo(n: i128, k: i64) -> i64 {
    n.rem_euclid(k as i128) as i64
}

/// Trial-division primality test.
///
/// 2 is prime, other even numbers and everything below 2 are not, and an
/// odd `n` is prime when no odd `m` in `[3, n)` divides it.
pub fn is_prime(n: i64) -> bool {
    if n < 2 || n % 2 == 0 {
        return n == 2;
    }

    let mut m = 3;
    while m < n {
        if n % m == 0 {
            return false;
        }
        m += 2;
    }

    true
}

/// The `m` in `[0, k)` with `n·m ≡ 1 (mod k)`, found by exhaustive search.
///
/// Returns `None` when `n` and `k` are not coprime (this includes `n ≡ 0`
/// and `k = 1`) or when `k < 1`.
pub fn inverse_of(n: i64, k: i64) -> Option<i64> {
    if k < 1 {
        return None;
    }

    let n = modulo(n as i128, k) as i128;
    let k128 = k as i128;

    (0..k).find(|&m| (n * m as i128) % k128 == 1)
}
