//! Pure arithmetic behind the `/bfhl` handlers.
//!
//! Everything here is synchronous and deterministic. Overflow is reported
//! with `None` instead of panicking; callers translate it into the generic
//! internal-error response.

/// First `n` Fibonacci terms starting `0, 1, 1, 2, 3, ...`.
///
/// Returns `None` if a requested term exceeds `u64` range (n > 94).
pub fn fibonacci(n: u64) -> Option<Vec<u64>> {
    let mut terms: Vec<u64> = Vec::new();
    for i in 0..n {
        let term = match i {
            0 => 0,
            1 => 1,
            _ => {
                let len = terms.len();
                terms[len - 1].checked_add(terms[len - 2])?
            }
        };
        terms.push(term);
    }
    Some(terms)
}

/// Trial division up to sqrt(n); anything below 2 is not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2i64;
    // i <= n / i avoids overflowing i * i for large n.
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Euclidean greatest common divisor on magnitudes; result is non-negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a as i64
}

/// Least common multiple via `a / gcd(a, b) * b`.
///
/// `lcm(0, 0)` is 0. Returns `None` when the product overflows `i64`.
pub fn lcm(a: i64, b: i64) -> Option<i64> {
    let g = gcd(a, b);
    if g == 0 {
        return Some(0);
    }
    (a / g).checked_mul(b)
}
