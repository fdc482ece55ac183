/// Deterministic trial division.
///
/// Odd divisors are tried from 3 up to the ceiling of `√n`, inclusive.
/// 0 and 1 are not prime.
pub fn is_prime(n: u64) -> bool {
    match n {
        2 | 3 | 5 | 7 => return true,
        0 | 1 => return false,
        _ if n % 2 == 0 => return false,
        _ => {}
    }

    let limit = ceil_sqrt(n);
    let mut divisor = 3;
    while divisor <= limit {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Smallest `r` with `r * r >= n`.
fn ceil_sqrt(n: u64) -> u64 {
    // f64 gets within one of the answer; the loops fix the rounding
    let mut r = (n as f64).sqrt() as u64;
    while r > 0 && r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    if r.checked_mul(r).is_some_and(|sq| sq < n) {
        r += 1;
    }
    r
}
