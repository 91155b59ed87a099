//! Number theory helpers

/// Greatest common divisor (always non-negative).
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple; zero if either argument is zero.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b) * b).abs()
}

pub fn lcm_all(values: impl IntoIterator<Item = i64>) -> i64 {
    values.into_iter().fold(1, lcm)
}

/// `base^exp mod modulus` by square-and-multiply.
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let m = modulus as u128;
    let mut result: u128 = 1;
    let mut base = base as u128 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as u64
}

/// Returns `(g, x, y)` with `a*x + b*y == g == gcd(a, b)`.
pub fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    if b == 0 {
        (a, 1, 0)
    } else {
        let (g, x, y) = extended_gcd(b, a.rem_euclid(b));
        (g, y, x - a.div_euclid(b) * y)
    }
}

/// Multiplicative inverse of `a` modulo `m`, if `a` and `m` are coprime.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (g, x, _) = extended_gcd(a.rem_euclid(m) as i128, m as i128);
    (g == 1).then(|| x.rem_euclid(m as i128) as i64)
}

/// Chinese remainder theorem over pairwise coprime moduli.
///
/// Given `(residue, modulus)` pairs, returns the smallest non-negative `x`
/// with `x ≡ residue (mod modulus)` for every pair, and the product of the
/// moduli. `None` if some modulus is not positive or two moduli share a factor.
pub fn crt(congruences: &[(i64, i64)]) -> Option<(i64, i64)> {
    let mut x: i128 = 0;
    let mut m: i128 = 1;
    for &(residue, modulus) in congruences {
        if modulus <= 0 {
            return None;
        }
        let n = modulus as i128;
        let (g, inv, _) = extended_gcd(m.rem_euclid(n), n);
        if g != 1 {
            return None;
        }
        // x + m*t ≡ residue (mod n)
        let t = ((residue as i128 - x).rem_euclid(n) * inv.rem_euclid(n)).rem_euclid(n);
        x += m * t;
        m *= n;
        x = x.rem_euclid(m);
    }
    Some((i64::try_from(x).ok()?, i64::try_from(m).ok()?))
}

/// Floor of the square root.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut x = (n as f64).sqrt() as u64;
    while x.checked_mul(x).is_none_or(|sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).is_some_and(|sq| sq <= n) {
        x += 1;
    }
    x
}

/// Trial division up to and including `isqrt(n)`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let limit = isqrt(n);
    (3..=limit).step_by(2).all(|d| n % d != 0)
}

/// Survivor of the every-second-elimination circle of `n` players (1-based).
pub fn josephus(n: u64) -> u64 {
    assert!(n >= 1, "josephus circle needs at least one player");
    let highest = 1u64 << (63 - n.leading_zeros());
    2 * (n - highest) + 1
}
