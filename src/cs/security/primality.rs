//! DISCLAIMER: This module is a toy Miller–Rabin primality test in pure Rust.
//! It is *EXCLUSIVELY* for demonstration and educational purposes. It makes no attempt
//! at constant-time behaviour. If you need prime generation for real cryptography,
//! please use a vetted, well-reviewed library.
//!
//! # Overview
//! Miller–Rabin writes `n - 1 = d * 2^s` with `d` odd and checks random witnesses `a`
//! against the sequence `a^d, a^(2d), ..., a^(2^(s-1) d) mod n`. A composite survives a
//! single round with probability at most 1/4, so `rounds` independent witnesses bound
//! the false-positive rate by `4^-rounds`. Primes are never rejected.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::{CryptoRng, RngCore};

/// Number of Miller–Rabin rounds used unless a caller asks for more.
pub const DEFAULT_MILLER_RABIN_ROUNDS: usize = 5;

/// Decide whether `n` is probably prime using `rounds` random witnesses drawn from `rng`.
///
/// Returns `false` as soon as one witness proves `n` composite. A `true` result is wrong
/// with probability at most `4^-rounds`.
pub fn is_probably_prime<R>(n: &BigUint, rounds: usize, rng: &mut R) -> bool
where
    R: RngCore + CryptoRng + ?Sized,
{
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);
    if *n == two || *n == three {
        return true;
    }
    if *n < two || n.is_even() {
        return false;
    }

    // n - 1 = d * 2^s
    let n_minus_one = n - BigUint::one();
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for _ in 0..rounds {
        // a in [2, n-2]
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
