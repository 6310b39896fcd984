//! DISCLAIMER: Toy random sampling over large integers, for demonstration and educational
//! purposes only. The quality of every value produced here is exactly the quality of the
//! random source the caller injects.
//!
//! # Overview
//! - uniform integers of an exact bit length, or in a closed range
//! - random primes, and random primes congruent to 3 mod 4
//! - the shared rejection-sampling loop used by prime, curve and point generation

use log::{trace, warn};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};

use super::primality::{is_probably_prime, DEFAULT_MILLER_RABIN_ROUNDS};
use crate::error::{Error, Result};

/// Configuration shared by all rejection-sampling loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Miller–Rabin rounds applied to each prime candidate.
    pub rounds: usize,
    /// Maximum number of draws per loop before giving up with
    /// [`Error::SamplingExhausted`]. `None` keeps drawing until a value is accepted.
    pub max_attempts: Option<usize>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_MILLER_RABIN_ROUNDS,
            max_attempts: None,
        }
    }
}

impl SamplingConfig {
    /// Default rounds, with every loop capped at `max_attempts` draws.
    pub fn bounded(max_attempts: usize) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            ..Self::default()
        }
    }
}

/// Run `draw` until it yields a value, honouring `config.max_attempts`.
pub(crate) fn sample_until<T, F>(
    context: &'static str,
    config: &SamplingConfig,
    mut draw: F,
) -> Result<T>
where
    F: FnMut() -> Result<Option<T>>,
{
    let mut attempts = 0usize;
    loop {
        if let Some(limit) = config.max_attempts {
            if attempts >= limit {
                warn!("{}: giving up after {} attempts", context, attempts);
                return Err(Error::SamplingExhausted { context, attempts });
            }
        }
        attempts += 1;
        if let Some(value) = draw()? {
            trace!("{}: accepted after {} attempt(s)", context, attempts);
            return Ok(value);
        }
    }
}

/// Uniform integer in `[2^(k-1), 2^k - 1]`, i.e. exactly `k` bits with the top bit set.
///
/// # Errors
/// [`Error::InvalidArgument`] when `k == 0`.
pub fn random_k_bit_integer<R>(k: u64, rng: &mut R) -> Result<BigUint>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if k == 0 {
        return Err(Error::invalid_argument(
            "random_k_bit_integer",
            "bit length must be a positive integer, got 0",
        ));
    }
    let low = BigUint::one() << (k - 1);
    let high = BigUint::one() << k;
    Ok(rng.gen_biguint_range(&low, &high))
}

/// Uniform integer in the closed range `[low, high]`.
pub fn random_in_range<R>(low: &BigUint, high: &BigUint, rng: &mut R) -> Result<BigUint>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if low > high {
        return Err(Error::invalid_argument(
            "random_in_range",
            format!("empty range [{}, {}]", low, high),
        ));
    }
    Ok(rng.gen_biguint_range(low, &(high + 1u32)))
}

/// Draw `k`-bit integers until one passes Miller–Rabin with `config.rounds` rounds.
pub fn random_prime<R>(k: u64, rng: &mut R, config: &SamplingConfig) -> Result<BigUint>
where
    R: RngCore + CryptoRng + ?Sized,
{
    sample_until("random_prime", config, || {
        let candidate = random_k_bit_integer(k, rng)?;
        if is_probably_prime(&candidate, config.rounds, rng) {
            Ok(Some(candidate))
        } else {
            Ok(None)
        }
    })
}

/// Draw `k`-bit primes until one satisfies `p % 4 == 3`.
///
/// Such primes admit the closed-form square root `r^((p+1)/4)` used for curve point
/// sampling.
pub fn random_prime_3mod4<R>(k: u64, rng: &mut R, config: &SamplingConfig) -> Result<BigUint>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let three = BigUint::from(3u32);
    sample_until("random_prime_3mod4", config, || {
        let p = random_prime(k, rng, config)?;
        if &p % 4u32 == three {
            Ok(Some(p))
        } else {
            Ok(None)
        }
    })
}
