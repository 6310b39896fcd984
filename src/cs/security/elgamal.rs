//! DISCLAIMER: This library is a toy example of elliptic-curve ElGamal encryption in pure Rust.
//! It is *EXCLUSIVELY* for demonstration and educational purposes.
//! Absolutely DO NOT use it for real cryptographic or security-sensitive operations.
//! It is not audited, not vetted, and very likely insecure in practice.
//!
//! If you need ElGamal or any cryptographic operations in production, please use a
//! vetted, well-reviewed cryptography library.
//!
//! # Overview
//! Every key pair lives on its own freshly generated curve:
//! 1. a random prime `p = 3 mod 4`,
//! 2. a random non-singular curve `(a, b)` over `F_p`,
//! 3. a random base point `G`, a private scalar `d` in `[1, p-1]` and `Q = d*G`.
//!
//! Messages are curve points. Encryption draws a fresh ephemeral `k` and produces
//! `(k*G, M + k*Q)`; decryption subtracts `d*(k*G)`.

use log::debug;
use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, RngCore};

use super::curve::{is_on_curve, random_curve, random_curve_point, Curve};
use super::elliptic::{point_add, point_neg, scalar_multiply, Point};
use super::sampling::{random_in_range, random_prime_3mod4, SamplingConfig};
use crate::error::{Error, Result};

/// Bit length of the field modulus used by [`generate_keys`].
pub const DEFAULT_MODULUS_BITS: u64 = 256;

/// The public half of a key pair: the curve `(p, a, b)`, base point `G` and `Q = d*G`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub curve: Curve,
    pub g: Point,
    pub q: Point,
}

/// The private scalar `d`, in `[1, p-1]` for its public key's modulus `p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    d: BigUint,
}

/// A ciphertext `(c1, c2) = (k*G, M + k*Q)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    pub c1: Point,
    pub c2: Point,
}

/// Configuration for key generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyGenConfig {
    /// The bit length of the field modulus `p`.
    pub modulus_bits: u64,
    /// Primality rounds and retry cap for every sampling step.
    pub sampling: SamplingConfig,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            modulus_bits: DEFAULT_MODULUS_BITS,
            sampling: SamplingConfig::default(),
        }
    }
}

impl PublicKey {
    /// Assemble a public key, checking that `g` and `q` lie on `curve`.
    pub fn new(curve: Curve, g: Point, q: Point) -> Result<Self> {
        if !is_on_curve(&curve, &g) {
            return Err(Error::invalid_argument(
                "PublicKey::new",
                format!("base point {} is not on the curve", g),
            ));
        }
        if !is_on_curve(&curve, &q) {
            return Err(Error::invalid_argument(
                "PublicKey::new",
                format!("public point {} is not on the curve", q),
            ));
        }
        Ok(Self { curve, g, q })
    }
}

impl PrivateKey {
    /// Wrap `d`, checking `1 <= d <= p-1` for the modulus of `public`.
    ///
    /// The public point is not compared against `d*G`.
    pub fn new(d: BigUint, public: &PublicKey) -> Result<Self> {
        if d < BigUint::one() || &d >= public.curve.p() {
            return Err(Error::invalid_argument(
                "PrivateKey::new",
                "private scalar must lie in [1, p-1]",
            ));
        }
        Ok(Self { d })
    }

    pub fn scalar(&self) -> &BigUint {
        &self.d
    }
}

/// Generate a key pair over a fresh 256-bit prime field.
pub fn generate_keys<R>(rng: &mut R) -> Result<(PublicKey, PrivateKey)>
where
    R: RngCore + CryptoRng + ?Sized,
{
    generate_keys_with_config(&KeyGenConfig::default(), rng)
}

/// Generate a key pair with an explicit modulus size and sampling configuration.
///
/// # Errors
/// - [`Error::InvalidArgument`] when `config.modulus_bits < 2`.
/// - [`Error::SamplingExhausted`] when a capped sampling loop runs out of attempts.
pub fn generate_keys_with_config<R>(
    config: &KeyGenConfig,
    rng: &mut R,
) -> Result<(PublicKey, PrivateKey)>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if config.modulus_bits < 2 {
        return Err(Error::invalid_argument(
            "generate_keys",
            format!(
                "field modulus needs at least 2 bits, got {}",
                config.modulus_bits
            ),
        ));
    }

    let p = random_prime_3mod4(config.modulus_bits, rng, &config.sampling)?;
    debug!("found {}-bit field modulus", p.bits());

    let curve = random_curve(&p, rng, &config.sampling)?;
    let g = random_curve_point(&curve, rng, &config.sampling)?;

    let d = random_in_range(&BigUint::one(), &(&p - BigUint::one()), rng)?;
    let q = scalar_multiply(&curve, &d, &g);

    Ok((PublicKey { curve, g, q }, PrivateKey { d }))
}

/// Generate `count` independent key pairs in parallel.
///
/// Each worker runs its own ChaCha20 stream, seeded from `rng` before the work is
/// split, so the output is reproducible for a seeded `rng`.
#[cfg(feature = "parallel")]
pub fn generate_key_pairs<R>(
    count: usize,
    config: &KeyGenConfig,
    rng: &mut R,
) -> Result<Vec<(PublicKey, PrivateKey)>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use rayon::prelude::*;

    let seeds: Vec<[u8; 32]> = (0..count)
        .map(|_| {
            let mut seed = [0u8; 32];
            rng.fill_bytes(&mut seed);
            seed
        })
        .collect();

    seeds
        .into_par_iter()
        .map(|seed| {
            let mut worker_rng = ChaCha20Rng::from_seed(seed);
            generate_keys_with_config(config, &mut worker_rng)
        })
        .collect()
}

/// Encrypt the curve point `message` under `public_key` with a fresh ephemeral scalar.
///
/// `message` must lie on the key's curve; this is not checked (see [`is_on_curve`]).
pub fn encrypt<R>(message: &Point, public_key: &PublicKey, rng: &mut R) -> Result<Ciphertext>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let p = public_key.curve.p();
    let k = random_in_range(&BigUint::one(), &(p - BigUint::one()), rng)?;
    Ok(encrypt_with_ephemeral(message, public_key, &k))
}

/// Encrypt with a caller-chosen ephemeral scalar `k`.
///
/// # Warnings
/// Two ciphertexts under the same key and the same `k` reveal the difference of their
/// plaintexts. Use [`encrypt`] unless `k` is known to be fresh.
pub fn encrypt_with_ephemeral(message: &Point, public_key: &PublicKey, k: &BigUint) -> Ciphertext {
    let curve = &public_key.curve;
    // c1 = k*G
    let c1 = scalar_multiply(curve, k, &public_key.g);
    // c2 = M + k*Q
    let kq = scalar_multiply(curve, k, &public_key.q);
    let c2 = point_add(curve, message, &kq);
    Ciphertext { c1, c2 }
}

/// Decrypt `(c1, c2)` as `c2 - d*c1`.
///
/// # Errors
/// [`Error::DegenerateSharedSecret`] when `d*c1` is the point at infinity, which happens
/// for a ciphertext made under a different key or with a degenerate `c1`.
pub fn decrypt(
    ciphertext: &Ciphertext,
    private_key: &PrivateKey,
    public_key: &PublicKey,
) -> Result<Point> {
    let curve = &public_key.curve;
    let shared = scalar_multiply(curve, &private_key.d, &ciphertext.c1);
    if shared.is_infinity() {
        return Err(Error::DegenerateSharedSecret);
    }
    Ok(point_add(curve, &ciphertext.c2, &point_neg(curve, &shared)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::security::primality::is_probably_prime;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    /// y^2 = x^3 + x + 1 over F_23 with G = (3, 10), d = 7.
    fn small_key_pair() -> (PublicKey, PrivateKey) {
        let curve = Curve::new(23u32.into(), 1u32.into(), 1u32.into()).unwrap();
        let g = Point::affine(3u32, 10u32);
        let q = scalar_multiply(&curve, &7u32.into(), &g);
        let public = PublicKey::new(curve, g, q).unwrap();
        let private = PrivateKey::new(7u32.into(), &public).unwrap();
        (public, private)
    }

    fn small_config() -> KeyGenConfig {
        KeyGenConfig {
            modulus_bits: 32,
            ..KeyGenConfig::default()
        }
    }

    #[test]
    fn test_fixed_small_parameters() {
        let (public, private) = small_key_pair();
        assert_eq!(public.q, Point::affine(11u32, 3u32));

        let message = Point::affine(9u32, 7u32);
        let ciphertext = encrypt_with_ephemeral(&message, &public, &5u32.into());
        assert_eq!(ciphertext.c1, Point::affine(9u32, 16u32));
        assert_eq!(ciphertext.c2, Point::affine(7u32, 12u32));

        let recovered = decrypt(&ciphertext, &private, &public).unwrap();
        assert_eq!(recovered, message);
    }

    #[test]
    fn test_small_curve_round_trip_every_point() {
        let (public, private) = small_key_pair();
        let curve = public.curve.clone();
        let mut messages: Vec<Point> = (0u32..23)
            .flat_map(|x| (0u32..23).map(move |y| Point::affine(x, y)))
            .filter(|pt| is_on_curve(&curve, pt))
            .collect();
        messages.push(Point::Infinity);
        assert_eq!(messages.len(), 28);

        let mut rng = ChaCha20Rng::seed_from_u64(64);
        for message in &messages {
            let fixed = encrypt_with_ephemeral(message, &public, &5u32.into());
            assert_eq!(decrypt(&fixed, &private, &public).unwrap(), *message);

            // A random k may make k*Q the identity on this tiny group.
            let ciphertext = encrypt(message, &public, &mut rng).unwrap();
            match decrypt(&ciphertext, &private, &public) {
                Ok(recovered) => assert_eq!(recovered, *message),
                Err(err) => assert_eq!(err, Error::DegenerateSharedSecret),
            }
        }
    }

    #[test]
    fn test_generated_keys_are_well_formed() {
        let mut rng = ChaCha20Rng::seed_from_u64(256);
        let (public, private) = generate_keys(&mut rng).unwrap();
        let p = public.curve.p();

        assert_eq!(p.bits(), DEFAULT_MODULUS_BITS);
        assert_eq!(p % 4u32, BigUint::from(3u32));
        assert!(is_probably_prime(p, 30, &mut rng));
        assert_ne!(public.curve.discriminant(), BigUint::from(0u32));
        assert!(is_on_curve(&public.curve, &public.g));
        assert!(is_on_curve(&public.curve, &public.q));
        assert!(private.scalar() >= &BigUint::one() && private.scalar() < p);
        assert_eq!(scalar_multiply(&public.curve, private.scalar(), &public.g), public.q);
    }

    #[test]
    fn test_round_trip_with_generated_keys() {
        let mut rng = ChaCha20Rng::seed_from_u64(4242);
        for config in [small_config(), KeyGenConfig::default()] {
            let (public, private) = generate_keys_with_config(&config, &mut rng).unwrap();
            for _ in 0..5 {
                let message =
                    random_curve_point(&public.curve, &mut rng, &config.sampling).unwrap();
                let ciphertext = encrypt(&message, &public, &mut rng).unwrap();
                assert!(is_on_curve(&public.curve, &ciphertext.c1));
                assert!(is_on_curve(&public.curve, &ciphertext.c2));
                assert_eq!(decrypt(&ciphertext, &private, &public).unwrap(), message);
            }
        }
    }

    #[test]
    fn test_encryption_is_randomized() {
        let mut rng = ChaCha20Rng::seed_from_u64(77);
        let (public, _private) = generate_keys(&mut rng).unwrap();
        let message = random_curve_point(&public.curve, &mut rng, &SamplingConfig::default()).unwrap();
        let first = encrypt(&message, &public, &mut rng).unwrap();
        let second = encrypt(&message, &public, &mut rng).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_decrypt_degenerate_shared_secret() {
        let (public, private) = small_key_pair();
        let ciphertext = Ciphertext {
            c1: Point::Infinity,
            c2: Point::affine(9u32, 7u32),
        };
        assert_eq!(
            decrypt(&ciphertext, &private, &public),
            Err(Error::DegenerateSharedSecret)
        );
    }

    #[test]
    fn test_private_key_range() {
        let (public, _) = small_key_pair();
        assert!(PrivateKey::new(0u32.into(), &public).is_err());
        assert!(PrivateKey::new(23u32.into(), &public).is_err());
        assert!(PrivateKey::new(1u32.into(), &public).is_ok());
        assert!(PrivateKey::new(22u32.into(), &public).is_ok());
    }

    #[test]
    fn test_public_key_rejects_points_off_curve() {
        let curve = Curve::new(23u32.into(), 1u32.into(), 1u32.into()).unwrap();
        let err = PublicKey::new(
            curve,
            Point::affine(3u32, 11u32),
            Point::affine(11u32, 3u32),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_key_generation_config_errors() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let tiny = KeyGenConfig {
            modulus_bits: 1,
            ..KeyGenConfig::default()
        };
        assert!(matches!(
            generate_keys_with_config(&tiny, &mut rng),
            Err(Error::InvalidArgument { .. })
        ));

        let exhausted = KeyGenConfig {
            modulus_bits: 256,
            sampling: SamplingConfig::bounded(0),
        };
        assert!(matches!(
            generate_keys_with_config(&exhausted, &mut rng),
            Err(Error::SamplingExhausted { .. })
        ));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_key_generation() {
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let pairs = generate_key_pairs(4, &small_config(), &mut rng).unwrap();
        assert_eq!(pairs.len(), 4);
        for (public, private) in &pairs {
            let message =
                random_curve_point(&public.curve, &mut rng, &SamplingConfig::default()).unwrap();
            let ciphertext = encrypt(&message, public, &mut rng).unwrap();
            assert_eq!(decrypt(&ciphertext, private, public).unwrap(), message);
        }

        let mut again = ChaCha20Rng::seed_from_u64(8);
        let repeat = generate_key_pairs(4, &small_config(), &mut again).unwrap();
        assert_eq!(pairs, repeat);
    }
}
