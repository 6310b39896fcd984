//! Toy elliptic-curve ElGamal over randomly generated prime fields.
//!
//! Everything lives under [`cs::security`] and is re-exported here. Randomness is always
//! injected by the caller as a `rand` RNG implementing `CryptoRng`.
//!
//! ```
//! use ecc_elgamal::{decrypt, encrypt, generate_keys_with_config, random_curve_point, KeyGenConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//! let config = KeyGenConfig { modulus_bits: 64, ..KeyGenConfig::default() };
//! let (public, private) = generate_keys_with_config(&config, &mut rng).unwrap();
//!
//! let message = random_curve_point(&public.curve, &mut rng, &config.sampling).unwrap();
//! let ciphertext = encrypt(&message, &public, &mut rng).unwrap();
//! assert_eq!(decrypt(&ciphertext, &private, &public).unwrap(), message);
//! ```

pub mod cs;
pub mod error;

pub use cs::security::*;
pub use error::{Error, Result};
