pub mod curve;
pub mod elgamal;
pub mod elliptic;
pub mod primality;
pub mod sampling;

// Re-export primality testing
pub use primality::{is_probably_prime, DEFAULT_MILLER_RABIN_ROUNDS};

// Re-export random sampling
pub use sampling::{
    random_in_range, random_k_bit_integer, random_prime, random_prime_3mod4, SamplingConfig,
};

// Re-export curve parameters
pub use curve::{is_on_curve, random_curve, random_curve_point, Curve};

// Re-export point arithmetic
pub use elliptic::{point_add, point_double, point_neg, scalar_multiply, Point};

// Re-export ElGamal functionality
#[cfg(feature = "parallel")]
pub use elgamal::generate_key_pairs;
pub use elgamal::{
    decrypt, encrypt, encrypt_with_ephemeral, generate_keys, generate_keys_with_config,
    Ciphertext, KeyGenConfig, PrivateKey, PublicKey, DEFAULT_MODULUS_BITS,
};
