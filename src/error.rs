//! Error types for the curve, sampling and cipher operations.

use thiserror::Error;

/// Result type for elliptic-curve ElGamal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by key generation, sampling and decryption.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A precondition on an argument did not hold.
    #[error("{context}: {message}")]
    InvalidArgument {
        context: &'static str,
        message: String,
    },

    /// A capped rejection-sampling loop never produced an acceptable value.
    #[error("{context}: no acceptable sample after {attempts} attempts")]
    SamplingExhausted {
        context: &'static str,
        attempts: usize,
    },

    /// Decryption derived the point at infinity as the shared secret, so the
    /// ciphertext does not belong to this key pair.
    #[error("decryption failed: shared secret is the point at infinity")]
    DegenerateSharedSecret,
}

impl Error {
    pub(crate) fn invalid_argument(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            context,
            message: message.into(),
        }
    }
}
