use thiserror::Error;

/// Errors surfaced at the cipher boundary. The engine is deterministic, so
/// none of these are retryable; a failed call fails the same way again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("key must be exactly 8 bytes, got {0}")]
    InvalidKeyLength(usize),
    #[error("ciphertext length must be a multiple of 8 bytes, got {0}")]
    InvalidBlockLength(usize),
    #[error("invalid padding")]
    InvalidPadding,
}
