//! Error types.

/// Alias for [`core::result::Result`] with the `crypt` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Padding block size must be in `1..=255`.
    #[error("invalid padding block size {0}, must be in 1..=255")]
    InvalidBlockSize(usize),

    /// AES key must be 16, 24 or 32 bytes long.
    #[error("invalid aes key length {0}, must be 16, 24 or 32")]
    InvalidKeyLength(usize),

    /// IV length must equal the cipher block size.
    #[error("iv length {actual} must equal block size {expected}")]
    InvalidIvLength {
        /// Required IV length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// RSA key size in bits must be a multiple of 8.
    #[error("rsa key size {0} bits is not a multiple of 8")]
    InvalidKeySize(usize),

    /// Modulus is too small to hold the 11 bytes of PKCS#1 v1.5 overhead.
    #[error("rsa modulus too small for pkcs#1 v1.5")]
    ModulusTooSmall,

    /// Malformed padding found while unpadding.
    #[error("padding is wrong")]
    Padding,

    /// Input length is not a multiple of the cipher block size.
    #[error("data size {len} must be multiple of block size {block_size}")]
    BlockAlignment {
        /// Length of the offending buffer.
        len: usize,
        /// Block size it has to be a multiple of.
        block_size: usize,
    },

    // The wrapped crates only implement `Error` with their `std` feature,
    // so they are chained as sources only then.
    /// Error reported by the RSA primitive.
    #[error("rsa error: {0}")]
    Rsa(#[cfg_attr(feature = "std", from)] rsa::Error),

    /// PKCS#1 error.
    #[error("pkcs#1 error: {0}")]
    Pkcs1(#[cfg_attr(feature = "std", from)] pkcs1::Error),

    /// PKCS#8 error.
    #[error("pkcs#8 error: {0}")]
    Pkcs8(#[cfg_attr(feature = "std", from)] pkcs8::Error),

    /// SubjectPublicKeyInfo error.
    #[error("spki error: {0}")]
    Spki(#[cfg_attr(feature = "std", from)] pkcs8::spki::Error),
}

impl Error {
    /// Returns `true` for errors raised while constructing a cipher, padding
    /// or key handle, as opposed to errors found in the data being processed.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::InvalidBlockSize(_)
                | Error::InvalidKeyLength(_)
                | Error::InvalidIvLength { .. }
                | Error::InvalidKeySize(_)
                | Error::ModulusTooSmall
        )
    }
}
