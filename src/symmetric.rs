//! AES modes of operation.
//!
//! Every wrapper validates its key and IV once at construction and then
//! starts each call from the configured IV, so a single instance can be
//! shared and reused freely.
//!
//! - [`AesCbcEncryptor`] / [`AesCbcDecryptor`]: CBC with a pluggable
//!   [`Padding`][crate::traits::Padding] (PKCS#7 by default).
//! - [`AesStream`]: CFB, OFB and CTR keystream modes. Output is always the
//!   same length as the input.

use core::fmt;
use zeroize::Zeroize;

use crate::errors::{Error, Result};

/// Key size of AES-128 in bytes.
pub const AES128_KEY_SIZE: usize = 128 / 8;
/// Key size of AES-192 in bytes.
pub const AES192_KEY_SIZE: usize = 192 / 8;
/// Key size of AES-256 in bytes.
pub const AES256_KEY_SIZE: usize = 256 / 8;
/// AES block size in bytes.
pub const AES_BLOCK_SIZE: usize = 16;
/// IV size of every AES mode in this module.
pub const AES_IV_SIZE: usize = AES_BLOCK_SIZE;

/// Runs `$body` with `$k` bound to the key bytes and `$C` aliased to the
/// matching AES cipher type.
macro_rules! with_aes {
    ($key:expr, |$k:ident, $C:ident| $body:expr) => {
        match $key {
            AesKey::Aes128($k) => {
                type $C = aes::Aes128;
                $body
            }
            AesKey::Aes192($k) => {
                type $C = aes::Aes192;
                $body
            }
            AesKey::Aes256($k) => {
                type $C = aes::Aes256;
                $body
            }
        }
    };
}

mod block;
mod stream;

pub use self::{
    block::{AesCbcDecryptor, AesCbcEncryptor},
    stream::{AesStream, StreamMode},
};

#[derive(Clone)]
enum AesKey {
    Aes128([u8; AES128_KEY_SIZE]),
    Aes192([u8; AES192_KEY_SIZE]),
    Aes256([u8; AES256_KEY_SIZE]),
}

impl AesKey {
    fn size(&self) -> usize {
        match self {
            AesKey::Aes128(k) => k.len(),
            AesKey::Aes192(k) => k.len(),
            AesKey::Aes256(k) => k.len(),
        }
    }
}

impl TryFrom<&[u8]> for AesKey {
    type Error = Error;

    fn try_from(key: &[u8]) -> Result<Self> {
        let invalid = |_| Error::InvalidKeyLength(key.len());
        match key.len() {
            AES128_KEY_SIZE => key.try_into().map(AesKey::Aes128).map_err(invalid),
            AES192_KEY_SIZE => key.try_into().map(AesKey::Aes192).map_err(invalid),
            AES256_KEY_SIZE => key.try_into().map(AesKey::Aes256).map_err(invalid),
            len => Err(Error::InvalidKeyLength(len)),
        }
    }
}

impl Drop for AesKey {
    fn drop(&mut self) {
        match self {
            AesKey::Aes128(k) => k.zeroize(),
            AesKey::Aes192(k) => k.zeroize(),
            AesKey::Aes256(k) => k.zeroize(),
        }
    }
}

/// Validated key and IV shared by every mode.
#[derive(Clone)]
struct AesKeyIv {
    key: AesKey,
    iv: [u8; AES_IV_SIZE],
}

impl AesKeyIv {
    /// The IV is checked before the key.
    fn new(key: &[u8], iv: &[u8]) -> Result<Self> {
        let iv = iv.try_into().map_err(|_| Error::InvalidIvLength {
            expected: AES_IV_SIZE,
            actual: iv.len(),
        })?;
        let key = AesKey::try_from(key)?;
        Ok(Self { key, iv })
    }
}

impl fmt::Debug for AesKeyIv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesKeyIv")
            .field("key_size", &self.key.size())
            .finish_non_exhaustive()
    }
}
