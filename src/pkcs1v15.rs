//! Chunked RSA encryption with PKCS#1 v1.5 padding as described in
//! [RFC8017 § 7.2].
//!
//! A single PKCS#1 v1.5 operation can carry at most `k - 11` bytes of
//! message, where `k` is the modulus size in bytes. To encrypt arbitrary
//! payloads the message is split into segments of up to `k - 11` bytes, each
//! segment is encrypted into exactly `k` bytes, and the ciphertext blocks are
//! concatenated in order. Decryption walks the ciphertext in `k`-byte
//! segments and concatenates the recovered plaintexts.
//!
//! An empty message encrypts to an empty ciphertext and vice versa.
//!
//! # Usage
//!
//! ```
//! # #[cfg(feature = "getrandom")]
//! # {
//! use crypt::pkcs1v15::DecryptingKey;
//! use crypt::traits::{Decryptor, EncryptingKeypair, RandomizedEncryptor};
//! use rand_core::OsRng;
//!
//! let private_key = DecryptingKey::new(&mut OsRng, 1024, 65537).expect("failed to generate a key");
//! let public_key = private_key.encrypting_key();
//!
//! // 300 bytes do not fit into one 1024-bit block.
//! let data = vec![42u8; 300];
//! let enc_data = public_key.encrypt_with_rng(&mut OsRng, &data).expect("failed to encrypt");
//! assert_eq!(enc_data.len(), 3 * 128);
//!
//! let dec_data = private_key.decrypt(&enc_data).expect("failed to decrypt");
//! assert_eq!(data, dec_data);
//! # }
//! ```
//!
//! [RFC8017 § 7.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-7.2

mod decrypting_key;
mod encrypting_key;

pub use self::{decrypting_key::DecryptingKey, encrypting_key::EncryptingKey};

use alloc::vec::Vec;
use rand_core::CryptoRngCore;
use rsa::{traits::PublicKeyParts, Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use crate::errors::{Error, Result};

/// Bytes of PKCS#1 v1.5 encryption padding in every block.
pub const PKCS1V15_OVERHEAD: usize = 11;

/// Message bytes a `k`-byte modulus carries per block; zero when the
/// modulus cannot hold the padding.
#[inline]
pub(crate) fn segment_len(k: usize) -> usize {
    k.saturating_sub(PKCS1V15_OVERHEAD)
}

/// Largest message segment a `k`-byte modulus can encrypt in one operation.
#[inline]
pub(crate) fn max_segment_len(k: usize) -> Result<usize> {
    match segment_len(k) {
        0 => Err(Error::ModulusTooSmall),
        len => Ok(len),
    }
}

/// Number of `len`-byte chunks needed to cover `total` bytes.
#[inline]
fn chunk_count(total: usize, len: usize) -> Option<usize> {
    Some(total.checked_div(len)? + usize::from(total % len != 0))
}

/// Length of the ciphertext produced for a `msg_len`-byte message under a
/// `k`-byte modulus, or `None` if the modulus is too small or the length
/// does not fit in a `usize`.
#[inline]
pub(crate) fn ciphertext_len(k: usize, msg_len: usize) -> Option<usize> {
    chunk_count(msg_len, segment_len(k))?.checked_mul(k)
}

/// Splits `msg` into segments that fit a `k`-byte modulus and encrypts each
/// of them in order with `encrypt_block`.
///
/// Stops at the first failing segment and returns its error unchanged.
pub(crate) fn encrypt_segments<F>(
    k: usize,
    msg: &[u8],
    mut encrypt_block: F,
) -> Result<Vec<u8>>
where
    F: FnMut(&[u8]) -> Result<Vec<u8>>,
{
    let len = max_segment_len(k)?;

    let mut out = Vec::with_capacity(ciphertext_len(k, msg.len()).unwrap_or_default());
    for segment in msg.chunks(len) {
        out.extend_from_slice(&encrypt_block(segment)?);
    }
    Ok(out)
}

/// Splits `ciphertext` into `k`-byte segments and decrypts each of them in
/// order with `decrypt_block`. A short trailing segment is passed through
/// as is and left to the primitive to reject.
///
/// Stops at the first failing segment and returns its error unchanged.
/// Plaintext recovered before the failure is wiped.
pub(crate) fn decrypt_segments<F>(
    k: usize,
    ciphertext: &[u8],
    mut decrypt_block: F,
) -> Result<Vec<u8>>
where
    F: FnMut(&[u8]) -> Result<Vec<u8>>,
{
    let segments = chunk_count(ciphertext.len(), k).ok_or(Error::ModulusTooSmall)?;
    let capacity = segments.saturating_mul(segment_len(k));
    let mut out = Zeroizing::new(Vec::with_capacity(capacity));
    for segment in ciphertext.chunks(k) {
        let plaintext = Zeroizing::new(decrypt_block(segment)?);
        out.extend_from_slice(&plaintext);
    }
    Ok(core::mem::take(&mut *out))
}

/// Encrypts `msg` of any length with RSA and PKCS#1 v1.5 padding.
#[inline]
fn encrypt<R: CryptoRngCore + ?Sized>(
    mut rng: &mut R,
    pub_key: &RsaPublicKey,
    msg: &[u8],
) -> Result<Vec<u8>> {
    encrypt_segments(pub_key.size(), msg, |segment| {
        pub_key
            .encrypt(&mut rng, Pkcs1v15Encrypt, segment)
            .map_err(Error::Rsa)
    })
}

/// Decrypts a ciphertext produced by [`encrypt`].
///
/// If an `rng` is passed, it uses RSA blinding to avoid timing side-channel
/// attacks on every segment.
#[inline]
fn decrypt<R: CryptoRngCore + ?Sized>(
    mut rng: Option<&mut R>,
    priv_key: &RsaPrivateKey,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    decrypt_segments(priv_key.size(), ciphertext, |segment| {
        let plaintext = match rng.as_deref_mut() {
            Some(mut rng) => priv_key.decrypt_blinded(&mut rng, Pkcs1v15Encrypt, segment),
            None => priv_key.decrypt(Pkcs1v15Encrypt, segment),
        };
        plaintext.map_err(Error::Rsa)
    })
}
