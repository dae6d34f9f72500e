use super::{decrypt, encrypt, max_segment_len, EncryptingKey};
use crate::{
    errors::{Error, Result},
    traits::{Decryptor, EncryptingKeypair, RandomizedDecryptor, RandomizedEncryptor},
};
use alloc::vec::Vec;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use rsa::{traits::PublicKeyParts, RsaPrivateKey};
use zeroize::ZeroizeOnDrop;

/// Decryption key for chunked PKCS#1 v1.5 decryption.
///
/// Holds the whole key pair, so it can encrypt as well.
#[derive(Debug, Clone, PartialEq)]
pub struct DecryptingKey {
    inner: RsaPrivateKey,
}

impl DecryptingKey {
    /// Generate a new two-prime key pair.
    ///
    /// `bit_size` must be a multiple of 8 and large enough to leave room for
    /// the 11 bytes of PKCS#1 v1.5 padding. 1024 is common, 2048 for anything
    /// that matters. `e` is usually 65537.
    pub fn new<R: CryptoRngCore + ?Sized>(
        mut rng: &mut R,
        bit_size: usize,
        e: u64,
    ) -> Result<Self> {
        if bit_size % 8 != 0 {
            return Err(Error::InvalidKeySize(bit_size));
        }
        max_segment_len(bit_size / 8)?;

        let key = RsaPrivateKey::new_with_exp(&mut rng, bit_size, &BigUint::from(e))
            .map_err(Error::Rsa)?;
        Self::from_key(key)
    }

    /// Generate a new key pair using the operating system's random source.
    #[cfg(feature = "getrandom")]
    pub fn generate(bit_size: usize, e: u64) -> Result<Self> {
        Self::new(&mut rand_core::OsRng, bit_size, e)
    }

    /// Wrap an existing RSA private key.
    ///
    /// Fails if the modulus cannot hold a single byte of message.
    pub fn from_key(key: RsaPrivateKey) -> Result<Self> {
        max_segment_len(key.size())?;
        Ok(Self { inner: key })
    }

    /// Big-endian bytes of the modulus.
    pub fn n_bytes(&self) -> Vec<u8> {
        self.inner.n().to_bytes_be()
    }

    /// Public exponent.
    pub fn e(&self) -> &BigUint {
        self.inner.e()
    }

    /// Modulus size in bytes.
    pub fn size(&self) -> usize {
        self.inner.size()
    }
}

impl Decryptor for DecryptingKey {
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        decrypt::<dyn CryptoRngCore>(None, &self.inner, ciphertext)
    }
}

impl RandomizedDecryptor for DecryptingKey {
    fn decrypt_with_rng<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>> {
        decrypt(Some(rng), &self.inner, ciphertext)
    }
}

impl RandomizedEncryptor for DecryptingKey {
    fn encrypt_with_rng<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
    ) -> Result<Vec<u8>> {
        encrypt(rng, &self.inner.to_public_key(), msg)
    }
}

impl EncryptingKeypair for DecryptingKey {
    type EncryptingKey = EncryptingKey;
    fn encrypting_key(&self) -> EncryptingKey {
        EncryptingKey {
            inner: self.inner.to_public_key(),
        }
    }
}

impl AsRef<RsaPrivateKey> for DecryptingKey {
    fn as_ref(&self) -> &RsaPrivateKey {
        &self.inner
    }
}

impl TryFrom<RsaPrivateKey> for DecryptingKey {
    type Error = Error;

    fn try_from(key: RsaPrivateKey) -> Result<Self> {
        Self::from_key(key)
    }
}

impl ZeroizeOnDrop for DecryptingKey {}
