use super::{ciphertext_len, encrypt, max_segment_len, segment_len};
use crate::{
    errors::{Error, Result},
    traits::RandomizedEncryptor,
};
use alloc::vec::Vec;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use rsa::{traits::PublicKeyParts, RsaPublicKey};
#[cfg(feature = "serde")]
use {
    pkcs8::{DecodePublicKey, EncodePublicKey},
    serdect::serde::{de, ser, Deserialize, Serialize},
};

/// Encryption key for chunked PKCS#1 v1.5 encryption.
///
/// Messages of any length are accepted; every `size() - 11` bytes of message
/// become `size()` bytes of ciphertext.
///
/// With the `serde` feature the key is (de)serialized as its DER encoded
/// SubjectPublicKeyInfo, hex encoded for human readable formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptingKey {
    pub(super) inner: RsaPublicKey,
}

impl EncryptingKey {
    /// Create a new encrypting key from the big-endian bytes of the modulus
    /// and the public exponent.
    pub fn new(n: &[u8], e: u64) -> Result<Self> {
        let n = BigUint::from_bytes_be(n);
        max_segment_len((n.bits() + 7) / 8)?;
        let key = RsaPublicKey::new(n, BigUint::from(e)).map_err(Error::Rsa)?;
        Self::from_key(key)
    }

    /// Wrap an existing RSA public key.
    ///
    /// Fails if the modulus cannot hold a single byte of message.
    pub fn from_key(key: RsaPublicKey) -> Result<Self> {
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

    /// Modulus size in bytes, which is also the size of every ciphertext
    /// block.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Largest message segment encrypted into a single block.
    pub fn max_segment_len(&self) -> usize {
        segment_len(self.size())
    }

    /// Length of the ciphertext for a message of `msg_len` bytes, or `None`
    /// if it does not fit in a `usize`.
    pub fn ciphertext_len(&self, msg_len: usize) -> Option<usize> {
        ciphertext_len(self.size(), msg_len)
    }

    /// Encrypt `msg` using the operating system's random source.
    #[cfg(feature = "getrandom")]
    pub fn encrypt(&self, msg: &[u8]) -> Result<Vec<u8>> {
        encrypt(&mut rand_core::OsRng, &self.inner, msg)
    }
}

impl RandomizedEncryptor for EncryptingKey {
    fn encrypt_with_rng<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
    ) -> Result<Vec<u8>> {
        encrypt(rng, &self.inner, msg)
    }
}

impl AsRef<RsaPublicKey> for EncryptingKey {
    fn as_ref(&self) -> &RsaPublicKey {
        &self.inner
    }
}

impl TryFrom<RsaPublicKey> for EncryptingKey {
    type Error = Error;

    fn try_from(key: RsaPublicKey) -> Result<Self> {
        Self::from_key(key)
    }
}

impl From<EncryptingKey> for RsaPublicKey {
    fn from(key: EncryptingKey) -> Self {
        key.inner
    }
}

#[cfg(feature = "serde")]
impl Serialize for EncryptingKey {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let der = self.to_public_key_der().map_err(ser::Error::custom)?;
        serdect::slice::serialize_hex_lower_or_bin(&der, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EncryptingKey {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let der_bytes = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        let key = RsaPublicKey::from_public_key_der(&der_bytes).map_err(de::Error::custom)?;
        Self::from_key(key).map_err(de::Error::custom)
    }
}
