//! AES-CBC with block padding.

use alloc::vec::Vec;
use cbc::cipher::{block_padding::NoPadding, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use zeroize::Zeroizing;

use super::{AesKey, AesKeyIv, AES_BLOCK_SIZE};
use crate::errors::{Error, Result};
use crate::padding::Pkcs7Padding;
use crate::traits::{Decryptor, Padding};

/// AES-CBC encryptor.
///
/// The key must be 16, 24 or 32 bytes to select AES-128, AES-192 or AES-256,
/// and the IV must be 16 bytes.
#[derive(Clone, Debug)]
pub struct AesCbcEncryptor<P = Pkcs7Padding> {
    key_iv: AesKeyIv,
    padding: P,
}

impl<P: Padding> AesCbcEncryptor<P> {
    /// Create a new encryptor.
    pub fn new(key: &[u8], iv: &[u8], padding: P) -> Result<Self> {
        Ok(Self {
            key_iv: AesKeyIv::new(key, iv)?,
            padding,
        })
    }

    /// Pad and encrypt `msg`.
    ///
    /// The result never shares storage with `msg`. Fails only if the padding
    /// scheme produced a buffer that is not block aligned.
    pub fn encrypt(&self, msg: &[u8]) -> Result<Vec<u8>> {
        let mut buf = self.padding.pad(msg);
        let len = buf.len();
        let iv = &self.key_iv.iv;

        with_aes!(&self.key_iv.key, |key, C| {
            cbc::Encryptor::<C>::new(key.into(), iv.into())
                .encrypt_padded_mut::<NoPadding>(&mut buf, len)
                .map(|_| ())
        })
        .map_err(|_| Error::BlockAlignment {
            len,
            block_size: AES_BLOCK_SIZE,
        })?;

        Ok(buf)
    }
}

/// AES-CBC decryptor.
///
/// The key must be 16, 24 or 32 bytes to select AES-128, AES-192 or AES-256,
/// and the IV must be 16 bytes.
#[derive(Clone, Debug)]
pub struct AesCbcDecryptor<P = Pkcs7Padding> {
    key_iv: AesKeyIv,
    padding: P,
}

impl<P: Padding> AesCbcDecryptor<P> {
    /// Create a new decryptor.
    pub fn new(key: &[u8], iv: &[u8], padding: P) -> Result<Self> {
        Ok(Self {
            key_iv: AesKeyIv::new(key, iv)?,
            padding,
        })
    }

    /// Decrypt `ciphertext` and strip its padding.
    ///
    /// The result never shares storage with `ciphertext`.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() % AES_BLOCK_SIZE != 0 {
            return Err(Error::BlockAlignment {
                len: ciphertext.len(),
                block_size: AES_BLOCK_SIZE,
            });
        }

        let mut buf = Zeroizing::new(ciphertext.to_vec());
        let iv = &self.key_iv.iv;

        with_aes!(&self.key_iv.key, |key, C| {
            cbc::Decryptor::<C>::new(key.into(), iv.into())
                .decrypt_padded_mut::<NoPadding>(&mut buf[..])
                .map(|_| ())
        })
        .map_err(|_| Error::BlockAlignment {
            len: ciphertext.len(),
            block_size: AES_BLOCK_SIZE,
        })?;

        Ok(self.padding.unpad(&buf)?.to_vec())
    }
}

impl<P: Padding> Decryptor for AesCbcDecryptor<P> {
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        AesCbcDecryptor::decrypt(self, ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symmetric::{AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_IV_SIZE};
    use hex_literal::hex;

    fn pkcs7() -> Pkcs7Padding {
        Pkcs7Padding::new(AES_BLOCK_SIZE).unwrap()
    }

    #[test]
    fn test_fips_197_appendix_c_aes128() {
        // Zero IV turns a single CBC block into a raw block encryption.
        let key = hex!("000102030405060708090a0b0c0d0e0f");
        let plaintext = hex!("00112233445566778899aabbccddeeff");
        let expected = hex!("69c4e0d86a7b0430d8cdb78070b4c55a");

        let encryptor = AesCbcEncryptor::new(&key, &[0u8; AES_IV_SIZE], pkcs7()).unwrap();
        let ciphertext = encryptor.encrypt(&plaintext).unwrap();
        assert_eq!(ciphertext.len(), 2 * AES_BLOCK_SIZE);
        assert_eq!(ciphertext[..AES_BLOCK_SIZE], expected);
    }

    #[test]
    fn test_encrypt_decrypt_all_key_sizes() {
        let iv = [0x24u8; AES_IV_SIZE];
        for size in [AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE] {
            let key = vec![size as u8; size];
            let encryptor = AesCbcEncryptor::new(&key, &iv, pkcs7()).unwrap();
            let decryptor = AesCbcDecryptor::new(&key, &iv, pkcs7()).unwrap();

            for len in [0usize, 1, 15, 16, 17, 100] {
                let msg = vec![0x5au8; len];
                let ciphertext = encryptor.encrypt(&msg).unwrap();
                assert_eq!(ciphertext.len(), (len / AES_BLOCK_SIZE + 1) * AES_BLOCK_SIZE);
                assert_eq!(decryptor.decrypt(&ciphertext).unwrap(), msg);
            }
        }
    }

    #[test]
    fn test_calls_are_independent() {
        let key = [1u8; AES128_KEY_SIZE];
        let iv = [2u8; AES_IV_SIZE];
        let encryptor = AesCbcEncryptor::new(&key, &iv, pkcs7()).unwrap();

        let first = encryptor.encrypt(b"same message").unwrap();
        let second = encryptor.encrypt(b"same message").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pkcs5_padding() {
        let key = [3u8; AES256_KEY_SIZE];
        let iv = [4u8; AES_IV_SIZE];
        let encryptor = AesCbcEncryptor::new(&key, &iv, Pkcs7Padding::pkcs5()).unwrap();
        let decryptor = AesCbcDecryptor::new(&key, &iv, Pkcs7Padding::pkcs5()).unwrap();

        // 8-byte padding on a 16-byte cipher: aligned output only when it
        // happens to land on a 16-byte boundary.
        let ciphertext = encryptor.encrypt(&[0u8; 8]).unwrap();
        assert_eq!(ciphertext.len(), 16);
        assert_eq!(decryptor.decrypt(&ciphertext).unwrap(), [0u8; 8]);

        assert_eq!(
            encryptor.encrypt(&[0u8; 1]),
            Err(Error::BlockAlignment {
                len: 8,
                block_size: AES_BLOCK_SIZE
            })
        );
    }

    #[test]
    fn test_decrypt_rejects_unaligned() {
        let decryptor = AesCbcDecryptor::new(&[0u8; 16], &[0u8; 16], pkcs7()).unwrap();
        assert_eq!(
            decryptor.decrypt(&[0u8; 17]),
            Err(Error::BlockAlignment {
                len: 17,
                block_size: AES_BLOCK_SIZE
            })
        );
    }

    #[test]
    fn test_decrypt_empty_is_padding_error() {
        let decryptor = AesCbcDecryptor::new(&[0u8; 16], &[0u8; 16], pkcs7()).unwrap();
        assert_eq!(decryptor.decrypt(&[]), Err(Error::Padding));
    }

    #[test]
    fn test_wrong_key_fails_or_differs() {
        let iv = [9u8; AES_IV_SIZE];
        let encryptor = AesCbcEncryptor::new(&[1u8; 16], &iv, pkcs7()).unwrap();
        let decryptor = AesCbcDecryptor::new(&[2u8; 16], &iv, pkcs7()).unwrap();

        let msg = b"attack at dawn";
        let ciphertext = encryptor.encrypt(msg).unwrap();
        match decryptor.decrypt(&ciphertext) {
            Ok(plaintext) => assert_ne!(plaintext, msg),
            Err(err) => assert_eq!(err, Error::Padding),
        }
    }

    #[test]
    fn test_constructor_errors() {
        assert_eq!(
            AesCbcEncryptor::new(&[0u8; 16], &[0u8; 15], pkcs7()).unwrap_err(),
            Error::InvalidIvLength {
                expected: AES_IV_SIZE,
                actual: 15
            }
        );
        assert_eq!(
            AesCbcDecryptor::new(&[0u8; 20], &[0u8; 16], pkcs7()).unwrap_err(),
            Error::InvalidKeyLength(20)
        );
    }
}
