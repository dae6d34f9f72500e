//! AES keystream modes: CFB, OFB and CTR.

use alloc::vec::Vec;
use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit, StreamCipher};

use super::{AesKey, AesKeyIv};
use crate::errors::Result;

/// Keystream mode of an [`AesStream`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StreamMode {
    /// Full-block cipher feedback, encrypting direction.
    CfbEncrypt,
    /// Full-block cipher feedback, decrypting direction.
    CfbDecrypt,
    /// Output feedback. Encryption and decryption are the same operation.
    Ofb,
    /// Counter mode with a 128-bit big-endian counter. Encryption and
    /// decryption are the same operation.
    Ctr,
}

/// AES in a keystream mode.
///
/// The key must be 16, 24 or 32 bytes to select AES-128, AES-192 or AES-256,
/// and the IV must be 16 bytes.
#[derive(Clone, Debug)]
pub struct AesStream {
    key_iv: AesKeyIv,
    mode: StreamMode,
}

impl AesStream {
    /// Create a keystream cipher for the given mode.
    pub fn new(mode: StreamMode, key: &[u8], iv: &[u8]) -> Result<Self> {
        Ok(Self {
            key_iv: AesKeyIv::new(key, iv)?,
            mode,
        })
    }

    /// CFB encryptor.
    pub fn cfb_encryptor(key: &[u8], iv: &[u8]) -> Result<Self> {
        Self::new(StreamMode::CfbEncrypt, key, iv)
    }

    /// CFB decryptor.
    pub fn cfb_decryptor(key: &[u8], iv: &[u8]) -> Result<Self> {
        Self::new(StreamMode::CfbDecrypt, key, iv)
    }

    /// OFB cipher.
    pub fn ofb(key: &[u8], iv: &[u8]) -> Result<Self> {
        Self::new(StreamMode::Ofb, key, iv)
    }

    /// CTR cipher.
    pub fn ctr(key: &[u8], iv: &[u8]) -> Result<Self> {
        Self::new(StreamMode::Ctr, key, iv)
    }

    /// Mode this cipher was built for.
    pub fn mode(&self) -> StreamMode {
        self.mode
    }

    /// Encrypt or decrypt `src` according to the mode.
    ///
    /// The result has the same length as `src` and never shares storage with
    /// it.
    pub fn crypt(&self, src: &[u8]) -> Vec<u8> {
        let mut buf = src.to_vec();
        let iv = &self.key_iv.iv;

        with_aes!(&self.key_iv.key, |key, C| match self.mode {
            StreamMode::CfbEncrypt => {
                cfb_mode::Encryptor::<C>::new(key.into(), iv.into()).encrypt(&mut buf)
            }
            StreamMode::CfbDecrypt => {
                cfb_mode::Decryptor::<C>::new(key.into(), iv.into()).decrypt(&mut buf)
            }
            StreamMode::Ofb => ofb::Ofb::<C>::new(key.into(), iv.into()).apply_keystream(&mut buf),
            StreamMode::Ctr => {
                ctr::Ctr128BE::<C>::new(key.into(), iv.into()).apply_keystream(&mut buf)
            }
        });

        buf
    }
}
